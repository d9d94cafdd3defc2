//! This module contains an orthonormal frame of reference, used for moving rays into a shape's local space
//! and moving the results back out again.
//!
//! # Terminology
//!
//! ## Local Space
//! The shape's own coordinates: the frame's origin is at `(0, 0, 0)`, and its axes are the world axes.
//!
//! ## World Space
//! The coordinates the caller works in. A local point `p` is at `origin + (x * p.x) + (y * p.y) + (z * p.z)`
//! in world space.
//!
//! Since the axes are orthonormal, going from world-space to local-space is a translation followed by the
//! transpose of the basis; no matrix inverse is required. Both directions preserve distances.

use getset::CopyGetters;

use crate::core::types::{Point3, Vector3};
use crate::shared::hit::RayHit3;
use crate::shared::ray::Ray3;

/// An origin and three orthonormal axes
#[derive(Copy, Clone, Debug, PartialEq, CopyGetters)]
#[get_copy = "pub"]
pub struct Frame {
    origin: Point3,
    x: Vector3,
    y: Vector3,
    z: Vector3,
}

impl Frame {
    /// Creates a new frame. The axes must be unit length and pairwise orthogonal.
    pub fn new(origin: impl Into<Point3>, x: impl Into<Vector3>, y: impl Into<Vector3>, z: impl Into<Vector3>) -> Self {
        Self {
            origin: origin.into(),
            x: x.into(),
            y: y.into(),
            z: z.into(),
        }
    }

    /// Maps a world-space vector into local space
    pub fn vector_to_local(&self, v: Vector3) -> Vector3 {
        Vector3::new(Vector3::dot(v, self.x), Vector3::dot(v, self.y), Vector3::dot(v, self.z))
    }

    /// Maps a world-space point into local space
    pub fn point_to_local(&self, p: Point3) -> Point3 { self.vector_to_local(p - self.origin).to_point() }

    /// Maps a local-space vector into world space
    pub fn vector_to_world(&self, v: Vector3) -> Vector3 { (self.x * v.x) + (self.y * v.y) + (self.z * v.z) }

    /// Maps a local-space point into world space
    pub fn point_to_world(&self, p: Point3) -> Point3 { self.origin + self.vector_to_world(p.to_vector()) }

    /// Transforms the incoming ray from world-space to local-space
    pub fn incoming_ray(&self, incoming_ray: &Ray3) -> Ray3 {
        Ray3::from_unit(
            self.point_to_local(incoming_ray.pos()),
            self.vector_to_local(incoming_ray.dir()),
            incoming_ray.length(),
        )
    }

    /// Transforms the outgoing hit from local-space to world-space, re-attaching it to the original (world-space) ray
    pub fn outgoing_hit(&self, original_ray: &Ray3, hit: &RayHit3) -> RayHit3 {
        hit.transformed(original_ray, |p| self.point_to_world(p), |v| self.vector_to_world(v))
    }
}
