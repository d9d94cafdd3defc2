//! # Module [crate::shape]
//!
//! This module contains the primitives that rays can be cast against, split into [dim2] (cast with a
//! [Ray2]) and [dim3] (cast with a [Ray3]).
//!
//! ## Related
//! - [Shape2], [Shape3]
//! - [ShapeInstance2], [ShapeInstance3]
//!
//! # DEV: Code Structure
//!
//! Each shape lives in its own file, with the shape struct and its [Shape2]/[Shape3] implementation together.
//! Shapes are plain values. Constructors named `new` trust their inputs; `try_new` checks them and returns
//! a [ShapeError]. Add an entry to [ShapeInstance2]/[ShapeInstance3] for each new shape, for static dispatch.
//!
//! Shapes that are built from other shapes (e.g. [OrientedBox](dim3::oriented_box::OrientedBox)) call the other
//! shape's routines directly, in the frame of reference that suits them.

use enum_dispatch::enum_dispatch;
use thiserror::Error;

use crate::core::types::{Number, Vector3};
use crate::shared::hit::{RayHit2, RayHit3};
use crate::shared::ray::{Ray2, Ray3};

// noinspection ALL - Used by enum_dispatch macro
#[allow(unused_imports)]
use self::{
    dim2::{axis_rect::AxisRect, disc::Disc, segment::Segment},
    dim3::{axis_box::AxisBox, oriented_box::OrientedBox, plane::Plane, sphere::Sphere, z_cylinder::ZCylinder},
};

pub mod dim2;
pub mod dim3;

/// Errors from the checked (`try_new`) shape constructors
#[derive(Error, Copy, Clone, Debug, PartialEq)]
pub enum ShapeError {
    #[error("the provided radius must be finite and > 0; radius: {0}")]
    InvalidRadius(Number),
    #[error("the provided normal couldn't be normalised (too small)")]
    InvalidNormal,
    #[error("the provided axes were not unit length and orthogonal")]
    InvalidBasis,
    #[error("the provided points are collinear, and don't define a single plane")]
    CollinearPoints,
    #[error("the provided half-size must be finite and >= 0; half_size: {0:?}")]
    InvalidHalfSize(Vector3),
    #[error("the provided segment has no length")]
    DegenerateSegment,
}

// region Shape traits

#[enum_dispatch]
pub trait Shape2 {
    /// Casts the 2D ray against the shape.
    ///
    /// # Return Value
    /// This always returns a fully populated result; see [RayHit2] for what a miss looks like
    fn raycast(&self, ray: &Ray2) -> RayHit2;
}

#[enum_dispatch]
pub trait Shape3 {
    /// Casts the 3D ray against the shape.
    ///
    /// # Return Value
    /// This always returns a fully populated result; see [RayHit3] for what a miss looks like
    fn raycast(&self, ray: &Ray3) -> RayHit3;
}

/// Any of the 2D shapes, with statically dispatched [Shape2] calls
#[enum_dispatch(Shape2)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ShapeInstance2 {
    Disc,
    Segment,
    AxisRect,
}

/// Any of the 3D shapes, with statically dispatched [Shape3] calls
#[enum_dispatch(Shape3)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ShapeInstance3 {
    AxisBox,
    OrientedBox,
    Plane,
    Sphere,
    ZCylinder,
}

// endregion Shape traits

static_assertions::assert_impl_all!(ShapeInstance2: Copy, Send, Sync);
static_assertions::assert_impl_all!(ShapeInstance3: Copy, Send, Sync);
static_assertions::assert_impl_all!(Ray2: Copy, Send, Sync);
static_assertions::assert_impl_all!(Ray3: Copy, Send, Sync);
static_assertions::assert_impl_all!(RayHit2: Copy, Send, Sync);
static_assertions::assert_impl_all!(RayHit3: Copy, Send, Sync);
