use getset::CopyGetters;
use tracing::trace;

use crate::core::targets::SHAPE;
use crate::core::types::{Number, Point3, Vector3};
use crate::shape::{Shape3, ShapeError};
use crate::shared::hit::RayHit3;
use crate::shared::ray::{Dim3, Ray3, Space};
use crate::shared::validate;

/// An infinite plane: all points `p` where `dot(normal, p) == offset`
///
/// The side the normal points towards is the *front* of the plane.
#[derive(Copy, Clone, Debug, PartialEq, CopyGetters)]
#[get_copy = "pub"]
pub struct Plane {
    /// Unit normal of the plane
    normal: Vector3,
    /// Signed distance of the plane from the world origin, along [Self::normal]
    offset: Number,
}

// region Constructors

impl Plane {
    /// Creates a plane from its unit normal and offset
    pub fn new(normal: impl Into<Vector3>, offset: Number) -> Self {
        Self {
            normal: normal.into(),
            offset,
        }
    }

    /// Creates a plane, normalising the normal (and scaling the offset to match)
    pub fn try_new(normal: impl Into<Vector3>, offset: Number) -> Result<Self, ShapeError> {
        let normal = normal.into();
        let length = Dim3::length(normal);
        let unit = Dim3::try_normalize(normal).ok_or_else(|| {
            trace!(target: SHAPE, ?normal, "rejected plane normal");
            ShapeError::InvalidNormal
        })?;
        Ok(Self::new(unit, offset / length))
    }

    /// The plane through `point`, facing `normal`
    pub fn from_point(point: impl Into<Point3>, normal: impl Into<Vector3>) -> Result<Self, ShapeError> {
        let (point, normal) = (point.into(), normal.into());
        let normal = Dim3::try_normalize(normal).ok_or(ShapeError::InvalidNormal)?;
        Ok(Self::new(normal, Vector3::dot(normal, point.to_vector())))
    }

    /// The plane through the three points.
    ///
    /// The normal is `cross(b - a, c - a)`, so the points wind anticlockwise when viewed from the front
    pub fn from_points(a: impl Into<Point3>, b: impl Into<Point3>, c: impl Into<Point3>) -> Result<Self, ShapeError> {
        let (a, b, c) = (a.into(), b.into(), c.into());
        let normal = Vector3::cross(b - a, c - a);
        Self::from_point(a, normal).map_err(|_| ShapeError::CollinearPoints)
    }
}

// endregion Constructors

// region Helpers

impl Plane {
    /// Signed distance of the point above the plane (positive in front)
    pub fn altitude(&self, p: Point3) -> Number { Vector3::dot(self.normal, p.to_vector()) - self.offset }

    /// The point on the plane nearest to `p`
    pub fn project(&self, p: Point3) -> Point3 { p - self.normal * self.altitude(p) }
}

// endregion Helpers

// region Shape Impl

impl Shape3 for Plane {
    fn raycast(&self, ray: &Ray3) -> RayHit3 {
        validate::ray(ray);

        let normal = self.normal;
        let origin_height = Vector3::dot(normal, ray.pos().to_vector());
        // How fast the ray climbs away from the plane
        let climb = Vector3::dot(ray.dir(), normal);

        // NOTE: Exact comparison, a ray starting a hair off the plane goes through the normal path below
        if origin_height == self.offset {
            let facing = if climb <= 0. { normal } else { -normal };
            let hit = RayHit3::entered(ray, 0., facing).with_exit(0., -facing);
            validate::hit(&hit);
            return hit;
        }

        let altitude = origin_height - self.offset;

        // The nearest point on the plane is out of reach
        if altitude.abs() > ray.length() {
            return RayHit3::miss(ray);
        }
        // Parallel, or heading away from the plane
        if !(altitude * climb < 0.) {
            return RayHit3::miss(ray);
        }

        let dist = (altitude / climb).abs();
        if dist > ray.length() {
            return RayHit3::miss(ray);
        }

        // Face whichever side the ray came from; the exit is the same point, out the other side
        let facing = if altitude > 0. { normal } else { -normal };
        let hit = RayHit3::entered(ray, dist, facing).with_exit(dist, -facing);
        validate::hit(&hit);
        hit
    }
}

// endregion Shape Impl
