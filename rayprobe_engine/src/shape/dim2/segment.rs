use getset::CopyGetters;
use tracing::trace;

use crate::core::targets::SHAPE;
use crate::core::types::{Number, Point2, Vector2};
use crate::shape::{Shape2, ShapeError};
use crate::shared::hit::RayHit2;
use crate::shared::ray::Ray2;
use crate::shared::validate;

/// How far [Segment::line_through] extends past each of its points
pub const LINE_EXTENT: Number = 1e7;

/// A straight line between two points, with no thickness
#[derive(Copy, Clone, Debug, PartialEq, CopyGetters)]
#[get_copy = "pub"]
pub struct Segment {
    a: Point2,
    b: Point2,
}

// region Constructors

impl Segment {
    pub fn new(a: impl Into<Point2>, b: impl Into<Point2>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
        }
    }

    pub fn try_new(a: impl Into<Point2>, b: impl Into<Point2>) -> Result<Self, ShapeError> {
        let seg = Self::new(a, b);
        if !(seg.length() > 0.) {
            trace!(target: SHAPE, ?seg, "rejected zero length segment");
            return Err(ShapeError::DegenerateSegment);
        }
        Ok(seg)
    }

    /// A segment long enough to stand in for the infinite line through `a` and `b`
    pub fn line_through(a: impl Into<Point2>, b: impl Into<Point2>) -> Result<Self, ShapeError> {
        Ok(Self::try_new(a, b)?.extended(LINE_EXTENT))
    }

    /// Lengthens the segment by `amount` past both of its ends
    pub fn extended(self, amount: Number) -> Self {
        let along = self.b - self.a;
        let len = along.length();
        if !(len > 0.) {
            return self;
        }
        let step = along * (amount / len);
        Self {
            a: self.a - step,
            b: self.b + step,
        }
    }
}

// endregion Constructors

// region Helpers

impl Segment {
    pub fn length(&self) -> Number { (self.b - self.a).length() }

    /// Unit normal of the segment, on the side facing against `dir`
    pub fn normal_against(&self, dir: Vector2) -> Vector2 {
        let along = self.b - self.a;
        let normal = Vector2::new(-along.y, along.x) / along.length();
        if Vector2::dot(normal, dir) > 0. {
            -normal
        } else {
            normal
        }
    }
}

// endregion Helpers

// region Shape Impl

impl Shape2 for Segment {
    fn raycast(&self, ray: &Ray2) -> RayHit2 {
        validate::ray(ray);

        let dir = ray.dir();
        let ray_perp = Vector2::new(-dir.y, dir.x);

        // Signed distances of both ends from the line of the ray.
        // The segment only crosses the line if they're on opposite sides; touching counts as a miss
        let dist_a = Vector2::dot(self.a - ray.pos(), ray_perp);
        let dist_b = Vector2::dot(self.b - ray.pos(), ray_perp);
        if dist_a * dist_b >= 0. {
            return RayHit2::miss(ray);
        }

        // Fraction along the segment (A -> B) where it crosses the ray's line
        let frac = dist_a / (dist_a - dist_b);
        let crossing = self.a + (self.b - self.a) * frac;
        let dist = Vector2::dot(crossing - ray.pos(), dir);

        if !(dist >= 0. && dist < ray.length()) {
            return RayHit2::miss(ray);
        }

        // The ray came from the side it's travelling away from, so facing against it faces the origin
        let hit = RayHit2::entered(ray, dist, self.normal_against(dir));
        validate::hit(&hit);
        hit
    }
}

// endregion Shape Impl
