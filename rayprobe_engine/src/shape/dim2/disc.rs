use getset::CopyGetters;
use tracing::trace;

use crate::core::targets::SHAPE;
use crate::core::types::{Number, Point2, Vector2};
use crate::shape::{Shape2, ShapeError};
use crate::shared::hit::RayHit2;
use crate::shared::interval::{Crossing, Interval};
use crate::shared::ray::Ray2;
use crate::shared::validate;

/// A filled circle
#[derive(Copy, Clone, Debug, PartialEq, CopyGetters)]
#[get_copy = "pub"]
pub struct Disc {
    centre: Point2,
    radius: Number,
    radius_sqr: Number,
}

// region Constructors

impl Disc {
    pub fn new(centre: impl Into<Point2>, radius: Number) -> Self {
        Self {
            centre: centre.into(),
            radius,
            radius_sqr: radius * radius,
        }
    }

    pub fn try_new(centre: impl Into<Point2>, radius: Number) -> Result<Self, ShapeError> {
        if !(radius.is_finite() && radius > 0.) {
            trace!(target: SHAPE, radius, "rejected disc radius");
            return Err(ShapeError::InvalidRadius(radius));
        }
        Ok(Self::new(centre, radius))
    }
}

// endregion Constructors

// region Helpers

impl Disc {
    /// Where the (infinite) line of the ray passes through the disc.
    ///
    /// Returns the distances along the ray where it enters and leaves the circle, which may be negative
    /// (behind the ray) or beyond the ray's length. Returns [None] if the line passes the centre at `radius`
    /// or further.
    pub fn chord(&self, ray: &Ray2) -> Option<(Number, Number)> {
        let to_centre = self.centre - ray.pos();
        let dir = ray.dir();

        // Distance to the centre, split into the part along the ray and the part perpendicular to it
        let along = Vector2::dot(to_centre, dir);
        let perp = Vector2::dot(to_centre, Vector2::new(-dir.y, dir.x));
        let perp_sqr = perp * perp;

        if perp_sqr >= self.radius_sqr {
            return None;
        }

        // Right angle triangle between the centre, the closest point on the line, and the edge of the circle
        let half_chord = (self.radius_sqr - perp_sqr).sqrt();
        Some((along - half_chord, along + half_chord))
    }

    /// Normal pointing outwards from the centre, through `pos`
    #[inline(always)]
    pub fn outward_normal(&self, pos: Point2) -> Vector2 { (pos - self.centre) / self.radius }

    /// Whether the point is strictly inside the disc
    pub fn contains(&self, pos: Point2) -> bool {
        let rel = pos - self.centre;
        Vector2::dot(rel, rel) < self.radius_sqr
    }
}

// endregion Helpers

// region Shape Impl

impl Shape2 for Disc {
    fn raycast(&self, ray: &Ray2) -> RayHit2 {
        validate::ray(ray);

        // The nearest edge of the disc is further than the ray can travel
        if (self.centre - ray.pos()).length() - self.radius > ray.length() {
            return RayHit2::miss(ray);
        }

        // If the ray starts inside, the chord starts behind it, which `from_span()` treats as an immediate impact
        let span = self
            .chord(ray)
            .map(|(near, far)| Interval::from(Crossing::new(near, ())..=Crossing::new(far, ())));
        let hit = RayHit2::from_span(ray, span, |_, pos| self.outward_normal(pos));

        validate::hit(&hit);
        hit
    }
}

// endregion Shape Impl
