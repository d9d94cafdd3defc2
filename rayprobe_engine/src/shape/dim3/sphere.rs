use getset::CopyGetters;
use tracing::trace;

use crate::core::targets::SHAPE;
use crate::core::types::{Number, Point3, Vector3};
use crate::shape::{Shape3, ShapeError};
use crate::shared::hit::RayHit3;
use crate::shared::ray::Ray3;
use crate::shared::validate;

/// A solid ball
#[derive(Copy, Clone, Debug, PartialEq, CopyGetters)]
#[get_copy = "pub"]
pub struct Sphere {
    centre: Point3,
    radius: Number,
    radius_sqr: Number,
}

// region Constructors

impl Sphere {
    pub fn new(centre: impl Into<Point3>, radius: Number) -> Self {
        Self {
            centre: centre.into(),
            radius,
            radius_sqr: radius * radius,
        }
    }

    pub fn try_new(centre: impl Into<Point3>, radius: Number) -> Result<Self, ShapeError> {
        if !(radius.is_finite() && radius > 0.) {
            trace!(target: SHAPE, radius, "rejected sphere radius");
            return Err(ShapeError::InvalidRadius(radius));
        }
        Ok(Self::new(centre, radius))
    }
}

// endregion Constructors

// region Helpers

impl Sphere {
    /// Normal pointing outwards from the centre, through `pos`
    #[inline(always)]
    pub fn outward_normal(&self, pos: Point3) -> Vector3 { (pos - self.centre) / self.radius }

    /// Whether the point is strictly inside the sphere
    pub fn contains(&self, pos: Point3) -> bool { (pos - self.centre).length_squared() < self.radius_sqr }
}

// endregion Helpers

// region Shape Impl

impl Shape3 for Sphere {
    fn raycast(&self, ray: &Ray3) -> RayHit3 {
        validate::ray(ray);

        let to_centre = self.centre - ray.pos();
        let centre_dist_sqr = to_centre.length_squared();
        // How far along the ray the centre is
        let along = Vector3::dot(to_centre, ray.dir());

        // Sphere is behind the ray
        if along < 0. {
            return RayHit3::miss(ray);
        }
        // The nearest point of the sphere is further than the ray can travel
        if centre_dist_sqr.sqrt() - self.radius > ray.length() {
            return RayHit3::miss(ray);
        }
        // Passes by too far to the side
        let perp_sqr = centre_dist_sqr - (along * along);
        if perp_sqr >= self.radius_sqr {
            return RayHit3::miss(ray);
        }
        // NOTE: Unlike the disc, starting inside the sphere does not count as an impact
        if centre_dist_sqr < self.radius_sqr {
            return RayHit3::miss(ray);
        }

        // Right angle triangle between the centre, the closest point on the ray, and the surface
        let half_chord = (self.radius_sqr - perp_sqr).sqrt();
        // Starting outside means `along >= half_chord`, clamp away any rounding error
        let dist = (along - half_chord).max(0.);
        if dist > ray.length() {
            return RayHit3::miss(ray);
        }

        let hit = RayHit3::entered(ray, dist, self.outward_normal(ray.at(dist)));

        // The exit is a whole chord further on, if the ray is long enough to get there
        let exit_dist = dist + (half_chord * 2.);
        let hit = if exit_dist <= ray.length() {
            hit.with_exit(exit_dist, self.outward_normal(ray.at(exit_dist)))
        } else {
            hit
        };

        validate::hit(&hit);
        hit
    }
}

// endregion Shape Impl
