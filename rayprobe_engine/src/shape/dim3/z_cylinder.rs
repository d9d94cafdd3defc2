use getset::CopyGetters;
use strum_macros::{Display, EnumIter};
use tracing::trace;

use crate::core::targets::{RAYCAST, SHAPE};
use crate::core::types::{Number, Point2, Point3, Vector3};
use crate::shape::dim2::disc::Disc;
use crate::shape::dim3::sphere::Sphere;
use crate::shape::{Shape3, ShapeError};
use crate::shared::hit::RayHit3;
use crate::shared::interval::{slab, Crossing, Interval};
use crate::shared::project::project_xy;
use crate::shared::ray::Ray3;
use crate::shared::validate;

/// Which part of a [ZCylinder]'s surface was crossed
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Display, EnumIter)]
pub enum CylinderFace {
    /// The curved surface
    Side,
    /// The cap at the top of the height range (normal `+Z`)
    Top,
    /// The cap at the bottom of the height range (normal `-Z`)
    Bottom,
}

/// A capped cylinder standing upright: its axis is always parallel to the world `Z` axis
#[derive(Copy, Clone, Debug, PartialEq, CopyGetters)]
#[get_copy = "pub"]
pub struct ZCylinder {
    /// The cylinder seen from above
    cross_section: Disc,
    z_min: Number,
    z_max: Number,
    /// Sphere enclosing the whole cylinder
    bounds: Sphere,
}

// region Constructors

impl ZCylinder {
    /// Creates a cylinder around the vertical line through `centre`, spanning between the heights `z_a` and `z_b`
    /// (which do *not* have to be sorted)
    pub fn new(centre: impl Into<Point2>, radius: Number, z_a: Number, z_b: Number) -> Self {
        let centre = centre.into();
        let (z_min, z_max) = (z_a.min(z_b), z_a.max(z_b));
        let half_height = (z_max - z_min) / 2.;
        Self {
            cross_section: Disc::new(centre, radius),
            z_min,
            z_max,
            bounds: Sphere::new(
                Point3::new(centre.x, centre.y, z_min + half_height),
                ((radius * radius) + (half_height * half_height)).sqrt(),
            ),
        }
    }

    pub fn try_new(centre: impl Into<Point2>, radius: Number, z_a: Number, z_b: Number) -> Result<Self, ShapeError> {
        if !(radius.is_finite() && radius > 0.) {
            trace!(target: SHAPE, radius, "rejected cylinder radius");
            return Err(ShapeError::InvalidRadius(radius));
        }
        Ok(Self::new(centre, radius, z_a, z_b))
    }
}

// endregion Constructors

// region Helpers

impl ZCylinder {
    pub fn centre(&self) -> Point2 { self.cross_section.centre() }

    pub fn radius(&self) -> Number { self.cross_section.radius() }

    /// The outward normal of `face`, at the point `pos` on it
    pub fn normal(&self, face: CylinderFace, pos: Point3) -> Vector3 {
        match face {
            CylinderFace::Side => {
                let centre = self.centre();
                Vector3::new(pos.x - centre.x, pos.y - centre.y, 0.) / self.radius()
            }
            CylinderFace::Top => Vector3::new(0., 0., 1.),
            CylinderFace::Bottom => Vector3::new(0., 0., -1.),
        }
    }

    /// The span of distances along the (infinite) ray that are inside the cylinder, and the surfaces crossed
    /// at either end.
    ///
    /// The span where the ray is inside the curved side comes from the ray's projection passing through
    /// the [cross-section](Self::cross_section), which is intersected with the span where the ray is within the
    /// height range. Whichever boundary is reached first on the way in, and on the way out, wins. If a cap and the
    /// side are crossed at exactly the same distance (the rim), the cap wins.
    pub fn span(&self, ray: &Ray3) -> Option<Interval<Crossing<CylinderFace>>> {
        let (pos, dir) = (ray.pos(), ray.dir());

        let lateral = match project_xy(ray) {
            Some(projected) => {
                let (near, far) = self.cross_section.chord(&projected.ray)?;
                let near = Crossing::new(projected.unproject_dist(near), CylinderFace::Side);
                let far = Crossing::new(projected.unproject_dist(far), CylinderFace::Side);
                Interval::from(near..=far)
            }
            // Vertical ray, the side is never crossed
            None => {
                trace!(target: RAYCAST, ?ray, "vertical ray against cylinder");
                if !self.cross_section.contains(Point2::new(pos.x, pos.y)) {
                    return None;
                }
                Interval::FULL
            }
        };
        let height = slab(pos.z, dir.z, self.z_min, self.z_max, CylinderFace::Bottom, CylinderFace::Top)?;

        Some(height & lateral).filter(|span| !span.is_empty())
    }
}

// endregion Helpers

// region Shape Impl

impl Shape3 for ZCylinder {
    fn raycast(&self, ray: &Ray3) -> RayHit3 {
        validate::ray(ray);

        // Cheap rejection: the sphere around the ray doesn't touch the sphere around the cylinder
        let ray_half_length = ray.length() / 2.;
        let ray_centre = ray.at(ray_half_length);
        if (self.bounds.centre() - ray_centre).length() > self.bounds.radius() + ray_half_length {
            return RayHit3::miss(ray);
        }

        let hit = RayHit3::from_span(ray, self.span(ray), |face, pos| self.normal(face, pos));
        validate::hit(&hit);
        hit
    }
}

// endregion Shape Impl
