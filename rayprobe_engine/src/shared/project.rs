//! Reduces 3D rays to 2D ones, so the 3D routines can be built on top of the 2D routines.

use glam::swizzles::*;
use glamour::{FromRaw, ToRaw};

use crate::core::types::{Number, Point2, Vector2};
use crate::shared::ray::{Ray2, Ray3};

/// A 3D ray, seen from above (the `XY` plane)
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ProjectedRay {
    /// The ray with the `Z` components dropped, and the direction re-normalised
    pub ray: Ray2,
    /// Length of the `XY` part of the 3D ray's direction.
    ///
    /// A distance `t` along the 3D ray is a distance `t * scale` along the projected ray.
    pub scale: Number,
}

impl ProjectedRay {
    /// Converts a distance along the projected ray back into a distance along the original 3D ray
    #[inline(always)]
    pub fn unproject_dist(&self, dist: Number) -> Number { dist / self.scale }
}

/// Projects the 3D ray onto the `XY` plane.
///
/// The projected ray has the same start (minus `Z`), the normalised `XY` direction, and covers the same
/// stretch of the plane as the original ray (`length * scale`), so both rays reach the same fraction of
/// their length at the same point.
///
/// Returns [None] if the ray is parallel to the `Z` axis, since it has no `XY` direction.
pub fn project_xy(ray: &Ray3) -> Option<ProjectedRay> {
    let pos = Point2::from_raw(ray.pos().to_raw().xy());
    let dir = Vector2::from_raw(ray.dir().to_raw().xy());

    let scale = dir.length();
    if !(scale > 0.) {
        return None;
    }

    Some(ProjectedRay {
        ray: Ray2::from_unit(pos, dir / scale, ray.length() * scale),
        scale,
    })
}
