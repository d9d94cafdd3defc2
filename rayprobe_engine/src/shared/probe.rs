//! Queries that cast one ray against many shapes.
//!
//! There's no acceleration structure here: every shape is tested in turn. The casting itself is passed in as a closure,
//! so this works for any collection of shapes (and either dimension), e.g.
//! `probe::nearest_hit(&shapes, |s| s.raycast(&ray))`.

use tracing::trace;

use crate::core::targets::PROBE;
use crate::shared::hit::RayHit;
use crate::shared::ray::Space;

/// Finds the shape the ray impacts first.
///
/// Returns the index of that shape (in iteration order) along with its result, or [None] if nothing was hit.
/// If two shapes are impacted at exactly the same distance, the earlier one is kept.
pub fn nearest_hit<S: Space, T>(
    shapes: impl IntoIterator<Item = T>,
    mut cast: impl FnMut(T) -> RayHit<S>,
) -> Option<(usize, RayHit<S>)> {
    let mut nearest: Option<(usize, RayHit<S>)> = None;
    for (idx, shape) in shapes.into_iter().enumerate() {
        let hit = cast(shape);
        let is_nearer = match &nearest {
            None => hit.did_impact,
            Some((_, best)) => hit.is_nearer_than(best),
        };
        if is_nearer {
            nearest = Some((idx, hit));
        }
    }

    if let Some((idx, hit)) = &nearest {
        trace!(target: PROBE, idx, dist = hit.impact_dist, "nearest hit");
    }
    nearest
}

/// Whether the ray gets through without impacting any of the shapes (a line-of-sight check)
pub fn is_clear<S: Space, T>(shapes: impl IntoIterator<Item = T>, mut cast: impl FnMut(T) -> RayHit<S>) -> bool {
    shapes.into_iter().all(|shape| !cast(shape).did_impact)
}
