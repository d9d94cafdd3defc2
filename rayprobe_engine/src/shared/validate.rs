use crate::core::types::Number;
use crate::shared::hit::RayHit;
use crate::shared::ray::{Ray, Space};
use approx::*;
use std::borrow::Borrow;

macro_rules! debug_assert_only {
    () => {
        if cfg!(not(debug_assertions)) {
            return;
        }
    };
}

pub const EPSILON: Number = 1e-6;
pub const RELATIVE: Number = 1e-3;

#[inline(always)]
#[track_caller]
pub fn number(val: impl Borrow<Number>) {
    debug_assert_only!();

    let val = val.borrow();
    assert!(!val.is_nan(), "should not be nan; val: {val}");
}

#[inline(always)]
#[track_caller]
pub fn normal<S: Space>(n: S::Vector) {
    debug_assert_only!();
    let len = S::length(n);
    assert!(
        relative_eq!(len, 1., epsilon = EPSILON, max_relative = RELATIVE),
        "should be normalised; vec: {n:?}, len: {len:?}"
    );
}

#[inline(always)]
#[track_caller]
pub fn ray<S: Space>(r: &Ray<S>) {
    debug_assert_only!();
    normal::<S>(r.dir());
    number(r.length());
    assert!(r.length() >= 0., "ray length should be >= 0; ray: {r:?}");
    assert!(r.length().is_finite(), "ray length should be finite; ray: {r:?}");
}

/// Asserts that a cast result is consistent with the ray it came from
#[inline(always)]
#[track_caller]
pub fn hit<S: Space>(hit: &RayHit<S>) {
    debug_assert_only!();

    let ray = &hit.ray;

    if !hit.did_impact {
        assert_eq!(hit.impact_pos, ray.end(), "missed ray should impact at its end; hit: {hit:?}");
        assert_eq!(hit.impact_normal, -ray.dir(), "missed ray should face back along itself; hit: {hit:?}");
        assert!(!hit.did_exit, "missed ray can't exit; hit: {hit:?}");
        return;
    }

    number(hit.impact_dist);
    number(hit.travel_dist_in_shape);
    normal::<S>(hit.impact_normal);
    normal::<S>(hit.exit_normal);

    assert!(
        hit.impact_dist >= 0. && hit.impact_dist <= ray.length() + EPSILON,
        "impact dist {} not in 0..={}",
        hit.impact_dist,
        ray.length()
    );
    assert!(
        S::dot(hit.impact_normal, ray.dir()) <= EPSILON,
        "impact normal should oppose the ray; hit: {hit:?}"
    );
    assert!(
        hit.travel_dist_in_shape >= -EPSILON,
        "travel dist should not be negative; hit: {hit:?}"
    );
}
