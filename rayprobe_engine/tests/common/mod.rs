#![allow(dead_code)]

use approx::assert_abs_diff_eq;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayprobe_engine::core::types::*;
use rayprobe_engine::shared::hit::RayHit;
use rayprobe_engine::shared::ray::{Ray2, Ray3, Space};

pub type TestRng = SmallRng;

/// Tolerance for comparing computed geometry
pub const EPSILON: Number = 1e-9;
/// Tolerance for properties that accumulate a few more rounding errors
pub const LOOSE_EPSILON: Number = 1e-6;

/// Seeded so that failures are reproducible
pub fn rng(seed: u64) -> TestRng { SmallRng::seed_from_u64(seed) }

#[track_caller]
pub fn assert_point2_eq(actual: Point2, expected: Point2) {
    assert_abs_diff_eq!(actual.x, expected.x, epsilon = EPSILON);
    assert_abs_diff_eq!(actual.y, expected.y, epsilon = EPSILON);
}

#[track_caller]
pub fn assert_vector2_eq(actual: Vector2, expected: Vector2) {
    assert_abs_diff_eq!(actual.x, expected.x, epsilon = EPSILON);
    assert_abs_diff_eq!(actual.y, expected.y, epsilon = EPSILON);
}

#[track_caller]
pub fn assert_point3_eq(actual: Point3, expected: Point3) {
    assert_abs_diff_eq!(actual.x, expected.x, epsilon = EPSILON);
    assert_abs_diff_eq!(actual.y, expected.y, epsilon = EPSILON);
    assert_abs_diff_eq!(actual.z, expected.z, epsilon = EPSILON);
}

#[track_caller]
pub fn assert_vector3_eq(actual: Vector3, expected: Vector3) {
    assert_abs_diff_eq!(actual.x, expected.x, epsilon = EPSILON);
    assert_abs_diff_eq!(actual.y, expected.y, epsilon = EPSILON);
    assert_abs_diff_eq!(actual.z, expected.z, epsilon = EPSILON);
}

pub fn random_unit2(rng: &mut TestRng) -> Vector2 {
    let angle = rng.gen_range(0.0..std::f64::consts::TAU);
    Vector2::new(angle.cos(), angle.sin())
}

pub fn random_unit3(rng: &mut TestRng) -> Vector3 {
    // Uniform on the sphere: uniform height, uniform angle around
    let z: Number = rng.gen_range(-1.0..1.0);
    let angle = rng.gen_range(0.0..std::f64::consts::TAU);
    let r = (1. - z * z).sqrt();
    Vector3::new(r * angle.cos(), r * angle.sin(), z)
}

pub fn random_point2(rng: &mut TestRng, extent: Number) -> Point2 {
    Point2::new(rng.gen_range(-extent..extent), rng.gen_range(-extent..extent))
}

pub fn random_point3(rng: &mut TestRng, extent: Number) -> Point3 {
    Point3::new(
        rng.gen_range(-extent..extent),
        rng.gen_range(-extent..extent),
        rng.gen_range(-extent..extent),
    )
}

pub fn random_ray2(rng: &mut TestRng) -> Ray2 {
    Ray2::from_unit(random_point2(rng, 6.), random_unit2(rng), rng.gen_range(0.0..15.0))
}

pub fn random_ray3(rng: &mut TestRng) -> Ray3 {
    Ray3::from_unit(random_point3(rng, 6.), random_unit3(rng), rng.gen_range(0.0..15.0))
}

/// Checks the properties every result must have, whatever shape it came from
#[track_caller]
pub fn check_hit_properties<S: Space>(hit: &RayHit<S>) {
    let ray = &hit.ray;
    let dist = |a: S::Point, b: S::Point| S::length(a - b);

    if !hit.did_impact {
        // Sentinel contract
        assert_eq!(hit.impact_pos, ray.end(), "miss should impact at ray end: {hit:?}");
        assert_eq!(hit.impact_normal, -ray.dir(), "miss should face back along the ray: {hit:?}");
        assert_eq!(hit.impact_dist, ray.length());
        assert!(!hit.did_exit);
        return;
    }

    assert!(hit.impact_dist >= 0. && hit.impact_dist <= ray.length() + LOOSE_EPSILON, "{hit:?}");
    assert_abs_diff_eq!(S::length(hit.impact_normal), 1., epsilon = LOOSE_EPSILON);
    assert!(
        S::dot(hit.impact_normal, ray.dir()) <= LOOSE_EPSILON,
        "impact normal should oppose the ray: {hit:?}"
    );
    assert_abs_diff_eq!(dist(ray.pos(), hit.impact_pos), hit.impact_dist, epsilon = LOOSE_EPSILON);

    // Holds whether or not the ray exits, since a ray that never exits "exits" at its end
    assert_abs_diff_eq!(
        hit.travel_dist_in_shape,
        dist(hit.impact_pos, hit.exit_pos),
        epsilon = LOOSE_EPSILON
    );

    if hit.did_exit {
        assert!(
            dist(ray.pos(), hit.exit_pos) + LOOSE_EPSILON >= dist(ray.pos(), hit.impact_pos),
            "exit should be no nearer than the impact: {hit:?}"
        );
        assert!(hit.exit_dist() <= ray.length() + LOOSE_EPSILON, "{hit:?}");
        assert_abs_diff_eq!(S::length(hit.exit_normal), 1., epsilon = LOOSE_EPSILON);
    }
}
