//! Casts a handful of rays into a small scene and prints what they hit.
//!
//! Run with `RUST_LOG=trace` to see the engine's own logs as well.

use tracing::info;
use tracing_subscriber::EnvFilter;

pub fn main() {
    // Type aliases used everywhere in the engine
    use rayprobe_engine::core::types::*;

    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    // region CREATING THE SCENE

    use rayprobe_engine::shape::dim3::{
        axis_box::AxisBox, oriented_box::OrientedBox, plane::Plane, sphere::Sphere, z_cylinder::ZCylinder,
    };
    // Enum wrapping all the 3D shapes, for static dispatch
    use rayprobe_engine::shape::{Shape3, ShapeInstance3};

    let quarter_turn = std::f64::consts::FRAC_1_SQRT_2;
    let shapes: Vec<ShapeInstance3> = vec![
        // NOTE: Using tuples for positions, since they're `impl Into<Point3>`
        Plane::new((0., 0., 1.), 0.).into(),
        Sphere::new((0., 0., 3.), 1.).into(),
        AxisBox::new((3., -1., 0.), (5., 1., 2.)).into(),
        OrientedBox::new((-4., 0., 1.), (quarter_turn, quarter_turn, 0.), (-quarter_turn, quarter_turn, 0.), (1., 1., 1.))
            .into(),
        ZCylinder::new((0., 5.), 1., 0., 4.).into(),
    ];

    // endregion CREATING THE SCENE

    // region CASTING

    use rayprobe_engine::shared::probe;
    use rayprobe_engine::shared::ray::Ray3;

    let eye = Point3::new(0., -10., 3.);
    let targets = [
        Point3::new(0., 0., 3.),
        Point3::new(4., 0., 1.),
        Point3::new(-4., 0., 1.),
        Point3::new(0., 5., 2.),
        Point3::new(0., 10., 10.),
    ];

    for target in targets {
        // Extend the ray past the target, so it can reach things behind it
        let ray = match Ray3::between(eye, target) {
            Ok(ray) => ray.with_length(50.),
            Err(err) => {
                tracing::error!(?err, ?target, "couldn't aim at target");
                continue;
            }
        };

        match probe::nearest_hit(&shapes, |s| s.raycast(&ray)) {
            Some((idx, hit)) => info!(
                ?target,
                shape = idx,
                dist = hit.impact_dist,
                pos = ?hit.impact_pos,
                normal = ?hit.impact_normal,
                inside = hit.travel_dist_in_shape,
                "hit"
            ),
            None => info!(?target, "nothing in the way"),
        }
    }

    let clear = Ray3::between(eye, Point3::new(0., 10., 3.)).map(|ray| probe::is_clear(&shapes, |s| s.raycast(&ray)));
    info!(?clear, "line of sight through the sphere");

    // endregion CASTING
}
