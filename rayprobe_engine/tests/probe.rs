use approx::assert_relative_eq;
use rayprobe_engine::core::types::*;
use rayprobe_engine::shape::dim2::disc::Disc;
use rayprobe_engine::shape::dim2::segment::Segment;
use rayprobe_engine::shape::dim3::axis_box::AxisBox;
use rayprobe_engine::shape::dim3::plane::Plane;
use rayprobe_engine::shape::dim3::sphere::Sphere;
use rayprobe_engine::shape::{Shape2, Shape3, ShapeInstance2, ShapeInstance3};
use rayprobe_engine::shared::probe;
use rayprobe_engine::shared::ray::{Ray2, Ray3};

mod common;

fn scene() -> [ShapeInstance3; 3] {
    [
        Plane::new(Vector3::new(0., 0., 1.), 0.).into(),
        Sphere::new(Point3::new(0., 0., 5.), 1.).into(),
        AxisBox::new(Point3::new(-1., -1., 8.), Point3::new(1., 1., 9.)).into(),
    ]
}

#[test]
pub fn nearest_hit_picks_closest_shape() {
    let shapes = scene();

    let down = Ray3::new(Point3::new(0., 0., 20.), Vector3::new(0., 0., -1.), 30.);
    let (idx, hit) = probe::nearest_hit(&shapes, |s| s.raycast(&down)).unwrap();
    assert_eq!(idx, 2);
    assert_relative_eq!(hit.impact_dist, 11., epsilon = common::EPSILON);

    let up = Ray3::new(Point3::new(0., 0., -1.), Vector3::new(0., 0., 1.), 30.);
    let (idx, hit) = probe::nearest_hit(&shapes, |s| s.raycast(&up)).unwrap();
    assert_eq!(idx, 0);
    assert_relative_eq!(hit.impact_dist, 1., epsilon = common::EPSILON);

    // Misses the sphere and box, hits the ground
    let slanted = Ray3::new(Point3::new(10., 0., 5.), Vector3::new(1., 0., -1.), 30.);
    let (idx, _) = probe::nearest_hit(&shapes, |s| s.raycast(&slanted)).unwrap();
    assert_eq!(idx, 0);
}

#[test]
pub fn nearest_hit_none_when_all_miss() {
    let shapes = scene();
    let away = Ray3::new(Point3::new(0., 0., 20.), Vector3::new(0., 0., 1.), 30.);
    assert!(probe::nearest_hit(&shapes, |s| s.raycast(&away)).is_none());

    let empty: [ShapeInstance3; 0] = [];
    assert!(probe::nearest_hit(&empty, |s| s.raycast(&away)).is_none());
}

#[test]
pub fn nearest_hit_ties_keep_earliest() {
    let ray = Ray2::new(Point2::new(-5., 0.), Vector2::new(1., 0.), 20.);
    // Both touch x = -1 first
    let shapes: [ShapeInstance2; 3] = [
        Disc::new(Point2::new(10., 0.), 1.).into(),
        Segment::new(Point2::new(-1., -3.), Point2::new(-1., 3.)).into(),
        Disc::new(Point2::new(0., 0.), 1.).into(),
    ];

    let (idx, hit) = probe::nearest_hit(&shapes, |s| s.raycast(&ray)).unwrap();
    assert_eq!(idx, 1);
    assert_relative_eq!(hit.impact_dist, 4., epsilon = common::EPSILON);
}

#[test]
pub fn line_of_sight() {
    let shapes = scene();

    let blocked = Ray3::between(Point3::new(0., 0., 20.), Point3::new(0., 0., 1.)).unwrap();
    assert!(!probe::is_clear(&shapes, |s| s.raycast(&blocked)));

    let clear = Ray3::between(Point3::new(5., 5., 20.), Point3::new(5., 5., 1.)).unwrap();
    assert!(probe::is_clear(&shapes, |s| s.raycast(&clear)));

    // Stops just above the box
    let short = Ray3::between(Point3::new(0., 0., 20.), Point3::new(0., 0., 9.5)).unwrap();
    assert!(probe::is_clear(&shapes, |s| s.raycast(&short)));
}
