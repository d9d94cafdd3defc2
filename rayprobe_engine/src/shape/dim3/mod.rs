//! Shapes in 3D space, cast against with a [Ray3](crate::shared::ray::Ray3).

pub mod axis_box;
pub mod oriented_box;
pub mod plane;
pub mod sphere;
pub mod z_cylinder;
