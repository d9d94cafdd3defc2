//! Shapes in the `XY` plane, cast against with a [Ray2](crate::shared::ray::Ray2).
//!
//! These are the foundational routines; the [3D shapes](super::dim3) reduce to them where they can.

pub mod axis_rect;
pub mod disc;
pub mod segment;
