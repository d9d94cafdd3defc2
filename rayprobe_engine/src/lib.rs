//! Ray-casting intersection routines for simple 2D and 3D primitives.
//!
//! Every routine takes a [ray](shared::ray::Ray) and a shape by value/reference and returns a
//! fully-populated [RayHit](shared::hit::RayHit). A miss is a normal result, never an error.
//!
//! See [shape] for the primitives and [shared::probe] for querying many shapes at once.

pub mod core;
pub mod shape;
pub mod shared;
