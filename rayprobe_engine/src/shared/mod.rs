pub mod frame;
pub mod hit;
pub mod interval;
pub mod probe;
pub mod project;
pub mod ray;
pub mod validate;
