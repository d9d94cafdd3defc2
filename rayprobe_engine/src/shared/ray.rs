use crate::core::types::{Number, Point2, Point3, Vector2, Vector3};
use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};
use thiserror::Error;

// region Space

/// The dimensionality a [Ray] (and [RayHit](crate::shared::hit::RayHit)) lives in.
///
/// Only implemented by the marker types [Dim2] and [Dim3]; it exists so that the ray and result types
/// (and the code that fills them in) don't have to be written twice.
pub trait Space: Copy + Debug + PartialEq + Send + Sync + 'static {
    type Point: Copy + Debug + PartialEq + Send + Sync + Add<Self::Vector, Output = Self::Point> + Sub<Output = Self::Vector>;
    type Vector: Copy
        + Debug
        + PartialEq
        + Send
        + Sync
        + Add<Output = Self::Vector>
        + Sub<Output = Self::Vector>
        + Mul<Number, Output = Self::Vector>
        + Neg<Output = Self::Vector>;

    fn dot(a: Self::Vector, b: Self::Vector) -> Number;
    fn length(v: Self::Vector) -> Number { Self::dot(v, v).sqrt() }

    /// Normalises the vector, returning [None] if it is zero length or not finite
    fn try_normalize(v: Self::Vector) -> Option<Self::Vector> {
        let len = Self::length(v);
        if len.is_finite() && len > 0. {
            Some(v * (1. / len))
        } else {
            None
        }
    }
}

/// Marker for the 2D (`XY`) space
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Dim2 {}

/// Marker for the 3D (`XYZ`) space
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Dim3 {}

impl Space for Dim2 {
    type Point = Point2;
    type Vector = Vector2;

    fn dot(a: Vector2, b: Vector2) -> Number { Vector2::dot(a, b) }
}

impl Space for Dim3 {
    type Point = Point3;
    type Vector = Vector3;

    fn dot(a: Vector3, b: Vector3) -> Number { Vector3::dot(a, b) }
}

// endregion Space

// region Ray

pub type Ray2 = Ray<Dim2>;
pub type Ray3 = Ray<Dim3>;

#[derive(Error, Copy, Clone, Debug, PartialEq)]
pub enum RayError {
    #[error("the provided direction couldn't be normalised (zero or not finite)")]
    InvalidDirection,
    #[error("the provided length must be finite and >= 0; length: {0}")]
    InvalidLength(Number),
}

/// A ray segment: a starting point, a direction and a maximum distance travelled along it.
///
/// Rays are cheap value types, built by the caller per query.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Ray<S: Space> {
    pos: S::Point,
    dir: S::Vector,
    length: Number,
}

impl<S: Space> Ray<S> {
    /// World-space coordinate of the start of the ray
    #[inline(always)]
    pub fn pos(&self) -> S::Point { self.pos }

    /// Direction vector of the ray.
    ///
    /// # Requirements
    /// - Must be normalised
    #[inline(always)]
    pub fn dir(&self) -> S::Vector { self.dir }

    /// The furthest distance the ray travels
    #[inline(always)]
    pub fn length(&self) -> Number { self.length }

    /// Creates a new ray, normalising the direction vector.
    ///
    /// A zero direction is the caller's responsibility (see [Self::try_new]).
    pub fn new(pos: impl Into<S::Point>, dir: impl Into<S::Vector>, length: Number) -> Self {
        let dir = dir.into();
        Self {
            pos: pos.into(),
            dir: S::try_normalize(dir).unwrap_or(dir),
            length,
        }
    }

    /// Creates a new ray, without normalising the direction vector.
    ///
    /// The caller must provide a unit-length direction.
    pub fn from_unit(pos: impl Into<S::Point>, dir: impl Into<S::Vector>, length: Number) -> Self {
        Self {
            pos: pos.into(),
            dir: dir.into(),
            length,
        }
    }

    /// Creates a new ray, checking the direction can be normalised and the length is valid
    pub fn try_new(pos: impl Into<S::Point>, dir: impl Into<S::Vector>, length: Number) -> Result<Self, RayError> {
        let dir = S::try_normalize(dir.into()).ok_or(RayError::InvalidDirection)?;
        if !(length.is_finite() && length >= 0.) {
            return Err(RayError::InvalidLength(length));
        }
        Ok(Self {
            pos: pos.into(),
            dir,
            length,
        })
    }

    /// Creates the ray that starts at `from` and stops at `to`
    ///
    /// ```
    /// use rayprobe_engine::core::types::Point2;
    /// use rayprobe_engine::shared::ray::Ray2;
    ///
    /// let ray = Ray2::between(Point2::new(0., 0.), Point2::new(3., 4.)).unwrap();
    /// assert_eq!(ray.length(), 5.);
    /// ```
    pub fn between(from: impl Into<S::Point>, to: impl Into<S::Point>) -> Result<Self, RayError> {
        let (from, to) = (from.into(), to.into());
        let delta = to - from;
        Self::try_new(from, delta, S::length(delta))
    }

    /// Gets the position at a given distance along the ray
    ///
    /// `pos + (t * dir)`
    #[inline(always)]
    pub fn at(&self, t: Number) -> S::Point { self.pos + (self.dir * t) }

    /// The point the ray stops at: `at(length)`
    #[inline(always)]
    pub fn end(&self) -> S::Point { self.at(self.length) }

    /// Returns the same ray, travelling a different distance
    pub fn with_length(self, length: Number) -> Self { Self { length, ..self } }
}

// endregion Ray
