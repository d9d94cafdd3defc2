use crate::core::types::Number;
use derivative::Derivative;
use std::fmt::{Display, Formatter};
use std::ops::{RangeFrom, RangeFull, RangeInclusive, RangeTo};

/// Represents a interval of values. There may/not be a `start` and/or `end` bound.
///
/// A missing bound means the interval extends forever in that direction. In this crate, intervals are
/// spans of distances along a ray during which the ray is inside some region; an unbounded side means
/// the ray is parallel to that region's boundaries (and inside them).
///
/// # Requirements
/// An interval with `start > end` is empty, see [Self::is_empty]
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub struct Interval<T> {
    pub start: Option<T>,
    pub end: Option<T>,
}

impl<T> From<RangeFull> for Interval<T> {
    fn from(_value: RangeFull) -> Self { Self { start: None, end: None } }
}
impl<T> From<RangeInclusive<T>> for Interval<T> {
    fn from(value: RangeInclusive<T>) -> Self {
        let (min, max) = value.into_inner();
        Self {
            start: Some(min),
            end: Some(max),
        }
    }
}
impl<T> From<RangeTo<T>> for Interval<T> {
    fn from(value: RangeTo<T>) -> Self {
        Self {
            start: None,
            end: Some(value.end),
        }
    }
}
impl<T> From<RangeFrom<T>> for Interval<T> {
    fn from(value: RangeFrom<T>) -> Self {
        Self {
            start: Some(value.start),
            end: None,
        }
    }
}

impl<T> Interval<T> {
    pub const FULL: Self = Self { start: None, end: None };

    /// Applies `f` to both bounds (if present)
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Interval<U> {
        Interval {
            start: self.start.map(&mut f),
            end: self.end.map(&mut f),
        }
    }
}

impl<T: PartialOrd> Interval<T> {
    /// Whether the interval contains no values at all (`start > end`)
    pub fn is_empty(&self) -> bool {
        match self {
            Self {
                start: Some(start),
                end: Some(end),
            } => start > end,
            _ => false,
        }
    }

    pub fn contains(&self, item: &T) -> bool {
        match self {
            Self {
                start: Some(start),
                end: Some(end),
            } => start <= item && item <= end,
            Self {
                start: Some(start),
                end: None,
            } => start <= item,
            Self {
                start: None,
                end: Some(end),
            } => item <= end,
            Self { start: None, end: None } => true,
        }
    }
}

/// Intersection of two intervals: the values inside both of them.
///
/// When two bounds are equal, the bound from `self` (the left-hand side) is kept.
impl<T: PartialOrd> std::ops::BitAnd for Interval<T> {
    type Output = Interval<T>;

    fn bitand(self, other: Self) -> Self::Output {
        // `start`: Find the largest (total) lowest bound, aka the lower bound that's inside both bounds
        // `end`: Find the smallest (total) upper bound, aka the upper bound that's inside both bounds
        // This is equivalent to finding `start = max(self_start, other_start), end = min(self_end, other_end)`

        let start = match (self.start, other.start) {
            (None, start) | (start, None) => start,
            (Some(a), Some(b)) => {
                if b > a {
                    Some(b)
                } else {
                    Some(a)
                }
            }
        };

        let end = match (self.end, other.end) {
            (None, end) | (end, None) => end,
            (Some(a), Some(b)) => {
                if b < a {
                    Some(b)
                } else {
                    Some(a)
                }
            }
        };

        Self { start, end }
    }
}

impl<T: Display> Display for Interval<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if let Some(start) = &self.start {
            write!(f, "{start}")?;
        }
        write!(f, "..")?;
        if let Some(end) = &self.end {
            write!(f, "{end}")?
        }
        Ok(())
    }
}

// region Crossing

/// A point where a ray crosses the boundary of a region, and which part of the boundary it crossed.
///
/// Comparisons only look at [Self::dist], so an [`Interval<Crossing<F>>`] can be intersected with `&`
/// while remembering which face produced each of the surviving bounds.
#[derive(Copy, Clone, Debug, Derivative)]
#[derivative(PartialEq, PartialOrd)]
pub struct Crossing<F> {
    /// Distance along the ray
    pub dist: Number,
    #[derivative(PartialEq = "ignore", PartialOrd = "ignore")]
    pub face: F,
}

impl<F> Crossing<F> {
    pub fn new(dist: Number, face: F) -> Self { Self { dist, face } }
}

impl<F> Display for Crossing<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.dist) }
}

/// The span of distances along a ray for which the ray is inside the slab `min..=max` on a single axis.
///
/// `pos` and `dir` are the ray's coordinate and direction component along the axis. Entering through
/// the `min` side crosses `min_face`, entering through the `max` side crosses `max_face`.
///
/// A direction of exactly zero is the parallel case: the ray is either always inside the slab ([Interval::FULL])
/// or never ([None]).
pub fn slab<F>(pos: Number, dir: Number, min: Number, max: Number, min_face: F, max_face: F) -> Option<Interval<Crossing<F>>> {
    use num_traits::Zero;

    if dir.is_zero() {
        return if pos < min || pos > max { None } else { Some(Interval::FULL) };
    }

    let inv_dir = dir.recip();
    let to_min = Crossing::new((min - pos) * inv_dir, min_face);
    let to_max = Crossing::new((max - pos) * inv_dir, max_face);

    Some(if dir > 0. {
        (to_min..=to_max).into()
    } else {
        (to_max..=to_min).into()
    })
}

// endregion Crossing
