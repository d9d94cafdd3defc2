use getset::CopyGetters;
use strum_macros::{Display, EnumIter};

use crate::core::types::{Point2, Vector2};
use crate::shape::Shape2;
use crate::shared::hit::RayHit2;
use crate::shared::interval::{slab, Crossing, Interval};
use crate::shared::ray::Ray2;
use crate::shared::validate;

/// A side of an [AxisRect], named after the direction its normal points in
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Display, EnumIter)]
pub enum RectFace {
    NegX,
    PosX,
    NegY,
    PosY,
}

impl RectFace {
    /// The outward normal of the side
    pub fn normal(self) -> Vector2 {
        match self {
            Self::NegX => Vector2::new(-1., 0.),
            Self::PosX => Vector2::new(1., 0.),
            Self::NegY => Vector2::new(0., -1.),
            Self::PosY => Vector2::new(0., 1.),
        }
    }
}

/// An axis-aligned rectangle
///
/// The rectangle spans between the two corners `min` and `max`
#[derive(Copy, Clone, Debug, PartialEq, CopyGetters)]
#[get_copy = "pub"]
pub struct AxisRect {
    /// The corner with the smallest coordinates
    min: Point2,
    /// The corner with the largest coordinates
    max: Point2,
}

// region Constructors

impl AxisRect {
    /// Creates a new [AxisRect] from two corners, which do *not* have to be sorted by min/max
    pub fn new(a: impl Into<Point2>, b: impl Into<Point2>) -> Self {
        let (a, b) = (a.into(), b.into());
        Self {
            min: Point2::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    pub fn new_centred(centre: impl Into<Point2>, size: impl Into<Vector2>) -> Self {
        let (centre, size) = (centre.into(), size.into());
        Self::new(centre - size / 2., centre + size / 2.)
    }

    /// The smallest rectangle containing the whole length of the ray
    pub fn around_ray(ray: &Ray2) -> Self { Self::new(ray.pos(), ray.end()) }
}

impl From<(Point2, Point2)> for AxisRect {
    fn from((a, b): (Point2, Point2)) -> Self { Self::new(a, b) }
}

// endregion Constructors

// region Helpers

impl AxisRect {
    pub fn size(&self) -> Vector2 { self.max - self.min }

    pub fn contains(&self, p: Point2) -> bool {
        self.min.x <= p.x && p.x <= self.max.x && self.min.y <= p.y && p.y <= self.max.y
    }

    /// Whether the two rectangles share any area (touching edges count)
    pub fn overlaps(&self, other: &Self) -> bool {
        self.min.x <= other.max.x && other.min.x <= self.max.x && self.min.y <= other.max.y && other.min.y <= self.max.y
    }

    /// The span of distances along the (infinite) ray that are inside the rectangle, and the sides crossed
    /// at either end.
    ///
    /// This is the slab method: the spans for the `X` and `Y` extents are found separately, then intersected.
    /// A ray parallel to an axis has an unbounded span on that axis if it's inside that extent.
    pub fn span(&self, ray: &Ray2) -> Option<Interval<Crossing<RectFace>>> {
        let (pos, dir) = (ray.pos(), ray.dir());
        let x = slab(pos.x, dir.x, self.min.x, self.max.x, RectFace::NegX, RectFace::PosX)?;
        let y = slab(pos.y, dir.y, self.min.y, self.max.y, RectFace::NegY, RectFace::PosY)?;
        Some(x & y).filter(|span| !span.is_empty())
    }
}

// endregion Helpers

// region Shape Impl

impl Shape2 for AxisRect {
    fn raycast(&self, ray: &Ray2) -> RayHit2 {
        validate::ray(ray);

        // Cheap rejection: the ray doesn't come near the rectangle
        if !self.overlaps(&Self::around_ray(ray)) {
            return RayHit2::miss(ray);
        }

        let hit = RayHit2::from_span(ray, self.span(ray), |face, _| face.normal());
        validate::hit(&hit);
        hit
    }
}

// endregion Shape Impl
