use getset::CopyGetters;
use strum_macros::{Display, EnumIter};
use tracing::trace;

use crate::core::targets::RAYCAST;
use crate::core::types::{Point2, Point3, Vector3};
use crate::shape::dim2::axis_rect::{AxisRect, RectFace};
use crate::shape::Shape3;
use crate::shared::hit::RayHit3;
use crate::shared::interval::{slab, Crossing, Interval};
use crate::shared::project::project_xy;
use crate::shared::ray::Ray3;
use crate::shared::validate;

/// A face of an [AxisBox], named after the direction its normal points in
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Display, EnumIter)]
pub enum BoxFace {
    NegX,
    PosX,
    NegY,
    PosY,
    NegZ,
    PosZ,
}

impl BoxFace {
    /// The outward normal of the face
    pub fn normal(self) -> Vector3 {
        match self {
            Self::NegX => Vector3::new(-1., 0., 0.),
            Self::PosX => Vector3::new(1., 0., 0.),
            Self::NegY => Vector3::new(0., -1., 0.),
            Self::PosY => Vector3::new(0., 1., 0.),
            Self::NegZ => Vector3::new(0., 0., -1.),
            Self::PosZ => Vector3::new(0., 0., 1.),
        }
    }
}

impl From<RectFace> for BoxFace {
    fn from(face: RectFace) -> Self {
        match face {
            RectFace::NegX => Self::NegX,
            RectFace::PosX => Self::PosX,
            RectFace::NegY => Self::NegY,
            RectFace::PosY => Self::PosY,
        }
    }
}

/// An **Axis-Aligned Box**
///
/// The box spans between the two corners `min` and `max`
#[derive(Copy, Clone, Debug, PartialEq, CopyGetters)]
#[get_copy = "pub"]
pub struct AxisBox {
    /// The lower corner of the [AxisBox]; the corner with the smallest coordinates
    min: Point3,
    /// The upper corner of the [AxisBox]; the corner with the largest coordinates
    max: Point3,
}

// region Constructors

impl AxisBox {
    /// Creates a new [AxisBox] from two corners, which do *not* have to be sorted by min/max
    pub fn new(a: impl Into<Point3>, b: impl Into<Point3>) -> Self {
        let (a, b) = (a.into(), b.into());
        Self {
            min: Point3::min(a, b),
            max: Point3::max(a, b),
        }
    }

    pub fn new_centred(centre: impl Into<Point3>, size: impl Into<Vector3>) -> Self {
        let (centre, size) = (centre.into(), size.into());
        Self::new(centre - size / 2., centre + size / 2.)
    }

    /// The smallest box containing the whole length of the ray
    pub fn around_ray(ray: &Ray3) -> Self { Self::new(ray.pos(), ray.end()) }
}

impl From<(Point3, Point3)> for AxisBox {
    fn from((a, b): (Point3, Point3)) -> Self { Self::new(a, b) }
}

impl From<[Point3; 2]> for AxisBox {
    fn from([a, b]: [Point3; 2]) -> Self { Self::new(a, b) }
}

// endregion Constructors

// region Helpers

impl AxisBox {
    /// The difference between [min](fn@Self::min) and [max](fn@Self::max); how large the [AxisBox] is
    pub fn size(&self) -> Vector3 { self.max - self.min }

    pub fn centre(&self) -> Point3 { self.min + self.size() / 2. }

    /// The box seen from above: its extent in the `XY` plane
    pub fn footprint(&self) -> AxisRect {
        AxisRect::new(Point2::new(self.min.x, self.min.y), Point2::new(self.max.x, self.max.y))
    }

    pub fn contains(&self, p: Point3) -> bool {
        self.footprint().contains(Point2::new(p.x, p.y)) && self.min.z <= p.z && p.z <= self.max.z
    }

    /// Whether the two boxes share any volume (touching faces count)
    pub fn overlaps(&self, other: &Self) -> bool {
        self.footprint().overlaps(&other.footprint()) && self.min.z <= other.max.z && other.min.z <= self.max.z
    }

    /// The span of distances along the (infinite) ray that are inside the box, and the faces crossed at either end.
    ///
    /// The `XY` span comes from casting the ray's projection against the box's [footprint](Self::footprint),
    /// which is then intersected with the span where the ray is within the box's height.
    pub fn span(&self, ray: &Ray3) -> Option<Interval<Crossing<BoxFace>>> {
        let (pos, dir) = (ray.pos(), ray.dir());
        let footprint = self.footprint();

        let xy = match project_xy(ray) {
            Some(projected) => footprint
                .span(&projected.ray)?
                .map(|c| Crossing::new(projected.unproject_dist(c.dist), BoxFace::from(c.face))),
            // Vertical ray, the sides are never crossed
            None => {
                trace!(target: RAYCAST, ?ray, "vertical ray against box");
                if !footprint.contains(Point2::new(pos.x, pos.y)) {
                    return None;
                }
                Interval::FULL
            }
        };
        let z = slab(pos.z, dir.z, self.min.z, self.max.z, BoxFace::NegZ, BoxFace::PosZ)?;

        Some(xy & z).filter(|span| !span.is_empty())
    }
}

// endregion Helpers

// region Shape Impl

impl Shape3 for AxisBox {
    fn raycast(&self, ray: &Ray3) -> RayHit3 {
        validate::ray(ray);

        // Cheap rejection: the ray doesn't come near the box
        if !self.overlaps(&Self::around_ray(ray)) {
            return RayHit3::miss(ray);
        }

        let hit = RayHit3::from_span(ray, self.span(ray), |face, _| face.normal());
        validate::hit(&hit);
        hit
    }
}

// endregion Shape Impl
