use getset::CopyGetters;
use tracing::trace;

use crate::core::targets::SHAPE;
use crate::core::types::{Number, Point3, Vector3};
use crate::shape::dim3::axis_box::AxisBox;
use crate::shape::{Shape3, ShapeError};
use crate::shared::frame::Frame;
use crate::shared::hit::RayHit3;
use crate::shared::ray::Ray3;
use crate::shared::validate;

/// How far the axes of a checked [OrientedBox] may be from unit length and orthogonal
pub const BASIS_TOLERANCE: Number = 1e-6;

/// A box that can be rotated arbitrarily
#[derive(Copy, Clone, Debug, PartialEq, CopyGetters)]
#[get_copy = "pub"]
pub struct OrientedBox {
    /// The centre of the box, and its three axes
    frame: Frame,
    /// Half the box's size along each of its axes
    half_size: Vector3,
    /// The same box, in its own local space
    local: AxisBox,
}

// region Constructors

impl OrientedBox {
    /// Creates a box from its centre, two of its axes and its half-dimensions.
    ///
    /// The third axis is `cross(axis_x, axis_y)`. The axes must be unit length and orthogonal.
    pub fn new(
        centre: impl Into<Point3>,
        axis_x: impl Into<Vector3>,
        axis_y: impl Into<Vector3>,
        half_size: impl Into<Vector3>,
    ) -> Self {
        let (axis_x, axis_y, half_size) = (axis_x.into(), axis_y.into(), half_size.into());
        let axis_z = Vector3::cross(axis_x, axis_y);
        Self {
            frame: Frame::new(centre, axis_x, axis_y, axis_z),
            half_size,
            local: AxisBox::new((-half_size).to_point(), half_size.to_point()),
        }
    }

    pub fn try_new(
        centre: impl Into<Point3>,
        axis_x: impl Into<Vector3>,
        axis_y: impl Into<Vector3>,
        half_size: impl Into<Vector3>,
    ) -> Result<Self, ShapeError> {
        let (axis_x, axis_y, half_size) = (axis_x.into(), axis_y.into(), half_size.into());

        let is_unit = |v: Vector3| (v.length() - 1.).abs() <= BASIS_TOLERANCE;
        if !(is_unit(axis_x) && is_unit(axis_y) && Vector3::dot(axis_x, axis_y).abs() <= BASIS_TOLERANCE) {
            trace!(target: SHAPE, ?axis_x, ?axis_y, "rejected box basis");
            return Err(ShapeError::InvalidBasis);
        }
        let valid_size = |n: Number| n.is_finite() && n >= 0.;
        if !(valid_size(half_size.x) && valid_size(half_size.y) && valid_size(half_size.z)) {
            trace!(target: SHAPE, ?half_size, "rejected box size");
            return Err(ShapeError::InvalidHalfSize(half_size));
        }

        Ok(Self::new(centre, axis_x, axis_y, half_size))
    }

    /// The oriented box with the world axes as its basis, covering the same space as `aabb`
    pub fn from_axis_box(aabb: &AxisBox) -> Self {
        Self::new(
            aabb.centre(),
            Vector3::new(1., 0., 0.),
            Vector3::new(0., 1., 0.),
            aabb.size() / 2.,
        )
    }
}

impl From<AxisBox> for OrientedBox {
    fn from(aabb: AxisBox) -> Self { Self::from_axis_box(&aabb) }
}

// endregion Constructors

// region Helpers

impl OrientedBox {
    pub fn centre(&self) -> Point3 { self.frame.origin() }

    /// The box's axes, `[x, y, z]`
    pub fn axes(&self) -> [Vector3; 3] { [self.frame.x(), self.frame.y(), self.frame.z()] }
}

// endregion Helpers

// region Shape Impl

impl Shape3 for OrientedBox {
    fn raycast(&self, ray: &Ray3) -> RayHit3 {
        validate::ray(ray);

        // Cast in the box's local space, where it is axis-aligned around the origin
        let local_ray = self.frame.incoming_ray(ray);
        let local_hit = self.local.raycast(&local_ray);
        let hit = self.frame.outgoing_hit(ray, &local_hit);

        validate::hit(&hit);
        hit
    }
}

// endregion Shape Impl
