use crate::core::types::Number;
use crate::shared::interval::{Crossing, Interval};
use crate::shared::ray::{Dim2, Dim3, Ray, Space};

pub type RayHit2 = RayHit<Dim2>;
pub type RayHit3 = RayHit<Dim3>;

/// The result of casting a [Ray] against a shape.
///
/// Every field is always filled in. When the ray misses, the fields hold sentinel values
/// (see [Self::miss]), so only [Self::did_impact] and [Self::did_exit] should be branched on.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct RayHit<S: Space> {
    /// The ray that was cast
    pub ray: Ray<S>,
    /// Whether the ray touched the shape within its length
    pub did_impact: bool,
    /// Distance along the ray to the impact
    ///
    /// # Invariants
    /// - `0 <= impact_dist <= ray.length()`
    pub impact_dist: Number,
    pub impact_pos: S::Point,
    /// Surface normal at the impact, facing back towards the ray's origin side
    ///
    /// # Invariants
    /// - Must be normalised
    /// - `dot(impact_normal, ray.dir()) <= 0`
    pub impact_normal: S::Vector,
    /// Whether the ray leaves the shape again before it ends
    pub did_exit: bool,
    /// Distance between the impact and the exit (or the end of the ray, if it never exits)
    pub travel_dist_in_shape: Number,
    pub exit_pos: S::Point,
    /// Outward surface normal where the ray leaves the shape
    pub exit_normal: S::Vector,
}

// region Constructors

impl<S: Space> RayHit<S> {
    /// A miss.
    ///
    /// The impact is placed at the end of the ray, facing back along it, at a distance of the ray's length.
    /// The exit is the same as for a hit that never exits (see [Self::entered]).
    pub fn miss(ray: &Ray<S>) -> Self {
        Self {
            did_impact: false,
            ..Self::entered(ray, ray.length(), -ray.dir())
        }
    }

    /// A hit at distance `dist` that never leaves the shape.
    ///
    /// The exit fields point at the end of the ray, with the exit normal along the ray's direction,
    /// and the travel distance is the rest of the ray.
    pub fn entered(ray: &Ray<S>, dist: Number, normal: S::Vector) -> Self {
        Self {
            ray: *ray,
            did_impact: true,
            impact_dist: dist,
            impact_pos: ray.at(dist),
            impact_normal: normal,
            did_exit: false,
            travel_dist_in_shape: ray.length() - dist,
            exit_pos: ray.end(),
            exit_normal: ray.dir(),
        }
    }

    /// Marks the ray as leaving the shape at distance `dist` along the ray
    pub fn with_exit(self, dist: Number, normal: S::Vector) -> Self {
        Self {
            did_exit: true,
            travel_dist_in_shape: dist - self.impact_dist,
            exit_pos: self.ray.at(dist),
            exit_normal: normal,
            ..self
        }
    }

    /// Builds the result from the span of distances along the ray for which the ray is inside a shape.
    ///
    /// The span's bounds are unclipped distances along the (infinite) ray. `normal` gives the outward normal of the
    /// boundary crossed at a given point.
    ///
    /// - [None], an empty span, or a span that ends behind the ray, or starts after its end is a miss
    /// - A span that starts behind the ray (or is unbounded) means the ray starts inside, the impact is at distance
    ///   zero and faces back along the ray
    /// - The exit is only reported if the span ends within the ray's length
    pub fn from_span<F: Copy + PartialOrd>(
        ray: &Ray<S>,
        span: Option<Interval<Crossing<F>>>,
        normal: impl Fn(F, S::Point) -> S::Vector,
    ) -> Self {
        let span = match span {
            Some(span) if !span.is_empty() => span,
            _ => return Self::miss(ray),
        };
        let length = ray.length();

        if let Some(end) = span.end {
            if end.dist < 0. {
                return Self::miss(ray);
            }
        }

        let hit = match span.start {
            Some(start) if start.dist >= 0. => {
                if start.dist > length {
                    return Self::miss(ray);
                }
                Self::entered(ray, start.dist, normal(start.face, ray.at(start.dist)))
            }
            _ => Self::entered(ray, 0., -ray.dir()),
        };

        match span.end {
            Some(end) if end.dist <= length => hit.with_exit(end.dist, normal(end.face, ray.at(end.dist))),
            _ => hit,
        }
    }
}

// endregion Constructors

// region Helpers

impl<S: Space> RayHit<S> {
    /// Distance along the ray to the exit (or the end of the ray, if it never exits)
    pub fn exit_dist(&self) -> Number { self.impact_dist + self.travel_dist_in_shape }

    /// Whether this is an impact that happened before the other one. A miss is never nearer.
    pub fn is_nearer_than(&self, other: &Self) -> bool {
        match (self.did_impact, other.did_impact) {
            (false, _) => false,
            (true, false) => true,
            (true, true) => self.impact_dist < other.impact_dist,
        }
    }

    /// Maps the hit into another frame of reference, re-attaching it to `ray`.
    ///
    /// Distances are kept as-is, so `point` and `vector` must be rigid (distance-preserving) transforms.
    pub fn transformed(
        &self,
        ray: &Ray<S>,
        point: impl Fn(S::Point) -> S::Point,
        vector: impl Fn(S::Vector) -> S::Vector,
    ) -> Self {
        if !self.did_impact {
            return Self::miss(ray);
        }
        Self {
            ray: *ray,
            impact_pos: point(self.impact_pos),
            impact_normal: vector(self.impact_normal),
            exit_pos: point(self.exit_pos),
            exit_normal: vector(self.exit_normal),
            ..*self
        }
    }
}

// endregion Helpers
