//! Closest-point and axis-projection primitives shared by the narrow phase.

use crate::math::vec2::Vec2;
use crate::shapes::LineSegment;

/// A closed range `[min, max]` on a projection axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Smallest interval containing both values, in either order.
    pub fn spanning(p: f64, q: f64) -> Self {
        Self { min: p.min(q), max: p.max(q) }
    }

    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) * 0.5
    }

    /// Widens the interval by `amount` on both ends.
    pub fn expanded(&self, amount: f64) -> Self {
        Self { min: self.min - amount, max: self.max + amount }
    }

    /// True when the two intervals are disjoint. Touching intervals are not.
    pub fn is_separated_from(&self, other: &Interval) -> bool {
        self.max < other.min || other.max < self.min
    }
}

/// Returns the point of `segment` closest to `pos`.
///
/// The segment must not be degenerate; this is asserted in debug builds.
pub fn closest_point_on_segment(pos: Vec2, segment: &LineSegment) -> Vec2 {
    let (point, _) = closest_point_with_param(pos, segment);
    point
}

/// Returns the closest point and its parameter `t` in `[0, 1]` along the segment.
pub fn closest_point_with_param(pos: Vec2, segment: &LineSegment) -> (Vec2, f64) {
    let segment_vec = segment.direction();
    let length_sq = segment_vec.magnitude_squared();
    debug_assert!(length_sq > 0.0, "closest point on degenerate segment {:?}", segment);
    if length_sq <= 0.0 {
        return (segment.a, 0.0);
    }

    let t = ((pos - segment.a).dot(segment_vec) / length_sq).clamp(0.0, 1.0);
    (segment.a + segment_vec * t, t)
}

/// Interval covered by `segment` on `axis`, widened by `thickness` on both ends.
pub fn project_segment(segment: &LineSegment, axis: Vec2, thickness: f64) -> Interval {
    Interval::spanning(segment.a.dot(axis), segment.b.dot(axis)).expanded(thickness)
}
