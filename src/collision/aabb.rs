// Axis-aligned box used as the collision shape of a box agent.

use crate::math::vec2::Vec2;

use super::projection::Interval;

/// An Axis-Aligned Bounding Box defined by its minimum and maximum corner points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    pub min: Vec2,
    pub max: Vec2,
}

impl AABB {
    /// Creates a new AABB, reordering coordinates so `min <= max`.
    pub fn new(min: Vec2, max: Vec2) -> Self {
        AABB {
            min: Vec2::new(min.x.min(max.x), min.y.min(max.y)),
            max: Vec2::new(min.x.max(max.x), min.y.max(max.y)),
        }
    }

    /// The box centred on `center` with the same half-extent on both axes.
    pub fn around(center: Vec2, half_extent: f64) -> Self {
        let half = Vec2::new(half_extent.abs(), half_extent.abs());
        AABB { min: center - half, max: center + half }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn half_extents(&self) -> Vec2 {
        (self.max - self.min) * 0.5
    }

    /// Interval covered by the box on `axis`.
    ///
    /// `axis` need not be unit length; the interval is then scaled by its
    /// length, the same as the projection of any other shape on that axis.
    pub fn project_onto(&self, axis: Vec2) -> Interval {
        let center = self.center().dot(axis);
        let half = self.half_extents();
        let reach = (half.x * axis.x).abs() + (half.y * axis.y).abs();
        Interval::new(center - reach, center + reach)
    }
}
