use serde::{Deserialize, Serialize};

use crate::common::{GeometryError, GeometryResult};
use crate::math::vec2::Vec2;

/// An oriented piece of static wall, from `a` to `b`.
///
/// Segments are expected to be non-degenerate (`a != b`). The narrow phase
/// asserts this in debug builds; use [`LineSegment::try_new`] to reject bad
/// input when it comes from outside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub a: Vec2,
    pub b: Vec2,
}

impl LineSegment {
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self { a, b }
    }

    /// Creates a segment, rejecting coincident or non-finite endpoints.
    pub fn try_new(a: Vec2, b: Vec2) -> GeometryResult<Self> {
        for p in [a, b] {
            if !p.is_finite() {
                return Err(GeometryError::NonFinite(p));
            }
        }
        let segment = Self { a, b };
        if segment.is_degenerate() {
            return Err(GeometryError::DegenerateSegment { a, b });
        }
        Ok(segment)
    }

    pub fn length(&self) -> f64 {
        self.a.distance(self.b)
    }

    pub fn length_squared(&self) -> f64 {
        self.a.distance_squared(self.b)
    }

    /// Direction vector from `a` to `b` (not normalized).
    pub fn direction(&self) -> Vec2 {
        self.b - self.a
    }

    /// Unit normal, the direction rotated a quarter turn counter-clockwise.
    /// `None` for a degenerate segment.
    pub fn normal(&self) -> Option<Vec2> {
        self.direction().perpendicular().try_normalize()
    }

    pub fn is_degenerate(&self) -> bool {
        self.direction().try_normalize().is_none()
    }
}
