//! Segment raycasting by separating axes.
//!
//! A ray is treated as a moving point swept from `from` to `to`. For each
//! obstacle segment, four axes are tested: the ray direction, its
//! perpendicular, the segment direction and its perpendicular. If any axis
//! separates the ray from the segment, the segment is missed. Otherwise the
//! latest entry fraction over the axes is where the ray first reaches it.

use log::warn;

use crate::common::{GeometryError, GeometryResult};
use crate::math::vec2::Vec2;
use crate::shapes::LineSegment;

/// Below this, a projected ray length is treated as zero.
const AXIS_EPSILON: f64 = 1e-12;

/// A non-degenerate ray from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub from: Vec2,
    pub to: Vec2,
}

impl Ray {
    pub fn new(from: Vec2, to: Vec2) -> GeometryResult<Self> {
        if (to - from).try_normalize().is_none() {
            return Err(GeometryError::ZeroLengthRay { at: from });
        }
        Ok(Self { from, to })
    }

    /// Point at `fraction` along the ray.
    pub fn point_at(&self, fraction: f64) -> Vec2 {
        hit_point(self.from, self.to, fraction)
    }

    pub fn cast(&self, segments: &[LineSegment]) -> f64 {
        raycast(self.from, self.to, segments)
    }
}

/// `from + (to - from) * fraction`.
pub fn hit_point(from: Vec2, to: Vec2, fraction: f64) -> Vec2 {
    from + (to - from) * fraction
}

/// Fraction in `[0, 1]` of the way from `from` to `to` where the ray first
/// meets `segment`, or 1.0 if it does not.
pub fn raycast_segment(segment: &LineSegment, from: Vec2, to: Vec2) -> f64 {
    let axes = [
        to - from,
        (to - from).perpendicular(),
        segment.direction(),
        segment.direction().perpendicular(),
    ];

    let mut max_entry: f64 = 0.0;

    for axis in axes {
        let mut s_from = axis.dot(from);
        let mut s_to = axis.dot(to);
        let mut s_a = axis.dot(segment.a);
        let mut s_b = axis.dot(segment.b);

        // Keep `s_from <= s_to` so the segment's near end is `min(s_a, s_b)`.
        if s_from > s_to {
            s_from = -s_from;
            s_to = -s_to;
            s_a = -s_a;
            s_b = -s_b;
        }

        //    sB     sA    sFrom      sTo
        // ---[======]-----[==========]----
        if s_from > s_a && s_from > s_b {
            return 1.0;
        }

        //   sFrom      sTo    sB     sA
        // --[==========]------[======]--------
        if s_to < s_a && s_to < s_b {
            return 1.0;
        }

        // The ray does not travel along this axis (always true for its own
        // perpendicular), so the axis can only separate, not delay entry.
        let span = s_to - s_from;
        if span <= AXIS_EPSILON {
            continue;
        }

        let entry = ((s_a.min(s_b) - s_from) / span).clamp(0.0, 1.0);
        max_entry = max_entry.max(entry);
    }

    max_entry
}

/// Casts a ray against every segment the iterator yields and returns the
/// smallest blocking fraction, or 1.0 when nothing is in the way.
pub fn raycast_edges<I>(from: Vec2, to: Vec2, segments: I) -> f64
where
    I: IntoIterator<Item = LineSegment>,
{
    debug_assert!(from != to, "raycast with zero-length ray at {:?}", from);
    if (to - from).try_normalize().is_none() {
        warn!("zero-length ray at ({}, {}) treated as unobstructed", from.x, from.y);
        return 1.0;
    }

    segments
        .into_iter()
        .map(|segment| raycast_segment(&segment, from, to))
        .fold(1.0, f64::min)
}

/// Casts a ray from `from` to `to` against a segment list.
///
/// Returns 1.0 when unobstructed; otherwise `from + (to - from) * fraction`
/// is the first contact point.
pub fn raycast(from: Vec2, to: Vec2, segments: &[LineSegment]) -> f64 {
    raycast_edges(from, to, segments.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_raycast_hits_vertical_segment() {
        let segments = [LineSegment::new(Vec2::new(5.0, -1.0), Vec2::new(5.0, 1.0))];
        let fraction = raycast(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), &segments);
        assert!((fraction - 0.5).abs() < EPSILON);

        let p = hit_point(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), fraction);
        assert!((p.x - 5.0).abs() < EPSILON);
    }

    #[test]
    fn test_raycast_empty_set_is_unobstructed() {
        assert_eq!(raycast(Vec2::new(1.0, 2.0), Vec2::new(-3.0, 7.0), &[]), 1.0);
    }

    #[test]
    fn test_raycast_misses() {
        let segments = [
            // Beside the ray.
            LineSegment::new(Vec2::new(5.0, 1.0), Vec2::new(5.0, 3.0)),
            // Behind the start.
            LineSegment::new(Vec2::new(-2.0, -1.0), Vec2::new(-2.0, 1.0)),
            // Beyond the end.
            LineSegment::new(Vec2::new(12.0, -1.0), Vec2::new(12.0, 1.0)),
        ];
        assert_eq!(raycast(Vec2::ZERO, Vec2::new(10.0, 0.0), &segments), 1.0);
    }

    #[test]
    fn test_raycast_closest_segment_wins() {
        let segments = [
            LineSegment::new(Vec2::new(8.0, -1.0), Vec2::new(8.0, 1.0)),
            LineSegment::new(Vec2::new(3.0, 1.0), Vec2::new(3.0, -1.0)),
            LineSegment::new(Vec2::new(6.0, -1.0), Vec2::new(6.0, 1.0)),
        ];
        let fraction = raycast(Vec2::ZERO, Vec2::new(10.0, 0.0), &segments);
        assert!((fraction - 0.3).abs() < EPSILON);
    }

    #[test]
    fn test_raycast_reversed_direction() {
        let segments = [LineSegment::new(Vec2::new(2.0, -1.0), Vec2::new(2.0, 1.0))];
        let fraction = raycast(Vec2::new(10.0, 0.0), Vec2::new(0.0, 0.0), &segments);
        assert!((fraction - 0.8).abs() < EPSILON);
    }

    #[test]
    fn test_raycast_diagonal_segment() {
        // Segment y = x - 4 between (3,-1) and (5,1): crossed at (4, 0).
        let segments = [LineSegment::new(Vec2::new(3.0, -1.0), Vec2::new(5.0, 1.0))];
        let fraction = raycast(Vec2::ZERO, Vec2::new(8.0, 0.0), &segments);
        assert!((fraction - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_raycast_starting_on_segment_is_immediate() {
        let segments = [LineSegment::new(Vec2::new(0.0, -1.0), Vec2::new(0.0, 1.0))];
        let fraction = raycast(Vec2::ZERO, Vec2::new(10.0, 0.0), &segments);
        assert!(fraction.abs() < EPSILON);
    }

    #[test]
    fn test_ray_new_rejects_zero_length() {
        let p = Vec2::new(1.0, 1.0);
        assert_eq!(Ray::new(p, p), Err(GeometryError::ZeroLengthRay { at: p }));

        let ray = Ray::new(Vec2::ZERO, Vec2::new(0.0, 4.0)).unwrap();
        let segments = [LineSegment::new(Vec2::new(-1.0, 1.0), Vec2::new(1.0, 1.0))];
        let fraction = ray.cast(&segments);
        assert!((fraction - 0.25).abs() < EPSILON);
        assert!((ray.point_at(fraction).y - 1.0).abs() < EPSILON);
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn test_raycast_zero_length_asserts() {
        let segments = [LineSegment::new(Vec2::new(0.0, -1.0), Vec2::new(0.0, 1.0))];
        raycast(Vec2::ZERO, Vec2::ZERO, &segments);
    }
}
