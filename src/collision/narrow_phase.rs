use crate::math::vec2::Vec2;
use crate::shapes::LineSegment;

use super::aabb::AABB;
use super::contact::{Penetration, TimeOfImpact};
use super::projection::{closest_point_on_segment, project_segment};

/// Below this, a projected velocity is treated as not moving along the axis.
const MOTION_EPSILON: f64 = 1e-12;

/// Overlaps at most this deep count as touching.
pub const TOUCH_EPSILON: f64 = 1e-9;

/// Checks a circle against a segment at the circle's current position.
///
/// Returns `None` when the centre is farther than `radius` from every point
/// of the segment. A circle exactly touching the segment yields a
/// penetration of depth 0. `approach` is the motion that brought the circle
/// to `center`; it only decides the push-out side when the centre lies on
/// the segment itself.
pub fn circle_segment_penetration(
    center: Vec2,
    segment: &LineSegment,
    radius: f64,
    approach: Vec2,
) -> Option<Penetration> {
    let closest = closest_point_on_segment(center, segment);
    let delta = center - closest;

    if delta.magnitude_squared() > radius * radius {
        return None;
    }

    let distance = delta.magnitude();
    let normal = match delta.try_normalize() {
        Some(n) => n,
        // Centre lies on the segment itself: push back the way it came.
        None => {
            let normal = segment.normal().unwrap_or(Vec2::Y);
            if normal.dot(approach) > 0.0 {
                -normal
            } else {
                normal
            }
        }
    };

    Some(Penetration { depth: radius - distance, normal })
}

/// Candidate separating axes for a box against a segment, in fixed order:
/// X, Y, the segment normal, then the endpoint-to-centre directions for each
/// endpoint the centre lies beyond along the segment.
fn box_segment_axes(center: Vec2, segment: &LineSegment) -> Vec<Vec2> {
    let mut axes = Vec::with_capacity(4);
    axes.push(Vec2::X);
    axes.push(Vec2::Y);

    let Some(normal) = segment.normal() else {
        return axes;
    };
    axes.push(normal);

    let direction = segment.direction();
    if (center - segment.a).dot(direction) < 0.0 {
        if let Some(corner) = (center - segment.a).try_normalize() {
            axes.push(corner);
        }
    }
    if (center - segment.b).dot(direction) > 0.0 {
        if let Some(corner) = (center - segment.b).try_normalize() {
            axes.push(corner);
        }
    }
    axes
}

/// Separating-axis test of an axis-aligned box against a thickened segment.
///
/// Returns the least push-out over all candidate axes, or `None` as soon as
/// one axis separates the two shapes.
pub fn box_segment_penetration(
    center: Vec2,
    half_extent: f64,
    segment: &LineSegment,
    thickness: f64,
) -> Option<Penetration> {
    debug_assert!(!segment.is_degenerate(), "box test against degenerate segment {:?}", segment);
    if segment.is_degenerate() {
        return None;
    }

    let bounds = AABB::around(center, half_extent);
    let mut best: Option<Penetration> = None;

    for axis in box_segment_axes(center, segment) {
        let box_iv = bounds.project_onto(axis);
        let seg_iv = project_segment(segment, axis, thickness);

        if box_iv.is_separated_from(&seg_iv) {
            return None;
        }

        let candidate = if box_iv.midpoint() > seg_iv.midpoint() {
            Penetration { depth: seg_iv.max - box_iv.min, normal: axis }
        } else {
            Penetration { depth: box_iv.max - seg_iv.min, normal: -axis }
        };

        if best.map_or(true, |b| candidate.depth < b.depth) {
            best = Some(candidate);
        }
    }

    best
}

/// Continuous circle test against one polygon edge.
///
/// This does not compute a true sub-step time of impact: it only checks
/// whether the circle overlaps the edge once the whole motion is applied,
/// and reports `time = 0` if so.
pub fn circle_edge_impact(
    position: Vec2,
    motion: Vec2,
    edge: &LineSegment,
    radius: f64,
) -> Option<TimeOfImpact> {
    circle_segment_penetration(position + motion, edge, radius, motion)
        .map(|hit| TimeOfImpact { time: 0.0, normal: hit.normal })
}

/// Swept separating-axis test of a moving box against one thickened edge.
///
/// The box starts at `position` and moves by `motion`. Returns the fraction
/// of the motion at which the box first touches the edge, with the normal of
/// the axis it touches on. A box already overlapping the edge reports
/// `time = 0`, unless it is moving out of it.
///
/// The sweep uses the same axes as [`box_segment_penetration`] at the start
/// position, so a box that starts off an endpoint is stopped by the corner
/// axis rather than slipping past it.
pub fn box_edge_impact(
    position: Vec2,
    motion: Vec2,
    half_extent: f64,
    edge: &LineSegment,
    thickness: f64,
) -> Option<TimeOfImpact> {
    if edge.is_degenerate() {
        return None;
    }

    if let Some(overlap) = box_segment_penetration(position, half_extent, edge, thickness) {
        let approach = motion.dot(overlap.normal);
        // Resting against or sliding along the edge is not an impact.
        if approach < 0.0 || (approach == 0.0 && overlap.depth > TOUCH_EPSILON) {
            return Some(TimeOfImpact { time: 0.0, normal: overlap.normal });
        }
        return None;
    }

    let bounds = AABB::around(position, half_extent);
    let mut t_enter = f64::NEG_INFINITY;
    let mut t_exit = f64::INFINITY;
    let mut hit_normal = Vec2::ZERO;

    for axis in box_segment_axes(position, edge) {
        let box_iv = bounds.project_onto(axis);
        let seg_iv = project_segment(edge, axis, thickness);
        let speed = motion.dot(axis);

        if speed.abs() < MOTION_EPSILON {
            if box_iv.is_separated_from(&seg_iv) {
                return None;
            }
            continue;
        }

        let (enter, exit) = if speed > 0.0 {
            ((seg_iv.min - box_iv.max) / speed, (seg_iv.max - box_iv.min) / speed)
        } else {
            ((seg_iv.max - box_iv.min) / speed, (seg_iv.min - box_iv.max) / speed)
        };

        if enter > t_enter {
            t_enter = enter;
            hit_normal = if speed > 0.0 { -axis } else { axis };
        }
        t_exit = t_exit.min(exit);

        if t_enter > t_exit {
            return None;
        }
    }

    if t_enter < 0.0 {
        // Every moving axis already overlapped at the start. Only an
        // overlap at the end of the motion still counts.
        return box_segment_penetration(position + motion, half_extent, edge, thickness)
            .filter(|hit| hit.depth > TOUCH_EPSILON)
            .map(|hit| TimeOfImpact { time: 0.0, normal: hit.normal });
    }
    if t_enter > 1.0 || t_exit <= 0.0 {
        return None;
    }

    Some(TimeOfImpact { time: t_enter, normal: hit_normal })
}
