use crate::collision::{
    box_segment_penetration, circle_segment_penetration, raycast, Penetration, TOUCH_EPSILON,
};
use crate::common::SlideConfig;
use crate::math::vec2::Vec2;
use crate::shapes::{AgentShape, LineSegment, Polygon};

use super::{keep_first, CollisionWorld};

/// A static world made of loose wall segments, resolved discretely.
///
/// Circles are tested against each segment by distance, boxes by the
/// separating-axis test. The agent is moved first and then pushed out of the
/// deepest overlap.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentWorld {
    pub segments: Vec<LineSegment>,
}

impl SegmentWorld {
    pub fn new(segments: Vec<LineSegment>) -> Self {
        Self { segments }
    }

    /// A world containing every edge of the given polygons.
    pub fn from_polygons<'a, I>(polygons: I) -> Self
    where
        I: IntoIterator<Item = &'a Polygon>,
    {
        Self {
            segments: polygons.into_iter().flat_map(|p| p.edges()).collect(),
        }
    }

    /// Adds a segment and returns its index.
    pub fn add_segment(&mut self, segment: LineSegment) -> usize {
        let index = self.segments.len();
        self.segments.push(segment);
        index
    }

    /// Deepest overlap of the agent at `position` with any segment.
    pub fn deepest_penetration(
        &self,
        shape: AgentShape,
        position: Vec2,
        config: &SlideConfig,
    ) -> Option<Penetration> {
        self.deepest_penetration_after(shape, position, Vec2::ZERO, config)
    }

    /// Deepest overlap once the agent has moved by `motion` from `position`.
    fn deepest_penetration_after(
        &self,
        shape: AgentShape,
        position: Vec2,
        motion: Vec2,
        config: &SlideConfig,
    ) -> Option<Penetration> {
        let position = position + motion;
        let mut deepest = None;
        for segment in &self.segments {
            let hit = match shape {
                AgentShape::Circle => {
                    circle_segment_penetration(position, segment, config.radius, motion)
                }
                AgentShape::Box => box_segment_penetration(
                    position,
                    config.radius,
                    segment,
                    config.segment_thickness,
                ),
            };
            // Touching is not penetrating.
            if let Some(hit) = hit.filter(|h| h.depth > TOUCH_EPSILON) {
                deepest = keep_first(deepest, hit);
            }
        }
        deepest
    }

    /// Fraction of the way from `from` to `to` where the first segment is hit.
    pub fn raycast(&self, from: Vec2, to: Vec2) -> f64 {
        raycast(from, to, &self.segments)
    }
}

impl CollisionWorld for SegmentWorld {
    type Contact = Penetration;

    fn find_contact(
        &self,
        shape: AgentShape,
        position: Vec2,
        motion: Vec2,
        config: &SlideConfig,
    ) -> Option<Penetration> {
        self.deepest_penetration_after(shape, position, motion, config)
    }
}
