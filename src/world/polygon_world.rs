use crate::collision::{box_edge_impact, circle_edge_impact, raycast_edges, TimeOfImpact};
use crate::common::SlideConfig;
use crate::math::vec2::Vec2;
use crate::shapes::{AgentShape, LineSegment, Polygon};

use super::{keep_first, CollisionWorld};

/// A static world made of closed polygons, resolved by time of impact.
///
/// Each polygon contributes all of its edges, including the closing one.
/// Boxes are swept against every edge; circles use the overlap of the
/// advanced position as an immediate impact.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolygonWorld {
    pub polygons: Vec<Polygon>,
}

impl PolygonWorld {
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    /// Adds a polygon and returns its index.
    pub fn add_polygon(&mut self, polygon: Polygon) -> usize {
        let index = self.polygons.len();
        self.polygons.push(polygon);
        index
    }

    /// Every edge of every polygon.
    pub fn edges(&self) -> impl Iterator<Item = LineSegment> + '_ {
        self.polygons.iter().flat_map(|p| p.edges())
    }

    /// Fraction of the way from `from` to `to` where the first edge is hit.
    pub fn raycast(&self, from: Vec2, to: Vec2) -> f64 {
        raycast_edges(from, to, self.edges())
    }
}

impl CollisionWorld for PolygonWorld {
    type Contact = TimeOfImpact;

    fn find_contact(
        &self,
        shape: AgentShape,
        position: Vec2,
        motion: Vec2,
        config: &SlideConfig,
    ) -> Option<TimeOfImpact> {
        let mut earliest = None;
        for edge in self.edges() {
            let hit = match shape {
                AgentShape::Circle => circle_edge_impact(position, motion, &edge, config.radius),
                AgentShape::Box => box_edge_impact(
                    position,
                    motion,
                    config.radius,
                    &edge,
                    config.segment_thickness,
                ),
            };
            if let Some(hit) = hit.filter(|h| h.time < 1.0) {
                earliest = keep_first(earliest, hit);
            }
        }
        earliest
    }
}
