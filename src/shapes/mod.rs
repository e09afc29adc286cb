pub mod line_segment;
pub mod polygon;

use serde::{Deserialize, Serialize};

pub use line_segment::LineSegment;
pub use polygon::Polygon;

/// Collision shape of a moving agent.
///
/// The size is not part of the tag: a circle uses `SlideConfig::radius` as
/// its radius and a box uses it as its half-extent on both axes. Boxes stay
/// axis-aligned in world space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AgentShape {
    #[default]
    Circle,
    Box,
}
