//! Slide-move collision resolution for a circle or box agent moving through
//! static 2D geometry, plus raycasting against the same walls.

pub mod collision;
pub mod common;
pub mod math;
pub mod objects;
pub mod shapes;
pub mod world;

// Re-export key types for easier use
pub use collision::{raycast, Penetration, TimeOfImpact};
pub use common::{GeometryError, GeometryResult, SlideConfig};
pub use math::vec2::Vec2;
pub use objects::Agent;
pub use shapes::{AgentShape, LineSegment, Polygon};
pub use world::{slide_move, CollisionWorld, PolygonWorld, SegmentWorld, SlideReport};
