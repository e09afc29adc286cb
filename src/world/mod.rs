pub mod polygon_world;
pub mod segment_world;
pub mod slide;

use crate::collision::Contact;
use crate::common::SlideConfig;
use crate::math::vec2::Vec2;
use crate::shapes::AgentShape;

pub use polygon_world::PolygonWorld;
pub use segment_world::SegmentWorld;
pub use slide::{slide_move, SlideReport};

/// Static geometry an agent can slide against.
///
/// Implementations scan every obstacle with the narrow phase and report the
/// single contact the resolver must handle first.
pub trait CollisionWorld {
    /// Kind of collision result this world produces.
    type Contact: Contact;

    /// Most urgent contact for an agent of `shape` moving by `motion` from
    /// `position`, or `None` if the motion is unobstructed.
    fn find_contact(
        &self,
        shape: AgentShape,
        position: Vec2,
        motion: Vec2,
        config: &SlideConfig,
    ) -> Option<Self::Contact>;
}

/// Keeps whichever of `best` and `candidate` comes first.
pub(crate) fn keep_first<C: Contact>(best: Option<C>, candidate: C) -> Option<C> {
    match best {
        Some(current) if !candidate.precedes(&current) => Some(current),
        _ => Some(candidate),
    }
}
