use std::fmt::Debug;

use crate::common::SlideConfig;
use crate::math::vec2::Vec2;

/// Behaviour the slide-move resolver needs from a collision result.
///
/// Each world kind reports exactly one implementation, so discrete and
/// continuous results never meet in the same resolve call.
pub trait Contact: Copy + Debug {
    /// Unit collision normal, pointing from the obstacle towards the agent.
    fn normal(&self) -> Vec2;

    /// True when `self` should be resolved before `other`.
    fn precedes(&self, other: &Self) -> bool;

    /// Moves `position` to rest against the obstacle, given the motion that
    /// produced the contact, and returns the motion still left to apply.
    fn settle(&self, position: &mut Vec2, motion: Vec2, config: &SlideConfig) -> Vec2;
}

/// Discrete result: the agent at its advanced position overlaps an obstacle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Penetration {
    /// Overlap distance along `normal`.
    pub depth: f64,
    /// Points from the obstacle towards the agent.
    pub normal: Vec2,
}

impl Contact for Penetration {
    fn normal(&self) -> Vec2 {
        self.normal
    }

    /// Deepest penetration first.
    fn precedes(&self, other: &Self) -> bool {
        self.depth > other.depth
    }

    /// Applies the whole motion, then pushes out by exactly `depth`. Nothing
    /// is left to move; later iterations only push out of other obstacles.
    fn settle(&self, position: &mut Vec2, motion: Vec2, _config: &SlideConfig) -> Vec2 {
        *position += motion + self.normal * self.depth;
        Vec2::ZERO
    }
}

/// Continuous result: where along the motion first contact happens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeOfImpact {
    /// Fraction of the motion in `[0, 1]`; 0 is immediate contact.
    pub time: f64,
    /// Points from the obstacle towards the agent.
    pub normal: Vec2,
}

impl Contact for TimeOfImpact {
    fn normal(&self) -> Vec2 {
        self.normal
    }

    /// Earliest impact first.
    fn precedes(&self, other: &Self) -> bool {
        self.time < other.time
    }

    /// Advances up to the impact, steps off the wall by the repulsion
    /// offset, and keeps only the tangential part of the rest of the motion.
    fn settle(&self, position: &mut Vec2, motion: Vec2, config: &SlideConfig) -> Vec2 {
        *position += motion * self.time + self.normal * config.repulsion;
        (motion * (1.0 - self.time)).remove_component_along(self.normal)
    }
}
