use serde::{Deserialize, Serialize};

use crate::common::SlideConfig;
use crate::math::vec2::Vec2;
use crate::shapes::AgentShape;
use crate::world::{slide_move, CollisionWorld, SlideReport};

/// A moving agent: the only state that survives between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Agent {
    pub shape: AgentShape,
    pub position: Vec2,
    /// Displacement applied on the next tick.
    pub velocity: Vec2,
}

impl Agent {
    /// Creates an agent at rest.
    pub fn new(shape: AgentShape, position: Vec2) -> Self {
        Self { shape, position, velocity: Vec2::ZERO }
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Moves by the current velocity, sliding along obstacles. The velocity
    /// keeps only what survived the walls it touched.
    pub fn slide<W>(&mut self, world: &W, config: &SlideConfig) -> SlideReport
    where
        W: CollisionWorld + ?Sized,
    {
        let report = slide_move(&mut self.position, self.shape, self.velocity, world, config);
        self.velocity = report.velocity;
        report
    }

    /// Moves by `delta`, sliding along obstacles, without touching the velocity.
    pub fn move_by<W>(&mut self, delta: Vec2, world: &W, config: &SlideConfig) -> SlideReport
    where
        W: CollisionWorld + ?Sized,
    {
        slide_move(&mut self.position, self.shape, delta, world, config)
    }
}
