//! The slide-move resolver.
//!
//! Moves an agent through a static world and, on contact, removes only the
//! part of the motion that drives into the obstacle, so the agent slides
//! along walls instead of stopping dead.
//!
//! A call makes at most `SlideConfig::max_substeps` sub-moves, and each gets
//! a fixed budget of `SlideConfig::max_iterations` contacts. The budget is a
//! cost bound, not a convergence guarantee: when it runs out the agent stays
//! where the last correction left it, possibly still overlapping a wall by a
//! bounded amount, and the report says so.

use log::{debug, trace, warn};

use crate::collision::Contact;
use crate::common::SlideConfig;
use crate::math::vec2::Vec2;
use crate::shapes::AgentShape;

use super::CollisionWorld;

/// Outcome of one [`slide_move`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideReport {
    /// Final position, also written back through the `position` argument.
    pub position: Vec2,
    /// The requested displacement with the normal component of every wall
    /// touched removed. Callers that keep a velocity should carry this over.
    pub velocity: Vec2,
    /// Contacts resolved across all sub-moves.
    pub contacts: usize,
    /// Number of sub-moves the displacement was split into.
    pub substeps: usize,
    /// False if some sub-move exhausted its iteration budget.
    pub resolved: bool,
}

/// Moves an agent of `shape` by `delta` from `position`, sliding along the
/// world's obstacles, and writes the corrected position back.
///
/// The displacement is split into equal sub-moves no longer than
/// `config.max_step()`, up to `config.max_substeps` of them, so a thin wall
/// cannot be stepped over in one go. After a contact, later sub-moves follow
/// the deflected direction.
///
/// A non-finite `delta` is a caller bug: it is asserted in debug builds and
/// leaves the agent where it is otherwise.
pub fn slide_move<W>(
    position: &mut Vec2,
    shape: AgentShape,
    delta: Vec2,
    world: &W,
    config: &SlideConfig,
) -> SlideReport
where
    W: CollisionWorld + ?Sized,
{
    debug_assert!(delta.is_finite(), "slide_move with non-finite delta {:?}", delta);
    if !delta.is_finite() {
        warn!("non-finite slide delta ({}, {}) ignored", delta.x, delta.y);
        return SlideReport {
            position: *position,
            velocity: Vec2::ZERO,
            contacts: 0,
            substeps: 0,
            resolved: true,
        };
    }

    let substeps = substep_count(delta.magnitude(), config.max_step(), config.max_substeps);
    let mut velocity = delta;
    let mut contacts = 0;
    let mut resolved = true;

    for _ in 0..substeps {
        let motion = velocity * (1.0 / substeps as f64);
        let step = resolve_motion(world, shape, position, motion, &mut velocity, config);
        contacts += step.contacts;
        resolved &= step.resolved;
    }

    SlideReport { position: *position, velocity, contacts, substeps, resolved }
}

fn substep_count(length: f64, max_step: f64, max_substeps: usize) -> usize {
    let limit = max_substeps.max(1);
    if !max_step.is_finite() || length <= max_step {
        1
    } else if length / max_step >= limit as f64 {
        limit
    } else {
        (length / max_step).ceil() as usize
    }
}

struct StepOutcome {
    contacts: usize,
    resolved: bool,
}

/// Runs the iteration budget for a single sub-move.
fn resolve_motion<W>(
    world: &W,
    shape: AgentShape,
    position: &mut Vec2,
    mut motion: Vec2,
    velocity: &mut Vec2,
    config: &SlideConfig,
) -> StepOutcome
where
    W: CollisionWorld + ?Sized,
{
    for iteration in 0..config.max_iterations {
        let Some(contact) = world.find_contact(shape, *position, motion, config) else {
            *position += motion;
            return StepOutcome { contacts: iteration, resolved: true };
        };

        trace!("slide contact {}: {:?} at ({}, {})", iteration, contact, position.x, position.y);

        motion = contact.settle(position, motion, config);
        *velocity = velocity.remove_component_along(contact.normal());
    }

    debug!(
        "slide budget of {} iterations exhausted at ({}, {})",
        config.max_iterations, position.x, position.y
    );
    StepOutcome { contacts: config.max_iterations, resolved: false }
}
