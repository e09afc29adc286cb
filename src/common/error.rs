//! Error kinds for geometric precondition violations.
//!
//! The hot paths (narrow phase, resolver, raycaster) never return these; they
//! assert their preconditions in debug builds. Checked constructors and config
//! validation report them so callers can reject bad input up front.

use thiserror::Error;

use crate::math::Vec2;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Both endpoints of a segment coincide, so it has no direction.
    #[error("degenerate segment: endpoints ({:.3}, {:.3}) and ({:.3}, {:.3}) coincide", .a.x, .a.y, .b.x, .b.y)]
    DegenerateSegment { a: Vec2, b: Vec2 },

    /// A ray whose start and end are the same point.
    #[error("zero-length ray at ({:.3}, {:.3})", .at.x, .at.y)]
    ZeroLengthRay { at: Vec2 },

    /// A polygon needs at least three distinct vertices to enclose anything.
    #[error("polygon must have at least 3 distinct vertices, got {count}")]
    TooFewVertices { count: usize },

    /// A geometry coordinate is NaN or infinite.
    #[error("non-finite coordinate: ({}, {})", .0.x, .0.y)]
    NonFinite(Vec2),

    /// A configuration value is out of its valid range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience alias for `Result<T, GeometryError>`.
pub type GeometryResult<T> = Result<T, GeometryError>;
