//! Tunable parameters of the slide-move resolver.

use serde::{Deserialize, Serialize};

use super::error::{GeometryError, GeometryResult};

/// Parameters shared by the narrow phase and the slide-move resolver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlideConfig {
    /// Collision radius of a circle agent, and half-extent of a box agent on
    /// both axes.
    pub radius: f64,
    /// Contacts handled per sub-move before the resolver gives up.
    pub max_iterations: usize,
    /// Extra thickness added on both sides of a segment's projection so thin
    /// walls cannot be tunnelled through.
    pub segment_thickness: f64,
    /// Distance the agent is pushed off a wall after a time-of-impact
    /// contact, so the next sweep does not start touching it.
    pub repulsion: f64,
    /// Longest sub-move, as a fraction of `radius`.
    pub substep_ratio: f64,
    /// Upper bound on sub-moves per call, so the cost of one move stays
    /// bounded however long the displacement is.
    pub max_substeps: usize,
}

impl SlideConfig {
    pub const DEFAULT_RADIUS: f64 = 0.8;
    pub const DEFAULT_MAX_ITERATIONS: usize = 5;
    pub const DEFAULT_SEGMENT_THICKNESS: f64 = 0.1;
    pub const DEFAULT_REPULSION: f64 = 0.004;
    pub const DEFAULT_SUBSTEP_RATIO: f64 = 0.5;
    pub const DEFAULT_MAX_SUBSTEPS: usize = 4;

    /// Default configuration with a different agent radius.
    pub fn with_radius(radius: f64) -> Self {
        Self {
            radius,
            ..Self::default()
        }
    }

    /// Length of the longest sub-move the resolver will attempt.
    pub fn max_step(&self) -> f64 {
        self.radius * self.substep_ratio
    }

    /// Checks every field against its valid range.
    pub fn validate(&self) -> GeometryResult<()> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(GeometryError::InvalidConfig(format!(
                "radius must be positive and finite, got {}",
                self.radius
            )));
        }
        if self.max_iterations == 0 {
            return Err(GeometryError::InvalidConfig(
                "max_iterations must be at least 1".into(),
            ));
        }
        if !(self.segment_thickness.is_finite() && self.segment_thickness >= 0.0) {
            return Err(GeometryError::InvalidConfig(format!(
                "segment_thickness must be non-negative, got {}",
                self.segment_thickness
            )));
        }
        if !(self.repulsion.is_finite() && self.repulsion >= 0.0) {
            return Err(GeometryError::InvalidConfig(format!(
                "repulsion must be non-negative, got {}",
                self.repulsion
            )));
        }
        // An infinite ratio is allowed and disables sub-stepping.
        if self.substep_ratio.is_nan() || self.substep_ratio <= 0.0 {
            return Err(GeometryError::InvalidConfig(format!(
                "substep_ratio must be positive, got {}",
                self.substep_ratio
            )));
        }
        if self.max_substeps == 0 {
            return Err(GeometryError::InvalidConfig(
                "max_substeps must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for SlideConfig {
    fn default() -> Self {
        Self {
            radius: Self::DEFAULT_RADIUS,
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
            segment_thickness: Self::DEFAULT_SEGMENT_THICKNESS,
            repulsion: Self::DEFAULT_REPULSION,
            substep_ratio: Self::DEFAULT_SUBSTEP_RATIO,
            max_substeps: Self::DEFAULT_MAX_SUBSTEPS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SlideConfig::default();
        assert_eq!(config.radius, 0.8);
        assert_eq!(config.max_iterations, 5);
        assert_eq!(config.segment_thickness, 0.1);
        assert_eq!(config.repulsion, 0.004);
        assert_eq!(config.max_substeps, 4);
        assert!((config.max_step() - 0.4).abs() < 1e-12);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_with_radius() {
        let config = SlideConfig::with_radius(0.95);
        assert_eq!(config.radius, 0.95);
        assert_eq!(config.max_iterations, SlideConfig::DEFAULT_MAX_ITERATIONS);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(SlideConfig::with_radius(0.0).validate().is_err());
        assert!(SlideConfig::with_radius(f64::NAN).validate().is_err());

        let config = SlideConfig { max_iterations: 0, ..SlideConfig::default() };
        assert!(matches!(config.validate(), Err(GeometryError::InvalidConfig(_))));

        let config = SlideConfig { repulsion: -1.0, ..SlideConfig::default() };
        assert!(config.validate().is_err());

        let config = SlideConfig { substep_ratio: 0.0, ..SlideConfig::default() };
        assert!(config.validate().is_err());

        let config = SlideConfig { substep_ratio: f64::INFINITY, ..SlideConfig::default() };
        assert!(config.validate().is_ok());

        let config = SlideConfig { max_substeps: 0, ..SlideConfig::default() };
        assert!(matches!(config.validate(), Err(GeometryError::InvalidConfig(_))));
    }

    #[test]
    fn test_partial_config_deserializes_with_defaults() {
        let config: SlideConfig = serde_json::from_str(r#"{ "radius": 0.95 }"#).unwrap();
        assert_eq!(config.radius, 0.95);
        assert_eq!(config.max_iterations, 5);
        assert_eq!(config.repulsion, 0.004);
        assert_eq!(config.max_substeps, SlideConfig::DEFAULT_MAX_SUBSTEPS);

        let json = serde_json::to_string(&config).unwrap();
        let back: SlideConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
