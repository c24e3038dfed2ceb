//! Validation settings.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default sampling step of [`DiscretizedCollisionValidation`](crate::discretized::DiscretizedCollisionValidation).
pub const DEFAULT_STEP: f64 = 0.01;

/// Settings for discretized path validation.
///
/// Missing fields take their default value.
///
/// # Example
///
/// ```
/// use manip_planning::config::ValidationConfig;
///
/// let config = ValidationConfig::from_json(r#"{ "step": 0.05 }"#).unwrap();
/// assert_eq!(config.step, 0.05);
///
/// let config = ValidationConfig::from_json("{}").unwrap();
/// assert_eq!(config, ValidationConfig::default());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Time between two consecutive samples along a path.
    pub step: f64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self { step: DEFAULT_STEP }
    }
}

impl ValidationConfig {
    /// Creates a configuration with the given sampling step.
    #[must_use]
    pub fn with_step(step: f64) -> Self {
        Self { step }
    }

    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::InvalidStep`] if the step is not usable.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the settings are usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidStep`] if `step` is not a positive
    /// finite number.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.step.is_finite() && self.step > 0.0 {
            Ok(())
        } else {
            Err(ConfigError::InvalidStep(self.step))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_step() {
        assert_eq!(ValidationConfig::default().step, DEFAULT_STEP);
        assert!(ValidationConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_unusable_steps() {
        for step in [0.0, -0.1, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                ValidationConfig::with_step(step).validate(),
                Err(ConfigError::InvalidStep(_))
            ));
        }
    }

    #[test]
    fn json_errors() {
        assert!(matches!(
            ValidationConfig::from_json("{ \"step\": \"fast\" }"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            ValidationConfig::from_json("{ \"step\": -1.0 }"),
            Err(ConfigError::InvalidStep(_))
        ));
    }

    #[test]
    fn serializes_to_json() {
        let json = serde_json::to_string(&ValidationConfig::with_step(0.5)).unwrap();
        assert_eq!(json, r#"{"step":0.5}"#);
    }
}
