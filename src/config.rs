//! Guard configuration.
//!
//! Defaults for requests built without an explicit duration or layer, and the
//! history bound of guards built from the configuration. Loaded
//! from JSON so a game can tune transition timing without a rebuild.

use crate::core::{StateId, BASE_LAYER};
use crate::guard::{TransitionGuard, TransitionRequest, DEFAULT_DURATION, DEFAULT_HISTORY_LIMIT};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("default_duration must be finite and non-negative, got {0}")]
    InvalidDuration(f32),
}

/// Defaults applied to requests created through [`GuardConfig::request`].
///
/// # Example
///
/// ```rust
/// use animguard::config::GuardConfig;
///
/// let config = GuardConfig::from_json(r#"{ "default_duration": 0.25 }"#).unwrap();
/// let request = config.request("Talk");
///
/// assert_eq!(request.duration(), 0.25);
/// assert_eq!(request.layer(), 0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GuardConfig {
    /// Cross-fade duration in seconds
    pub default_duration: f32,
    pub default_layer: usize,
    /// Issued transitions a guard keeps
    pub history_limit: usize,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            default_duration: DEFAULT_DURATION,
            default_layer: BASE_LAYER,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl GuardConfig {
    /// Parse and validate a JSON configuration. Missing fields use defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        tracing::debug!(
            default_duration = config.default_duration,
            default_layer = config.default_layer,
            history_limit = config.history_limit,
            "loaded guard configuration"
        );
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.default_duration.is_finite() || self.default_duration < 0.0 {
            return Err(ConfigError::InvalidDuration(self.default_duration));
        }
        Ok(())
    }

    /// Build a request for `target` using the configured defaults.
    pub fn request(&self, target: impl Into<StateId>) -> TransitionRequest {
        TransitionRequest::new(target)
            .with_duration(self.default_duration)
            .on_layer(self.default_layer)
    }

    /// Build a guard bounded by the configured history limit.
    pub fn guard(&self) -> TransitionGuard {
        TransitionGuard::new().with_history_limit(self.history_limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = GuardConfig::from_json("{}").unwrap();
        assert_eq!(config, GuardConfig::default());
        assert_eq!(config.default_duration, 0.5);
        assert_eq!(config.default_layer, 0);
        assert_eq!(config.history_limit, DEFAULT_HISTORY_LIMIT);
    }

    #[test]
    fn guard_uses_configured_history_limit() {
        let config = GuardConfig::from_json(r#"{ "history_limit": 3 }"#).unwrap();
        assert_eq!(config.guard().history().limit(), Some(3));
    }

    #[test]
    fn fields_override_defaults() {
        let config =
            GuardConfig::from_json(r#"{ "default_duration": 0.1, "default_layer": 2 }"#).unwrap();
        let request = config.request("Listen");

        assert_eq!(request.duration(), 0.1);
        assert_eq!(request.layer(), 2);
    }

    #[test]
    fn negative_duration_is_rejected() {
        let result = GuardConfig::from_json(r#"{ "default_duration": -1.0 }"#);
        assert!(matches!(result, Err(ConfigError::InvalidDuration(_))));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = GuardConfig::from_json(r#"{ "default_speed": 1.0 }"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = GuardConfig {
            default_duration: 0.75,
            default_layer: 1,
            history_limit: 16,
        };
        let json = config.to_json().unwrap();
        assert_eq!(GuardConfig::from_json(&json).unwrap(), config);
    }
}
