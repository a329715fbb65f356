//! Transition requests and their builder.

use crate::core::{StateId, BASE_LAYER};
use thiserror::Error;

/// Cross-fade duration used when the caller does not pick one, in seconds.
pub const DEFAULT_DURATION: f32 = 0.5;

/// Errors that can occur when building a transition request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    #[error("Transition target not specified. Call .target(state)")]
    MissingTarget,

    #[error("Transition duration must be finite and non-negative, got {duration}")]
    InvalidDuration { duration: f32 },
}

/// A request to cross-fade to `target` on `layer` over `duration` seconds.
///
/// # Example
///
/// ```rust
/// use animguard::guard::TransitionRequest;
///
/// let request = TransitionRequest::new("Talk").with_duration(0.3).on_layer(1);
///
/// assert_eq!(request.target().name(), Some("Talk"));
/// assert_eq!(request.duration(), 0.3);
/// assert_eq!(request.layer(), 1);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionRequest {
    target: StateId,
    duration: f32,
    layer: usize,
}

impl TransitionRequest {
    /// Request a transition with the default duration on the base layer.
    pub fn new(target: impl Into<StateId>) -> Self {
        Self {
            target: target.into(),
            duration: DEFAULT_DURATION,
            layer: BASE_LAYER,
        }
    }

    pub fn builder() -> TransitionRequestBuilder {
        TransitionRequestBuilder::new()
    }

    /// Set the duration in seconds.
    ///
    /// Negative values are clamped to zero; NaN and infinities become zero.
    /// Use [`TransitionRequestBuilder`] to reject such values instead.
    pub fn with_duration(mut self, duration: f32) -> Self {
        self.duration = if duration.is_finite() {
            duration.max(0.0)
        } else {
            0.0
        };
        self
    }

    pub fn on_layer(mut self, layer: usize) -> Self {
        self.layer = layer;
        self
    }

    pub fn target(&self) -> &StateId {
        &self.target
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn layer(&self) -> usize {
        self.layer
    }
}

/// Builder for constructing validated transition requests.
#[derive(Clone, Debug)]
pub struct TransitionRequestBuilder {
    target: Option<StateId>,
    duration: f32,
    layer: usize,
}

impl TransitionRequestBuilder {
    pub fn new() -> Self {
        Self {
            target: None,
            duration: DEFAULT_DURATION,
            layer: BASE_LAYER,
        }
    }

    /// Set the target state (required).
    pub fn target(mut self, target: impl Into<StateId>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn duration(mut self, duration: f32) -> Self {
        self.duration = duration;
        self
    }

    pub fn layer(mut self, layer: usize) -> Self {
        self.layer = layer;
        self
    }

    /// Build the request.
    /// Returns an error if the target is missing or the duration is invalid.
    pub fn build(self) -> Result<TransitionRequest, BuildError> {
        let target = self.target.ok_or(BuildError::MissingTarget)?;

        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(BuildError::InvalidDuration {
                duration: self.duration,
            });
        }

        Ok(TransitionRequest {
            target,
            duration: self.duration,
            layer: self.layer,
        })
    }
}

impl Default for TransitionRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NameHash;

    #[test]
    fn new_uses_defaults() {
        let request = TransitionRequest::new("Idle");
        assert_eq!(request.duration(), DEFAULT_DURATION);
        assert_eq!(request.layer(), BASE_LAYER);
    }

    #[test]
    fn with_duration_clamps_invalid_values() {
        for invalid in [-1.0, f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            let request = TransitionRequest::new("Idle").with_duration(invalid);
            assert_eq!(request.duration(), 0.0, "duration {invalid}");
        }
        assert_eq!(TransitionRequest::new("Idle").with_duration(0.2).duration(), 0.2);
    }

    #[test]
    fn builder_validates_required_fields() {
        let result = TransitionRequest::builder().build();
        assert!(matches!(result, Err(BuildError::MissingTarget)));
    }

    #[test]
    fn builder_rejects_negative_duration() {
        let result = TransitionRequest::builder()
            .target("Talk")
            .duration(-0.1)
            .build();
        assert_eq!(result, Err(BuildError::InvalidDuration { duration: -0.1 }));
    }

    #[test]
    fn builder_rejects_infinite_duration() {
        let result = TransitionRequest::builder()
            .target("Talk")
            .duration(f32::INFINITY)
            .build();
        assert!(matches!(result, Err(BuildError::InvalidDuration { .. })));
    }

    #[test]
    fn fluent_api_builds_request() {
        let request = TransitionRequest::builder()
            .target(NameHash::of("Listen"))
            .duration(0.0)
            .layer(2)
            .build()
            .unwrap();

        assert_eq!(request.target(), &StateId::from("Listen"));
        assert_eq!(request.duration(), 0.0);
        assert_eq!(request.layer(), 2);
    }
}
