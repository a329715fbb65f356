//! Diagnostic events emitted by the transition guard.

use crate::core::StateId;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Why a request did not produce a cross-fade.
///
/// Both outcomes are expected and recoverable.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum Rejection {
    #[error("No state '{state}' on layer {layer} of animator '{animator}'")]
    StateNotFound {
        state: StateId,
        layer: usize,
        animator: String,
    },

    #[error("Layer {layer} is already in state '{state}'")]
    AlreadyInState { state: StateId, layer: usize },
}

/// Outcome of evaluating a request against a machine, before any command.
#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    Issue,
    Reject(Rejection),
}

impl Decision {
    pub fn is_issue(&self) -> bool {
        matches!(self, Self::Issue)
    }
}

/// Notification of what the guard did with a request.
///
/// Events are informational. Observers may ignore them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TransitionEvent {
    StateNotFound {
        state: StateId,
        layer: usize,
        animator: String,
    },
    AlreadyInState {
        state: StateId,
        layer: usize,
    },
    TransitionIssued {
        state: StateId,
        duration: f32,
        layer: usize,
    },
}

impl TransitionEvent {
    pub fn state(&self) -> &StateId {
        match self {
            Self::StateNotFound { state, .. }
            | Self::AlreadyInState { state, .. }
            | Self::TransitionIssued { state, .. } => state,
        }
    }

    pub fn layer(&self) -> usize {
        match self {
            Self::StateNotFound { layer, .. }
            | Self::AlreadyInState { layer, .. }
            | Self::TransitionIssued { layer, .. } => *layer,
        }
    }
}

impl From<Rejection> for TransitionEvent {
    fn from(rejection: Rejection) -> Self {
        match rejection {
            Rejection::StateNotFound {
                state,
                layer,
                animator,
            } => Self::StateNotFound {
                state,
                layer,
                animator,
            },
            Rejection::AlreadyInState { state, layer } => Self::AlreadyInState { state, layer },
        }
    }
}

impl fmt::Display for TransitionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StateNotFound { state, .. } => write!(f, "StateNotFound: {state}"),
            Self::AlreadyInState { state, .. } => write!(f, "AlreadyInState: {state}"),
            Self::TransitionIssued { state, .. } => write!(f, "TransitionIssued: {state}"),
        }
    }
}

/// Callback invoked for every event a guard emits.
pub type Observer = Box<dyn Fn(&TransitionEvent) + Send + Sync>;
