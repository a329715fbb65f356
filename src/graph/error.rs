//! Controller graph error types.

use crate::core::NameHash;
use thiserror::Error;

/// A single problem found while validating a controller graph.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphViolation {
    #[error("Controller has no layers")]
    NoLayers,

    #[error("Layer '{layer}' has a state with an empty name")]
    EmptyStateName { layer: String },

    #[error("Layer '{layer}' defines state '{state}' more than once")]
    DuplicateState { layer: String, state: String },

    #[error("Layer '{layer}': states '{first}' and '{second}' share hash {hash}")]
    HashCollision {
        layer: String,
        first: String,
        second: String,
        hash: NameHash,
    },

    #[error("Layer '{layer}' default state '{state}' is not one of its states")]
    MissingDefaultState { layer: String, state: String },

    #[error("Parameter '{name}' is declared more than once")]
    DuplicateParameter { name: String },
}

/// Errors that can occur when loading or exporting a controller graph.
#[derive(Debug, Error)]
pub enum GraphError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Graph failed validation; carries every violation found
    #[error("Controller graph validation failed: {}", summarize(.0))]
    ValidationFailed(Vec<GraphViolation>),
}

fn summarize(violations: &[GraphViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
