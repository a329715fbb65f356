//! Serialized controller graphs.
//!
//! A `ControllerGraph` describes an authored animation controller: its
//! parameters and, per layer, its states. Tools read it offline to list the
//! states a controller offers; nothing on the runtime guard path depends on
//! it. `GraphAnimator` binds a graph to the [`Animator`](crate::core::Animator)
//! trait for tests, previews and headless simulation.

mod animator;
pub mod error;
mod validate;

pub use animator::{CrossFade, GraphAnimator};
pub use error::{GraphError, GraphViolation};
pub use validate::GraphValidation;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Kind of a controller parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParameterKind {
    Float,
    Int,
    Bool,
    Trigger,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParameterDefinition {
    pub name: String,
    pub kind: ParameterKind,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateDefinition {
    pub name: String,
    /// Playback speed multiplier
    #[serde(default = "default_speed")]
    pub speed: f32,
}

fn default_speed() -> f32 {
    1.0
}

impl StateDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            speed: default_speed(),
        }
    }
}

/// One layer of a controller and the states authored on it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayerDefinition {
    pub name: String,
    /// State the layer enters on start; the first state when unset
    #[serde(default)]
    pub default_state: Option<String>,
    #[serde(default)]
    pub states: Vec<StateDefinition>,
}

impl LayerDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default_state: None,
            states: Vec::new(),
        }
    }

    pub fn with_state(mut self, state: StateDefinition) -> Self {
        self.states.push(state);
        self
    }

    pub fn with_states<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.states.extend(names.into_iter().map(StateDefinition::new));
        self
    }

    pub fn with_default_state(mut self, name: impl Into<String>) -> Self {
        self.default_state = Some(name.into());
        self
    }

    /// Index of the state the layer starts in.
    pub fn entry_index(&self) -> Option<usize> {
        match &self.default_state {
            Some(name) => self.states.iter().position(|s| &s.name == name),
            None if self.states.is_empty() => None,
            None => Some(0),
        }
    }
}

/// An authored animation controller.
///
/// # Example
///
/// ```rust
/// use animguard::graph::{ControllerGraph, LayerDefinition, ParameterKind};
///
/// let graph = ControllerGraph::new("guide")
///     .with_parameter("IsTalking", ParameterKind::Bool)
///     .with_layer(LayerDefinition::new("Base").with_states(["Idle", "Talk"]))
///     .with_layer(LayerDefinition::new("Face").with_states(["Idle", "Smile"]));
///
/// assert_eq!(graph.states().len(), 4);
/// assert_eq!(graph.state_names(), ["Idle", "Talk", "Smile"]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ControllerGraph {
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<ParameterDefinition>,
    #[serde(default)]
    pub layers: Vec<LayerDefinition>,
}

impl ControllerGraph {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            layers: Vec::new(),
        }
    }

    pub fn with_layer(mut self, layer: LayerDefinition) -> Self {
        self.layers.push(layer);
        self
    }

    pub fn with_parameter(mut self, name: impl Into<String>, kind: ParameterKind) -> Self {
        self.parameters.push(ParameterDefinition {
            name: name.into(),
            kind,
        });
        self
    }

    pub fn layer(&self, index: usize) -> Option<&LayerDefinition> {
        self.layers.get(index)
    }

    /// Every state on every layer, in authored order.
    pub fn states(&self) -> Vec<&StateDefinition> {
        self.layers.iter().flat_map(|l| l.states.iter()).collect()
    }

    /// Distinct state names across all layers, in first-seen order.
    pub fn state_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.states()
            .into_iter()
            .map(|s| s.name.as_str())
            .filter(|name| seen.insert(*name))
            .collect()
    }

    /// Check the graph, reporting every violation at once.
    pub fn validate(&self) -> GraphValidation {
        validate::validate(self)
    }

    /// Like [`validate`](Self::validate), flattened into a `Result`.
    pub fn check(&self) -> Result<(), GraphError> {
        match self.validate() {
            stillwater::validation::Validation::Success(_) => Ok(()),
            stillwater::validation::Validation::Failure(errors) => {
                Err(GraphError::ValidationFailed(errors.iter().cloned().collect()))
            }
        }
    }

    pub fn to_json(&self) -> Result<String, GraphError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| GraphError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, GraphError> {
        serde_json::from_str(json)
            .map_err(|e| GraphError::DeserializationFailed(e.to_string()))
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, GraphError> {
        bincode::serialize(self)
            .map_err(|e| GraphError::SerializationFailed(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, GraphError> {
        bincode::deserialize(bytes)
            .map_err(|e| GraphError::DeserializationFailed(e.to_string()))
    }
}
