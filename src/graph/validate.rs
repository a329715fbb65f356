//! Structural validation of controller graphs.
//!
//! Uses `Validation` so every violation is reported in one pass instead of
//! stopping at the first.

use super::error::GraphViolation;
use super::{ControllerGraph, LayerDefinition};
use crate::core::NameHash;
use std::collections::{HashMap, HashSet};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

pub type GraphValidation = Validation<(), NonEmptyVec<GraphViolation>>;

/// Check a whole graph, accumulating ALL violations.
pub fn validate(graph: &ControllerGraph) -> GraphValidation {
    let mut checks: Vec<GraphValidation> = Vec::new();

    if graph.layers.is_empty() {
        checks.push(Validation::fail(GraphViolation::NoLayers));
    }

    for layer in &graph.layers {
        checks.extend(validate_layer(layer));
    }

    let mut seen = HashSet::new();
    for parameter in &graph.parameters {
        if !seen.insert(parameter.name.as_str()) {
            checks.push(Validation::fail(GraphViolation::DuplicateParameter {
                name: parameter.name.clone(),
            }));
        }
    }

    Validation::all_vec(checks).map(|_| ())
}

fn validate_layer(layer: &LayerDefinition) -> Vec<GraphValidation> {
    let mut checks = Vec::new();
    let mut by_hash: HashMap<NameHash, &str> = HashMap::new();

    for state in &layer.states {
        if state.name.is_empty() {
            checks.push(Validation::fail(GraphViolation::EmptyStateName {
                layer: layer.name.clone(),
            }));
            continue;
        }

        let hash = NameHash::of(&state.name);
        match by_hash.get(&hash) {
            Some(existing) if *existing == state.name => {
                checks.push(Validation::fail(GraphViolation::DuplicateState {
                    layer: layer.name.clone(),
                    state: state.name.clone(),
                }));
            }
            Some(existing) => {
                checks.push(Validation::fail(GraphViolation::HashCollision {
                    layer: layer.name.clone(),
                    first: existing.to_string(),
                    second: state.name.clone(),
                    hash,
                }));
            }
            None => {
                by_hash.insert(hash, &state.name);
            }
        }
    }

    if let Some(default) = &layer.default_state {
        if !layer.states.iter().any(|s| &s.name == default) {
            checks.push(Validation::fail(GraphViolation::MissingDefaultState {
                layer: layer.name.clone(),
                state: default.clone(),
            }));
        }
    }

    checks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{LayerDefinition, ParameterKind, StateDefinition};

    fn violations(graph: &ControllerGraph) -> Vec<GraphViolation> {
        match validate(graph) {
            Validation::Success(_) => Vec::new(),
            Validation::Failure(errors) => errors.iter().cloned().collect(),
        }
    }

    #[test]
    fn well_formed_graph_passes() {
        let graph = ControllerGraph::new("npc")
            .with_parameter("Speed", ParameterKind::Float)
            .with_layer(
                LayerDefinition::new("Base")
                    .with_states(["Idle", "Talk", "Listen"])
                    .with_default_state("Idle"),
            );

        assert!(validate(&graph).is_success());
    }

    #[test]
    fn graph_without_layers_fails() {
        let graph = ControllerGraph::new("empty");
        assert_eq!(violations(&graph), vec![GraphViolation::NoLayers]);
    }

    #[test]
    fn validation_accumulates_all_violations() {
        let mut base = LayerDefinition::new("Base")
            .with_states(["Idle", "Idle"])
            .with_default_state("Talk");
        base.states.push(StateDefinition::new(""));

        let graph = ControllerGraph::new("broken")
            .with_parameter("Speed", ParameterKind::Float)
            .with_parameter("Speed", ParameterKind::Int)
            .with_layer(base);

        let found = violations(&graph);
        assert_eq!(found.len(), 4);
        assert!(found
            .iter()
            .any(|v| matches!(v, GraphViolation::DuplicateState { .. })));
        assert!(found
            .iter()
            .any(|v| matches!(v, GraphViolation::EmptyStateName { .. })));
        assert!(found
            .iter()
            .any(|v| matches!(v, GraphViolation::MissingDefaultState { .. })));
        assert!(found
            .iter()
            .any(|v| matches!(v, GraphViolation::DuplicateParameter { .. })));
    }

    #[test]
    fn same_state_name_on_different_layers_is_allowed() {
        let graph = ControllerGraph::new("npc")
            .with_layer(LayerDefinition::new("Base").with_states(["Idle"]))
            .with_layer(LayerDefinition::new("Face").with_states(["Idle"]));

        assert!(validate(&graph).is_success());
    }
}
