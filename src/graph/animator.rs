//! In-memory animator backed by a controller graph.

use super::error::GraphError;
use super::ControllerGraph;
use crate::core::{Animator, NameHash, StateId};
use std::collections::{HashMap, HashSet};

/// A cross-fade command received by a [`GraphAnimator`].
#[derive(Clone, Debug, PartialEq)]
pub struct CrossFade {
    pub target: StateId,
    pub duration: f32,
    pub layer: usize,
}

#[derive(Debug)]
struct LayerState {
    index_by_hash: HashMap<NameHash, usize>,
    current: Option<usize>,
}

/// [`Animator`] over a [`ControllerGraph`], with no blending.
///
/// Each layer starts in its default state (or its first state). A cross-fade
/// to a known state makes it current immediately; every command is logged in
/// [`cross_fades`](Self::cross_fades).
#[derive(Debug)]
pub struct GraphAnimator {
    graph: ControllerGraph,
    layers: Vec<LayerState>,
    parameters: HashSet<NameHash>,
    cross_fades: Vec<CrossFade>,
}

impl GraphAnimator {
    /// Bind a graph. Fails if the graph does not validate.
    pub fn new(graph: ControllerGraph) -> Result<Self, GraphError> {
        graph.check()?;

        let layers = graph
            .layers
            .iter()
            .map(|layer| LayerState {
                index_by_hash: layer
                    .states
                    .iter()
                    .enumerate()
                    .map(|(i, s)| (NameHash::of(&s.name), i))
                    .collect(),
                current: layer.entry_index(),
            })
            .collect();
        let parameters = graph
            .parameters
            .iter()
            .map(|p| NameHash::of(&p.name))
            .collect();

        Ok(Self {
            graph,
            layers,
            parameters,
            cross_fades: Vec::new(),
        })
    }

    pub fn graph(&self) -> &ControllerGraph {
        &self.graph
    }

    /// Every cross-fade command received, oldest first.
    pub fn cross_fades(&self) -> &[CrossFade] {
        &self.cross_fades
    }

    /// Drain the command log.
    pub fn take_cross_fades(&mut self) -> Vec<CrossFade> {
        std::mem::take(&mut self.cross_fades)
    }

    /// Put `layer` in state `id` without issuing a cross-fade.
    ///
    /// Returns `false` if the layer or the state does not exist.
    pub fn set_current_state(&mut self, layer: usize, id: impl Into<StateId>) -> bool {
        let hash = id.into().name_hash();
        let Some(state) = self.layers.get_mut(layer) else {
            return false;
        };
        match state.index_by_hash.get(&hash) {
            Some(&index) => {
                state.current = Some(index);
                true
            }
            None => false,
        }
    }
}

impl Animator for GraphAnimator {
    fn name(&self) -> &str {
        &self.graph.name
    }

    fn contains_parameter(&self, hash: NameHash) -> bool {
        self.parameters.contains(&hash)
    }

    fn contains_state(&self, layer: usize, hash: NameHash) -> bool {
        self.layers
            .get(layer)
            .is_some_and(|l| l.index_by_hash.contains_key(&hash))
    }

    fn current_state_name(&self, layer: usize) -> Option<&str> {
        let index = self.layers.get(layer)?.current?;
        Some(self.graph.layers[layer].states[index].name.as_str())
    }

    fn cross_fade(&mut self, target: &StateId, duration: f32, layer: usize) {
        tracing::trace!(animator = %self.graph.name, %target, duration, layer, "cross-fade");
        self.cross_fades.push(CrossFade {
            target: target.clone(),
            duration,
            layer,
        });
        self.set_current_state(layer, target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AnimatorExt;
    use crate::graph::{LayerDefinition, ParameterKind};

    fn guide() -> GraphAnimator {
        let graph = ControllerGraph::new("guide")
            .with_parameter("IsTalking", ParameterKind::Bool)
            .with_layer(
                LayerDefinition::new("Base")
                    .with_states(["Idle", "Talk"])
                    .with_default_state("Idle"),
            )
            .with_layer(LayerDefinition::new("Face").with_states(["Neutral", "Smile"]));
        GraphAnimator::new(graph).unwrap()
    }

    #[test]
    fn layers_start_in_entry_state() {
        let animator = guide();
        assert_eq!(animator.current_state_name(0), Some("Idle"));
        assert_eq!(animator.current_state_name(1), Some("Neutral"));
        assert_eq!(animator.current_state_name(2), None);
    }

    #[test]
    fn invalid_graph_is_rejected() {
        let result = GraphAnimator::new(ControllerGraph::new("empty"));
        assert!(matches!(result, Err(GraphError::ValidationFailed(_))));
    }

    #[test]
    fn parameters_are_queryable() {
        let animator = guide();
        assert!(animator.has_parameter("IsTalking"));
        assert!(!animator.has_parameter("Speed"));
    }

    #[test]
    fn cross_fade_switches_state_and_is_logged() {
        let mut animator = guide();
        animator.cross_fade(&StateId::from("Smile"), 0.2, 1);

        assert_eq!(animator.current_state_name(1), Some("Smile"));
        assert_eq!(
            animator.cross_fades(),
            [CrossFade {
                target: StateId::from("Smile"),
                duration: 0.2,
                layer: 1,
            }]
        );
    }

    #[test]
    fn cross_fade_to_unknown_state_keeps_current() {
        let mut animator = guide();
        animator.cross_fade(&StateId::from("Sing"), 0.2, 0);

        assert_eq!(animator.current_state_name(0), Some("Idle"));
        assert_eq!(animator.take_cross_fades().len(), 1);
        assert!(animator.cross_fades().is_empty());
    }

    #[test]
    fn set_current_state_checks_layer_and_state() {
        let mut animator = guide();
        assert!(animator.set_current_state(0, "Talk"));
        assert!(animator.is_in_state("Talk", 0));
        assert!(!animator.set_current_state(0, "Smile"));
        assert!(!animator.set_current_state(5, "Talk"));
    }

    #[test]
    fn name_comes_from_graph() {
        assert_eq!(guide().name(), "guide");
    }
}
