//! Capability interface to a host-owned animation state machine.
//!
//! The engine owns states, transitions and parameter storage. This crate only
//! asks the questions in [`Animator`] and, at most, issues one cross-fade per
//! guarded request.

use super::hash::NameHash;
use super::ident::StateId;
use crate::guard::{TransitionGuard, TransitionRequest};

/// Host binding for an animation state machine.
///
/// Implement this for the engine's animator handle. Every method is a direct
/// query or command against the host; none of them should block.
///
/// Layers that do not exist report no states and no current state.
pub trait Animator {
    /// Display name used in diagnostics.
    fn name(&self) -> &str {
        "animator"
    }

    /// Whether a parameter with this name hash is declared.
    fn contains_parameter(&self, hash: NameHash) -> bool;

    /// Whether `layer` has a state with this name hash.
    fn contains_state(&self, layer: usize, hash: NameHash) -> bool;

    /// Name of the state currently playing on `layer`.
    fn current_state_name(&self, layer: usize) -> Option<&str>;

    /// Start a fixed-time cross-fade to `target` over `duration` seconds.
    fn cross_fade(&mut self, target: &StateId, duration: f32, layer: usize);
}

impl<A: Animator + ?Sized> Animator for &mut A {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn contains_parameter(&self, hash: NameHash) -> bool {
        (**self).contains_parameter(hash)
    }

    fn contains_state(&self, layer: usize, hash: NameHash) -> bool {
        (**self).contains_state(layer, hash)
    }

    fn current_state_name(&self, layer: usize) -> Option<&str> {
        (**self).current_state_name(layer)
    }

    fn cross_fade(&mut self, target: &StateId, duration: f32, layer: usize) {
        (**self).cross_fade(target, duration, layer)
    }
}

/// Convenience queries available on every [`Animator`].
///
/// Each lookup accepts either a name or a precomputed [`NameHash`]; names are
/// hashed before they reach the host.
///
/// # Example
///
/// ```rust
/// use animguard::core::{AnimatorExt, NameHash};
/// use animguard::graph::{ControllerGraph, GraphAnimator, LayerDefinition};
///
/// let graph = ControllerGraph::new("npc")
///     .with_layer(LayerDefinition::new("Base").with_states(["Idle", "Talk"]));
/// let mut animator = GraphAnimator::new(graph).unwrap();
///
/// assert!(animator.has_state("Talk", 0));
/// assert!(animator.has_state(NameHash::of("Talk"), 0));
/// assert!(animator.is_in_state("Idle", 0));
///
/// assert!(animator.cross_fade_to("Talk", 0.25, 0));
/// assert!(animator.is_in_state("Talk", 0));
/// ```
pub trait AnimatorExt: Animator {
    fn has_parameter(&self, id: impl Into<StateId>) -> bool {
        self.contains_parameter(id.into().name_hash())
    }

    fn has_state(&self, id: impl Into<StateId>, layer: usize) -> bool {
        self.contains_state(layer, id.into().name_hash())
    }

    /// Whether `layer` is currently playing the state `id`.
    fn is_in_state(&self, id: impl Into<StateId>, layer: usize) -> bool {
        let id = id.into();
        self.current_state_name(layer)
            .is_some_and(|current| id.matches(current))
    }

    /// Run `request` through a default [`TransitionGuard`].
    ///
    /// Returns `true` only when a cross-fade was issued.
    fn request_transition(&mut self, request: &TransitionRequest) -> bool {
        TransitionGuard::new().request(self, request)
    }

    /// Cross-fade to `id` if it exists on `layer` and is not already playing.
    fn cross_fade_to(&mut self, id: impl Into<StateId>, duration: f32, layer: usize) -> bool {
        let request = TransitionRequest::new(id).with_duration(duration).on_layer(layer);
        self.request_transition(&request)
    }
}

impl<A: Animator + ?Sized> AnimatorExt for A {}
