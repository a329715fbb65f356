//! Animguard: guarded cross-fades over engine-owned animation state machines
//!
//! The host engine owns the animation graph. Animguard talks to it through the
//! small [`Animator`] capability trait and adds the checks callers keep
//! rewriting by hand: does this parameter or state exist, is the layer already
//! in that state, and cross-fade only when both answers allow it.
//!
//! # Core Concepts
//!
//! - **Identifiers**: states and parameters by name or by precomputed [`NameHash`]
//! - **Animator**: the host binding; [`AnimatorExt`] adds the queries
//! - **Guard**: [`TransitionGuard`] issues at most one cross-fade per request
//! - **Graphs**: offline controller descriptions and an in-memory animator
//!
//! # Example
//!
//! ```rust
//! use animguard::{AnimatorExt, DialogueStates, TransitionGuard, TransitionRequest};
//! use animguard::graph::{ControllerGraph, GraphAnimator, LayerDefinition};
//!
//! let graph = ControllerGraph::new("guide")
//!     .with_layer(LayerDefinition::new("Base").with_states(["Idle", "Talk"]));
//! let mut animator = GraphAnimator::new(graph).unwrap();
//!
//! assert_eq!(animator.talk_state(), "Talk");
//! assert_eq!(animator.listen_state(), "");
//!
//! let mut guard = TransitionGuard::new();
//! let talk = TransitionRequest::new("Talk").with_duration(0.3);
//! assert!(guard.request(&mut animator, &talk));
//! assert!(animator.is_in_state("Talk", 0));
//! ```

pub mod config;
pub mod core;
pub mod graph;
pub mod guard;
pub mod scene;

// Re-export commonly used types
pub use crate::core::{Animator, AnimatorExt, DialogueStates, NameHash, StateId};
pub use guard::{TransitionEvent, TransitionGuard, TransitionRequest};
