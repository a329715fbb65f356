//! The state-aware transition guard.

use super::event::{Decision, Observer, Rejection, TransitionEvent};
use super::history::{IssuedTransition, TransitionHistory};
use super::request::TransitionRequest;
use crate::core::Animator;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Transitions a guard keeps unless configured otherwise.
pub const DEFAULT_HISTORY_LIMIT: usize = 256;

/// Phase of the guard itself, not of the animation graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GuardPhase {
    /// No call in progress
    #[default]
    Idle,
    /// Evaluating a request
    Deciding,
}

/// Holds a guard in [`GuardPhase::Deciding`] and restores `Idle` when dropped,
/// including when an observer or the machine panics.
struct DecidingScope<'a> {
    guard: &'a mut TransitionGuard,
}

impl<'a> DecidingScope<'a> {
    fn enter(guard: &'a mut TransitionGuard) -> Self {
        guard.phase = GuardPhase::Deciding;
        Self { guard }
    }
}

impl Drop for DecidingScope<'_> {
    fn drop(&mut self) {
        self.guard.phase = GuardPhase::Idle;
    }
}

/// Forwards a cross-fade only when the target exists and is not already
/// playing.
///
/// A guard borrows the machine per call and never changes its configuration.
/// The only write is the single `cross_fade` command of an accepted request.
///
/// Issued transitions are kept in a bounded [`TransitionHistory`]
/// ([`DEFAULT_HISTORY_LIMIT`] entries unless changed with
/// [`with_history_limit`](Self::with_history_limit)).
///
/// # Example
///
/// ```rust
/// use animguard::guard::{TransitionEvent, TransitionGuard, TransitionRequest};
/// use animguard::graph::{ControllerGraph, GraphAnimator, LayerDefinition};
/// use std::sync::{Arc, Mutex};
///
/// let graph = ControllerGraph::new("npc")
///     .with_layer(LayerDefinition::new("Base").with_states(["Idle", "Talk"]));
/// let mut animator = GraphAnimator::new(graph).unwrap();
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&seen);
/// let mut guard = TransitionGuard::new()
///     .on_event(move |event: &TransitionEvent| sink.lock().unwrap().push(event.to_string()));
///
/// assert!(guard.request(&mut animator, &TransitionRequest::new("Talk").with_duration(0.3)));
/// assert!(!guard.request(&mut animator, &TransitionRequest::new("Talk")));
/// assert!(!guard.request(&mut animator, &TransitionRequest::new("Sing")));
///
/// assert_eq!(
///     *seen.lock().unwrap(),
///     ["TransitionIssued: Talk", "AlreadyInState: Talk", "StateNotFound: Sing"]
/// );
/// ```
pub struct TransitionGuard {
    observers: Vec<Observer>,
    history: TransitionHistory,
    phase: GuardPhase,
}

impl Default for TransitionGuard {
    fn default() -> Self {
        Self {
            observers: Vec::new(),
            history: TransitionHistory::new().with_limit(DEFAULT_HISTORY_LIMIT),
            phase: GuardPhase::Idle,
        }
    }
}

impl TransitionGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep at most `limit` issued transitions; older ones are dropped.
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history = std::mem::take(&mut self.history).with_limit(limit);
        self
    }

    /// Register an observer, builder style.
    pub fn on_event<F>(mut self, observer: F) -> Self
    where
        F: Fn(&TransitionEvent) + Send + Sync + 'static,
    {
        self.subscribe(observer);
        self
    }

    /// Register an observer on an existing guard.
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: Fn(&TransitionEvent) + Send + Sync + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// `Deciding` only while [`request`](Self::request) runs, so callers
    /// holding the guard always observe `Idle`.
    pub fn phase(&self) -> GuardPhase {
        self.phase
    }

    /// Transitions this guard has issued, oldest first.
    pub fn history(&self) -> &TransitionHistory {
        &self.history
    }

    /// Drain the recorded history, leaving an empty one with the same limit.
    pub fn take_history(&mut self) -> TransitionHistory {
        self.history.take()
    }

    /// Decide whether `request` should be forwarded to `machine` (pure).
    ///
    /// Checks existence first, then the current state. Nothing is issued or
    /// emitted.
    pub fn evaluate<A: Animator + ?Sized>(machine: &A, request: &TransitionRequest) -> Decision {
        let target = request.target();
        let layer = request.layer();

        if !machine.contains_state(layer, target.name_hash()) {
            return Decision::Reject(Rejection::StateNotFound {
                state: target.clone(),
                layer,
                animator: machine.name().to_string(),
            });
        }

        let already_current = machine
            .current_state_name(layer)
            .is_some_and(|current| target.matches(current));
        if already_current {
            return Decision::Reject(Rejection::AlreadyInState {
                state: target.clone(),
                layer,
            });
        }

        Decision::Issue
    }

    /// Cross-fade `machine` to the request's target if it exists on the
    /// requested layer and is not already the current state.
    ///
    /// Returns `true` only when exactly one `cross_fade` command was issued.
    pub fn request<A: Animator + ?Sized>(
        &mut self,
        machine: &mut A,
        request: &TransitionRequest,
    ) -> bool {
        let mut scope = DecidingScope::enter(self);
        scope.guard.decide_and_issue(machine, request)
    }

    fn decide_and_issue<A: Animator + ?Sized>(
        &mut self,
        machine: &mut A,
        request: &TransitionRequest,
    ) -> bool {
        match Self::evaluate(&*machine, request) {
            Decision::Issue => {
                let from = machine
                    .current_state_name(request.layer())
                    .map(str::to_string);
                machine.cross_fade(request.target(), request.duration(), request.layer());

                self.history.push(IssuedTransition {
                    from,
                    to: request.target().clone(),
                    layer: request.layer(),
                    duration: request.duration(),
                    timestamp: Utc::now(),
                });
                self.emit(TransitionEvent::TransitionIssued {
                    state: request.target().clone(),
                    duration: request.duration(),
                    layer: request.layer(),
                });
                true
            }
            Decision::Reject(rejection) => {
                self.emit(rejection.into());
                false
            }
        }
    }

    fn emit(&self, event: TransitionEvent) {
        match &event {
            TransitionEvent::StateNotFound { animator, layer, .. } => {
                tracing::error!(animator = %animator, layer, "{event}");
            }
            TransitionEvent::AlreadyInState { layer, .. } => {
                tracing::debug!(layer, "{event}");
            }
            TransitionEvent::TransitionIssued {
                duration, layer, ..
            } => {
                tracing::info!(duration, layer, "{event}");
            }
        }

        for observer in &self.observers {
            observer(&event);
        }
    }
}

impl std::fmt::Debug for TransitionGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransitionGuard")
            .field("observers", &self.observers.len())
            .field("history", &self.history.len())
            .field("phase", &self.phase)
            .finish()
    }
}
