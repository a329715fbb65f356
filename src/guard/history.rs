//! History of issued cross-fades.
//!
//! Tracks the transitions a guard forwarded to its machine. `record` keeps the
//! record-returns-new-value style of the crate's pure types; the guard itself
//! appends in place and can bound how much it keeps.

use crate::core::StateId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single cross-fade command.
///
/// # Example
///
/// ```rust
/// use animguard::core::StateId;
/// use animguard::guard::IssuedTransition;
/// use chrono::Utc;
///
/// let transition = IssuedTransition {
///     from: Some("Idle".to_string()),
///     to: StateId::from("Talk"),
///     layer: 0,
///     duration: 0.3,
///     timestamp: Utc::now(),
/// };
/// assert!(transition.to.matches("Talk"));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IssuedTransition {
    /// State the layer was in when the command was issued, if any
    pub from: Option<String>,
    /// Target of the cross-fade
    pub to: StateId,
    pub layer: usize,
    /// Cross-fade duration in seconds
    pub duration: f32,
    /// When the command was issued
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of issued transitions.
///
/// `record` returns a new history with the transition added; `push` appends in
/// place. With a limit set, the oldest entries are dropped once the history
/// holds more than `limit` transitions.
///
/// # Example
///
/// ```rust
/// use animguard::core::StateId;
/// use animguard::guard::{IssuedTransition, TransitionHistory};
/// use chrono::Utc;
///
/// let history = TransitionHistory::new();
/// let history = history.record(IssuedTransition {
///     from: Some("Idle".to_string()),
///     to: StateId::from("Talk"),
///     layer: 0,
///     duration: 0.5,
///     timestamp: Utc::now(),
/// });
///
/// let path = history.get_path(0);
/// assert_eq!(path.len(), 2); // Idle -> Talk
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransitionHistory {
    transitions: VecDeque<IssuedTransition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    limit: Option<usize>,
}

impl TransitionHistory {
    /// An empty, unbounded history.
    pub fn new() -> Self {
        Self {
            transitions: VecDeque::new(),
            limit: None,
        }
    }

    /// Keep at most `limit` transitions, dropping the oldest first.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self.trim();
        self
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, transition: IssuedTransition) -> Self {
        let mut history = self.clone();
        history.push(transition);
        history
    }

    /// Append a transition in place.
    pub fn push(&mut self, transition: IssuedTransition) {
        self.transitions.push_back(transition);
        self.trim();
    }

    /// Remove every recorded transition, returning them oldest first.
    ///
    /// The limit is kept.
    pub fn take(&mut self) -> Self {
        Self {
            transitions: std::mem::take(&mut self.transitions),
            limit: self.limit,
        }
    }

    pub fn clear(&mut self) {
        self.transitions.clear();
    }

    fn trim(&mut self) {
        if let Some(limit) = self.limit {
            while self.transitions.len() > limit {
                self.transitions.pop_front();
            }
        }
    }

    /// Path of states traversed on `layer`, as display strings.
    ///
    /// Starts with the `from` state of the first transition on that layer
    /// (when known), then the target of each transition.
    pub fn get_path(&self, layer: usize) -> Vec<String> {
        let mut on_layer = self
            .transitions
            .iter()
            .filter(|t| t.layer == layer)
            .peekable();
        let mut path = Vec::new();
        if let Some(from) = on_layer.peek().and_then(|t| t.from.clone()) {
            path.push(from);
        }
        path.extend(on_layer.map(|t| t.to.to_string()));
        path
    }

    /// Time between the first and last recorded transition.
    ///
    /// Returns `None` when nothing has been recorded.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.front(), self.transitions.back()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Recorded transitions, oldest first.
    pub fn transitions(&self) -> impl Iterator<Item = &IssuedTransition> + '_ {
        self.transitions.iter()
    }

    pub fn last(&self) -> Option<&IssuedTransition> {
        self.transitions.back()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
