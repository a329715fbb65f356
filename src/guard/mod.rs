//! Guarded cross-fades.
//!
//! This module is the imperative shell around the core queries: it decides
//! whether a requested transition is valid and necessary, then forwards at most
//! one cross-fade to the host machine.
//!
//! # Key Concepts
//!
//! - **Requests**: target state, duration and layer of a cross-fade
//! - **Guard**: existence check, then current-state check, then one command
//! - **Events**: `StateNotFound`, `AlreadyInState` and `TransitionIssued`
//!   notifications, also logged through `tracing`
//! - **History**: bounded record of issued cross-fades

mod event;
mod history;
mod request;
mod transition;

pub use event::{Decision, Observer, Rejection, TransitionEvent};
pub use history::{IssuedTransition, TransitionHistory};
pub use request::{BuildError, TransitionRequest, TransitionRequestBuilder, DEFAULT_DURATION};
pub use transition::{GuardPhase, TransitionGuard, DEFAULT_HISTORY_LIMIT};
