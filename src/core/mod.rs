//! Identifiers and the host capability interface.
//!
//! This module contains the engine-agnostic vocabulary of the crate:
//! - Name hashing and state identifiers
//! - The `Animator` trait a host binding implements
//! - Query extensions and named-state accessors built on top of it

mod animator;
mod hash;
mod ident;
mod named;

pub use animator::{Animator, AnimatorExt};
pub use hash::NameHash;
pub use ident::{StateId, BASE_LAYER};
pub use named::DialogueStates;
