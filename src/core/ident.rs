//! Identifiers for states and parameters.

use super::hash::NameHash;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Index of the base layer of a state machine.
pub const BASE_LAYER: usize = 0;

/// A state (or parameter) identified by its name or by a precomputed hash.
///
/// Both forms resolve to the same [`NameHash`], and equality is defined on
/// that hash: `StateId::from("Idle") == StateId::from(NameHash::of("Idle"))`.
///
/// # Example
///
/// ```rust
/// use animguard::core::{NameHash, StateId};
///
/// let by_name = StateId::from("Talk");
/// let by_hash = StateId::from(NameHash::of("Talk"));
///
/// assert_eq!(by_name, by_hash);
/// assert_eq!(by_name.name(), Some("Talk"));
/// assert_eq!(by_hash.name(), None);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateId {
    Name(String),
    Hash(NameHash),
}

impl StateId {
    /// Resolve to the name hash used for every lookup.
    pub fn name_hash(&self) -> NameHash {
        match self {
            Self::Name(name) => NameHash::of(name),
            Self::Hash(hash) => *hash,
        }
    }

    /// The human-readable name, when the identifier carries one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Name(name) => Some(name),
            Self::Hash(_) => None,
        }
    }

    /// Check whether `name` identifies the same state.
    pub fn matches(&self, name: &str) -> bool {
        self.name_hash() == NameHash::of(name)
    }
}

impl PartialEq for StateId {
    fn eq(&self, other: &Self) -> bool {
        self.name_hash() == other.name_hash()
    }
}

impl Eq for StateId {}

impl Hash for StateId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name_hash().hash(state);
    }
}

impl From<&str> for StateId {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for StateId {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<&String> for StateId {
    fn from(name: &String) -> Self {
        Self::Name(name.clone())
    }
}

impl From<NameHash> for StateId {
    fn from(hash: NameHash) -> Self {
        Self::Hash(hash)
    }
}

impl From<&StateId> for StateId {
    fn from(id: &StateId) -> Self {
        id.clone()
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Hash(hash) => write!(f, "{hash}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn name_and_hash_forms_are_equal() {
        assert_eq!(StateId::from("Idle"), StateId::from(NameHash::of("Idle")));
        assert_ne!(StateId::from("Idle"), StateId::from("Talk"));
    }

    #[test]
    fn hash_set_treats_both_forms_as_one_key() {
        let mut set = HashSet::new();
        set.insert(StateId::from("Listen"));
        assert!(!set.insert(StateId::from(NameHash::of("Listen"))));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn matches_compares_by_hash() {
        let id = StateId::from(NameHash::of("Talk"));
        assert!(id.matches("Talk"));
        assert!(!id.matches("talk"));
    }

    #[test]
    fn display_prefers_name() {
        assert_eq!(StateId::from("Talk").to_string(), "Talk");
        assert_eq!(StateId::from(NameHash(1)).to_string(), "#00000001");
    }

    #[test]
    fn state_id_serializes_with_variant_tag() {
        let json = serde_json::to_string(&StateId::from("Idle")).unwrap();
        assert_eq!(json, r#"{"name":"Idle"}"#);

        let back: StateId = serde_json::from_str(&json).unwrap();
        assert_eq!(back.name(), Some("Idle"));
    }
}
