//! Deterministic name hashing.
//!
//! State and parameter names are compared through a 32-bit FNV-1a hash so a
//! caller can precompute identifiers once and skip string comparison on the
//! hot path.

use serde::{Deserialize, Serialize};
use std::fmt;

const OFFSET_BASIS: u32 = 0x811c_9dc5;
const PRIME: u32 = 0x0100_0193;

/// Hash of a state or parameter name.
///
/// The hash is a pure function of the UTF-8 bytes of the name. It is not
/// cryptographic and only exists for fast equality checks.
///
/// # Example
///
/// ```rust
/// use animguard::core::NameHash;
///
/// const IDLE: NameHash = NameHash::of("Idle");
///
/// assert_eq!(IDLE, NameHash::of("Idle"));
/// assert_ne!(IDLE, NameHash::of("idle"));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NameHash(pub u32);

impl NameHash {
    /// Hash a name. Usable in `const` items.
    pub const fn of(name: &str) -> Self {
        let bytes = name.as_bytes();
        let mut h = OFFSET_BASIS;
        let mut i = 0;
        while i < bytes.len() {
            h ^= bytes[i] as u32;
            h = h.wrapping_mul(PRIME);
            i += 1;
        }
        Self(h)
    }

    pub const fn value(self) -> u32 {
        self.0
    }
}

impl From<&str> for NameHash {
    fn from(name: &str) -> Self {
        Self::of(name)
    }
}

impl fmt::Display for NameHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08x}", self.0)
    }
}
