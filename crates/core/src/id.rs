//! Strongly-typed identifiers used across the domain.

use serde::{Deserialize, Serialize};

/// Store-assigned surrogate key of a customer record.
///
/// Handlers never address records by this id (email is the lookup key); it
/// exists so stores have a stable row identity and a creation ordering.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(i64);

impl CustomerId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn get(&self) -> i64 {
        self.0
    }

    /// The id that follows this one in a sequence, or `None` once the
    /// id space is exhausted.
    pub fn next(&self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl core::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
