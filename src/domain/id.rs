//! Domain identifier types with proper encapsulation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Platform-neutral market identifier - newtype for type safety.
///
/// Canonical IDs are the registry's own vocabulary (`"1x2_ft"`,
/// `"over_under_ft"`, ...). They never appear on any bookmaker wire format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalId(String);

impl CanonicalId {
    /// Create a new `CanonicalId` from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the canonical ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the identifier is empty or whitespace only.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for CanonicalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CanonicalId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for CanonicalId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
