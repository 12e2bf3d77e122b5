//! Ranked autocomplete suggestions

use serde::{Deserialize, Serialize};

/// Provider-ranked address display strings, best match first
///
/// Holds at most [`AddressSuggestions::MAX_LEN`] entries. Order is the
/// provider's relevance order and is never changed locally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressSuggestions(Vec<String>);

impl AddressSuggestions {
    /// Maximum number of suggestions returned to a caller
    pub const MAX_LEN: usize = 5;

    /// Build from provider results, keeping the first `MAX_LEN` in order
    #[must_use]
    pub fn from_ranked<I>(ranked: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self(ranked.into_iter().take(Self::MAX_LEN).collect())
    }

    /// An empty suggestion list
    #[must_use]
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    /// Number of suggestions
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no suggestions
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate in rank order
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    /// Suggestions as a slice in rank order
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Consume into the underlying vector
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl<'a> IntoIterator for &'a AddressSuggestions {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for AddressSuggestions {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
