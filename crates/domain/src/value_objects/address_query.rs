//! Free-text address query value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A trimmed, non-empty address or partial address typed by a rider
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AddressQuery(String);

impl AddressQuery {
    /// Create a new address query
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyAddressQuery` if the text is empty after trimming.
    pub fn new(text: impl AsRef<str>) -> Result<Self, DomainError> {
        let trimmed = text.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyAddressQuery);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the query text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AddressQuery {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AddressQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for AddressQuery {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AddressQuery> for String {
    fn from(query: AddressQuery) -> Self {
        query.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_is_trimmed() {
        let query = AddressQuery::new("  Eiffel Tower \n").unwrap();
        assert_eq!(query.as_str(), "Eiffel Tower");
    }

    #[test]
    fn empty_query_rejected() {
        assert_eq!(AddressQuery::new(""), Err(DomainError::EmptyAddressQuery));
        assert_eq!(AddressQuery::new("   "), Err(DomainError::EmptyAddressQuery));
    }

    #[test]
    fn unicode_query_kept_intact() {
        let query = AddressQuery::new("Straße des 17. Juni").unwrap();
        assert_eq!(query.to_string(), "Straße des 17. Juni");
    }

    #[test]
    fn deserialize_rejects_blank() {
        let result: Result<AddressQuery, _> = serde_json::from_str(r#""  ""#);
        assert!(result.is_err());
    }
}
