//! Geocoding service port
//!
//! Defines the interface for turning address text into coordinates and
//! autocomplete suggestions. Adapters in the infrastructure layer implement
//! this port using an external geocoding provider.

use async_trait::async_trait;
use domain::entities::AddressSuggestions;
use domain::value_objects::{AddressQuery, Coordinate};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for address geocoding
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Coordinate of the provider's first (highest-confidence) match
    ///
    /// Fails with `NotFound` when the provider has no match.
    async fn resolve(&self, query: &AddressQuery) -> Result<Coordinate, ApplicationError>;

    /// Up to five display strings in provider rank order
    ///
    /// Zero matches is an empty list, never an error.
    async fn suggest(&self, query: &AddressQuery) -> Result<AddressSuggestions, ApplicationError>;
}
