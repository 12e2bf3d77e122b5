//! Geocoder service
//!
//! Resolves free-text addresses to coordinates and offers autocomplete
//! suggestions. Input is validated here; provider selection and ranking
//! belong to the geocoding port.

use std::{fmt, sync::Arc};

use domain::entities::AddressSuggestions;
use domain::value_objects::{AddressQuery, Coordinate};
use tracing::{debug, instrument};

use crate::{error::ApplicationError, ports::GeocodingPort};

/// Geocoding use cases
#[derive(Clone)]
pub struct GeocoderService {
    geocoding_port: Arc<dyn GeocodingPort>,
}

impl fmt::Debug for GeocoderService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeocoderService").finish_non_exhaustive()
    }
}

impl GeocoderService {
    /// Create a new geocoder service
    pub fn new(geocoding_port: Arc<dyn GeocodingPort>) -> Self {
        Self { geocoding_port }
    }

    /// Resolve an address to the coordinate of the provider's best match
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` for blank input
    /// - `NotFound` when the provider has no match
    /// - `Upstream` for transport, status or payload failures
    #[instrument(skip(self))]
    pub async fn resolve_address(&self, address: &str) -> Result<Coordinate, ApplicationError> {
        let query = AddressQuery::new(address)?;
        let coordinate = self.geocoding_port.resolve(&query).await?;
        debug!(%query, %coordinate, "Address resolved");
        Ok(coordinate)
    }

    /// Autocomplete suggestions for a partial address
    ///
    /// Blank input yields no suggestions and no provider call.
    ///
    /// # Errors
    ///
    /// Returns `Upstream` for transport, status or payload failures.
    #[instrument(skip(self))]
    pub async fn suggest_addresses(
        &self,
        partial: &str,
    ) -> Result<AddressSuggestions, ApplicationError> {
        let Ok(query) = AddressQuery::new(partial) else {
            return Ok(AddressSuggestions::empty());
        };

        let suggestions = self.geocoding_port.suggest(&query).await?;
        debug!(%query, count = suggestions.len(), "Suggestions received");
        Ok(suggestions)
    }
}
