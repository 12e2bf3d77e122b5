//! Geocoding adapter - Implements GeocodingPort using integration_geocoding

use application::error::ApplicationError;
use application::ports::GeocodingPort;
use async_trait::async_trait;
use domain::entities::AddressSuggestions;
use domain::value_objects::{AddressQuery, Coordinate};
use integration_geocoding::{
    GeocodingClient, GeocodingError, NominatimConfig, NominatimGeocodingClient,
};
use tracing::{debug, instrument};

/// Adapter for address geocoding using Nominatim
pub struct GeocodingAdapter {
    client: NominatimGeocodingClient,
}

impl std::fmt::Debug for GeocodingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeocodingAdapter")
            .field("client", &"NominatimGeocodingClient")
            .finish()
    }
}

impl GeocodingAdapter {
    /// Create an adapter against the public Nominatim instance
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new() -> Result<Self, ApplicationError> {
        Self::with_config(&NominatimConfig::default())
    }

    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// fails to initialize.
    pub fn with_config(config: &NominatimConfig) -> Result<Self, ApplicationError> {
        let client = NominatimGeocodingClient::new(config).map_err(Self::map_error)?;
        Ok(Self { client })
    }

    /// Map integration geocoding error to application error
    fn map_error(err: GeocodingError) -> ApplicationError {
        match err {
            GeocodingError::AddressNotFound(address) => ApplicationError::NotFound(address),
            GeocodingError::InvalidQuery(reason) => ApplicationError::InvalidArgument(reason),
            GeocodingError::ConfigurationError(reason) => ApplicationError::Configuration(reason),
            other @ (GeocodingError::ConnectionFailed(_)
            | GeocodingError::RequestFailed(_)
            | GeocodingError::ParseError(_)
            | GeocodingError::Timeout { .. }) => ApplicationError::Upstream(other.to_string()),
        }
    }
}

#[async_trait]
impl GeocodingPort for GeocodingAdapter {
    #[instrument(skip(self), fields(query = %query))]
    async fn resolve(&self, query: &AddressQuery) -> Result<Coordinate, ApplicationError> {
        self.client
            .geocode(query.as_str())
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self), fields(query = %query))]
    async fn suggest(&self, query: &AddressQuery) -> Result<AddressSuggestions, ApplicationError> {
        let limit = u8::try_from(AddressSuggestions::MAX_LEN).unwrap_or(u8::MAX);
        let names = self
            .client
            .suggest(query.as_str(), limit)
            .await
            .map_err(Self::map_error)?;

        debug!(count = names.len(), "Received address suggestions");
        Ok(AddressSuggestions::from_ranked(names))
    }
}
