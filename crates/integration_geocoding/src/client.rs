//! Nominatim geocoding client
//!
//! Converts free-form address strings to coordinates and autocomplete
//! suggestions using the Nominatim `/search` endpoint. The first result is
//! always taken as the best match; results are never re-ranked locally.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use domain::value_objects::Coordinate;
use reqwest::Client;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, instrument};

use crate::config::NominatimConfig;
use crate::error::GeocodingError;
use crate::models::NominatimPlace;

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Resolve a free-form address to the coordinate of the first match
    async fn geocode(&self, address: &str) -> Result<Coordinate, GeocodingError>;

    /// Return up to `limit` display names for a partial address, in provider rank order
    ///
    /// An empty provider answer is an empty list, not an error.
    async fn suggest(&self, input: &str, limit: u8) -> Result<Vec<String>, GeocodingError>;
}

/// Nominatim-based geocoding client
#[derive(Debug)]
pub struct NominatimGeocodingClient {
    client: Client,
    config: NominatimConfig,
    last_request: Arc<Mutex<Instant>>,
}

impl NominatimGeocodingClient {
    /// Create a new Nominatim geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &NominatimConfig) -> Result<Self, GeocodingError> {
        config
            .validate()
            .map_err(GeocodingError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| GeocodingError::ConnectionFailed(e.to_string()))?;

        let now = Instant::now();
        let last_request = now
            .checked_sub(Duration::from_millis(config.min_request_interval_ms))
            .unwrap_or(now);

        Ok(Self {
            client,
            config: config.clone(),
            last_request: Arc::new(Mutex::new(last_request)),
        })
    }

    /// Space requests out when a minimum interval is configured
    async fn rate_limit(&self) {
        if self.config.min_request_interval_ms == 0 {
            return;
        }

        let interval = Duration::from_millis(self.config.min_request_interval_ms);
        let mut last = self.last_request.lock().await;
        let elapsed = last.elapsed();
        if elapsed < interval {
            let wait = interval.saturating_sub(elapsed);
            debug!(?wait, "Rate limiting geocoding request");
            tokio::time::sleep(wait).await;
        }
        *last = Instant::now();
    }

    /// Issue one `/search` request and decode the result list
    async fn search(
        &self,
        text: &str,
        extra: &[(&str, String)],
    ) -> Result<Vec<NominatimPlace>, GeocodingError> {
        self.rate_limit().await;

        let url = format!("{}/search", self.config.base_url.trim_end_matches('/'));
        let mut params: Vec<(&str, String)> =
            vec![("q", text.to_string()), ("format", "json".to_string())];
        params.extend(extra.iter().cloned());

        if !self.config.country_filter.is_empty() {
            params.push(("countrycodes", self.config.country_filter.clone()));
        }
        if !self.config.accept_language.is_empty() {
            params.push(("accept-language", self.config.accept_language.clone()));
        }

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| GeocodingError::from_reqwest(&e, self.config.timeout_secs))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeocodingError::RequestFailed(format!("HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| GeocodingError::from_reqwest(&e, self.config.timeout_secs))?;

        Self::parse_search_response(&body)
    }

    fn parse_search_response(body: &str) -> Result<Vec<NominatimPlace>, GeocodingError> {
        serde_json::from_str(body).map_err(|e| GeocodingError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl GeocodingClient for NominatimGeocodingClient {
    #[instrument(skip(self))]
    async fn geocode(&self, address: &str) -> Result<Coordinate, GeocodingError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(GeocodingError::InvalidQuery(
                "Address must not be empty".to_string(),
            ));
        }

        debug!(%address, "Geocoding address");

        let results = self.search(address, &[]).await?;
        let first = results
            .first()
            .ok_or_else(|| GeocodingError::AddressNotFound(address.to_string()))?;

        let coordinate = first.coordinate()?;
        debug!(%address, %coordinate, candidates = results.len(), "Geocoded address");
        Ok(coordinate)
    }

    #[instrument(skip(self))]
    async fn suggest(&self, input: &str, limit: u8) -> Result<Vec<String>, GeocodingError> {
        let input = input.trim();
        if input.is_empty() || limit == 0 {
            return Ok(Vec::new());
        }

        let results = self
            .search(
                input,
                &[
                    ("addressdetails", "1".to_string()),
                    ("limit", limit.to_string()),
                ],
            )
            .await?;

        let suggestions: Vec<String> = results
            .into_iter()
            .filter_map(|place| place.display_name)
            .take(usize::from(limit))
            .collect();

        debug!(%input, count = suggestions.len(), "Address suggestions");
        Ok(suggestions)
    }
}
