//! OpenRouteService directions client
//!
//! Requests a driving route between two coordinates and reports the first
//! candidate's aggregate distance and duration. Alternatives, if any, are
//! ignored: the provider's ordering decides.

use std::time::Duration;

use async_trait::async_trait;
use domain::entities::RouteEstimate;
use domain::value_objects::Coordinate;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument, warn};

use crate::config::OpenRouteServiceConfig;
use crate::error::RoutingError;
use crate::models::{DirectionsResponse, ErrorResponse};

/// Trait for routing clients
#[async_trait]
pub trait RoutingClient: Send + Sync {
    /// Distance and duration of the first driving route between two points
    async fn route_summary(
        &self,
        origin: &Coordinate,
        destination: &Coordinate,
    ) -> Result<RouteEstimate, RoutingError>;
}

/// OpenRouteService-based routing client
#[derive(Debug)]
pub struct OpenRouteServiceClient {
    client: Client,
    config: OpenRouteServiceConfig,
    api_key: SecretString,
}

impl OpenRouteServiceClient {
    /// Create a new OpenRouteService client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid (including a missing
    /// API key) or the HTTP client cannot be initialized.
    pub fn new(config: &OpenRouteServiceConfig) -> Result<Self, RoutingError> {
        config.validate().map_err(RoutingError::ConfigurationError)?;

        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| RoutingError::ConfigurationError("api_key missing".to_string()))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("QuickWheels/1.0")
            .build()
            .map_err(|e| RoutingError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
            api_key,
        })
    }

    fn directions_url(&self) -> String {
        format!(
            "{}/v2/directions/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.profile
        )
    }

    /// Extract the first route's summary from a successful response body
    fn parse_directions_response(
        body: &str,
        origin: &Coordinate,
        destination: &Coordinate,
    ) -> Result<RouteEstimate, RoutingError> {
        let response: DirectionsResponse =
            serde_json::from_str(body).map_err(|e| RoutingError::ParseError(e.to_string()))?;

        let Some(first) = response.features.first() else {
            return Err(RoutingError::NoRouteFound {
                from: origin.to_string(),
                to: destination.to_string(),
            });
        };

        if response.features.len() > 1 {
            debug!(
                candidates = response.features.len(),
                "Multiple routes returned, using the first"
            );
        }

        let summary = first.properties.summary;
        RouteEstimate::new(summary.distance, summary.duration)
            .map_err(|e| RoutingError::ParseError(e.to_string()))
    }

    /// Map a non-2xx response to an error, inspecting the provider's error body
    fn classify_failure(
        status: StatusCode,
        retry_after_secs: Option<u64>,
        body: &str,
        origin: &Coordinate,
        destination: &Coordinate,
    ) -> RoutingError {
        if status == StatusCode::TOO_MANY_REQUESTS {
            return RoutingError::RateLimitExceeded { retry_after_secs };
        }

        let provider_error = serde_json::from_str::<ErrorResponse>(body).ok();

        if let Some(ref err) = provider_error {
            if err.error.is_no_route() {
                return RoutingError::NoRouteFound {
                    from: origin.to_string(),
                    to: destination.to_string(),
                };
            }
        }

        let detail = provider_error
            .map(|e| e.error.describe())
            .unwrap_or_default();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return RoutingError::Unauthorized(format!("HTTP {status} {detail}").trim().to_string());
        }

        RoutingError::RequestFailed(format!("HTTP {status} {detail}").trim().to_string())
    }
}

#[async_trait]
impl RoutingClient for OpenRouteServiceClient {
    #[instrument(skip(self), fields(from = %origin, to = %destination))]
    async fn route_summary(
        &self,
        origin: &Coordinate,
        destination: &Coordinate,
    ) -> Result<RouteEstimate, RoutingError> {
        let url = self.directions_url();
        let params = [
            ("api_key", self.api_key.expose_secret().to_string()),
            ("start", origin.to_lon_lat_string()),
            ("end", destination.to_lon_lat_string()),
        ];

        debug!(%url, "Requesting driving route");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| RoutingError::from_reqwest(&e, self.config.timeout_secs))?;

        let status = response.status();
        let retry_after_secs = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok());

        let body = response
            .text()
            .await
            .map_err(|e| RoutingError::from_reqwest(&e, self.config.timeout_secs))?;

        if !status.is_success() {
            let err = Self::classify_failure(status, retry_after_secs, &body, origin, destination);
            warn!(%status, error = %err, "Routing request failed");
            return Err(err);
        }

        let estimate = Self::parse_directions_response(&body, origin, destination)?;
        debug!(
            distance_m = estimate.distance_meters(),
            duration_s = estimate.duration_seconds(),
            "Route estimated"
        );
        Ok(estimate)
    }
}
