//! Routing adapter - Implements RoutingPort using integration_routing

use application::error::ApplicationError;
use application::ports::RoutingPort;
use async_trait::async_trait;
use domain::entities::RouteEstimate;
use domain::value_objects::Coordinate;
use integration_routing::{
    OpenRouteServiceClient, OpenRouteServiceConfig, RoutingClient, RoutingError,
};
use tracing::{instrument, warn};

/// Adapter for driving route estimates using OpenRouteService
pub struct RoutingAdapter {
    client: OpenRouteServiceClient,
}

impl std::fmt::Debug for RoutingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoutingAdapter")
            .field("client", &"OpenRouteServiceClient")
            .finish()
    }
}

impl RoutingAdapter {
    /// Create with custom configuration
    ///
    /// A missing API key is filled from the `ORS_API_KEY` environment
    /// variable before validation.
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if no API key is available or the
    /// configuration is otherwise invalid.
    pub fn with_config(config: OpenRouteServiceConfig) -> Result<Self, ApplicationError> {
        let config = config.with_env_fallback();
        let client = OpenRouteServiceClient::new(&config).map_err(Self::map_error)?;
        Ok(Self { client })
    }

    /// Map integration routing error to application error
    fn map_error(err: RoutingError) -> ApplicationError {
        match err {
            RoutingError::NoRouteFound { from, to } => ApplicationError::NoRoute { from, to },
            RoutingError::ConfigurationError(reason) => ApplicationError::Configuration(reason),
            RoutingError::Unauthorized(ref reason) => {
                warn!(%reason, "Routing provider rejected the API key");
                ApplicationError::Upstream(err.to_string())
            },
            other @ (RoutingError::ConnectionFailed(_)
            | RoutingError::RequestFailed(_)
            | RoutingError::ParseError(_)
            | RoutingError::RateLimitExceeded { .. }
            | RoutingError::Timeout { .. }) => ApplicationError::Upstream(other.to_string()),
        }
    }
}

#[async_trait]
impl RoutingPort for RoutingAdapter {
    #[instrument(skip(self), fields(from = %origin, to = %destination))]
    async fn estimate(
        &self,
        origin: &Coordinate,
        destination: &Coordinate,
    ) -> Result<RouteEstimate, ApplicationError> {
        self.client
            .route_summary(origin, destination)
            .await
            .map_err(Self::map_error)
    }
}
