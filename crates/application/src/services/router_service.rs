//! Router service

use std::{fmt, sync::Arc};

use domain::entities::RouteEstimate;
use domain::value_objects::Coordinate;
use tracing::{debug, instrument};

use crate::{error::ApplicationError, ports::RoutingPort};

/// Route estimation use case
#[derive(Clone)]
pub struct RouterService {
    routing_port: Arc<dyn RoutingPort>,
}

impl fmt::Debug for RouterService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouterService").finish_non_exhaustive()
    }
}

impl RouterService {
    /// Create a new router service
    pub fn new(routing_port: Arc<dyn RoutingPort>) -> Self {
        Self { routing_port }
    }

    /// Driving distance and duration between two points
    ///
    /// Both endpoints are required; a missing one is rejected before any
    /// provider call.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if origin or destination is absent
    /// - `NoRoute` if the provider finds no path
    /// - `Upstream` for transport, status or payload failures
    #[instrument(skip(self))]
    pub async fn estimate_route(
        &self,
        origin: Option<Coordinate>,
        destination: Option<Coordinate>,
    ) -> Result<RouteEstimate, ApplicationError> {
        let origin = origin
            .ok_or_else(|| ApplicationError::InvalidArgument("origin is required".to_string()))?;
        let destination = destination.ok_or_else(|| {
            ApplicationError::InvalidArgument("destination is required".to_string())
        })?;

        let estimate = self.routing_port.estimate(&origin, &destination).await?;
        debug!(
            distance_m = estimate.distance_meters(),
            duration_s = estimate.duration_seconds(),
            "Route estimated"
        );
        Ok(estimate)
    }
}
