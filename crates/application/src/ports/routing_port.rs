//! Routing service port

use async_trait::async_trait;
use domain::entities::RouteEstimate;
use domain::value_objects::Coordinate;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for driving distance/duration estimates
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RoutingPort: Send + Sync {
    /// Summary of the provider's first driving route between two points
    ///
    /// Fails with `NoRoute` when the provider reports no route.
    async fn estimate(
        &self,
        origin: &Coordinate,
        destination: &Coordinate,
    ) -> Result<RouteEstimate, ApplicationError>;
}
