//! Driver proximity index port
//!
//! The index is an existing geospatially-indexed store of driver positions.
//! The core never writes driver state through this port; it only asks which
//! drivers fall inside a spherical cap.

use async_trait::async_trait;
use domain::entities::Driver;
use domain::value_objects::RadiusQuery;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for spherical-cap containment queries over driver positions
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DriverIndexPort: Send + Sync {
    /// Every driver whose position lies within the query's spherical cap
    ///
    /// Results come back in index order; no distance sorting, no limit.
    async fn find_within(&self, query: &RadiusQuery) -> Result<Vec<Driver>, ApplicationError>;
}
