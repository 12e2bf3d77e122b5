//! Proximity service
//!
//! Answers "which drivers are within N km of this point" against the driver
//! index. The radius is validated and converted to an angular radius on the
//! mean Earth sphere before the index is queried.

use std::{fmt, sync::Arc};

use domain::entities::Driver;
use domain::value_objects::{Coordinate, RadiusQuery};
use tracing::{debug, instrument};

use crate::{error::ApplicationError, ports::DriverIndexPort};

/// Nearby-driver lookup
#[derive(Clone)]
pub struct ProximityService {
    index: Arc<dyn DriverIndexPort>,
}

impl fmt::Debug for ProximityService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProximityService").finish_non_exhaustive()
    }
}

impl ProximityService {
    /// Create a new proximity service
    pub fn new(index: Arc<dyn DriverIndexPort>) -> Self {
        Self { index }
    }

    /// Drivers within `radius_km` of `center`, in index order
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if the radius is not a positive finite number
    /// - `Upstream` if the index query fails or times out
    #[instrument(skip(self, center), fields(center = %center))]
    pub async fn find_nearby(
        &self,
        center: Coordinate,
        radius_km: f64,
    ) -> Result<Vec<Driver>, ApplicationError> {
        let query = RadiusQuery::new(center, radius_km)?;
        debug!(angular_radius = query.angular_radius(), "Querying driver index");

        let drivers = self.index.find_within(&query).await?;
        debug!(count = drivers.len(), "Nearby drivers found");
        Ok(drivers)
    }
}
