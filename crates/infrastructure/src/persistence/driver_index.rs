//! SQLite driver index
//!
//! Implements `DriverIndexPort` as a spherical-cap containment query over
//! the `drivers` table. A latitude band derived from the cap's angular
//! radius narrows the scan through the latitude index; the registered
//! `central_angle` function then decides membership exactly.

use std::sync::Arc;
use std::time::Duration;

use application::{error::ApplicationError, ports::DriverIndexPort};
use async_trait::async_trait;
use chrono::Utc;
use domain::entities::Driver;
use domain::value_objects::{Coordinate, DriverId, RadiusQuery};
use rusqlite::{Row, params};
use tokio::task;
use tracing::{debug, instrument, warn};

use super::connection::ConnectionPool;

const FIND_WITHIN_SQL: &str = "
    SELECT id, latitude, longitude FROM drivers
    WHERE latitude BETWEEN ?1 AND ?2
      AND central_angle(?3, ?4, latitude, longitude) <= ?5
    ORDER BY rowid";

/// SQLite-backed driver position index
#[derive(Debug, Clone)]
pub struct SqliteDriverIndex {
    pool: Arc<ConnectionPool>,
    query_timeout: Duration,
}

impl SqliteDriverIndex {
    /// Create a new driver index
    #[must_use]
    pub const fn new(pool: Arc<ConnectionPool>, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }

    /// Insert a driver or move an existing one
    ///
    /// A moved driver keeps its original position in index order.
    #[instrument(skip(self), fields(driver_id = %driver.id))]
    pub async fn upsert(&self, driver: Driver) -> Result<(), ApplicationError> {
        let pool = Arc::clone(&self.pool);

        task::spawn_blocking(move || {
            let conn = pool
                .get()
                .map_err(|e| ApplicationError::Internal(e.to_string()))?;

            conn.execute(
                "INSERT INTO drivers (id, latitude, longitude, updated_at)
                 VALUES (?1, ?2, ?3, ?4)
                 ON CONFLICT(id) DO UPDATE SET
                     latitude = excluded.latitude,
                     longitude = excluded.longitude,
                     updated_at = excluded.updated_at",
                params![
                    driver.id.to_string(),
                    driver.location.latitude(),
                    driver.location.longitude(),
                    Utc::now().to_rfc3339(),
                ],
            )
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;

            debug!("Driver position stored");
            Ok(())
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }

    /// Remove a driver; returns whether it was present
    #[instrument(skip(self), fields(driver_id = %id))]
    pub async fn remove(&self, id: DriverId) -> Result<bool, ApplicationError> {
        let pool = Arc::clone(&self.pool);

        task::spawn_blocking(move || {
            let conn = pool
                .get()
                .map_err(|e| ApplicationError::Internal(e.to_string()))?;

            let removed = conn
                .execute("DELETE FROM drivers WHERE id = ?1", [id.to_string()])
                .map_err(|e| ApplicationError::Internal(e.to_string()))?;

            Ok(removed > 0)
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }

    /// Latitude band (degrees) that fully contains the cap
    fn latitude_band(query: &RadiusQuery) -> (f64, f64) {
        let center = query.center().latitude();
        let spread = query.angular_radius().to_degrees();
        ((center - spread).max(-90.0), (center + spread).min(90.0))
    }
}

fn row_to_driver(row: &Row<'_>) -> rusqlite::Result<Driver> {
    let id: String = row.get(0)?;
    let latitude: f64 = row.get(1)?;
    let longitude: f64 = row.get(2)?;

    let id = DriverId::parse(&id).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })?;
    let location = Coordinate::new(latitude, longitude).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(1, rusqlite::types::Type::Real, Box::new(e))
    })?;

    Ok(Driver::new(id, location))
}

#[async_trait]
impl DriverIndexPort for SqliteDriverIndex {
    #[instrument(skip(self, query), fields(center = %query.center(), radius_km = query.radius_km()))]
    async fn find_within(&self, query: &RadiusQuery) -> Result<Vec<Driver>, ApplicationError> {
        let pool = Arc::clone(&self.pool);
        let (min_lat, max_lat) = Self::latitude_band(query);
        let center = query.center();
        let angular_radius = query.angular_radius();

        let lookup = task::spawn_blocking(move || {
            let conn = pool
                .get()
                .map_err(|e| ApplicationError::Upstream(format!("Driver index unavailable: {e}")))?;

            let mut stmt = conn
                .prepare_cached(FIND_WITHIN_SQL)
                .map_err(|e| ApplicationError::Upstream(e.to_string()))?;

            let drivers = stmt
                .query_map(
                    params![
                        min_lat,
                        max_lat,
                        center.latitude(),
                        center.longitude(),
                        angular_radius
                    ],
                    row_to_driver,
                )
                .map_err(|e| ApplicationError::Upstream(e.to_string()))?
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| ApplicationError::Upstream(e.to_string()))?;

            Ok::<_, ApplicationError>(drivers)
        });

        let drivers = tokio::time::timeout(self.query_timeout, lookup)
            .await
            .map_err(|_| {
                warn!(timeout = ?self.query_timeout, "Driver index query timed out");
                ApplicationError::Upstream(format!(
                    "Driver index query timed out after {:?}",
                    self.query_timeout
                ))
            })?
            .map_err(|e| ApplicationError::Internal(e.to_string()))??;

        debug!(count = drivers.len(), "Drivers within radius");
        Ok(drivers)
    }
}
