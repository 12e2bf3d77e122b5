//! Integration tests for the driver index using in-memory SQLite databases

#![allow(clippy::expect_used)]

use std::sync::Arc;
use std::time::Duration;

use application::ProximityService;
use application::error::ApplicationError;
use application::ports::DriverIndexPort;
use domain::entities::Driver;
use domain::value_objects::{Coordinate, DriverId, RadiusQuery};
use infrastructure::config::DatabaseConfig;
use infrastructure::persistence::{SqliteDriverIndex, create_pool};

// ============================================================================
// Test Helpers
// ============================================================================

fn create_test_index() -> SqliteDriverIndex {
    let pool = create_pool(&DatabaseConfig::for_testing()).expect("Failed to create pool");
    SqliteDriverIndex::new(Arc::new(pool), Duration::from_secs(2))
}

fn driver_at(lat: f64, lon: f64) -> Driver {
    Driver::new(
        DriverId::new(),
        Coordinate::new(lat, lon).expect("valid coordinate"),
    )
}

fn coord(lat: f64, lon: f64) -> Coordinate {
    Coordinate::new(lat, lon).expect("valid coordinate")
}

/// Three drivers around Paris: two within 5 km of the Eiffel Tower, one ~50 km away
async fn seed_paris(index: &SqliteDriverIndex) -> (Driver, Driver, Driver) {
    let trocadero = driver_at(48.8625, 2.2875);
    let champ_de_mars = driver_at(48.8556, 2.2986);
    let meaux_way = driver_at(48.86, 2.97);

    for driver in [trocadero, champ_de_mars, meaux_way] {
        index.upsert(driver).await.expect("Failed to seed driver");
    }

    (trocadero, champ_de_mars, meaux_way)
}

// ============================================================================
// Spherical Cap Query Tests
// ============================================================================

mod find_within_tests {
    use super::*;

    #[tokio::test]
    async fn test_two_of_three_within_five_km() {
        let index = create_test_index();
        let (trocadero, champ_de_mars, _far) = seed_paris(&index).await;

        let query = RadiusQuery::new(coord(48.86, 2.29), 5.0).expect("valid radius");
        let found = index.find_within(&query).await.expect("Failed to query");

        assert_eq!(found, vec![trocadero, champ_de_mars]);
    }

    #[tokio::test]
    async fn test_every_result_is_inside_cap() {
        let index = create_test_index();
        seed_paris(&index).await;

        let center = coord(48.86, 2.29);
        let query = RadiusQuery::new(center, 60.0).expect("valid radius");
        let found = index.find_within(&query).await.expect("Failed to query");

        assert_eq!(found.len(), 3);
        for driver in &found {
            assert!(driver.distance_km_to(&center) <= 60.0);
        }
    }

    #[tokio::test]
    async fn test_earth_radius_covers_one_radian() {
        let index = create_test_index();
        // ~57.3 degrees of arc is one radian
        let inside = driver_at(0.0, 57.0);
        let outside = driver_at(0.0, 58.0);
        index.upsert(inside).await.expect("seed");
        index.upsert(outside).await.expect("seed");

        let query = RadiusQuery::new(coord(0.0, 0.0), 6371.0).expect("valid radius");
        assert!((query.angular_radius() - 1.0).abs() < f64::EPSILON);

        let found = index.find_within(&query).await.expect("Failed to query");
        assert_eq!(found, vec![inside]);
    }

    #[tokio::test]
    async fn test_no_drivers_is_empty_not_error() {
        let index = create_test_index();
        seed_paris(&index).await;

        let query = RadiusQuery::new(coord(-33.8688, 151.2093), 10.0).expect("valid radius");
        let found = index.find_within(&query).await.expect("Failed to query");

        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn test_removed_driver_is_not_found() {
        let index = create_test_index();
        let (trocadero, champ_de_mars, _far) = seed_paris(&index).await;
        assert!(index.remove(trocadero.id).await.expect("Failed to remove"));

        let query = RadiusQuery::new(coord(48.86, 2.29), 5.0).expect("valid radius");
        let found = index.find_within(&query).await.expect("Failed to query");

        assert_eq!(found, vec![champ_de_mars]);
    }
}

// ============================================================================
// Proximity Service over SQLite
// ============================================================================

mod proximity_service_tests {
    use super::*;

    #[tokio::test]
    async fn test_find_nearby_through_service() {
        let index = create_test_index();
        let (trocadero, champ_de_mars, _far) = seed_paris(&index).await;
        let service = ProximityService::new(Arc::new(index));

        let found = service
            .find_nearby(coord(48.86, 2.29), 5.0)
            .await
            .expect("Failed to query");

        assert_eq!(found, vec![trocadero, champ_de_mars]);
    }

    #[tokio::test]
    async fn test_zero_radius_is_invalid_argument() {
        let service = ProximityService::new(Arc::new(create_test_index()));

        let err = service
            .find_nearby(coord(48.86, 2.29), 0.0)
            .await
            .expect_err("zero radius must fail");

        assert!(matches!(err, ApplicationError::InvalidArgument(_)));
    }
}

// ============================================================================
// File-backed Database
// ============================================================================

mod file_database_tests {
    use super::*;

    #[tokio::test]
    async fn test_positions_survive_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = DatabaseConfig {
            path: dir
                .path()
                .join("drivers.db")
                .to_string_lossy()
                .into_owned(),
            ..DatabaseConfig::default()
        };

        let driver = driver_at(48.8584, 2.2945);
        {
            let pool = create_pool(&config).expect("Failed to create pool");
            let index = SqliteDriverIndex::new(Arc::new(pool), config.query_timeout());
            index.upsert(driver).await.expect("Failed to upsert");
        }

        let pool = create_pool(&config).expect("Failed to reopen pool");
        let index = SqliteDriverIndex::new(Arc::new(pool), config.query_timeout());
        let query = RadiusQuery::new(coord(48.8584, 2.2945), 1.0).expect("valid radius");

        assert_eq!(
            index.find_within(&query).await.expect("Failed to query"),
            vec![driver]
        );
    }
}
