//! Property-based tests for domain value objects
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::entities::{AddressSuggestions, FareSchedule, RouteEstimate};
use domain::value_objects::{AddressQuery, Coordinate, EARTH_RADIUS_KM, RadiusQuery};
use proptest::prelude::*;

// ============================================================================
// Coordinate Property Tests
// ============================================================================

mod coordinate_tests {
    use super::*;

    proptest! {
        #[test]
        fn valid_coordinates_create_location(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            let result = Coordinate::new(lat, lon);
            prop_assert!(result.is_ok());

            let coord = result.unwrap();
            prop_assert!((coord.latitude() - lat).abs() < f64::EPSILON);
            prop_assert!((coord.longitude() - lon).abs() < f64::EPSILON);
        }

        #[test]
        fn invalid_latitude_rejected(
            lat in prop_oneof![
                (-1000.0f64..-90.1f64),
                (90.1f64..1000.0f64)
            ],
            lon in -180.0f64..=180.0f64
        ) {
            prop_assert!(Coordinate::new(lat, lon).is_err());
        }

        #[test]
        fn invalid_longitude_rejected(
            lat in -90.0f64..=90.0f64,
            lon in prop_oneof![
                (-1000.0f64..-180.1f64),
                (180.1f64..1000.0f64)
            ]
        ) {
            prop_assert!(Coordinate::new(lat, lon).is_err());
        }

        #[test]
        fn distance_to_self_is_zero(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            let coord = Coordinate::new(lat, lon).unwrap();
            prop_assert!(coord.distance_km(&coord).abs() < 0.001);
        }

        #[test]
        fn distance_is_symmetric(
            lat1 in -90.0f64..=90.0f64,
            lon1 in -180.0f64..=180.0f64,
            lat2 in -90.0f64..=90.0f64,
            lon2 in -180.0f64..=180.0f64
        ) {
            let a = Coordinate::new(lat1, lon1).unwrap();
            let b = Coordinate::new(lat2, lon2).unwrap();
            prop_assert!((a.distance_km(&b) - b.distance_km(&a)).abs() < 0.001);
        }

        #[test]
        fn central_angle_never_exceeds_pi(
            lat1 in -90.0f64..=90.0f64,
            lon1 in -180.0f64..=180.0f64,
            lat2 in -90.0f64..=90.0f64,
            lon2 in -180.0f64..=180.0f64
        ) {
            let a = Coordinate::new(lat1, lon1).unwrap();
            let b = Coordinate::new(lat2, lon2).unwrap();
            let angle = a.central_angle(&b);
            prop_assert!((0.0..=std::f64::consts::PI + 1e-9).contains(&angle));
        }
    }
}

// ============================================================================
// RadiusQuery Property Tests
// ============================================================================

mod radius_query_tests {
    use super::*;

    proptest! {
        #[test]
        fn positive_radius_accepted_and_converted(radius in 0.001f64..20_000.0f64) {
            let center = Coordinate::new(0.0, 0.0).unwrap();
            let query = RadiusQuery::new(center, radius).unwrap();
            prop_assert!((query.angular_radius() * EARTH_RADIUS_KM - radius).abs() < 1e-6);
        }

        #[test]
        fn non_positive_radius_rejected(radius in -20_000.0f64..=0.0f64) {
            let center = Coordinate::new(0.0, 0.0).unwrap();
            prop_assert!(RadiusQuery::new(center, radius).is_err());
        }

        #[test]
        fn center_always_inside_cap(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64,
            radius in 0.001f64..100.0f64
        ) {
            let center = Coordinate::new(lat, lon).unwrap();
            let query = RadiusQuery::new(center, radius).unwrap();
            prop_assert!(query.contains(&center));
        }
    }
}

// ============================================================================
// AddressQuery / AddressSuggestions Property Tests
// ============================================================================

mod address_tests {
    use super::*;

    proptest! {
        #[test]
        fn whitespace_only_queries_rejected(s in "[ \t\n]{0,10}") {
            prop_assert!(AddressQuery::new(&s).is_err());
        }

        #[test]
        fn non_blank_queries_are_trimmed(s in "[a-zA-Z0-9][a-zA-Z0-9 ,]{0,30}") {
            let padded = format!("  {s}  ");
            let query = AddressQuery::new(&padded).unwrap();
            prop_assert_eq!(query.as_str(), s.trim());
        }

        #[test]
        fn suggestions_are_a_prefix_of_provider_order(
            names in proptest::collection::vec("[a-z]{1,12}", 0..12)
        ) {
            let suggestions = AddressSuggestions::from_ranked(names.clone());
            prop_assert!(suggestions.len() <= AddressSuggestions::MAX_LEN);
            prop_assert_eq!(suggestions.as_slice(), &names[..suggestions.len()]);
        }
    }
}

// ============================================================================
// Fare Property Tests
// ============================================================================

mod fare_tests {
    use super::*;

    proptest! {
        #[test]
        fn fares_never_below_base(
            meters in 0.0f64..200_000.0f64,
            seconds in 0.0f64..36_000.0f64
        ) {
            let route = RouteEstimate::new(meters, seconds).unwrap();
            let schedule = FareSchedule::default();
            for fare in schedule.estimate(&route) {
                prop_assert!(fare.amount >= schedule.rate(fare.vehicle).base);
            }
        }
    }
}
