//! Property-based tests for domain value objects and the polyline codec
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::polyline;
use domain::value_objects::{Coordinate, HexColor, VehicleType};
use proptest::prelude::*;

// ============================================================================
// Coordinate Property Tests
// ============================================================================

mod coordinate_tests {
    use super::*;

    proptest! {
        #[test]
        fn valid_coordinates_accepted(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            let result = Coordinate::new(lat, lon);
            prop_assert!(result.is_ok());

            let coordinate = result.unwrap();
            prop_assert!((coordinate.latitude() - lat).abs() < f64::EPSILON);
            prop_assert!((coordinate.longitude() - lon).abs() < f64::EPSILON);
            prop_assert_eq!(coordinate.to_lng_lat(), [lon, lat]);
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
        fn distance_is_symmetric(
            lat1 in -90.0f64..=90.0f64,
            lon1 in -180.0f64..=180.0f64,
            lat2 in -90.0f64..=90.0f64,
            lon2 in -180.0f64..=180.0f64
        ) {
            let a = Coordinate::new_unchecked(lat1, lon1);
            let b = Coordinate::new_unchecked(lat2, lon2);
            prop_assert!((a.distance_km(&b) - b.distance_km(&a)).abs() < 1e-6);
            prop_assert!(a.distance_km(&a).abs() < 1e-3);
        }
    }
}

// ============================================================================
// Polyline Property Tests
// ============================================================================

mod polyline_tests {
    use super::*;

    proptest! {
        #[test]
        fn decode_never_panics(input in "\\PC{0,64}") {
            let _ = polyline::decode(&input);
        }

        #[test]
        fn decoded_points_are_in_range(input in "[?-~]{0,64}") {
            if let Ok(points) = polyline::decode(&input) {
                for point in points {
                    prop_assert!(Coordinate::in_range(point.latitude(), point.longitude()));
                }
            }
        }

        #[test]
        fn encode_uses_printable_range(
            points in prop::collection::vec(
                (-90.0f64..=90.0f64, -180.0f64..=180.0f64)
                    .prop_map(|(lat, lon)| Coordinate::new_unchecked(lat, lon)),
                0..20
            )
        ) {
            let encoded = polyline::encode(&points);
            prop_assert!(encoded.bytes().all(|b| (63..=126).contains(&b)));
            prop_assert_eq!(polyline::decode(&encoded).unwrap().len(), points.len());
        }
    }
}

// ============================================================================
// HexColor / VehicleType Property Tests
// ============================================================================

mod color_tests {
    use super::*;

    proptest! {
        #[test]
        fn six_digit_hex_parses(digits in "[0-9a-fA-F]{6}") {
            let color = HexColor::parse(&digits).unwrap();
            prop_assert_eq!(color.as_str(), format!("#{}", digits.to_ascii_lowercase()));
            prop_assert_eq!(HexColor::parse(color.as_str()), Some(color.clone()));
        }

        #[test]
        fn non_hex_rejected(digits in "[g-zG-Z]{3,6}") {
            prop_assert!(HexColor::parse(&digits).is_none());
        }

        #[test]
        fn vehicle_type_parse_is_case_insensitive(index in 0usize..VehicleType::ALL.len()) {
            let vehicle = VehicleType::ALL[index];
            prop_assert_eq!(VehicleType::from_provider(&vehicle.as_str().to_lowercase()), vehicle);
        }
    }
}
