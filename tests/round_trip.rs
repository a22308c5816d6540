use approx::assert_relative_eq;
use geodesic_pointing::primitives::angle::difference_degrees;
use geodesic_pointing::{GeodeticPoint, get_point, get_relative_point_position};

// Forward runs on the mean sphere and inverse on the ellipsoid, so the two
// only agree to within the model discrepancy.
const DISTANCE_TOLERANCE_KM: f64 = 0.1;
const ANGLE_TOLERANCE_DEG: f64 = 0.3;

#[test]
fn forward_then_inverse_recovers_range_and_azimuth() {
    let origins = [
        GeodeticPoint::new(45.0, 10.0, 0.0),
        GeodeticPoint::new(-33.9, 18.4, 0.0),
        GeodeticPoint::new(0.0, -60.0, 0.0),
    ];
    for origin in origins {
        for azimuth in [0.0, 30.0, 135.0, 225.0, 300.0] {
            let target = get_point(&origin, 10_000.0, azimuth, 0.0).expect("forward");
            let rel = get_relative_point_position(&origin, &target).expect("inverse");
            assert!(
                (rel.distance_km - 10.0).abs() < DISTANCE_TOLERANCE_KM,
                "origin {origin} azimuth {azimuth}: distance {}",
                rel.distance_km
            );
            let off = difference_degrees(rel.azimuth, azimuth);
            assert!(
                off.abs() < ANGLE_TOLERANCE_DEG,
                "origin {origin} azimuth {azimuth}: got {}",
                rel.azimuth
            );
        }
    }
}

#[test]
fn forward_elevation_comes_back_as_bearing() {
    let origin = GeodeticPoint::new(45.0, 10.0, 100.0);
    for elevation in [-5.0, 10.0, 45.0] {
        let target = get_point(&origin, 1_000.0, 60.0, elevation).expect("forward");
        let rel = get_relative_point_position(&origin, &target).expect("inverse");
        assert!(
            (rel.bearing - elevation).abs() < 0.1,
            "elevation {elevation}: bearing {}",
            rel.bearing
        );
        assert!((rel.distance_km - 1.0).abs() < 0.01);
    }
}

#[test]
fn zero_range_forward_is_identity() {
    let origin = GeodeticPoint::new(-12.5, 130.8, 42.0);
    let same = get_point(&origin, 0.0, 217.0, 0.0).expect("forward");
    assert_relative_eq!(same.latitude, origin.latitude, epsilon = 1e-12);
    assert_relative_eq!(same.longitude, origin.longitude, epsilon = 1e-12);
    assert_relative_eq!(same.altitude, origin.altitude, epsilon = 1e-12);

    let rel = get_relative_point_position(&origin, &same).expect("inverse");
    assert!(rel.distance_km < 1e-9);
}

#[test]
fn azimuth_wraps_into_compass_range() {
    let origin = GeodeticPoint::new(10.0, 10.0, 0.0);
    let target = get_point(&origin, 5_000.0, -45.0, 0.0).expect("forward");
    let rel = get_relative_point_position(&origin, &target).expect("inverse");
    assert!((0.0..360.0).contains(&rel.azimuth));
    assert!((rel.azimuth - 315.0).abs() < ANGLE_TOLERANCE_DEG);
}
