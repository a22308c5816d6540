//! Inverse pointing: where a target sits relative to a reference point.

use pointing_core::angle::normalize_degrees;
use pointing_core::constants::DISTANCE_DECIMALS;
use pointing_core::{round, units, vector};
use thiserror::Error;
use tracing::{debug, trace};

use crate::ellipsoid::project;
use crate::frame::{distance, normalized_diff, rotate_into_frame};
use crate::point::GeodeticPoint;

/// Below this squared horizontal offset the target is treated as straight
/// above or below the reference and the azimuth is pinned to zero.
const VERTICAL_AXIS_EPSILON: f64 = 1.0e-6;

/// A line of sight whose cosine with the surface normal is within this of
/// ±1 is vertical. The rotated frame uses the geocentric latitude, so off
/// the equator a purely vertical offset still leaves a horizontal residue.
const VERTICAL_COSINE_EPSILON: f64 = 1.0e-12;

/// Direction and range from a reference point to a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelativePosition {
    /// Elevation of the line of sight above the reference's horizon (deg).
    pub bearing: f64,
    /// Compass direction, 0 north and clockwise, in `[0, 360)` (deg).
    pub azimuth: f64,
    /// Straight-line distance rounded to 10 fractional digits (km).
    pub distance_km: f64,
}

/// Which side of the computation carried the bad value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointRole {
    Reference,
    Target,
}

impl std::fmt::Display for PointRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            PointRole::Reference => "reference",
            PointRole::Target => "target",
        })
    }
}

/// Reasons the relative position could not be derived.
#[derive(Debug, Error, PartialEq)]
pub enum ComputationFailure {
    #[error("{role} point is not finite: {point:?}")]
    NonFiniteInput {
        role: PointRole,
        point: GeodeticPoint,
    },
    #[error("{quantity} evaluated to a non-finite value")]
    NonFiniteResult { quantity: &'static str },
}

/// Bearing, azimuth and distance of `target` as seen from `reference`.
///
/// Both points go through the ellipsoid projection. When their projections
/// coincide there is no line of sight and bearing and azimuth are both zero.
pub fn get_relative_point_position(
    reference: &GeodeticPoint,
    target: &GeodeticPoint,
) -> Result<RelativePosition, ComputationFailure> {
    for (role, point) in [
        (PointRole::Reference, reference),
        (PointRole::Target, target),
    ] {
        if !point.is_finite() {
            debug!(%role, ?point, "relative position rejected non-finite input");
            return Err(ComputationFailure::NonFiniteInput {
                role,
                point: *point,
            });
        }
    }

    let target_xyz = project(target);
    let reference_xyz = project(reference);

    let distance_km = round::fixed(
        units::m_to_km(distance(&target_xyz, &reference_xyz)),
        DISTANCE_DECIMALS,
    );
    ensure_finite("distance", distance_km)?;

    let Some(line_of_sight) = normalized_diff(&target_xyz, &reference_xyz) else {
        trace!(%reference, %target, "relative position of coincident points");
        return Ok(RelativePosition {
            bearing: 0.0,
            azimuth: 0.0,
            distance_km,
        });
    };

    let cos_zenith = vector::dot(&line_of_sight.xyz(), &reference_xyz.normal()).clamp(-1.0, 1.0);
    let bearing = 90.0 - cos_zenith.acos().to_degrees();
    ensure_finite("bearing", bearing)?;

    let vertical = 1.0 - cos_zenith.abs() < VERTICAL_COSINE_EPSILON;
    let local = rotate_into_frame(target, reference, reference_xyz.radius);
    let azimuth = if !vertical && local.z * local.z + local.y * local.y > VERTICAL_AXIS_EPSILON {
        let theta = local.z.atan2(local.y).to_degrees();
        normalize_degrees(90.0 - theta)
    } else {
        0.0
    };
    ensure_finite("azimuth", azimuth)?;

    trace!(%reference, %target, bearing, azimuth, distance_km, "relative position");
    Ok(RelativePosition {
        bearing,
        azimuth,
        distance_km,
    })
}

fn ensure_finite(quantity: &'static str, value: f64) -> Result<(), ComputationFailure> {
    if value.is_finite() {
        Ok(())
    } else {
        debug!(quantity, value, "relative position produced non-finite value");
        Err(ComputationFailure::NonFiniteResult { quantity })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn one_degree_east_on_the_equator() {
        let a = GeodeticPoint::new(0.0, 0.0, 0.0);
        let b = GeodeticPoint::new(0.0, 1.0, 0.0);
        let rel = get_relative_point_position(&a, &b).unwrap();
        // chord of one degree on the equatorial circle
        assert_relative_eq!(rel.distance_km, 111.318_08, epsilon = 1e-4);
        assert_relative_eq!(rel.azimuth, 90.0, epsilon = 1e-9);
        // the chord dips below the horizon by half the arc
        assert_relative_eq!(rel.bearing, -0.5, epsilon = 1e-6);
    }

    #[test]
    fn cardinal_directions() {
        let a = GeodeticPoint::new(30.0, 20.0, 0.0);
        let cases = [
            (GeodeticPoint::new(30.05, 20.0, 0.0), 0.0),
            (GeodeticPoint::new(30.0, 20.05, 0.0), 90.0),
            (GeodeticPoint::new(29.95, 20.0, 0.0), 180.0),
            (GeodeticPoint::new(30.0, 19.95, 0.0), 270.0),
        ];
        for (b, expected) in cases {
            let rel = get_relative_point_position(&a, &b).unwrap();
            let off = pointing_core::angle::difference_degrees(rel.azimuth, expected);
            assert!(off.abs() < 0.1, "azimuth {} vs {}", rel.azimuth, expected);
            assert!((0.0..360.0).contains(&rel.azimuth));
        }
    }

    #[test]
    fn coincident_points_are_all_zero() {
        for p in [
            GeodeticPoint::new(0.0, 0.0, 0.0),
            GeodeticPoint::new(51.5, -0.1, 0.0),
            GeodeticPoint::new(-33.9, 18.4, 1_200.0),
        ] {
            let rel = get_relative_point_position(&p, &p).unwrap();
            assert_eq!(
                rel,
                RelativePosition {
                    bearing: 0.0,
                    azimuth: 0.0,
                    distance_km: 0.0
                }
            );
        }
    }

    #[test]
    fn vertical_offset_on_the_equator() {
        let ground = GeodeticPoint::new(0.0, 25.0, 0.0);
        let above = GeodeticPoint::new(0.0, 25.0, 1_000.0);

        let up = get_relative_point_position(&ground, &above).unwrap();
        assert_eq!(up.azimuth, 0.0);
        assert_relative_eq!(up.bearing, 90.0, epsilon = 1e-4);
        assert_relative_eq!(up.distance_km, 1.0, epsilon = 1e-9);

        let down = get_relative_point_position(&above, &ground).unwrap();
        assert_eq!(down.azimuth, 0.0);
        assert_relative_eq!(down.bearing, -90.0, epsilon = 1e-4);
    }

    #[test]
    fn vertical_offset_off_the_equator() {
        let cases = [
            (GeodeticPoint::new(31.5, 35.0, 0.0), GeodeticPoint::new(31.5, 35.0, -400.0)),
            (GeodeticPoint::new(45.0, 35.0, 500.0), GeodeticPoint::new(45.0, 35.0, -100.0)),
            (GeodeticPoint::new(45.0, 35.0, 0.0), GeodeticPoint::new(45.0, 35.0, 1_000.0)),
            (GeodeticPoint::new(-60.0, -120.0, 0.0), GeodeticPoint::new(-60.0, -120.0, -1.0)),
            (GeodeticPoint::new(89.0, 10.0, 8_000.0), GeodeticPoint::new(89.0, 10.0, -400.0)),
        ];
        for (reference, target) in cases {
            let rel = get_relative_point_position(&reference, &target).unwrap();
            assert_eq!(rel.azimuth, 0.0, "{reference} -> {target}");
            let expected = if target.altitude > reference.altitude { 90.0 } else { -90.0 };
            assert_relative_eq!(rel.bearing, expected, epsilon = 1e-4);
            assert_relative_eq!(
                rel.distance_km,
                (target.altitude - reference.altitude).abs() / 1_000.0,
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn overflowing_distance_is_a_non_finite_result() {
        let ground = GeodeticPoint::new(0.0, 0.0, 0.0);
        let far = GeodeticPoint::new(0.0, 0.0, 1e200);
        assert_eq!(
            get_relative_point_position(&ground, &far),
            Err(ComputationFailure::NonFiniteResult {
                quantity: "distance"
            })
        );
    }

    #[test]
    fn distance_has_ten_decimals() {
        let a = GeodeticPoint::new(10.0, 10.0, 0.0);
        let b = GeodeticPoint::new(10.123_456, 10.654_321, 37.5);
        let rel = get_relative_point_position(&a, &b).unwrap();
        assert_eq!(rel.distance_km, round::fixed(rel.distance_km, 10));
    }

    #[test]
    fn non_finite_points_are_reported() {
        let good = GeodeticPoint::new(0.0, 0.0, 0.0);
        let bad = GeodeticPoint::new(0.0, f64::NAN, 0.0);
        assert!(matches!(
            get_relative_point_position(&bad, &good),
            Err(ComputationFailure::NonFiniteInput {
                role: PointRole::Reference,
                ..
            })
        ));
        let err = get_relative_point_position(&good, &bad).unwrap_err();
        assert!(err.to_string().starts_with("target point is not finite"));
    }
}
