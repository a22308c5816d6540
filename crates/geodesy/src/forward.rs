//! Forward pointing: destination from an origin, range, azimuth and elevation.
//!
//! Horizontal displacement is computed on the mean sphere and the altitude
//! change on a flat triangle. This is an approximation that degrades with
//! range; it does not share the ellipsoid used by [`crate::ellipsoid`].

use pointing_core::constants::EARTH_RADIUS_M;
use thiserror::Error;
use tracing::{debug, trace};

use crate::point::GeodeticPoint;

/// Raised when a destination point cannot be produced.
#[derive(Debug, Error, PartialEq)]
#[error("cannot create point, {cause}")]
pub struct ConstructionError {
    pub cause: String,
}

impl ConstructionError {
    fn new(cause: impl Into<String>) -> Self {
        Self {
            cause: cause.into(),
        }
    }
}

/// Project a new point `distance_m` away from `origin`.
///
/// `azimuth_deg` is the compass direction (0 north, clockwise) and
/// `elevation_deg` the angle above the local horizontal. Finite but
/// out-of-range inputs are accepted; non-finite ones are rejected.
pub fn get_point(
    origin: &GeodeticPoint,
    distance_m: f64,
    azimuth_deg: f64,
    elevation_deg: f64,
) -> Result<GeodeticPoint, ConstructionError> {
    if !origin.is_finite() {
        debug!(%origin, "forward pointing rejected non-finite origin");
        return Err(ConstructionError::new(format!(
            "origin is not finite: {origin:?}"
        )));
    }
    for (argument, value) in [
        ("distance", distance_m),
        ("azimuth", azimuth_deg),
        ("elevation", elevation_deg),
    ] {
        if !value.is_finite() {
            debug!(argument, value, "forward pointing rejected non-finite argument");
            return Err(ConstructionError::new(format!(
                "{argument} is not finite: {value}"
            )));
        }
    }

    let alpha = elevation_deg.to_radians();
    let azimuth = azimuth_deg.to_radians();
    let lat = origin.latitude.to_radians();
    let lon = origin.longitude.to_radians();

    let horizontal_m = distance_m * alpha.cos();
    let delta_alt_m = distance_m * alpha.sin();

    let delta = horizontal_m / EARTH_RADIUS_M;
    let (sin_lat, cos_lat) = lat.sin_cos();
    let (sin_delta, cos_delta) = delta.sin_cos();

    let final_lat = (sin_lat * cos_delta + cos_lat * sin_delta * azimuth.cos()).asin();
    let final_lon = lon
        + (azimuth.sin() * sin_delta * cos_lat).atan2(cos_delta - sin_lat * final_lat.sin());

    let destination = GeodeticPoint::new(
        final_lat.to_degrees(),
        final_lon.to_degrees(),
        origin.altitude + delta_alt_m,
    );
    if !destination.is_finite() {
        debug!(?destination, "forward pointing produced non-finite point");
        return Err(ConstructionError::new(format!(
            "result is not finite: {destination:?}"
        )));
    }

    trace!(%origin, %destination, horizontal_m, delta_alt_m, "forward pointing");
    Ok(destination)
}
