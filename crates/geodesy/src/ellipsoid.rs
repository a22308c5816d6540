//! Geodetic to Earth-centered Cartesian projection on the reference ellipsoid.

use pointing_core::constants::{ELLIPSOID_A_M, ELLIPSOID_B_M, ELLIPSOID_E2};
use pointing_core::vector::Vector3;

use crate::point::GeodeticPoint;

/// Earth-centered position with the local radius and surface normal.
///
/// `nx`/`ny`/`nz` are only meaningful on vectors produced by [`project`];
/// rotated and difference vectors leave them at zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CartesianVector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub radius: f64,
    pub nx: f64,
    pub ny: f64,
    pub nz: f64,
}

impl CartesianVector {
    /// Position-only vector with no surface normal.
    pub const fn position(x: f64, y: f64, z: f64, radius: f64) -> Self {
        Self {
            x,
            y,
            z,
            radius,
            nx: 0.0,
            ny: 0.0,
            nz: 0.0,
        }
    }

    pub fn xyz(&self) -> Vector3 {
        [self.x, self.y, self.z]
    }

    pub fn normal(&self) -> Vector3 {
        [self.nx, self.ny, self.nz]
    }
}

/// Ellipsoid radius at a geodetic latitude given in radians.
pub fn radius_at(lat_rad: f64) -> f64 {
    let (sin_lat, cos_lat) = lat_rad.sin_cos();
    let t1 = ELLIPSOID_A_M * ELLIPSOID_A_M * cos_lat;
    let t2 = ELLIPSOID_B_M * ELLIPSOID_B_M * sin_lat;
    let t3 = ELLIPSOID_A_M * cos_lat;
    let t4 = ELLIPSOID_B_M * sin_lat;
    ((t1 * t1 + t2 * t2) / (t3 * t3 + t4 * t4)).sqrt()
}

/// Geocentric latitude (radians) for a geodetic latitude (radians).
#[inline]
pub fn geocentric_latitude(lat_rad: f64) -> f64 {
    ((1.0 - ELLIPSOID_E2) * lat_rad.tan()).atan()
}

/// Project a geodetic point into Earth-centered Cartesian coordinates.
///
/// The surface position uses the geocentric latitude; the normal and the
/// altitude offset use the geodetic one. Never fails, non-finite input comes
/// back as non-finite output.
pub fn project(point: &GeodeticPoint) -> CartesianVector {
    let lat = point.latitude.to_radians();
    let lon = point.longitude.to_radians();

    let radius = radius_at(lat);
    let clat = geocentric_latitude(lat);

    let (sin_lon, cos_lon) = lon.sin_cos();
    let (sin_clat, cos_clat) = clat.sin_cos();
    let (sin_glat, cos_glat) = lat.sin_cos();

    let nx = cos_glat * cos_lon;
    let ny = cos_glat * sin_lon;
    let nz = sin_glat;

    CartesianVector {
        x: radius * cos_lon * cos_clat + point.altitude * nx,
        y: radius * sin_lon * cos_clat + point.altitude * ny,
        z: radius * sin_clat + point.altitude * nz,
        radius,
        nx,
        ny,
        nz,
    }
}
