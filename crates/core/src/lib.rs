//! Core units, Earth model constants, and shared primitives for the geodesic pointing workspace.

/// Earth model constants expressed in SI units.
///
/// The spherical radius and the ellipsoid axes belong to two different Earth
/// models: forward pointing works on the sphere, projection and frame rotation
/// on the ellipsoid. Keep them apart.
pub mod constants {
    /// Mean spherical Earth radius (m).
    pub const EARTH_RADIUS_M: f64 = 6_371_000.0;
    /// Ellipsoid semi-major (equatorial) axis (m).
    pub const ELLIPSOID_A_M: f64 = 6_378_137.0;
    /// Ellipsoid semi-minor (polar) axis (m).
    pub const ELLIPSOID_B_M: f64 = 6_356_752.3;
    /// Ellipsoid first eccentricity squared (WGS84).
    pub const ELLIPSOID_E2: f64 = 0.006_694_379_990_14;
    /// Fractional digits kept on reported distances.
    pub const DISTANCE_DECIMALS: i32 = 10;
}

/// Basic unit conversion helpers.
pub mod units {
    /// Convert metres to kilometres.
    #[inline]
    pub fn m_to_km(v: f64) -> f64 {
        v * 0.001
    }
}

/// Angle helpers shared by the geodesy routines.
pub mod angle {
    /// Wrap an angle in degrees into `[0, 360)`.
    #[inline]
    pub fn normalize_degrees(deg: f64) -> f64 {
        let wrapped = deg.rem_euclid(360.0);
        // rem_euclid can round up to exactly 360 for tiny negative inputs
        if wrapped >= 360.0 { 0.0 } else { wrapped }
    }

    /// Smallest signed difference `a - b` in degrees, in `(-180, 180]`.
    #[inline]
    pub fn difference_degrees(a: f64, b: f64) -> f64 {
        let d = normalize_degrees(a - b);
        if d > 180.0 { d - 360.0 } else { d }
    }
}

/// Fixed-point rounding.
pub mod round {
    /// Round `v` to `decimals` fractional digits.
    #[inline]
    pub fn fixed(v: f64, decimals: i32) -> f64 {
        let factor = 10f64.powi(decimals);
        (v * factor).round() / factor
    }
}

/// Minimal vector helpers to avoid ad-hoc `[f64; 3]` math everywhere.
pub mod vector {
    /// Alias for a 3D vector in metres (or dimensionless for directions).
    pub type Vector3 = [f64; 3];

    /// Euclidean norm of a vector.
    #[inline]
    pub fn norm(v: &Vector3) -> f64 {
        dot(v, v).sqrt()
    }

    /// Dot product of two vectors.
    #[inline]
    pub fn dot(a: &Vector3, b: &Vector3) -> f64 {
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
    }

    /// Vector subtraction.
    #[inline]
    pub fn sub(a: &Vector3, b: &Vector3) -> Vector3 {
        [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
    }

    /// Scale a vector by a scalar.
    #[inline]
    pub fn scale(v: &Vector3, s: f64) -> Vector3 {
        [v[0] * s, v[1] * s, v[2] * s]
    }
}
