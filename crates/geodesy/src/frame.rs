//! Vector helpers used by the inverse pointing solution.

use pointing_core::vector;

use crate::ellipsoid::{CartesianVector, geocentric_latitude, project};
use crate::point::GeodeticPoint;

/// Straight-line distance (m) between two Cartesian positions.
#[inline]
pub fn distance(p: &CartesianVector, q: &CartesianVector) -> f64 {
    vector::norm(&vector::sub(&p.xyz(), &q.xyz()))
}

/// Re-express `point_b` in a frame aligned with `point_a`.
///
/// The longitude origin moves to `point_a`'s meridian and the polar axis is
/// tilted by `point_a`'s geocentric latitude, so `x` points up through
/// `point_a`, `y` east and `z` north. `radius_b` is carried through as is.
pub fn rotate_into_frame(
    point_b: &GeodeticPoint,
    point_a: &GeodeticPoint,
    radius_b: f64,
) -> CartesianVector {
    let shifted = GeodeticPoint {
        longitude: point_b.longitude - point_a.longitude,
        ..*point_b
    };
    let brp = project(&shifted);

    let alat = geocentric_latitude(-point_a.latitude.to_radians());
    let (sin_alat, cos_alat) = alat.sin_cos();

    CartesianVector::position(
        brp.x * cos_alat - brp.z * sin_alat,
        brp.y,
        brp.x * sin_alat + brp.z * cos_alat,
        radius_b,
    )
}

/// Unit vector pointing from `a` to `b`, or `None` when they coincide.
pub fn normalized_diff(b: &CartesianVector, a: &CartesianVector) -> Option<CartesianVector> {
    let d = vector::sub(&b.xyz(), &a.xyz());
    let dist2 = vector::dot(&d, &d);
    if dist2 == 0.0 {
        return None;
    }
    let [x, y, z] = vector::scale(&d, 1.0 / dist2.sqrt());
    Some(CartesianVector::position(x, y, z, 1.0))
}
