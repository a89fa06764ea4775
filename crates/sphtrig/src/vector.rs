//! n-vector algebra on `nalgebra::Vector3<f64>`.
//!
//! - Points on the sphere are unit n-vectors (centre → surface).
//! - Great circles are represented by their normal `a × b`; the direction of
//!   the normal encodes the traversal direction `a → b`.
//! - Angles between vectors use `atan2(|a×b|, a·b)`, which stays accurate near
//!   0 and π where `acos` of the dot product does not.

use nalgebra::Vector3;

use crate::units::{degrees180, degrees90};

/// 3-vector used for n-vectors and great-circle normals.
pub type Vec3 = Vector3<f64>;

/// Unit n-vector of a latitude/longitude in radians.
#[inline]
pub fn nvector(lat: f64, lon: f64) -> Vec3 {
    let (sa, ca) = lat.sin_cos();
    let (sb, cb) = lon.sin_cos();
    Vec3::new(ca * cb, ca * sb, sa)
}

/// Latitude/longitude in degrees of the direction of `v` (any length).
#[inline]
pub fn to_lat_lon(v: &Vec3) -> (f64, f64) {
    let a = v.z.atan2(v.x.hypot(v.y));
    let b = v.y.atan2(v.x);
    (degrees90(a), degrees180(b))
}

/// Unsigned angle between `a` and `b`, in [0, π].
#[inline]
pub fn angle_between(a: &Vec3, b: &Vec3) -> f64 {
    a.cross(b).norm().atan2(a.dot(b))
}

/// Angle from `a` to `b` in (-π, π], negative when `a × b` points away from
/// `reference` (i.e. clockwise as seen from the tip of `reference`).
#[inline]
pub fn signed_angle(a: &Vec3, b: &Vec3, reference: &Vec3) -> f64 {
    let x = a.cross(b);
    let s = if x.dot(reference) < 0.0 {
        -x.norm()
    } else {
        x.norm()
    };
    s.atan2(a.dot(b))
}

/// Component-wise sum.
#[inline]
pub fn sum_of<I: IntoIterator<Item = Vec3>>(vs: I) -> Vec3 {
    vs.into_iter().fold(Vec3::zeros(), |acc, v| acc + v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn nvector_axes() {
        let v = nvector(0.0, 0.0);
        assert!((v - Vec3::x()).norm() < 1e-15);
        let v = nvector(FRAC_PI_2, 0.3);
        assert!((v - Vec3::z()).norm() < 1e-15);
        let v = nvector(0.0, FRAC_PI_2);
        assert!((v - Vec3::y()).norm() < 1e-15);
    }

    #[test]
    fn lat_lon_round_trip_ignores_length() {
        let v = nvector(0.7, -2.1) * 3.5;
        let (lat, lon) = to_lat_lon(&v);
        assert!((lat - 0.7f64.to_degrees()).abs() < 1e-12);
        assert!((lon + 2.1f64.to_degrees()).abs() < 1e-12);
    }

    #[test]
    fn signed_versus_unsigned() {
        let x = Vec3::x();
        let y = Vec3::y();
        let z = Vec3::z();
        assert!((angle_between(&x, &y) - FRAC_PI_2).abs() < 1e-15);
        assert!((signed_angle(&x, &y, &z) - FRAC_PI_2).abs() < 1e-15);
        assert!((signed_angle(&x, &y, &-z) + FRAC_PI_2).abs() < 1e-15);
        assert!((angle_between(&x, &-x) - PI).abs() < 1e-15);
    }

    #[test]
    fn sums() {
        let s = sum_of([Vec3::x(), Vec3::y(), -Vec3::x()]);
        assert!((s - Vec3::y()).norm() < 1e-15);
    }
}
