//! Angle normalization, antimeridian unrolling and degree/metre conversion.
//!
//! Ranges
//! - Latitudes: [-90°, 90°]. Longitudes: (-180°, 180°]. Bearings: [0°, 360°).
//! - Signed radian angles: (-π, π]. Compass radians: [0, 2π).

use std::f64::consts::{PI, TAU};

/// Wrap radians into (-π, π].
#[inline]
pub fn wrap_pi(rad: f64) -> f64 {
    if rad > -PI && rad <= PI {
        return rad;
    }
    let w = (rad + PI).rem_euclid(TAU) - PI;
    if w <= -PI {
        w + TAU
    } else {
        w
    }
}

/// Wrap radians into [0, 2π).
#[inline]
pub fn wrap_pi2(rad: f64) -> f64 {
    let w = rad.rem_euclid(TAU);
    if w >= TAU {
        0.0
    } else {
        w
    }
}

/// Wrap degrees into (-180, 180].
#[inline]
pub fn wrap180(deg: f64) -> f64 {
    if deg > -180.0 && deg <= 180.0 {
        return deg;
    }
    let w = (deg + 180.0).rem_euclid(360.0) - 180.0;
    if w <= -180.0 {
        w + 360.0
    } else {
        w
    }
}

/// Wrap degrees into [0, 360).
#[inline]
pub fn wrap360(deg: f64) -> f64 {
    let w = deg.rem_euclid(360.0);
    if w >= 360.0 {
        0.0
    } else {
        w
    }
}

/// Fold a latitude in degrees back into [-90, 90] (reflection at the poles).
#[inline]
pub fn wrap90(deg: f64) -> f64 {
    let w = wrap180(deg);
    if w > 90.0 {
        180.0 - w
    } else if w < -90.0 {
        -180.0 - w
    } else {
        w
    }
}

#[inline]
pub fn degrees90(rad: f64) -> f64 {
    wrap90(rad.to_degrees())
}

#[inline]
pub fn degrees180(rad: f64) -> f64 {
    wrap180(rad.to_degrees())
}

#[inline]
pub fn degrees360(rad: f64) -> f64 {
    wrap360(rad.to_degrees())
}

/// Longitude delta `b2 - b1` in radians and the (possibly unrolled) `b2`.
///
/// With `wrap`, a delta beyond ±π is replaced by its equivalent across the
/// antimeridian and `b2` is shifted to match.
#[inline]
pub fn unroll_pi(b1: f64, b2: f64, wrap: bool) -> (f64, f64) {
    let d = b2 - b1;
    if wrap && d.abs() > PI {
        let d = wrap_pi(d);
        (d, b1 + d)
    } else {
        (d, b2)
    }
}

/// Degree version of [`unroll_pi`].
#[inline]
pub fn unroll180(lon1: f64, lon2: f64, wrap: bool) -> (f64, f64) {
    let d = lon2 - lon1;
    if wrap && d.abs() > 180.0 {
        let d = wrap180(d);
        (d, lon1 + d)
    } else {
        (d, lon2)
    }
}

/// Arc length for an angle in degrees on a sphere of `radius`.
#[inline]
pub fn degrees_to_m(deg: f64, radius: f64) -> f64 {
    deg.to_radians() * radius
}

/// Angle in degrees subtended by an arc of `distance` on a sphere of `radius`.
#[inline]
pub fn m_to_degrees(distance: f64, radius: f64) -> f64 {
    (distance / radius).to_degrees()
}
