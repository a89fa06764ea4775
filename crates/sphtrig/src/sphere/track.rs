//! Cross-track and along-track distances relative to a great-circle path.
//!
//! With `r` the angular distance start → point, `b` the bearing start → point
//! and `e` the bearing start → end, the cross-track angle is
//! `x = asin(sin r · sin(b − e))` and the along-track angle
//! `acos(cos r / cos x)`, signed by `cos(b − e)`.

use crate::cfg::EPS;
use crate::error::Result;
use crate::point::{GeoPoint, LatLon};
use crate::primitives::{bearing, haversine};
use crate::units::unroll_pi;
use crate::util::{acos1, asin1, check_radius};

/// `(r, x, e - b)` in radians; see the module docs.
fn track3<Q, S, E>(point: &Q, start: &S, end: &E, radius: f64, wrap: bool) -> Result<(f64, f64, f64)>
where
    Q: GeoPoint + ?Sized,
    S: GeoPoint + ?Sized,
    E: GeoPoint + ?Sized,
{
    check_radius(radius)?;
    let (a1, b1) = start.to_rad();
    let (a0, b0) = point.to_rad();
    let (a2, b2) = end.to_rad();

    let (db, _) = unroll_pi(b1, b0, wrap);
    let r = haversine(a1, a0, db);
    let b = bearing(a1, b1, a0, b0, false, wrap);
    let e = bearing(a1, b1, a2, b2, false, wrap);
    let x = asin1(r.sin() * (b - e).sin());
    Ok((r, x, e - b))
}

/// Signed distance from `point` to the great circle `start → end`: negative
/// to the left of the direction of travel, positive to the right.
pub fn cross_track_distance_to<Q, S, E>(point: &Q, start: &S, end: &E, radius: f64, wrap: bool) -> Result<f64>
where
    Q: GeoPoint + ?Sized,
    S: GeoPoint + ?Sized,
    E: GeoPoint + ?Sized,
{
    let (_, x, _) = track3(point, start, end, radius, wrap)?;
    Ok(x * radius)
}

/// Signed distance from `start` to the foot of the perpendicular dropped from
/// `point` onto the great circle `start → end`; negative before `start`.
///
/// A point 90° off the path has no defined foot; the result is then 0.
pub fn along_track_distance_to<Q, S, E>(point: &Q, start: &S, end: &E, radius: f64, wrap: bool) -> Result<f64>
where
    Q: GeoPoint + ?Sized,
    S: GeoPoint + ?Sized,
    E: GeoPoint + ?Sized,
{
    let (r, x, d) = track3(point, start, end, radius, wrap)?;
    let cx = x.cos();
    if cx.abs() > EPS {
        Ok(acos1(r.cos() / cx).copysign(d.cos()) * radius)
    } else {
        Ok(0.0)
    }
}

impl LatLon {
    /// See [`cross_track_distance_to`].
    pub fn cross_track_distance_to<S, E>(&self, start: &S, end: &E, radius: f64, wrap: bool) -> Result<f64>
    where
        S: GeoPoint + ?Sized,
        E: GeoPoint + ?Sized,
    {
        cross_track_distance_to(self, start, end, radius, wrap)
    }

    /// See [`along_track_distance_to`].
    pub fn along_track_distance_to<S, E>(&self, start: &S, end: &E, radius: f64, wrap: bool) -> Result<f64>
    where
        S: GeoPoint + ?Sized,
        E: GeoPoint + ?Sized,
    {
        along_track_distance_to(self, start, end, radius, wrap)
    }
}
