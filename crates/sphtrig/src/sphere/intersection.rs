//! Intersection of two paths, each given by a start point and an initial
//! bearing.
//!
//! Model
//! - Solve the spherical triangle (start1, start2, intersection): the side
//!   start1–start2 comes from the haversine distance, the base angles from the
//!   law of cosines, the angle at the intersection from the polar law of
//!   cosines. The result is projected from start1 along its own bearing.
//! - Near-coincident starts short-circuit to their average (the triangle is
//!   singular there).
//!
//! Failure modes
//! - `Parallel`: a start lies (numerically) at a pole of the triangle.
//! - `Infinite`: both paths run along the same great circle.
//! - `Ambiguous`: the forward rays diverge (the only crossing lies behind).

use std::f64::consts::TAU;

use crate::cfg::EPS;
use crate::error::{Degeneracy, Result};
use crate::point::{GeoPoint, LatLon};
use crate::primitives::{destination, haversine};
use crate::units::{degrees180, degrees90, unroll_pi, wrap_pi, wrap_pi2};
use crate::util::acos1;

/// Intersection of the path from `start1` on `bearing1` with the path from
/// `start2` on `bearing2` (compass degrees).
///
/// The height is the mean of both start heights unless overridden.
pub fn intersection<P1, P2>(
    start1: &P1,
    bearing1: f64,
    start2: &P2,
    bearing2: f64,
    height: Option<f64>,
    wrap: bool,
) -> Result<LatLon>
where
    P1: GeoPoint + ?Sized,
    P2: GeoPoint + ?Sized,
{
    let (a1, b1) = start1.to_rad();
    let (a2, b2) = start2.to_rad();
    let (db, b2) = unroll_pi(b1, b2, wrap);

    let r12 = haversine(a1, a2, db);
    let (lat, lon) = if r12.abs() < EPS {
        (degrees90((a1 + a2) * 0.5), degrees180((b1 + b2) * 0.5))
    } else {
        let (sa1, ca1) = a1.sin_cos();
        let (sa2, ca2) = a2.sin_cos();
        let (sr12, cr12) = r12.sin_cos();
        let (x1, x2) = (sr12 * ca1, sr12 * ca2);
        if x1.abs() < EPS || x2.abs() < EPS {
            tracing::debug!(x1, x2, "intersection parallel");
            return Err(Degeneracy::Parallel.into());
        }

        // bearings start1 → start2 and start2 → start1
        let t1 = acos1((sa2 - sa1 * cr12) / x1);
        let t2 = acos1((sa1 - sa2 * cr12) / x2);
        let (t12, t21) = if db.sin() > 0.0 {
            (t1, TAU - t2)
        } else {
            (TAU - t1, t2)
        };

        let t13 = wrap_pi2(bearing1.to_radians());
        let t23 = wrap_pi2(bearing2.to_radians());
        // angles 2-1-3 and 1-2-3
        let (sx1, cx1) = wrap_pi(t13 - t12).sin_cos();
        let (sx2, cx2) = wrap_pi(t21 - t23).sin_cos();
        if sx1.abs() < EPS && sx2.abs() < EPS {
            tracing::debug!(sx1, sx2, "intersection infinite");
            return Err(Degeneracy::Infinite.into());
        }
        let sx3 = sx1 * sx2;
        if sx3 < 0.0 {
            tracing::debug!(sx1, sx2, "intersection ambiguous");
            return Err(Degeneracy::Ambiguous.into());
        }

        let x3 = acos1(cr12 * sx3 - cx2 * cx1);
        let r13 = (sr12 * sx3).atan2(cx2 + cx1 * x3.cos());
        destination(a1, b1, r13, t13)
    };

    let h = height.unwrap_or_else(|| (start1.height() + start2.height()) * 0.5);
    Ok(LatLon::with_height(lat, lon, h))
}

impl LatLon {
    /// Intersection of the path from this point on `bearing` with the path
    /// from `start2` on `bearing2`; see [`intersection`].
    pub fn intersection<P: GeoPoint + ?Sized>(
        &self,
        bearing: f64,
        start2: &P,
        bearing2: f64,
        height: Option<f64>,
        wrap: bool,
    ) -> Result<LatLon> {
        intersection(self, bearing, start2, bearing2, height, wrap)
    }
}
