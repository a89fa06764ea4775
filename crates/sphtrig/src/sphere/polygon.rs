//! Polygon measures: area, pole enclosure, perimeter and geographic mean.
//!
//! Area follows Karney's edge-excess form: for each edge,
//!
//! ```text
//!              tan(Δλ/2) · (tan(φ1/2) + tan(φ2/2))
//!   tan(E/2) = ------------------------------------
//!                   1 + tan(φ1/2) · tan(φ2/2)
//! ```
//!
//! where E is the excess of the trapezium between the edge and the equator.
//! The excess terms are summed with compensation; a polygon around a pole
//! wraps the full sphere, so its sum is corrected by 2π.

use std::f64::consts::TAU;

use crate::cfg::EPS;
use crate::error::{Degeneracy, GeoError, Result};
use crate::point::{coincide, count_points, edge_start, min_points, GeoPoint, LatLon};
use crate::primitives::{bearing, haversine};
use crate::units::{unroll_pi, wrap180};
use crate::util::{check_radius, fsum, tan_2, Fsum};
use crate::vector::{sum_of, to_lat_lon};

/// Area of the (implicitly closed) polygon, in `radius` units squared.
///
/// `wrap` governs both the excess terms and the pole test, so the two always
/// agree on how longitude differences cross the antimeridian.
pub fn area_of<P: GeoPoint>(points: &[P], radius: f64, wrap: bool) -> Result<f64> {
    let radius = check_radius(radius)?;
    let n = count_points(points, true, 3)?;
    let ring = &points[..n];

    let (a1, mut b1) = ring[n - 1].to_rad();
    let mut ta1 = tan_2(a1);
    let mut s = Fsum::new();
    for p in ring {
        let (a2, b2) = p.to_rad();
        let (db, b2) = unroll_pi(b1, b2, wrap);
        let ta2 = tan_2(a2);
        s.add((tan_2(db) * (ta1 + ta2)).atan2(1.0 + ta1 * ta2));
        ta1 = ta2;
        b1 = b2;
    }
    let mut s = s.value() * 2.0;
    if pole_enclosed(ring, wrap) {
        s = s.abs() - TAU;
    }
    debug_assert!(s.is_finite() && s.abs() <= 2.0 * TAU, "spherical excess {s} out of range");
    Ok((s * radius * radius).abs())
}

/// Whether the (implicitly closed) polygon encloses a geographic pole.
pub fn is_polar<P: GeoPoint>(points: &[P], wrap: bool) -> Result<bool> {
    let n = count_points(points, true, 3)?;
    Ok(pole_enclosed(&points[..n], wrap))
}

/// Sum of course changes around the ring: turns at the vertices plus the
/// bearing drift along each great-circle edge. A ring around a pole sums to
/// about 0° instead of ±360°.
fn pole_enclosed<P: GeoPoint>(ring: &[P], wrap: bool) -> bool {
    let n = ring.len();
    // (initial, final) bearing of each non-degenerate edge, degrees
    let mut courses: Vec<(f64, f64)> = Vec::with_capacity(n);
    let mut p1 = &ring[n - 1];
    for p2 in ring {
        if coincide(p1, p2, EPS) {
            continue;
        }
        let (a1, b1) = p1.to_rad();
        let (a2, b2) = p2.to_rad();
        courses.push((
            bearing(a1, b1, a2, b2, false, wrap).to_degrees(),
            bearing(a1, b1, a2, b2, true, wrap).to_degrees(),
        ));
        p1 = p2;
    }
    let Some(&(_, last_final)) = courses.last() else {
        return false;
    };
    let mut prev = last_final;
    let mut s = Fsum::new();
    for &(initial, fin) in &courses {
        s.add(wrap180(initial - prev));
        s.add(wrap180(fin - initial));
        prev = fin;
    }
    s.value().abs() < 90.0
}

/// Length of the polygon's edges (including last → first when `closed`),
/// in the unit of `radius`.
pub fn perimeter_of<P: GeoPoint>(points: &[P], closed: bool, radius: f64, wrap: bool) -> Result<f64> {
    let radius = check_radius(radius)?;
    let n = count_points(points, closed, min_points(closed))?;
    let (first, from) = edge_start(closed, n);

    let (mut a1, mut b1) = points[first].to_rad();
    let mut s = Fsum::new();
    for p in &points[from..n] {
        let (a2, b2) = p.to_rad();
        let (db, b2) = unroll_pi(b1, b2, wrap);
        s.add(haversine(a1, a2, db));
        a1 = a2;
        b1 = b2;
    }
    Ok(s.value() * radius)
}

/// Geographic mean: the normalized sum of the points' n-vectors.
///
/// The height is the arithmetic mean of the heights unless overridden.
pub fn mean_of<P: GeoPoint>(points: &[P], height: Option<f64>) -> Result<LatLon> {
    if points.is_empty() {
        return Err(GeoError::TooFewPoints { needed: 1, got: 0 });
    }
    let m = sum_of(points.iter().map(|p| p.to_nvector()));
    let norm = m.norm();
    if norm < EPS {
        tracing::debug!(points = points.len(), "mean of n-vectors vanishes");
        return Err(Degeneracy::UndefinedMean.into());
    }
    let (lat, lon) = to_lat_lon(&(m / norm));
    let h = height.unwrap_or_else(|| fsum(points.iter().map(|p| p.height())) / points.len() as f64);
    Ok(LatLon::with_height(lat, lon, h))
}
