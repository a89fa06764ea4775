//! Point-in-convex-polygon test on great-circle edges.
//!
//! For every edge `v_i → v_{i+1}` the great-circle normal `g_i = v_i × v_{i+1}`
//! splits the sphere in two; a point is inside a convex polygon iff it lies on
//! the same side of every edge. The same pass checks convexity: consecutive
//! normals must turn the same way as seen from the query point.
//!
//! Precondition: the ring is wound counter-clockwise as seen from outside the
//! sphere (north up, east right on a map). A clockwise ring turns the other
//! way and reports `NonConvex` once the point is on the inner side of the
//! edges seen so far; winding is never corrected here.

use std::f64::consts::FRAC_PI_2;

use crate::cfg::EPS;
use crate::error::{Degeneracy, Result};
use crate::point::{coincide, count_points, GeoPoint, LatLon};
use crate::vector::{angle_between, signed_angle, Vec3};

/// Whether the convex polygon `points` (implicitly closed) encloses `point`.
///
/// Repeated consecutive vertices are collapsed; `NonConvex { vertex }` names
/// the first copy of the offending vertex.
pub fn is_enclosed_by<Q, P>(point: &Q, points: &[P]) -> Result<bool>
where
    Q: GeoPoint + ?Sized,
    P: GeoPoint,
{
    let n = count_points(points, true, 3)?;
    let n0 = point.to_nvector();

    let mut ring: Vec<(usize, Vec3)> = Vec::with_capacity(n);
    for (i, p) in points[..n].iter().enumerate() {
        if ring.last().is_none_or(|&(j, _)| !coincide(&points[j], p, EPS)) {
            ring.push((i, p.to_nvector()));
        }
    }
    let m = ring.len();

    // reference side comes from the edge ending at the last vertex
    let (mut corner, mut v1) = ring[m - 1];
    let mut gc1 = ring[m - 2].1.cross(&v1);
    let t0 = angle_between(&gc1, &n0) > FRAC_PI_2;

    for &(i, v2) in &ring {
        let gc = v1.cross(&v2);
        if (angle_between(&gc, &n0) > FRAC_PI_2) != t0 {
            return Ok(false);
        }
        if signed_angle(&gc1, &gc, &n0) < 0.0 {
            tracing::debug!(vertex = corner, "polygon not convex");
            return Err(Degeneracy::NonConvex { vertex: corner }.into());
        }
        gc1 = gc;
        v1 = v2;
        corner = i;
    }
    Ok(true)
}

impl LatLon {
    /// Whether the convex polygon `points` encloses this point; see
    /// [`is_enclosed_by`].
    pub fn is_enclosed_by<P: GeoPoint>(&self, points: &[P]) -> Result<bool> {
        is_enclosed_by(self, points)
    }
}
