//! Closest point on a path or polygon, by equirectangular approximation.
//!
//! Each edge is projected in the locally flat lat/lon plane anchored at its
//! first vertex; the projection is clamped onto the edge and the nearest
//! candidate over all edges wins. Accuracy degrades with edge length, and any
//! delta beyond the configured limit fails with `LimitExceeded` instead of
//! returning a poor answer. Callers needing exact figures re-derive them from
//! `closest` with the haversine/bearing methods.

use crate::cfg::{EquirectCfg, EPS};
use crate::error::{GeoError, Result};
use crate::point::{count_points, edge_start, min_points, GeoPoint, LatLon};
use crate::primitives::{compass_angle, equirectangular};
use crate::units::{degrees_to_m, wrap180, wrap90};
use crate::util::check_radius;

/// Closest point with its approximate distance and compass angle.
#[derive(Clone, Debug, PartialEq)]
pub struct Nearest {
    /// Closest point on the path; height interpolated along its edge.
    pub closest: LatLon,
    /// Equirectangular distance from the query point, unit of `radius`.
    pub distance: f64,
    /// Compass angle (degrees [0, 360)) from the query point to `closest`.
    pub angle: f64,
}

/// Candidate on one edge: squared distance (deg²), lat, lon (unrolled), height.
struct Candidate {
    d2: f64,
    lat: f64,
    lon: f64,
    height: f64,
}

fn project_on_edge<Q, P>(point: &Q, p1: &P, p2: &P, cfg: EquirectCfg) -> Result<Candidate>
where
    Q: GeoPoint + ?Sized,
    P: GeoPoint,
{
    let edge = equirectangular(p1.lat(), p1.lon(), p2.lat(), p2.lon(), cfg)?;
    let to_q = equirectangular(p1.lat(), p1.lon(), point.lat(), point.lon(), cfg)?;
    let f = if edge.d2 > EPS {
        ((to_q.dlat * edge.dlat + to_q.dlon * edge.dlon) / edge.d2).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let lon2 = p2.lon() + edge.unroll;
    let lat = p1.lat() + f * (p2.lat() - p1.lat());
    let lon = p1.lon() + f * (lon2 - p1.lon());
    let height = p1.height() + f * (p2.height() - p1.height());
    let d = equirectangular(point.lat(), point.lon(), lat, lon, cfg)?;
    Ok(Candidate {
        d2: d.d2,
        lat,
        lon,
        height,
    })
}

/// Closest point to `point` on the path `points` (closed when `closed`).
pub fn nearest_on<Q, P>(
    point: &Q,
    points: &[P],
    closed: bool,
    radius: f64,
    cfg: EquirectCfg,
) -> Result<Nearest>
where
    Q: GeoPoint + ?Sized,
    P: GeoPoint,
{
    let radius = check_radius(radius)?;
    let n = count_points(points, closed, min_points(closed))?;
    let (first, from) = edge_start(closed, n);

    let mut best: Option<Candidate> = None;
    let mut p1 = &points[first];
    for p2 in &points[from..n] {
        let c = project_on_edge(point, p1, p2, cfg)?;
        if best.as_ref().is_none_or(|b| c.d2 < b.d2) {
            best = Some(c);
        }
        p1 = p2;
    }
    let Some(best) = best else {
        return Err(GeoError::TooFewPoints {
            needed: min_points(closed),
            got: n,
        });
    };

    let angle = compass_angle(point.lat(), point.lon(), best.lat, best.lon, cfg.adjust, cfg.wrap);
    Ok(Nearest {
        closest: LatLon::with_height(wrap90(best.lat), wrap180(best.lon), best.height),
        distance: degrees_to_m(best.d2.sqrt(), radius),
        angle,
    })
}

impl LatLon {
    /// Closest point on the path `points`; see [`nearest_on`].
    pub fn nearest_on<P: GeoPoint>(
        &self,
        points: &[P],
        closed: bool,
        radius: f64,
        cfg: EquirectCfg,
    ) -> Result<Nearest> {
        nearest_on(self, points, closed, radius, cfg)
    }

    /// Closest point on the single edge `p1 → p2`.
    pub fn nearest_on_segment<P: GeoPoint>(
        &self,
        p1: &P,
        p2: &P,
        radius: f64,
        cfg: EquirectCfg,
    ) -> Result<LatLon> {
        let edge = [p1, p2];
        Ok(nearest_on(self, &edge, false, radius, cfg)?.closest)
    }
}
