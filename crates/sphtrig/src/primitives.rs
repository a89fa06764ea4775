//! Angular primitives on latitudes/longitudes.
//!
//! - Radian functions (`haversine`, `bearing`, `destination`) take
//!   latitude `a` and longitude `b` in radians, as the polygon loops use them.
//! - Degree functions (`equirectangular`, `compass_angle`) work on plain
//!   degrees and approximate the sphere locally by a scaled lat/lon plane.

use std::f64::consts::PI;

use crate::cfg::EquirectCfg;
use crate::error::{GeoError, Result};
use crate::units::{degrees180, degrees360, degrees90, degrees_to_m, unroll180, unroll_pi, wrap_pi2};
use crate::util::asin1;

#[inline]
fn hav(rad: f64) -> f64 {
    let s = (rad * 0.5).sin();
    s * s
}

/// Great-circle angular distance (radians) between latitudes `a1`, `a2` with
/// longitude delta `db`.
#[inline]
pub fn haversine(a1: f64, a2: f64, db: f64) -> f64 {
    let h = hav(a2 - a1) + a1.cos() * a2.cos() * hav(db);
    2.0 * asin1(h.sqrt())
}

/// Initial (or with `final_`, final) bearing from `(a1, b1)` to `(a2, b2)`,
/// compass radians in [0, 2π). Coincident points give an initial bearing of 0.
pub fn bearing(a1: f64, b1: f64, a2: f64, b2: f64, final_: bool, wrap: bool) -> f64 {
    // Final bearing is the reversed initial bearing of the swapped points.
    let (a1, b1, a2, b2, r) = if final_ {
        (a2, b2, a1, b1, PI)
    } else {
        (a1, b1, a2, b2, 0.0)
    };
    let (db, _) = unroll_pi(b1, b2, wrap);
    let (sa1, ca1) = a1.sin_cos();
    let (sa2, ca2) = a2.sin_cos();
    let (sdb, cdb) = db.sin_cos();
    let x = ca1 * sa2 - sa1 * ca2 * cdb;
    let y = sdb * ca2;
    wrap_pi2(y.atan2(x) + r)
}

/// Destination `(lat°, lon°)` from `(a, b)` after angular distance `r` on
/// compass bearing `t` (all radians).
pub fn destination(a: f64, b: f64, r: f64, t: f64) -> (f64, f64) {
    let (sa, ca) = a.sin_cos();
    let (sr, cr) = r.sin_cos();
    let (st, ct) = t.sin_cos();
    let a2 = asin1(ct * sr * ca + cr * sa);
    // East is positive, so the longitude offset is added.
    let d = (st * sr * ca).atan2(cr - sa * a2.sin());
    (degrees90(a2), degrees180(b + d))
}

/// Equirectangular distance and deltas between two points (degrees).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Distance4 {
    /// Squared distance in degrees².
    pub d2: f64,
    /// Latitude delta `lat2 - lat1`.
    pub dlat: f64,
    /// Longitude delta, scaled by cos(mean latitude) when adjusted.
    pub dlon: f64,
    /// Offset applied to `lon2` by unrolling.
    pub unroll: f64,
}

/// Equirectangular approximation from `(lat1, lon1)` to `(lat2, lon2)`.
///
/// Fails with `LimitExceeded` when either unscaled delta exceeds `cfg.limit`.
pub fn equirectangular(
    lat1: f64,
    lon1: f64,
    lat2: f64,
    lon2: f64,
    cfg: EquirectCfg,
) -> Result<Distance4> {
    let dlat = lat2 - lat1;
    let (mut dlon, ulon2) = unroll180(lon1, lon2, cfg.wrap);
    if cfg.limit > 0.0 && dlat.abs().max(dlon.abs()) > cfg.limit {
        tracing::debug!(dlat, dlon, limit = cfg.limit, "equirectangular limit exceeded");
        return Err(GeoError::LimitExceeded {
            dlat,
            dlon,
            limit: cfg.limit,
        });
    }
    if cfg.adjust {
        dlon *= ((lat1 + lat2) * 0.5).to_radians().cos();
    }
    Ok(Distance4 {
        d2: dlat * dlat + dlon * dlon,
        dlat,
        dlon,
        unroll: ulon2 - lon2,
    })
}

/// Equirectangular distance in the unit of `radius`.
pub fn equirectangular_distance(
    lat1: f64,
    lon1: f64,
    lat2: f64,
    lon2: f64,
    radius: f64,
    cfg: EquirectCfg,
) -> Result<f64> {
    let d = equirectangular(lat1, lon1, lat2, lon2, cfg)?;
    Ok(degrees_to_m(d.d2.sqrt(), radius))
}

/// Planar compass angle from `(lat1, lon1)` to `(lat2, lon2)`, degrees [0, 360).
pub fn compass_angle(lat1: f64, lon1: f64, lat2: f64, lon2: f64, adjust: bool, wrap: bool) -> f64 {
    let dlat = lat2 - lat1;
    let (mut dlon, _) = unroll180(lon1, lon2, wrap);
    if adjust {
        dlon *= ((lat1 + lat2) * 0.5).to_radians().cos();
    }
    degrees360(dlon.atan2(dlat))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cfg::R_M;

    fn rad(lat: f64, lon: f64) -> (f64, f64) {
        (lat.to_radians(), lon.to_radians())
    }

    #[test]
    fn haversine_cambridge_paris() {
        let (a1, b1) = rad(52.205, 0.119);
        let (a2, b2) = rad(48.857, 2.351);
        let d = haversine(a1, a2, b2 - b1) * R_M;
        assert!((d - 404_300.0).abs() < 100.0, "d={d}");
    }

    #[test]
    fn bearing_initial_and_final() {
        let (a1, b1) = rad(52.205, 0.119);
        let (a2, b2) = rad(48.857, 2.351);
        let b = bearing(a1, b1, a2, b2, false, false).to_degrees();
        assert!((b - 156.2).abs() < 0.05, "b={b}");
        let f = bearing(a1, b1, a2, b2, true, false).to_degrees();
        assert!((f - 157.9).abs() < 0.05, "f={f}");
        assert_eq!(bearing(a1, b1, a1, b1, false, false), 0.0);
    }

    #[test]
    fn destination_greenwich() {
        let (a, b) = rad(51.4778, -0.0015);
        let (lat, lon) = destination(a, b, 7794.0 / R_M, 300.7f64.to_radians());
        assert!((lat - 51.5135).abs() < 5e-5, "lat={lat}");
        assert!((lon + 0.0983).abs() < 5e-5, "lon={lon}");
    }

    #[test]
    fn equirectangular_limit_and_unroll() {
        let cfg = EquirectCfg::default();
        let err = equirectangular(0.0, 0.0, 50.0, 0.0, cfg).unwrap_err();
        assert!(matches!(err, GeoError::LimitExceeded { .. }));
        assert!(equirectangular(0.0, 0.0, 50.0, 0.0, cfg.unlimited()).is_ok());

        let wrapped = EquirectCfg { wrap: true, ..cfg };
        let d = equirectangular(0.0, 179.0, 0.0, -179.0, wrapped).unwrap();
        assert!((d.dlon - 2.0).abs() < 1e-12);
        assert!((d.unroll - 360.0).abs() < 1e-12);
        assert!(equirectangular(0.0, 179.0, 0.0, -179.0, cfg).is_err());
    }

    #[test]
    fn equirectangular_close_to_haversine_for_short_hops() {
        let cfg = EquirectCfg::default();
        let e = equirectangular_distance(52.205, 0.119, 52.215, 0.139, R_M, cfg).unwrap();
        let (a1, b1) = rad(52.205, 0.119);
        let (a2, b2) = rad(52.215, 0.139);
        let h = haversine(a1, a2, b2 - b1) * R_M;
        assert!((e - h).abs() / h < 1e-4);
    }

    #[test]
    fn compass_quadrants() {
        assert!((compass_angle(0.0, 0.0, 1.0, 0.0, true, false) - 0.0).abs() < 1e-12);
        assert!((compass_angle(0.0, 0.0, 0.0, 1.0, true, false) - 90.0).abs() < 1e-12);
        assert!((compass_angle(0.0, 0.0, -1.0, 0.0, true, false) - 180.0).abs() < 1e-12);
        assert!((compass_angle(0.0, 0.0, 0.0, -1.0, true, false) - 270.0).abs() < 1e-12);
    }
}
