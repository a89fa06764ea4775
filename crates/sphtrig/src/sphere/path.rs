//! Point-to-point operations on `LatLon`.

use crate::cfg::EPS;
use crate::error::{GeoError, Result};
use crate::point::{GeoPoint, LatLon};
use crate::primitives::{bearing, destination, haversine};
use crate::units::{degrees180, degrees90, unroll_pi};
use crate::util::{acos1, check_radius};
use crate::vector::Vec3;

impl LatLon {
    /// Great-circle distance to `other` in the unit of `radius`.
    pub fn distance_to<P: GeoPoint + ?Sized>(&self, other: &P, radius: f64, wrap: bool) -> Result<f64> {
        let radius = check_radius(radius)?;
        Ok(self.angle_to(other, wrap) * radius)
    }

    /// Great-circle angular distance to `other`, radians.
    fn angle_to<P: GeoPoint + ?Sized>(&self, other: &P, wrap: bool) -> f64 {
        let (a1, b1) = self.to_rad();
        let (a2, b2) = other.to_rad();
        let (db, _) = unroll_pi(b1, b2, wrap);
        haversine(a1, a2, db)
    }

    /// Initial bearing (forward azimuth) to `other`, compass degrees.
    ///
    /// Coincident points give 0; see [`LatLon::try_initial_bearing_to`] for
    /// the strict variant.
    pub fn initial_bearing_to<P: GeoPoint + ?Sized>(&self, other: &P, wrap: bool) -> f64 {
        let (a1, b1) = self.to_rad();
        let (a2, b2) = other.to_rad();
        bearing(a1, b1, a2, b2, false, wrap).to_degrees()
    }

    /// Strict initial bearing: fails with `Coincident` when both points are
    /// less than `EPS` radians apart (any longitude at a pole is the pole).
    pub fn try_initial_bearing_to<P: GeoPoint + ?Sized>(&self, other: &P, wrap: bool) -> Result<f64> {
        if self.angle_to(other, wrap) < EPS {
            return Err(GeoError::Coincident);
        }
        Ok(self.initial_bearing_to(other, wrap))
    }

    /// Final bearing on arrival at `other`, compass degrees.
    pub fn final_bearing_to<P: GeoPoint + ?Sized>(&self, other: &P, wrap: bool) -> f64 {
        let (a1, b1) = self.to_rad();
        let (a2, b2) = other.to_rad();
        bearing(a1, b1, a2, b2, true, wrap).to_degrees()
    }

    /// Point reached after `distance` (unit of `radius`) on initial `bearing`.
    /// The height is kept unless overridden.
    pub fn destination(&self, distance: f64, bearing: f64, radius: f64, height: Option<f64>) -> Result<LatLon> {
        let radius = check_radius(radius)?;
        let (a, b) = self.to_rad();
        let (lat, lon) = destination(a, b, distance / radius, bearing.to_radians());
        Ok(LatLon::with_height(lat, lon, height.unwrap_or(self.height())))
    }

    /// Great-circle midpoint; height is the mean unless overridden.
    pub fn midpoint_to<P: GeoPoint + ?Sized>(&self, other: &P, height: Option<f64>, wrap: bool) -> LatLon {
        let (a1, b1) = self.to_rad();
        let (a2, b2) = other.to_rad();
        let (db, _) = unroll_pi(b1, b2, wrap);
        let (sa1, ca1) = a1.sin_cos();
        let (sa2, ca2) = a2.sin_cos();
        let (sdb, cdb) = db.sin_cos();
        let x = ca2 * cdb + ca1;
        let y = ca2 * sdb;
        let a = (sa1 + sa2).atan2(x.hypot(y));
        let b = y.atan2(x) + b1;
        let h = height.unwrap_or_else(|| (self.height() + other.height()) * 0.5);
        LatLon::with_height(degrees90(a), degrees180(b), h)
    }

    /// Point at `fraction` of the way to `other` (0 = self, 1 = other).
    ///
    /// Points closer than `EPS` radians are interpolated linearly.
    pub fn intermediate_to<P: GeoPoint + ?Sized>(
        &self,
        other: &P,
        fraction: f64,
        height: Option<f64>,
        wrap: bool,
    ) -> LatLon {
        let (a1, b1) = self.to_rad();
        let (a2, b2) = other.to_rad();
        let (db, b2) = unroll_pi(b1, b2, wrap);
        let r = haversine(a1, a2, db);
        let sr = r.sin();
        let (a, b) = if sr.abs() > EPS {
            let (sa1, ca1) = a1.sin_cos();
            let (sa2, ca2) = a2.sin_cos();
            let (sb1, cb1) = b1.sin_cos();
            let (sb2, cb2) = b2.sin_cos();
            let f1 = ((1.0 - fraction) * r).sin() / sr;
            let f2 = (fraction * r).sin() / sr;
            let x = f1 * ca1 * cb1 + f2 * ca2 * cb2;
            let y = f1 * ca1 * sb1 + f2 * ca2 * sb2;
            let z = f1 * sa1 + f2 * sa2;
            (z.atan2(x.hypot(y)), y.atan2(x))
        } else {
            (a1 + fraction * (a2 - a1), b1 + fraction * (b2 - b1))
        };
        let h = height.unwrap_or_else(|| self.height() + fraction * (other.height() - self.height()));
        LatLon::with_height(degrees90(a), degrees180(b), h)
    }

    /// Normal of the great circle heading on `bearing` from this point.
    ///
    /// Oriented so that the local bearing vector is `normal × n`, with `n`
    /// this point's n-vector. The result is unit length.
    pub fn great_circle(&self, bearing: f64) -> Vec3 {
        let (a, b) = self.to_rad();
        let (sa, ca) = a.sin_cos();
        let (sb, cb) = b.sin_cos();
        let (st, ct) = bearing.to_radians().sin_cos();
        Vec3::new(sb * ct - cb * sa * st, -cb * ct - sb * sa * st, ca * st)
    }

    /// Longitudes where the great circle through this point and `other`
    /// crosses latitude `lat`, or `None` if it never reaches it.
    pub fn crossing_parallels<P: GeoPoint + ?Sized>(&self, other: &P, lat: f64, wrap: bool) -> Option<(f64, f64)> {
        let (a1, b1) = self.to_rad();
        let (a2, b2) = other.to_rad();
        let a = lat.to_radians();
        let (db, _) = unroll_pi(b1, b2, wrap);
        let (sa, ca) = a.sin_cos();
        let (sa1, ca1) = a1.sin_cos();
        let (sa2, ca2) = a2.sin_cos();
        let (sdb, cdb) = db.sin_cos();

        let x = sa1 * ca2 * ca * sdb;
        let y = sa1 * ca2 * ca * cdb - ca1 * sa2 * ca;
        let z = ca1 * ca2 * sa * sdb;

        let h = x.hypot(y);
        if h < EPS || z.abs() > h {
            return None;
        }
        // longitude of the highest point, then half the span between crossings
        let m = (-y).atan2(x) + b1;
        let d = acos1(z / h);
        Some((degrees180(m - d), degrees180(m + d)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cfg::R_M;

    #[test]
    fn midpoint_and_intermediate() {
        let p1 = LatLon::new(52.205, 0.119);
        let p2 = LatLon::new(48.857, 2.351);
        let m = p1.midpoint_to(&p2, None, false);
        assert!((m.lat() - 50.5363).abs() < 5e-5, "{m:?}");
        assert!((m.lon() - 1.2746).abs() < 5e-5, "{m:?}");
        let q = p1.intermediate_to(&p2, 0.25, None, false);
        assert!((q.lat() - 51.3721).abs() < 5e-5, "{q:?}");
        assert!((q.lon() - 0.7073).abs() < 5e-5, "{q:?}");
        let half = p1.intermediate_to(&p2, 0.5, None, false);
        assert!(half.distance_to(&m, R_M, false).unwrap() < 1e-6);
    }

    #[test]
    fn intermediate_of_coincident_points() {
        let p = LatLon::with_height(10.0, 20.0, 5.0);
        let q = LatLon::with_height(10.0, 20.0, 15.0);
        let r = p.intermediate_to(&q, 0.5, None, false);
        assert!((r.lat() - 10.0).abs() < 1e-12);
        assert!((r.lon() - 20.0).abs() < 1e-12);
        assert!((r.height() - 10.0).abs() < 1e-12);
    }

    #[test]
    fn great_circle_vector() {
        let p = LatLon::new(53.3206, -1.7297);
        let g = p.great_circle(96.0);
        assert!((g.x + 0.794).abs() < 5e-4);
        assert!((g.y - 0.129).abs() < 5e-4);
        assert!((g.z - 0.594).abs() < 5e-4);
        assert!((g.norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn crossing_parallels_of_equator_path() {
        // great circle through (0,0) and (10,90) peaks at 10°N over 90°E
        let p = LatLon::new(0.0, 0.0);
        let q = LatLon::new(10.0, 90.0);
        let (l1, l2) = p.crossing_parallels(&q, 0.0, false).unwrap();
        let ls = [l1, l2];
        assert!(ls.iter().any(|l| l.abs() < 1e-9), "{ls:?}");
        assert!(ls.iter().any(|l| (l.abs() - 180.0).abs() < 1e-9), "{ls:?}");
        assert!(p.crossing_parallels(&q, 11.0, false).is_none());
    }

    #[test]
    fn strict_bearing_rejects_coincident_points() {
        let p = LatLon::new(52.205, 0.119);
        assert_eq!(p.initial_bearing_to(&p, false), 0.0);
        assert_eq!(p.try_initial_bearing_to(&p, false), Err(GeoError::Coincident));
        let q = LatLon::new(48.857, 2.351);
        let b = p.try_initial_bearing_to(&q, false).unwrap();
        assert!((b - 156.1666).abs() < 1e-3);

        // one pole under two longitudes
        let n1 = LatLon::new(90.0, 0.0);
        let n2 = LatLon::new(90.0, 50.0);
        assert_eq!(n1.try_initial_bearing_to(&n2, false), Err(GeoError::Coincident));
        let s = LatLon::new(-90.0, 10.0);
        assert!(n1.try_initial_bearing_to(&s, false).is_ok());
    }

    #[test]
    fn distance_and_destination_check_radius() {
        let p = LatLon::new(51.4778, -0.0015);
        let q = LatLon::new(48.857, 2.351);
        assert_eq!(
            p.distance_to(&q, 0.0, false),
            Err(GeoError::InvalidRadius { radius: 0.0 })
        );
        assert_eq!(
            p.destination(7794.0, 300.7, 0.0, None),
            Err(GeoError::InvalidRadius { radius: 0.0 })
        );
        assert!(p.destination(7794.0, 300.7, -R_M, None).is_err());
        assert_eq!(p.distance_to(&p, R_M, false), Ok(0.0));
    }
}
