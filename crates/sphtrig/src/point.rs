//! Geographic points and the capability surface polygon inputs must offer.
//!
//! - `GeoPoint`: what every algorithm needs from an input element (lat/lon in
//!   degrees, height, n-vector). Polygon and path functions are generic over
//!   it, so any indexable `&[P]` is accepted.
//! - `LatLon`: the concrete immutable point returned by all operations. Its
//!   n-vector is computed on first use and memoized per instance.

use std::sync::OnceLock;

use crate::cfg::EPS;
use crate::error::{GeoError, Result};
use crate::vector::{nvector, Vec3};

/// Capability surface of a point on the sphere.
pub trait GeoPoint {
    /// Latitude in degrees.
    fn lat(&self) -> f64;
    /// Longitude in degrees.
    fn lon(&self) -> f64;
    /// Height, in the caller's distance unit.
    fn height(&self) -> f64 {
        0.0
    }
    /// `(lat, lon)` in radians.
    fn to_rad(&self) -> (f64, f64) {
        (self.lat().to_radians(), self.lon().to_radians())
    }
    /// Unit n-vector of this point.
    fn to_nvector(&self) -> Vec3 {
        let (a, b) = self.to_rad();
        nvector(a, b)
    }
}

/// Point on a spherical earth model: latitude, longitude (degrees), height.
#[derive(Clone, Debug)]
pub struct LatLon {
    lat: f64,
    lon: f64,
    height: f64,
    nvec: OnceLock<Vec3>,
}

impl LatLon {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self::with_height(lat, lon, 0.0)
    }

    #[inline]
    pub fn with_height(lat: f64, lon: f64, height: f64) -> Self {
        Self {
            lat,
            lon,
            height,
            nvec: OnceLock::new(),
        }
    }

    /// Copy the coordinates of any `GeoPoint`.
    #[inline]
    pub fn from_point<P: GeoPoint + ?Sized>(p: &P) -> Self {
        Self::with_height(p.lat(), p.lon(), p.height())
    }

    /// Whether both coordinates agree within `eps` degrees (height ignored).
    #[inline]
    pub fn equals<P: GeoPoint + ?Sized>(&self, other: &P, eps: f64) -> bool {
        coincide(self, other, eps)
    }
}

impl PartialEq for LatLon {
    fn eq(&self, other: &Self) -> bool {
        self.lat == other.lat && self.lon == other.lon && self.height == other.height
    }
}

impl From<(f64, f64)> for LatLon {
    fn from((lat, lon): (f64, f64)) -> Self {
        LatLon::new(lat, lon)
    }
}

impl GeoPoint for LatLon {
    #[inline]
    fn lat(&self) -> f64 {
        self.lat
    }
    #[inline]
    fn lon(&self) -> f64 {
        self.lon
    }
    #[inline]
    fn height(&self) -> f64 {
        self.height
    }
    /// Compute-or-fetch: the first caller fills the cache, later calls copy it.
    #[inline]
    fn to_nvector(&self) -> Vec3 {
        *self.nvec.get_or_init(|| {
            let (a, b) = self.to_rad();
            nvector(a, b)
        })
    }
}

/// `(lat, lon)` tuples in degrees, height 0.
impl GeoPoint for (f64, f64) {
    #[inline]
    fn lat(&self) -> f64 {
        self.0
    }
    #[inline]
    fn lon(&self) -> f64 {
        self.1
    }
}

impl<P: GeoPoint + ?Sized> GeoPoint for &P {
    #[inline]
    fn lat(&self) -> f64 {
        (**self).lat()
    }
    #[inline]
    fn lon(&self) -> f64 {
        (**self).lon()
    }
    #[inline]
    fn height(&self) -> f64 {
        (**self).height()
    }
    #[inline]
    fn to_nvector(&self) -> Vec3 {
        (**self).to_nvector()
    }
}

/// Whether `p` and `q` agree in latitude and longitude within `eps` degrees.
#[inline]
pub fn coincide<P: GeoPoint + ?Sized, Q: GeoPoint + ?Sized>(p: &P, q: &Q, eps: f64) -> bool {
    (p.lat() - q.lat()).abs().max((p.lon() - q.lon()).abs()) <= eps
}

/// Length of the usable prefix of `points`; fails unless it holds at least
/// `needed` distinct vertices.
///
/// For a `closed` ring, trailing vertices repeating the first one are cut
/// (the closing edge is implicit). Runs of coincident consecutive vertices
/// count once; they stay in the prefix and callers skip their zero-length
/// edges.
pub(crate) fn count_points<P: GeoPoint>(points: &[P], closed: bool, needed: usize) -> Result<usize> {
    let mut n = points.len();
    if closed {
        while n > 1 && coincide(&points[n - 1], &points[0], EPS) {
            n -= 1;
        }
    }
    let distinct = match n {
        0 => 0,
        _ => 1 + points[..n].windows(2).filter(|w| !coincide(&w[0], &w[1], EPS)).count(),
    };
    if distinct < needed {
        return Err(GeoError::TooFewPoints { needed, got: distinct });
    }
    Ok(n)
}

/// `(first, from)`: index of the first edge's start vertex and the index the
/// edge loop starts at. A closed ring starts with the edge last → first.
#[inline]
pub(crate) fn edge_start(closed: bool, n: usize) -> (usize, usize) {
    if closed {
        (n - 1, 0)
    } else {
        (0, 1)
    }
}

/// Minimum vertices of an open path or closed polygon.
#[inline]
pub(crate) fn min_points(closed: bool) -> usize {
    if closed {
        3
    } else {
        2
    }
}
