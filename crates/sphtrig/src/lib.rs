//! Spherical trigonometry on a spherical earth model.
//!
//! Geodesic (great-circle) distance, bearings, destinations, path
//! intersections, polygon area/perimeter/mean, convex enclosure, nearest
//! point on a path and cross-/along-track distances.
//!
//! Layout
//! - `units`, `util`, `vector`: angle wrapping, numeric helpers, n-vectors.
//! - `primitives`: radian-level haversine/bearing/destination and the
//!   equirectangular approximation.
//! - `point`: the `GeoPoint` trait and the `LatLon` value type.
//! - `sphere`: the path and polygon algorithms.
//! - `sample`: reproducible random polygons for tests and benches.
//!
//! API Policy
//! - Internal crate, no stable public API. Breaking changes are fine when
//!   they improve the design.

pub mod cfg;
pub mod error;
pub mod point;
pub mod primitives;
pub mod sample;
pub mod sphere;
pub mod units;
pub mod util;
pub mod vector;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::{EquirectCfg, R_M};
pub use error::{Degeneracy, ErrorKind, GeoError, Result};
pub use point::{GeoPoint, LatLon};
pub use vector::Vec3;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::{EquirectCfg, R_FM, R_KM, R_M, R_NM, R_SM, R_VM};
    pub use crate::error::{Degeneracy, GeoError};
    pub use crate::point::{GeoPoint, LatLon};
    pub use crate::sample::{draw_polygon_radial, RadialCfg, ReplayToken, VertexCount};
    pub use crate::sphere::{
        along_track_distance_to, area_of, cross_track_distance_to, intersection, is_enclosed_by,
        is_polar, mean_of, nearest_on, perimeter_of, Nearest,
    };
    pub use crate::vector::Vec3;
}
