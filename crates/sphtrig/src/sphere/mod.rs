//! Great-circle paths and polygons on a sphere.
//!
//! Purpose
//! - Closed-form answers for navigation-style queries: intersections of two
//!   directed paths, polygon area/perimeter/mean, convex enclosure,
//!   nearest point on a path and cross-/along-track deviation.
//!
//! Conventions
//! - Inputs are degrees (latitudes, longitudes, compass bearings); internal
//!   work is in radians. Outputs are normalized: latitude [-90, 90],
//!   longitude (-180, 180], bearings [0, 360).
//! - `wrap` unrolls longitude differences across the antimeridian per edge.
//! - Distances come out in the unit of the `radius` passed in (`R_M` metres
//!   by default in callers).
//! - Polygons are `&[P]` for any `P: GeoPoint`; closed rings may or may not
//!   repeat their first vertex.
//!
//! Layout
//! - `path`: point-to-point operations as `LatLon` methods.
//! - `intersection`, `polygon`, `enclosure`, `nearest`, `track`: the
//!   path/polygon algorithms, each with a free function and a method form.

mod enclosure;
mod intersection;
mod nearest;
mod path;
mod polygon;
mod track;

pub use enclosure::is_enclosed_by;
pub use intersection::intersection;
pub use nearest::{nearest_on, Nearest};
pub use polygon::{area_of, is_polar, mean_of, perimeter_of};
pub use track::{along_track_distance_to, cross_track_distance_to};
