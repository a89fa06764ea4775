//! Errors surfaced by the spherical operations.
//!
//! Every fallible operation fails fast with one of these values; nothing is
//! mutated before the failure is detected, so there is nothing to unwind.

use std::fmt;

/// Geometric degeneracies that make a result undefined.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Degeneracy {
    /// A start point lies at a pole relative to the other path (no triangle).
    Parallel,
    /// Both paths run along the same great circle.
    Infinite,
    /// The forward rays of both paths diverge.
    Ambiguous,
    /// The polygon turns the wrong way at `vertex` (non-convex or clockwise).
    NonConvex { vertex: usize },
    /// The n-vectors sum to zero, e.g. two antipodal points.
    UndefinedMean,
}

/// Coarse classification of a [`GeoError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    GeometricDegeneracy,
    ApproximationLimitExceeded,
    Coincidence,
}

/// Errors surfaced by the spherical operations.
#[derive(Clone, Debug, PartialEq)]
pub enum GeoError {
    /// Radius below `EPS` (or not finite).
    InvalidRadius { radius: f64 },
    /// Fewer points than the operation needs.
    TooFewPoints { needed: usize, got: usize },
    /// See [`Degeneracy`].
    Degenerate(Degeneracy),
    /// Equirectangular deltas (degrees) outside the configured limit.
    LimitExceeded { dlat: f64, dlon: f64, limit: f64 },
    /// Bearing requested between coincident points in strict mode.
    Coincident,
}

impl GeoError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GeoError::InvalidRadius { .. } | GeoError::TooFewPoints { .. } => {
                ErrorKind::InvalidArgument
            }
            GeoError::Degenerate(_) => ErrorKind::GeometricDegeneracy,
            GeoError::LimitExceeded { .. } => ErrorKind::ApproximationLimitExceeded,
            GeoError::Coincident => ErrorKind::Coincidence,
        }
    }
}

impl From<Degeneracy> for GeoError {
    fn from(d: Degeneracy) -> Self {
        GeoError::Degenerate(d)
    }
}

impl fmt::Display for Degeneracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Degeneracy::Parallel => write!(f, "intersection parallel"),
            Degeneracy::Infinite => write!(f, "intersection infinite"),
            Degeneracy::Ambiguous => write!(f, "intersection ambiguous"),
            Degeneracy::NonConvex { vertex } => {
                write!(f, "polygon non-convex at vertex {}", vertex)
            }
            Degeneracy::UndefinedMean => write!(f, "mean undefined (n-vectors sum to zero)"),
        }
    }
}

impl fmt::Display for GeoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeoError::InvalidRadius { radius } => write!(f, "radius invalid: {}", radius),
            GeoError::TooFewPoints { needed, got } => {
                write!(f, "too few points: {} (need at least {})", got, needed)
            }
            GeoError::Degenerate(d) => d.fmt(f),
            GeoError::LimitExceeded { dlat, dlon, limit } => write!(
                f,
                "delta exceeds limit: lat {:.6}°, lon {:.6}° (limit {}°)",
                dlat, dlon, limit
            ),
            GeoError::Coincident => write!(f, "coincident points"),
        }
    }
}

impl std::error::Error for GeoError {}

pub type Result<T> = std::result::Result<T, GeoError>;
