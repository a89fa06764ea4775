//! Tolerances, earth radii and approximation options.
//!
//! Policy
//! - Tolerances are fixed constants; call sites do not juggle their own.
//! - Radii are in metres unless the name says otherwise. Every distance an
//!   operation returns is in the unit of the radius it was given.

/// Machine epsilon, used as the coincidence/degeneracy threshold throughout.
pub const EPS: f64 = f64::EPSILON;

/// Mean spherical earth radius (metres).
pub const R_M: f64 = 6_371_008.771_415;
/// Mean spherical earth radius (kilometres).
pub const R_KM: f64 = R_M * 1.0e-3;
/// Mean spherical earth radius (international nautical miles).
pub const R_NM: f64 = R_M / 1852.0;
/// Mean spherical earth radius (statute miles).
pub const R_SM: f64 = R_M / 1609.344;
/// Former FAI sphere radius (metres).
pub const R_FM: f64 = 6_371_000.0;
/// Aviation/navigation earth radius (metres).
pub const R_VM: f64 = 6_366_707.019_493_7;

/// Default validity limit of the equirectangular approximation (degrees).
pub const LIMIT_DEG: f64 = 45.0;

/// Options of the equirectangular approximation.
///
/// - `adjust`: scale longitudinal deltas by the cosine of the mean latitude.
/// - `limit`: largest lat/lon delta (degrees) accepted; `<= 0` disables the check.
/// - `wrap`: unroll longitude deltas across the antimeridian.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EquirectCfg {
    pub adjust: bool,
    pub limit: f64,
    pub wrap: bool,
}

impl Default for EquirectCfg {
    fn default() -> Self {
        Self {
            adjust: true,
            limit: LIMIT_DEG,
            wrap: false,
        }
    }
}

impl EquirectCfg {
    /// Same options without any limit check.
    #[inline]
    pub fn unlimited(self) -> Self {
        Self { limit: 0.0, ..self }
    }
}
