//! Small numeric helpers: clamped inverse trig, half-angle tangent,
//! compensated summation and argument checks.

use crate::cfg::EPS;
use crate::error::{GeoError, Result};

/// `acos` with its argument clamped to [-1, 1] (absorbs round-off).
#[inline]
pub fn acos1(x: f64) -> f64 {
    x.clamp(-1.0, 1.0).acos()
}

/// `asin` with its argument clamped to [-1, 1].
#[inline]
pub fn asin1(x: f64) -> f64 {
    x.clamp(-1.0, 1.0).asin()
}

/// `tan(rad / 2)`.
#[inline]
pub fn tan_2(rad: f64) -> f64 {
    (rad * 0.5).tan()
}

/// Neumaier compensated sum.
///
/// Keeps a running correction term so that long runs of similar-magnitude
/// addends (polygon edge terms) do not lose their low-order bits.
#[derive(Clone, Copy, Debug, Default)]
pub struct Fsum {
    sum: f64,
    comp: f64,
}

impl Fsum {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn add(&mut self, x: f64) {
        let t = self.sum + x;
        if self.sum.abs() >= x.abs() {
            self.comp += (self.sum - t) + x;
        } else {
            self.comp += (x - t) + self.sum;
        }
        self.sum = t;
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.sum + self.comp
    }
}

impl Extend<f64> for Fsum {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for x in iter {
            self.add(x);
        }
    }
}

impl FromIterator<f64> for Fsum {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut s = Fsum::new();
        s.extend(iter);
        s
    }
}

/// Compensated sum of `values`.
#[inline]
pub fn fsum<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    values.into_iter().collect::<Fsum>().value()
}

/// Reject radii below `EPS` (and non-finite ones).
#[inline]
pub fn check_radius(radius: f64) -> Result<f64> {
    if radius.is_finite() && radius >= EPS {
        Ok(radius)
    } else {
        Err(GeoError::InvalidRadius { radius })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fsum_beats_naive_on_cancellation() {
        let xs = [1.0, 1e100, 1.0, -1e100];
        let naive: f64 = xs.iter().sum();
        assert_eq!(naive, 0.0);
        assert_eq!(fsum(xs), 2.0);
    }

    #[test]
    fn fsum_many_small_terms() {
        let s = fsum(std::iter::repeat(0.1).take(10_000));
        assert!((s - 1000.0).abs() < 1e-10);
    }

    #[test]
    fn clamped_inverse_trig() {
        assert_eq!(acos1(1.0 + 1e-15), 0.0);
        assert!((acos1(-1.5) - std::f64::consts::PI).abs() < 1e-15);
        assert!((asin1(2.0) - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
    }

    #[test]
    fn radius_checks() {
        assert!(check_radius(1.0).is_ok());
        assert!(matches!(
            check_radius(0.0),
            Err(GeoError::InvalidRadius { .. })
        ));
        assert!(check_radius(f64::NAN).is_err());
    }
}
