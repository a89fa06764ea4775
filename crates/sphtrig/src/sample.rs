//! Random spherical polygons (radial jitter + replay tokens).
//!
//! Purpose
//! - Deterministic polygon fixtures for tests and benches: reproducible from a
//!   `(seed, index)` token, counter-clockwise wound, around a chosen centre.
//!
//! Model
//! - Start from `n` equally spaced bearings, add bounded angular jitter and
//!   radial (angular-distance) jitter, then project each vertex from the
//!   centre with the destination formula.
//! - With `radial_jitter = 0` all vertices lie on a small circle, so the ring
//!   is convex and encloses its centre.

use std::f64::consts::{PI, TAU};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::point::{GeoPoint, LatLon};
use crate::primitives::destination;

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radial jitter (relative amplitude). Radii = `base_radius * (1 + u)`, with `u∈[-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    /// Angular radius (radians) of the circle the vertices scatter around.
    pub base_radius: f64,
    /// Random starting bearing instead of due north.
    pub random_phase: bool,
}

impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 0.05,
            random_phase: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a counter-clockwise polygon around `center`.
pub fn draw_polygon_radial<P: GeoPoint + ?Sized>(center: &P, cfg: RadialCfg, tok: ReplayToken) -> Vec<LatLon> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.99);
    let r0 = cfg.base_radius.clamp(1e-9, PI / 2.0);
    let delta = TAU / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * TAU
    } else {
        0.0
    };
    let mut angles: Vec<f64> = (0..n)
        .map(|k| {
            let base = phase + (k as f64) * delta;
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            base + jitter
        })
        .collect();
    angles.sort_by(|a, b| a.total_cmp(b));

    let (a, b) = center.to_rad();
    // compass bearings run clockwise, so decreasing bearings wind counter-clockwise
    angles
        .into_iter()
        .map(|th| {
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u) * r0;
            let (lat, lon) = destination(a, b, r, TAU - th);
            LatLon::new(lat, lon)
        })
        .collect()
}

/// Point drawn uniformly on the sphere.
pub fn random_point<R: Rng>(rng: &mut R) -> LatLon {
    let z: f64 = rng.gen_range(-1.0..=1.0);
    let lon: f64 = rng.gen_range(-180.0..180.0);
    LatLon::new(z.asin().to_degrees(), lon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sphere::is_enclosed_by;

    #[test]
    fn reproducible_draw() {
        let center = LatLon::new(48.0, 11.0);
        let cfg = RadialCfg::default();
        let tok = ReplayToken { seed: 42, index: 7 };
        let p1 = draw_polygon_radial(&center, cfg, tok);
        let p2 = draw_polygon_radial(&center, cfg, tok);
        assert_eq!(p1, p2);
        assert_eq!(p1.len(), 12);
        let p3 = draw_polygon_radial(&center, cfg, ReplayToken { seed: 42, index: 8 });
        assert_ne!(p1, p3);
    }

    #[test]
    fn circle_draw_is_convex_and_encloses_center() {
        let cfg = RadialCfg {
            vertex_count: VertexCount::Uniform { min: 5, max: 40 },
            radial_jitter: 0.0,
            ..RadialCfg::default()
        };
        for index in 0..20 {
            let center = LatLon::new(-60.0 + 6.0 * index as f64, 170.0);
            let poly = draw_polygon_radial(&center, cfg, ReplayToken { seed: 3, index });
            assert_eq!(is_enclosed_by(&center, &poly), Ok(true));
        }
    }

    #[test]
    fn random_points_are_in_range() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..1000 {
            let p = random_point(&mut rng);
            assert!((-90.0..=90.0).contains(&p.lat()));
            assert!((-180.0..180.0).contains(&p.lon()));
        }
    }
}
