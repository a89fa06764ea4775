//! Compare areas of rings around a pole with the spherical cap they approximate.
//!
//! Usage:
//!   cargo run -p sphtrig --example polar_cap -- [vertices]
//!
//! Prints, for a few colatitudes, the ring area, the cap area
//! `2π R² (1 − cos θ)` and their ratio; the ratio tends to 1 as the vertex
//! count grows.

use std::f64::consts::TAU;

use sphtrig::prelude::*;

fn main() {
    let n: usize = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(64)
        .max(3);
    println!("vertices={n}");
    for colat in [1.0f64, 5.0, 20.0, 45.0] {
        let ring: Vec<LatLon> = (0..n)
            .map(|k| LatLon::new(90.0 - colat, -180.0 + 360.0 * k as f64 / n as f64))
            .collect();
        let polar = is_polar(&ring, true).unwrap_or(false);
        match area_of(&ring, R_KM, true) {
            Ok(area) => {
                let cap = TAU * R_KM * R_KM * (1.0 - colat.to_radians().cos());
                println!(
                    "colat={colat:>5.1}° polar={polar} ring={area:>14.3} km² cap={cap:>14.3} km² ratio={:.6}",
                    area / cap
                );
            }
            Err(e) => eprintln!("colat={colat}: {e}"),
        }
    }
}
