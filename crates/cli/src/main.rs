use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::{json, Value};
use sphtrig::prelude::*;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;

use input::{load_points, PointArg, PointOut};

#[derive(Parser)]
#[command(name = "sphtrig")]
#[command(about = "Spherical trigonometry on the command line (JSON output)")]
struct Cmd {
    /// Sphere radius; distances and areas come out in its unit
    #[arg(long, global = true, default_value_t = R_M)]
    radius: f64,

    /// Unroll longitude differences across the antimeridian
    #[arg(long, global = true)]
    wrap: bool,

    /// Also write the JSON result here, with a provenance sidecar
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
enum Action {
    /// Great-circle distance between two points
    Distance {
        #[arg(long, allow_hyphen_values = true)]
        from: PointArg,
        #[arg(long, allow_hyphen_values = true)]
        to: PointArg,
    },
    /// Initial and final bearing from one point to another
    Bearing {
        #[arg(long, allow_hyphen_values = true)]
        from: PointArg,
        #[arg(long, allow_hyphen_values = true)]
        to: PointArg,
    },
    /// Point reached after a distance on an initial bearing
    Destination {
        #[arg(long, allow_hyphen_values = true)]
        from: PointArg,
        #[arg(long)]
        distance: f64,
        #[arg(long, allow_hyphen_values = true)]
        bearing: f64,
    },
    /// Crossing of two paths given by start point and bearing
    Intersection {
        #[arg(long, allow_hyphen_values = true)]
        start1: PointArg,
        #[arg(long, allow_hyphen_values = true)]
        bearing1: f64,
        #[arg(long, allow_hyphen_values = true)]
        start2: PointArg,
        #[arg(long, allow_hyphen_values = true)]
        bearing2: f64,
    },
    /// Area of a polygon read from CSV/parquet (lat, lon[, height])
    Area {
        #[arg(long)]
        polygon: PathBuf,
    },
    /// Length of a path or polygon
    Perimeter {
        #[arg(long)]
        polygon: PathBuf,
        /// Treat the vertices as an open path
        #[arg(long)]
        open: bool,
    },
    /// Geographic mean of the vertices
    Mean {
        #[arg(long)]
        polygon: PathBuf,
    },
    /// Whether a convex, counter-clockwise polygon encloses a point
    Enclosed {
        #[arg(long, allow_hyphen_values = true)]
        point: PointArg,
        #[arg(long)]
        polygon: PathBuf,
    },
    /// Closest point on a path or polygon (equirectangular approximation)
    Nearest {
        #[arg(long, allow_hyphen_values = true)]
        point: PointArg,
        #[arg(long)]
        polygon: PathBuf,
        /// Include the edge from the last vertex back to the first
        #[arg(long)]
        closed: bool,
        /// Disable the 45° delta limit of the approximation
        #[arg(long)]
        unlimited: bool,
    },
    /// Cross- and along-track distance of a point from a path
    Track {
        #[arg(long, allow_hyphen_values = true)]
        point: PointArg,
        #[arg(long, allow_hyphen_values = true)]
        start: PointArg,
        #[arg(long, allow_hyphen_values = true)]
        end: PointArg,
    },
}

impl Action {
    fn name(&self) -> &'static str {
        match self {
            Action::Distance { .. } => "distance",
            Action::Bearing { .. } => "bearing",
            Action::Destination { .. } => "destination",
            Action::Intersection { .. } => "intersection",
            Action::Area { .. } => "area",
            Action::Perimeter { .. } => "perimeter",
            Action::Mean { .. } => "mean",
            Action::Enclosed { .. } => "enclosed",
            Action::Nearest { .. } => "nearest",
            Action::Track { .. } => "track",
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    tracing::info!(command = cmd.action.name(), radius = cmd.radius, wrap = cmd.wrap, "run");
    let result = run(&cmd.action, cmd.radius, cmd.wrap)?;
    let text = serde_json::to_string_pretty(&result)?;
    println!("{text}");
    if let Some(out) = &cmd.out {
        write_output(out, &text, &cmd)?;
    }
    Ok(())
}

fn run(action: &Action, radius: f64, wrap: bool) -> Result<Value> {
    let value = match action {
        Action::Distance { from, to } => {
            let p = LatLon::from(*from);
            json!({ "distance": p.distance_to(to, radius, wrap)? })
        }
        Action::Bearing { from, to } => {
            let p = LatLon::from(*from);
            json!({
                "initial": p.try_initial_bearing_to(to, wrap)?,
                "final": p.final_bearing_to(to, wrap),
            })
        }
        Action::Destination {
            from,
            distance,
            bearing,
        } => {
            let d = LatLon::from(*from).destination(*distance, *bearing, radius, None)?;
            json!({ "destination": PointOut::from(&d) })
        }
        Action::Intersection {
            start1,
            bearing1,
            start2,
            bearing2,
        } => {
            let i = intersection(start1, *bearing1, start2, *bearing2, None, wrap)?;
            json!({ "intersection": PointOut::from(&i) })
        }
        Action::Area { polygon } => {
            let pts = load_points(polygon)?;
            json!({
                "area": area_of(&pts, radius, wrap)?,
                "polar": is_polar(&pts, wrap)?,
            })
        }
        Action::Perimeter { polygon, open } => {
            let pts = load_points(polygon)?;
            json!({ "perimeter": perimeter_of(&pts, !open, radius, wrap)? })
        }
        Action::Mean { polygon } => {
            let pts = load_points(polygon)?;
            json!({ "mean": PointOut::from(&mean_of(&pts, None)?) })
        }
        Action::Enclosed { point, polygon } => {
            let pts = load_points(polygon)?;
            json!({ "enclosed": is_enclosed_by(point, &pts)? })
        }
        Action::Nearest {
            point,
            polygon,
            closed,
            unlimited,
        } => {
            let pts = load_points(polygon)?;
            let mut cfg = EquirectCfg {
                wrap,
                ..EquirectCfg::default()
            };
            if *unlimited {
                cfg = cfg.unlimited();
            }
            let n = nearest_on(point, &pts, *closed, radius, cfg)?;
            json!({
                "closest": PointOut::from(&n.closest),
                "distance": n.distance,
                "angle": n.angle,
            })
        }
        Action::Track { point, start, end } => json!({
            "cross_track": cross_track_distance_to(point, start, end, radius, wrap)?,
            "along_track": along_track_distance_to(point, start, end, radius, wrap)?,
        }),
    };
    Ok(value)
}

fn write_output(out: &Path, text: &str, cmd: &Cmd) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out, text).with_context(|| format!("writing {}", out.display()))?;
    let payload = provenance::Payload {
        command: cmd.action.name(),
        params: json!({
            "radius": cmd.radius,
            "wrap": cmd.wrap,
            "args": serde_json::to_value(&cmd.action)?,
        }),
    };
    let prov = provenance::write_sidecar(out, payload)?;
    tracing::info!(out = %out.display(), provenance = %prov.display(), "wrote result");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn pt(s: &str) -> PointArg {
        s.parse().unwrap()
    }

    fn square_csv(dir: &Path) -> PathBuf {
        let path = dir.join("square.csv");
        fs::write(&path, "lat,lon\n45,1\n45,2\n46,2\n46,1\n").unwrap();
        path
    }

    #[test]
    fn cli_parses_negative_coordinates() {
        let cmd = Cmd::try_parse_from([
            "sphtrig",
            "distance",
            "--from",
            "-33.9,151.2",
            "--to",
            "-37.8,-144.9",
            "--wrap",
        ])
        .unwrap();
        assert!(cmd.wrap);
        assert_eq!(cmd.radius, R_M);
        assert!(matches!(cmd.action, Action::Distance { .. }));
    }

    #[test]
    fn point_commands() {
        let d = run(
            &Action::Distance {
                from: pt("52.205,0.119"),
                to: pt("48.857,2.351"),
            },
            R_M,
            false,
        )
        .unwrap();
        assert!((d["distance"].as_f64().unwrap() - 404_279.7).abs() < 0.1);

        let dest = Action::Destination {
            from: pt("51.4778,-0.0015"),
            distance: 7794.0,
            bearing: 300.7,
        };
        assert!(run(&dest, 0.0, false).is_err());
        assert!((run(&dest, R_M, false).unwrap()["destination"]["lat"].as_f64().unwrap() - 51.5135).abs() < 1e-4);

        let same = Action::Bearing {
            from: pt("1,2"),
            to: pt("1,2"),
        };
        assert!(run(&same, R_M, false).is_err());

        let t = run(
            &Action::Track {
                point: pt("53.2611,-0.7972"),
                start: pt("53.3206,-1.7297"),
                end: pt("53.1887,0.1334"),
            },
            R_M,
            false,
        )
        .unwrap();
        assert!((t["cross_track"].as_f64().unwrap() + 307.5).abs() < 0.1);
    }

    #[test]
    fn polygon_commands() {
        let dir = tempdir().unwrap();
        let csv = square_csv(dir.path());

        let a = run(&Action::Area { polygon: csv.clone() }, R_M, true).unwrap();
        assert!((a["area"].as_f64().unwrap() - 8_666_058_750.7).abs() < 1.0);
        assert_eq!(a["polar"], false);

        let e = Action::Enclosed {
            point: pt("45.5,1.5"),
            polygon: csv.clone(),
        };
        assert_eq!(run(&e, R_M, false).unwrap()["enclosed"], true);

        let n = Action::Nearest {
            point: pt("44.5,1.5"),
            polygon: csv,
            closed: true,
            unlimited: false,
        };
        let v = run(&n, R_M, false).unwrap();
        assert!((v["closest"]["lat"].as_f64().unwrap() - 45.0).abs() < 1e-9);
    }

    #[test]
    fn out_writes_result_and_sidecar() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("res").join("mean.json");
        let cmd = Cmd {
            radius: R_M,
            wrap: false,
            out: Some(out.clone()),
            action: Action::Mean {
                polygon: square_csv(dir.path()),
            },
        };
        let text = serde_json::to_string_pretty(&run(&cmd.action, cmd.radius, cmd.wrap).unwrap()).unwrap();
        write_output(&out, &text, &cmd).unwrap();
        let written: Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert!((written["mean"]["lat"].as_f64().unwrap() - 45.5).abs() < 0.01);
        let prov: Value =
            serde_json::from_slice(&fs::read(dir.path().join("res").join("mean.provenance.json")).unwrap())
                .unwrap();
        assert_eq!(prov["command"], "mean");
        assert_eq!(prov["params"]["args"]["command"], "mean");
    }
}
