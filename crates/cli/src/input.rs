use anyhow::{anyhow, bail, Context, Result};
use polars::prelude::*;
use serde::Serialize;
use sphtrig::{GeoPoint, LatLon};
use std::path::Path;
use std::str::FromStr;

/// Point given on the command line as `LAT,LON[,HEIGHT]` (degrees).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PointArg {
    pub lat: f64,
    pub lon: f64,
    pub height: f64,
}

impl FromStr for PointArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if !(2..=3).contains(&parts.len()) {
            return Err(format!("expected LAT,LON[,HEIGHT], got {s:?}"));
        }
        let num = |t: &str| t.parse::<f64>().map_err(|e| format!("{t:?}: {e}"));
        let lat = num(parts[0])?;
        let lon = num(parts[1])?;
        let height = parts.get(2).map(|t| num(t)).transpose()?.unwrap_or(0.0);
        if !(-90.0..=90.0).contains(&lat) {
            return Err(format!("latitude {lat} out of [-90, 90]"));
        }
        Ok(Self { lat, lon, height })
    }
}

impl GeoPoint for PointArg {
    fn lat(&self) -> f64 {
        self.lat
    }
    fn lon(&self) -> f64 {
        self.lon
    }
    fn height(&self) -> f64 {
        self.height
    }
}

impl From<PointArg> for LatLon {
    fn from(p: PointArg) -> Self {
        LatLon::with_height(p.lat, p.lon, p.height)
    }
}

/// Serializable view of a result point.
#[derive(Debug, Serialize)]
pub struct PointOut {
    pub lat: f64,
    pub lon: f64,
    pub height: f64,
}

impl<P: GeoPoint> From<&P> for PointOut {
    fn from(p: &P) -> Self {
        Self {
            lat: p.lat(),
            lon: p.lon(),
            height: p.height(),
        }
    }
}

fn scan(path: &Path) -> Result<LazyFrame> {
    let lf = match path.extension().and_then(|e| e.to_str()) {
        Some("parquet") => LazyFrame::scan_parquet(path, ScanArgsParquet::default())?,
        Some("csv") => LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(Some(100))
            .finish()?,
        _ => bail!("unsupported input {} (expected .csv or .parquet)", path.display()),
    };
    Ok(lf)
}

fn f64_column(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let s = df
        .column(name)
        .with_context(|| format!("missing column {name:?}"))?
        .cast(&DataType::Float64)?;
    s.f64()?
        .into_iter()
        .enumerate()
        .map(|(row, v)| v.ok_or_else(|| anyhow!("null {name} in row {row}")))
        .collect()
}

/// Read vertices from a table with `lat`, `lon` and optional `height` columns.
pub fn load_points(path: &Path) -> Result<Vec<LatLon>> {
    let df = scan(path)
        .and_then(|lf| Ok(lf.collect()?))
        .with_context(|| format!("reading {}", path.display()))?;
    let lat = f64_column(&df, "lat")?;
    let lon = f64_column(&df, "lon")?;
    let height = if df.column("height").is_ok() {
        f64_column(&df, "height")?
    } else {
        vec![0.0; lat.len()]
    };
    tracing::info!(path = %path.display(), rows = df.height(), "loaded points");
    Ok(lat
        .into_iter()
        .zip(lon)
        .zip(height)
        .map(|((lat, lon), h)| LatLon::with_height(lat, lon, h))
        .collect())
}
