//! Traced zones on disk: JSON (`[{ "points": [{ "x": .., "y": .. }, ..] }, ..]`,
//! optionally with `roof_height`, `angle_adjustment` and `horizons`)
//! or CSV with `zone,x,y` columns (rows grouped by zone, first-seen order).

use anyhow::{bail, Context, Result};
use facademap::Point;
use polars::prelude::*;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PointInput {
    pub x: f64,
    pub y: f64,
}

impl From<PointInput> for Point {
    fn from(p: PointInput) -> Self {
        Point::new(p.x, p.y)
    }
}

/// One traced zone: clicked pixel points plus optional per-zone settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ZoneInput {
    pub points: Vec<PointInput>,
    #[serde(default)]
    pub roof_height: Option<f64>,
    #[serde(default)]
    pub angle_adjustment: Option<f64>,
    /// `NN-NN-NN-NN` shading per facade, in the zone's facade order.
    #[serde(default)]
    pub horizons: Vec<String>,
}

impl ZoneInput {
    pub fn trace(&self) -> Vec<Point> {
        self.points.iter().copied().map(Point::from).collect()
    }
}

pub fn load_zones(path: &Path) -> Result<Vec<ZoneInput>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => load_json(path),
        Some("csv") => load_csv(path),
        _ => bail!("unsupported input {} (expected .json or .csv)", path.display()),
    }
}

fn load_json(path: &Path) -> Result<Vec<ZoneInput>> {
    let raw = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&raw).with_context(|| format!("parsing zones from {}", path.display()))
}

fn load_csv(path: &Path) -> Result<Vec<ZoneInput>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    tracing::debug!(rows = df.height(), cols = df.width(), "input_csv_shape");

    let zone_s = df.column("zone")?.cast(&DataType::Int64)?;
    let x_s = df.column("x")?.cast(&DataType::Float64)?;
    let y_s = df.column("y")?.cast(&DataType::Float64)?;

    let mut order: Vec<i64> = Vec::new();
    let mut zones: Vec<ZoneInput> = Vec::new();
    let rows = zone_s
        .i64()?
        .into_iter()
        .zip(x_s.f64()?.into_iter())
        .zip(y_s.f64()?.into_iter());
    for (row, ((zone, x), y)) in rows.enumerate() {
        let (Some(zone), Some(x), Some(y)) = (zone, x, y) else {
            bail!("row {row}: zone, x and y are required");
        };
        let slot = match order.iter().position(|&z| z == zone) {
            Some(i) => i,
            None => {
                order.push(zone);
                zones.push(ZoneInput {
                    points: Vec::new(),
                    roof_height: None,
                    angle_adjustment: None,
                    horizons: Vec::new(),
                });
                zones.len() - 1
            }
        };
        zones[slot].points.push(PointInput { x, y });
    }
    Ok(zones)
}
