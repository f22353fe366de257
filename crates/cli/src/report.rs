//! Output artifacts: JSON report (zones, facades, shared walls) and a CSV facade table.

use anyhow::{Context, Result};
use facademap::trace::{round_length, FacadeRow, ZoneSet};
use polars::prelude::*;
use serde::Serialize;
use std::fs::File;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct Report {
    pub version: &'static str,
    pub meters_per_pixel: f64,
    pub zones: Vec<ZoneReport>,
    pub facades: Vec<FacadeReport>,
    pub connections: Vec<ConnectionReport>,
}

#[derive(Debug, Serialize)]
pub struct ZoneReport {
    pub id: u32,
    pub name: String,
    pub area_m2: f64,
    pub roof_height: f64,
    pub angle_adjustment: f64,
    pub facades: usize,
}

#[derive(Debug, Serialize)]
pub struct FacadeReport {
    pub zone: u32,
    pub number: u32,
    pub name: String,
    pub length_m: f64,
    pub wall_area_m2: f64,
    pub angle: f64,
    /// `None` when the stored bearing is NaN.
    pub adjusted_angle: Option<f64>,
    pub horizon: String,
}

#[derive(Debug, Serialize)]
pub struct ConnectionReport {
    pub zone_a: u32,
    pub zone_b: u32,
    pub start: [f64; 2],
    pub end: [f64; 2],
    pub length_m: f64,
}

impl From<FacadeRow> for FacadeReport {
    fn from(r: FacadeRow) -> Self {
        Self {
            zone: r.zone.0,
            number: r.number,
            name: r.name,
            length_m: r.length,
            wall_area_m2: r.wall_area,
            angle: r.angle,
            adjusted_angle: r.adjusted_angle,
            horizon: r.horizon.to_string(),
        }
    }
}

pub fn build_report(set: &ZoneSet) -> Report {
    let zones = set
        .zones()
        .iter()
        .map(|z| ZoneReport {
            id: z.id.0,
            name: z.name.clone(),
            area_m2: z.area,
            roof_height: z.roof_height,
            angle_adjustment: z.angle_adjustment,
            facades: z.facades.len(),
        })
        .collect();
    let connections = set
        .connections()
        .map(|c| ConnectionReport {
            zone_a: c.zone_a.0,
            zone_b: c.zone_b.0,
            start: [c.segment.start.x, c.segment.start.y],
            end: [c.segment.end.x, c.segment.end.y],
            length_m: c.segment.length,
        })
        .collect();
    Report {
        version: facademap::VERSION,
        meters_per_pixel: set.calibration().meters_per_pixel(),
        zones,
        facades: set.facade_rows().into_iter().map(FacadeReport::from).collect(),
        connections,
    }
}

pub fn write_report(report: &Report, path: &Path) -> Result<()> {
    ensure_parent(path)?;
    std::fs::write(path, serde_json::to_vec_pretty(report)?)
        .with_context(|| format!("writing {}", path.display()))
}

/// Facade table with the column headers the spreadsheet export uses.
/// Lengths, wall areas and bearings are rounded to one decimal.
pub fn facade_table(rows: &[FacadeRow]) -> PolarsResult<DataFrame> {
    let one = |v: f64| round_length(v, 1);
    df!(
        "Sone" => rows.iter().map(|r| r.zone.0).collect::<Vec<u32>>(),
        "Fasade" => rows.iter().map(|r| r.number).collect::<Vec<u32>>(),
        "Navn" => rows.iter().map(|r| r.name.clone()).collect::<Vec<String>>(),
        "Lengde (m)" => rows.iter().map(|r| one(r.length)).collect::<Vec<f64>>(),
        "Areal (m²)" => rows.iter().map(|r| one(r.wall_area)).collect::<Vec<f64>>(),
        "Himmelretning (grader)" => rows
            .iter()
            .map(|r| r.adjusted_angle.map(one))
            .collect::<Vec<Option<f64>>>(),
        "Horisont" => rows.iter().map(|r| r.horizon.to_string()).collect::<Vec<String>>()
    )
}

pub fn write_table(rows: &[FacadeRow], path: &Path) -> Result<()> {
    ensure_parent(path)?;
    let mut df = facade_table(rows)?;
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(rows = df.height(), path = %path.display(), "facade_table");
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}
