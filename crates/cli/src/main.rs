use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use facademap::prelude::*;
use serde_json::{json, Value};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod config;
mod input;
mod provenance;
mod report;

use config::CfgOverlay;

#[derive(Parser)]
#[command(name = "facademap-cli")]
#[command(about = "Turn traced floor-plan zones into facades, bearings and areas")]
struct Cmd {
    /// Optional JSON file with tracing settings; flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Analyze traced zones and write a JSON report (plus optional CSV facade table)
    Analyze(AnalyzeArgs),
    /// Derive meters per pixel from a reference line of known length
    Calibrate {
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        from: Point,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        to: Point,
        /// Real length of the reference line in meters
        #[arg(long)]
        known: f64,
    },
    /// Infer the bearing of one segment of a zone
    Orient {
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        start: Point,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        end: Point,
        /// Zone vertices as `x,y;x,y;...`
        #[arg(long, value_parser = parse_polygon, allow_hyphen_values = true)]
        polygon: Polygon,
    },
    /// Print a small provenance JSON block
    Report,
}

/// Zone vertices given on the command line.
#[derive(Debug, Clone)]
struct Polygon(Vec<Point>);

#[derive(Args, Debug, Clone)]
struct AnalyzeArgs {
    /// Zones as .json or .csv (zone,x,y)
    #[arg(long)]
    input: PathBuf,
    #[arg(long)]
    out: PathBuf,
    /// Optional CSV facade table
    #[arg(long)]
    table: Option<PathBuf>,
    #[arg(long)]
    meters_per_pixel: Option<f64>,
    /// Bearing rounding quantum in degrees (0 = none)
    #[arg(long)]
    round_to: Option<f64>,
    #[arg(long)]
    roof_height: Option<f64>,
    #[arg(long, allow_hyphen_values = true)]
    angle_adjustment: Option<f64>,
}

impl AnalyzeArgs {
    fn overlay(&self) -> CfgOverlay {
        CfgOverlay {
            round_angle_to: self.round_to,
            meters_per_pixel: self.meters_per_pixel,
            roof_height: self.roof_height,
            angle_adjustment: self.angle_adjustment,
            ..CfgOverlay::default()
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let file = config::file_layer(cmd.config.as_deref())?;
    match cmd.action {
        Action::Analyze(args) => {
            let settings = args.overlay().merged_over(file);
            analyze(&args, &settings)
        }
        Action::Calibrate { from, to, known } => calibrate(from, to, known, &file.trace_cfg()),
        Action::Orient {
            start,
            end,
            polygon,
        } => orient(start, end, &polygon.0, &file.trace_cfg()),
        Action::Report => report(),
    }
}

fn analyze(args: &AnalyzeArgs, settings: &CfgOverlay) -> Result<()> {
    tracing::info!(input = %args.input.display(), out = %args.out.display(), "analyze");
    let cfg = settings.trace_cfg();
    let calibration = Calibration::new(
        settings
            .meters_per_pixel
            .unwrap_or(Calibration::DEFAULT_METERS_PER_PIXEL),
    )?;
    let zones = input::load_zones(&args.input)?;
    if zones.is_empty() {
        bail!("{} contains no zones", args.input.display());
    }

    let set = trace_zones(&zones, calibration, cfg, settings)?;
    let rep = report::build_report(&set);
    report::write_report(&rep, &args.out)?;
    tracing::info!(
        zones = rep.zones.len(),
        facades = rep.facades.len(),
        shared = rep.connections.len(),
        "report_written"
    );
    if let Some(table) = &args.table {
        report::write_table(&set.facade_rows(), table)?;
    }

    let params = serde_json::to_value(settings).context("serializing settings")?;
    let payload = provenance::Payload::new(params).with_input(args.input.to_string_lossy());
    provenance::write_sidecar(&args.out, payload)?;
    Ok(())
}

/// Run every input zone through segment building and the zone set, in order.
///
/// Horizons are applied once all zones are in, so their indices refer to
/// each zone's final facade list (after later zones claimed shared walls).
fn trace_zones(
    zones: &[input::ZoneInput],
    calibration: Calibration,
    cfg: TraceCfg,
    settings: &CfgOverlay,
) -> Result<ZoneSet> {
    let mut set = ZoneSet::new(calibration, cfg);
    let mut traced = Vec::with_capacity(zones.len());
    for (k, zone) in zones.iter().enumerate() {
        let segments = segments_from_trace(&zone.trace(), &calibration, &cfg);
        if segments.is_empty() {
            tracing::warn!(zone = k, points = zone.points.len(), "zone has no segments; skipped");
            continue;
        }
        let roof_height = zone
            .roof_height
            .or(settings.roof_height)
            .unwrap_or(facademap::trace::DEFAULT_ROOF_HEIGHT);
        let adjustment = zone.angle_adjustment.or(settings.angle_adjustment).unwrap_or(0.0);
        traced.push((set.add_zone(segments, roof_height, adjustment), zone));
    }
    for (id, zone) in traced {
        for (index, text) in zone.horizons.iter().enumerate() {
            let horizon: HorizonSectors = text
                .parse()
                .with_context(|| format!("zone {id}: horizon `{text}`"))?;
            set.set_horizon(id, index, horizon)
                .with_context(|| format!("zone {id}: horizon for facade {index}"))?;
        }
    }
    Ok(set)
}

fn calibrate(from: Point, to: Point, known: f64, cfg: &TraceCfg) -> Result<()> {
    let summary = calibration_summary(from, to, known, cfg)?;
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn calibration_summary(from: Point, to: Point, known: f64, cfg: &TraceCfg) -> Result<Value> {
    let cal = Calibration::from_reference(&from, &to, known, cfg)?;
    Ok(json!({
        "meters_per_pixel": cal.meters_per_pixel(),
        "mm_per_pixel": cal.millimeters_per_pixel(),
    }))
}

fn orient(start: Point, end: Point, polygon: &[Point], cfg: &TraceCfg) -> Result<()> {
    let summary = orientation_summary(start, end, polygon, cfg)?;
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

/// Bearing of `start -> end` as an edge of `polygon`. A rounded 360 reads as 0.
fn orientation_summary(
    start: Point,
    end: Point,
    polygon: &[Point],
    cfg: &TraceCfg,
) -> Result<Value> {
    if start == end {
        bail!("start and end coincide; a zero-length segment has no bearing");
    }
    let angle = normalize_angle(determine_orientation(&start, &end, polygon, cfg));
    let sector = CompassSector::from_angle(angle);
    tracing::info!(angle, sector = ?sector, "orient");
    Ok(json!({
        "angle": angle,
        "sector": sector.map(|s| s.label()),
        "direction": format!("{:?}", drawing_direction(polygon)),
    }))
}

fn report() -> Result<()> {
    let obj = provenance::block(json!({}), &[], &[]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{s}`"))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("bad x in `{s}`: {e}"))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("bad y in `{s}`: {e}"))?;
    Ok(Point::new(x, y))
}

fn parse_polygon(s: &str) -> Result<Polygon, String> {
    let pts = s
        .split(';')
        .filter(|p| !p.trim().is_empty())
        .map(parse_point)
        .collect::<Result<Vec<_>, _>>()?;
    if pts.len() < 3 {
        return Err(format!("a polygon needs 3+ points, got {}", pts.len()));
    }
    Ok(Polygon(pts))
}
