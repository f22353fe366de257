//! Layered configuration: `TraceCfg::default()` → JSON file → command-line flags.

use anyhow::{Context, Result};
use facademap::TraceCfg;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional overrides read from `--config FILE`. Every field may be omitted.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CfgOverlay {
    pub orientation_tolerance: Option<f64>,
    pub test_point_offset: Option<f64>,
    pub snap_distance: Option<f64>,
    pub round_angle_to: Option<f64>,
    pub length_decimals: Option<u32>,
    pub min_calibration_length: Option<f64>,
    pub meters_per_pixel: Option<f64>,
    pub roof_height: Option<f64>,
    pub angle_adjustment: Option<f64>,
}

impl CfgOverlay {
    pub fn load(path: &Path) -> Result<Self> {
        let raw =
            std::fs::read(path).with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_slice(&raw).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Later layers win: `self` fields override `base` where set.
    pub fn merged_over(self, base: CfgOverlay) -> CfgOverlay {
        CfgOverlay {
            orientation_tolerance: self.orientation_tolerance.or(base.orientation_tolerance),
            test_point_offset: self.test_point_offset.or(base.test_point_offset),
            snap_distance: self.snap_distance.or(base.snap_distance),
            round_angle_to: self.round_angle_to.or(base.round_angle_to),
            length_decimals: self.length_decimals.or(base.length_decimals),
            min_calibration_length: self.min_calibration_length.or(base.min_calibration_length),
            meters_per_pixel: self.meters_per_pixel.or(base.meters_per_pixel),
            roof_height: self.roof_height.or(base.roof_height),
            angle_adjustment: self.angle_adjustment.or(base.angle_adjustment),
        }
    }

    pub fn trace_cfg(&self) -> TraceCfg {
        let d = TraceCfg::default();
        TraceCfg {
            orientation_tolerance: self.orientation_tolerance.unwrap_or(d.orientation_tolerance),
            test_point_offset: self.test_point_offset.unwrap_or(d.test_point_offset),
            snap_distance: self.snap_distance.unwrap_or(d.snap_distance),
            round_angle_to: self.round_angle_to.unwrap_or(d.round_angle_to),
            length_decimals: self.length_decimals.unwrap_or(d.length_decimals),
            min_calibration_length: self.min_calibration_length.unwrap_or(d.min_calibration_length),
        }
    }
}

/// Read the file layer if given, else start empty.
pub fn file_layer(path: Option<&Path>) -> Result<CfgOverlay> {
    match path {
        Some(p) => CfgOverlay::load(p),
        None => Ok(CfgOverlay::default()),
    }
}
