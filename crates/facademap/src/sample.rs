//! Random star-shaped zones (radial jitter + replay tokens).
//!
//! Purpose
//! - Deterministic traced-zone fixtures for property tests and benchmarks.
//!   Every sample is star-shaped around its center, which is exactly the class
//!   of zones `geom::polygon_area_from_lines` handles correctly.
//!
//! Model
//! - `n` equally spaced angles on [0, 2π) plus bounded angular and radial
//!   jitter, emitted in increasing angle (counterclockwise in y-up terms,
//!   clockwise on a y-down screen).
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom::Point;

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

/// Sampler configuration (pixel units).
#[derive(Clone, Copy, Debug)]
pub struct StarZoneCfg {
    pub vertex_count: VertexCount,
    pub center: Point,
    /// Base radius in pixels.
    pub radius: f64,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radial jitter (relative). Radii = `radius * (1 + u)`, `u ∈ [-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    /// Round vertices to whole pixels, like pointer coordinates.
    pub integer_pixels: bool,
}

impl Default for StarZoneCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Uniform { min: 4, max: 12 },
            center: Point::new(500.0, 500.0),
            radius: 200.0,
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            integer_pixels: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SamplerError {
    InvalidParams { reason: String },
}

impl fmt::Display for SamplerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid sampler params: {reason}"),
        }
    }
}

impl std::error::Error for SamplerError {}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing.
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

/// Draw one star-shaped zone as an open trace (first vertex not repeated).
pub fn draw_star_zone(cfg: StarZoneCfg, tok: ReplayToken) -> Result<Vec<Point>, SamplerError> {
    if !cfg.radius.is_finite() || cfg.radius <= 0.0 {
        return Err(SamplerError::InvalidParams {
            reason: format!("radius must be finite and > 0 (got {})", cfg.radius),
        });
    }
    if !(0.0..1.0).contains(&cfg.radial_jitter) {
        return Err(SamplerError::InvalidParams {
            reason: format!("radial_jitter must be in [0, 1) (got {})", cfg.radial_jitter),
        });
    }
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = rng.gen::<f64>() * std::f64::consts::TAU;

    let zone = (0..n)
        .map(|k| {
            let th = phase + (k as f64) * delta + (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * cfg.radial_jitter;
            let r = cfg.radius * (1.0 + u);
            let p = Point::new(cfg.center.x + th.cos() * r, cfg.center.y + th.sin() * r);
            if cfg.integer_pixels {
                Point::new(p.x.round(), p.y.round())
            } else {
                p
            }
        })
        .collect();
    Ok(zone)
}

/// Close an open trace by repeating its first point (what snapping produces).
pub fn closed(mut trace: Vec<Point>) -> Vec<Point> {
    if let Some(first) = trace.first().copied() {
        trace.push(first);
    }
    trace
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::{drawing_direction, polygon_area_from_lines, shoelace_area, LineEnds, Winding};
    use proptest::prelude::*;

    fn lines_of(zone: &[Point]) -> Vec<LineEnds> {
        let n = zone.len();
        (0..n).map(|i| LineEnds::new(zone[i], zone[(i + 1) % n])).collect()
    }

    #[test]
    fn replay_is_deterministic() {
        let cfg = StarZoneCfg::default();
        let tok = ReplayToken { seed: 7, index: 3 };
        assert_eq!(draw_star_zone(cfg, tok), draw_star_zone(cfg, tok));
        let other = ReplayToken { seed: 7, index: 4 };
        assert_ne!(draw_star_zone(cfg, tok), draw_star_zone(cfg, other));
    }

    #[test]
    fn rejects_bad_params() {
        let tok = ReplayToken { seed: 1, index: 0 };
        let bad_r = StarZoneCfg {
            radius: 0.0,
            ..StarZoneCfg::default()
        };
        assert!(draw_star_zone(bad_r, tok).is_err());
        let bad_j = StarZoneCfg {
            radial_jitter: 1.5,
            ..StarZoneCfg::default()
        };
        assert!(draw_star_zone(bad_j, tok).is_err());
    }

    #[test]
    fn fixed_count_and_screen_clockwise() {
        let cfg = StarZoneCfg {
            vertex_count: VertexCount::Fixed(6),
            integer_pixels: false,
            ..StarZoneCfg::default()
        };
        let zone = draw_star_zone(cfg, ReplayToken { seed: 2, index: 0 }).unwrap();
        assert_eq!(zone.len(), 6);
        assert_eq!(drawing_direction(&zone), Winding::Clockwise);
        assert_eq!(closed(zone.clone()).len(), 7);
        assert!(closed(Vec::new()).is_empty());
    }

    proptest! {
        #[test]
        fn area_matches_traced_order_for_star_zones(seed in 0u64..1000, index in 0u64..20) {
            // on-circle vertices keep the zone convex, so the vertex centroid is interior
            let cfg = StarZoneCfg {
                radial_jitter: 0.0,
                integer_pixels: false,
                ..StarZoneCfg::default()
            };
            let zone = draw_star_zone(cfg, ReplayToken { seed, index }).unwrap();
            let traced = shoelace_area(&zone);
            let mut lines = lines_of(&zone);
            lines.reverse();
            let recovered = polygon_area_from_lines(&lines);
            prop_assert!((traced - recovered).abs() <= 1e-9 * traced);
        }
    }
}
