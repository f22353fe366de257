//! Trace a few synthetic zones and print their facades.
//!
//! Usage:
//!   cargo run -p facademap --example sample_zones -- 5
//!
//! Prints per zone: vertex count, area (m²), and one line per facade with its
//! bearing and compass name, at the default 0.15 m/px scale and 45° rounding.

use facademap::api::*;
use facademap::TraceCfg;

fn main() {
    let count: u64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(3);
    let cfg = TraceCfg {
        round_angle_to: 45.0,
        ..TraceCfg::default()
    };
    let mut set = ZoneSet::new(Calibration::default(), cfg);
    for index in 0..count {
        let trace = match draw_star_zone(StarZoneCfg::default(), ZoneReplay { seed: 2025, index }) {
            Ok(z) => closed(z),
            Err(err) => {
                eprintln!("sample {index}: {err}");
                continue;
            }
        };
        let segments = segments_from_trace(&trace, &set.calibration(), set.cfg());
        set.add_zone(segments, 2.7, 0.0);
    }
    for zone in set.zones() {
        println!("{} (id {}): area {:.1} m²", zone.name, zone.id, zone.area);
    }
    for row in set.facade_rows() {
        println!(
            "  {:>3}  {:>6.1} m  {:>5.1}°  {}",
            row.number, row.length, row.angle, row.name
        );
    }
}
