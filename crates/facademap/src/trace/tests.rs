use super::*;
use crate::geom::{Point, Segment, TraceCfg};
use proptest::prelude::*;

fn pts(raw: &[(f64, f64)]) -> Vec<Point> {
    raw.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

/// Closed clockwise square trace: the last click snaps back onto the first.
fn closed_square(x0: f64, y0: f64, side: f64) -> Vec<Point> {
    pts(&[
        (x0, y0),
        (x0 + side, y0),
        (x0 + side, y0 + side),
        (x0, y0 + side),
        (x0, y0),
    ])
}

fn cal(mpp: f64) -> Calibration {
    Calibration::new(mpp).unwrap()
}

#[test]
fn calibration_rejects_bad_scales() {
    assert!(Calibration::new(0.0).is_err());
    assert!(Calibration::new(-0.1).is_err());
    assert!(Calibration::new(f64::NAN).is_err());
    assert!(Calibration::new(f64::INFINITY).is_err());
    assert_eq!(Calibration::default().meters_per_pixel(), 0.15);
}

#[test]
fn calibration_from_reference_line() {
    let cfg = TraceCfg::default();
    let c = Calibration::from_reference(&Point::new(0.0, 0.0), &Point::new(60.0, 80.0), 5.0, &cfg)
        .unwrap();
    assert!((c.meters_per_pixel() - 0.05).abs() < 1e-12);
    assert!((c.millimeters_per_pixel() - 50.0).abs() < 1e-9);

    let origin = Point::new(0.0, 0.0);
    let short = Calibration::from_reference(&origin, &Point::new(3.0, 0.0), 1.0, &cfg);
    assert!(matches!(short, Err(CalibrationError::ReferenceTooShort { .. })));
    let zero = Calibration::from_reference(&origin, &Point::new(30.0, 0.0), 0.0, &cfg);
    assert!(matches!(zero, Err(CalibrationError::InvalidKnownLength { .. })));
}

#[test]
fn rescale_ratio_is_new_over_old() {
    assert!((cal(0.1).rescale_ratio(&cal(0.25)) - 2.5).abs() < 1e-12);
}

#[test]
fn square_end_to_end() {
    let cfg = TraceCfg::default();
    let c = cal(0.1);
    let segs = segments_from_trace(&closed_square(0.0, 0.0, 10.0), &c, &cfg);
    assert_eq!(segs.len(), 4);
    for s in &segs {
        assert_eq!(s.length, 1.0);
    }
    let angles: Vec<f64> = segs.iter().map(|s| s.angle).collect();
    assert_eq!(angles, vec![0.0, 90.0, 180.0, 270.0]);
    let area = zone_area(&segs, &c).unwrap();
    assert!((area - 1.0).abs() < 1e-9);
}

#[test]
fn short_traces_produce_nothing() {
    let cfg = TraceCfg::default();
    assert!(segments_from_trace(&[], &cal(0.1), &cfg).is_empty());
    assert!(segments_from_trace(&pts(&[(1.0, 1.0)]), &cal(0.1), &cfg).is_empty());
}

#[test]
fn zero_length_segments_are_dropped() {
    let cfg = TraceCfg::default();
    // double click on the same spot
    let trace = pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
    let segs = segments_from_trace(&trace, &cal(0.1), &cfg);
    assert_eq!(segs.len(), 2);
    assert!(segs.iter().all(|s| s.angle.is_finite()));
    // rounds to 0.0 m at one decimal
    let tiny = pts(&[(0.0, 0.0), (2.0, 0.0)]);
    assert!(segments_from_trace(&tiny, &cal(0.01), &cfg).is_empty());
}

#[test]
fn lengths_are_rounded() {
    assert_eq!(round_length(1.04, 1), 1.0);
    assert_eq!(round_length(1.06, 1), 1.1);
    assert_eq!(round_length(12.345, 0), 12.0);
}

#[test]
fn zone_area_needs_three_segments() {
    let cfg = TraceCfg::default();
    let segs = segments_from_trace(&pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]), &cal(1.0), &cfg);
    assert_eq!(zone_area(&segs, &cal(1.0)), Err(ZoneError::TooFewSegments { count: 2 }));
}

#[test]
fn open_trace_area_uses_segment_starts_only() {
    // Without the closing click the last point is only an end point and drops out.
    let cfg = TraceCfg::default();
    let open = pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
    let segs = segments_from_trace(&open, &cal(1.0), &cfg);
    assert_eq!(segs.len(), 3);
    assert!((zone_area(&segs, &cal(1.0)).unwrap() - 50.0).abs() < 1e-9);
}

#[test]
fn compass_sector_boundaries() {
    use CompassSector::*;
    let cases = [
        (0.0, North),
        (9.99, North),
        (10.0, NorthEast),
        (80.0, East),
        (100.0, SouthEast),
        (170.0, South),
        (190.0, SouthWest),
        (260.0, West),
        (280.0, NorthWest),
        (349.9, NorthWest),
        (350.0, North),
        (360.0, North),
    ];
    for (angle, want) in cases {
        assert_eq!(CompassSector::from_angle(angle), Some(want), "angle {angle}");
    }
    assert_eq!(CompassSector::from_angle(-1.0), None);
    assert_eq!(CompassSector::from_angle(360.5), None);
    assert_eq!(CompassSector::from_angle(f64::NAN), None);
}

#[test]
fn facade_names() {
    assert_eq!(facade_name(3, Some(200.0)), "3 Sør-Vest");
    assert_eq!(facade_name(1, Some(0.0)), "1 Nord");
    assert_eq!(facade_name(3, None), "Fasade 4");
}

#[test]
fn horizon_sectors_text_form() {
    let h = HorizonSectors([5, 30, 0, 90]);
    assert_eq!(h.to_string(), "05-30-00-90");
    assert_eq!("05-30-00-90".parse::<HorizonSectors>(), Ok(h));
    assert_eq!("5-99-x-".parse::<HorizonSectors>(), Ok(HorizonSectors([5, 90, 0, 0])));
    assert_eq!("12abc".parse::<HorizonSectors>(), Ok(HorizonSectors([12, 0, 0, 0])));
    assert_eq!("".parse::<HorizonSectors>(), Ok(HorizonSectors::default()));
    assert_eq!(
        " 5-+10 - 7 -+".parse::<HorizonSectors>(),
        Ok(HorizonSectors([5, 10, 7, 0]))
    );
    assert!("1-2-3-4-5".parse::<HorizonSectors>().is_err());
    assert_eq!(HorizonSectors::clamped([-5, 100, 45, 0]), HorizonSectors([0, 90, 45, 0]));
}

fn two_adjacent_zones() -> (ZoneSet, ZoneId, ZoneId) {
    let cfg = TraceCfg::default();
    let c = cal(0.1);
    let mut set = ZoneSet::new(c, cfg);
    let a = set.add_zone(
        segments_from_trace(&closed_square(0.0, 0.0, 10.0), &c, &cfg),
        DEFAULT_ROOF_HEIGHT,
        0.0,
    );
    let b = set.add_zone(
        segments_from_trace(&closed_square(10.0, 0.0, 10.0), &c, &cfg),
        DEFAULT_ROOF_HEIGHT,
        0.0,
    );
    (set, a, b)
}

#[test]
fn shared_wall_becomes_connection() {
    let (set, a, b) = two_adjacent_zones();
    let za = set.zone(a).unwrap();
    let zb = set.zone(b).unwrap();
    assert_eq!(za.name, "Sone 1");
    assert_eq!(zb.name, "Sone 2");
    // B's left wall retraces A's right wall in reverse
    assert_eq!(za.facades.len(), 3);
    assert_eq!(zb.facades.len(), 3);
    let shared: Vec<&Connection> = set.connections().collect();
    assert_eq!(shared.len(), 1);
    assert_eq!((shared[0].zone_a, shared[0].zone_b), (a, b));
    assert_eq!(shared[0].segment.start, Point::new(10.0, 10.0));
    // the shared wall still bounds B's area
    assert!((zb.area - 1.0).abs() < 1e-9);
    assert!((za.area - 1.0).abs() < 1e-9);
}

#[test]
fn facades_are_renumbered_across_zones() {
    let (set, _, _) = two_adjacent_zones();
    let numbers: Vec<u32> = set
        .zones()
        .iter()
        .flat_map(|z| z.facades.iter().map(|f| f.number))
        .collect();
    assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6]);
    let names: Vec<String> = set.facade_rows().into_iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["1 Nord", "2 Sør", "3 Vest", "4 Nord", "5 Øst", "6 Sør"]);
}

#[test]
fn facade_rows_apply_adjustment_and_roof_height() {
    let cfg = TraceCfg::default();
    let c = cal(0.1);
    let mut set = ZoneSet::new(c, cfg);
    set.add_zone(segments_from_trace(&closed_square(0.0, 0.0, 10.0), &c, &cfg), 3.0, 100.0);
    let rows = set.facade_rows();
    assert_eq!(rows.len(), 4);
    let west = &rows[3];
    assert_eq!(west.angle, 270.0);
    assert_eq!(west.adjusted_angle, Some(10.0));
    assert_eq!(west.name, "4 Nord-Øst");
    assert!((west.wall_area - 3.0).abs() < 1e-9);
}

#[test]
fn too_small_zone_stores_zero_area() {
    let cfg = TraceCfg::default();
    let c = cal(1.0);
    let mut set = ZoneSet::new(c, cfg);
    let id = set.add_zone(
        segments_from_trace(&pts(&[(0.0, 0.0), (10.0, 0.0)]), &c, &cfg),
        DEFAULT_ROOF_HEIGHT,
        0.0,
    );
    let z = set.zone(id).unwrap();
    assert_eq!(z.area, 0.0);
    assert_eq!(z.facades.len(), 1);
}

#[test]
fn horizon_updates_and_errors() {
    let (mut set, a, _) = two_adjacent_zones();
    let h = HorizonSectors([10, 20, 30, 40]);
    set.set_horizon(a, 1, h).unwrap();
    assert_eq!(set.zone(a).unwrap().facades[1].horizon, h);
    assert_eq!(set.zone(a).unwrap().facades[0].horizon, HorizonSectors::default());
    assert_eq!(
        set.set_horizon(ZoneId(99), 0, h),
        Err(ZoneError::UnknownZone(ZoneId(99)))
    );
    assert_eq!(
        set.set_horizon(a, 7, h),
        Err(ZoneError::UnknownFacade { zone: a, index: 7 })
    );
}

#[test]
fn recalibration_rescales_lengths_and_areas() {
    let (mut set, a, b) = two_adjacent_zones();
    set.recalibrate(cal(0.2));
    assert_eq!(set.calibration().meters_per_pixel(), 0.2);
    for zone in set.zones() {
        assert!(zone.facades.iter().all(|f| f.segment.length == 2.0));
        assert!((zone.area - 4.0).abs() < 1e-9);
    }
    assert_eq!(set.zone(b).unwrap().connections[0].segment.length, 2.0);
    assert!(set.zone(a).unwrap().connections.is_empty());
}

#[test]
fn snapping_prefers_completed_zones() {
    let (set, _, _) = two_adjacent_zones();
    let in_progress = pts(&[(30.0, 30.0), (2.0, 2.0)]);
    let all = set.all_points(&in_progress);
    assert_eq!(all.len(), 6 * 2 + 2);
    assert_eq!(all.last(), Some(&Point::new(2.0, 2.0)));
    assert_eq!(set.snap(&Point::new(1.0, 1.0), &in_progress), Some(Point::new(0.0, 0.0)));
    assert_eq!(set.snap(&Point::new(31.0, 31.0), &in_progress), Some(Point::new(30.0, 30.0)));
    assert_eq!(set.snap(&Point::new(50.0, 50.0), &in_progress), None);
}

#[test]
fn unmatched_segments_are_not_connections() {
    let cfg = TraceCfg::default();
    let c = cal(0.1);
    let mut set = ZoneSet::new(c, cfg);
    set.add_zone(segments_from_trace(&closed_square(0.0, 0.0, 10.0), &c, &cfg), 2.7, 0.0);
    // touches A only at a corner
    set.add_zone(segments_from_trace(&closed_square(10.0, 10.0, 10.0), &c, &cfg), 2.7, 0.0);
    assert_eq!(set.connections().count(), 0);
    let manual = Segment {
        start: Point::new(0.0, 0.0),
        end: Point::new(10.0, 0.0),
        length: 1.0,
        angle: 0.0,
    };
    assert!(set.zones()[0].facades[0].segment.same_edge(&manual));
}

proptest! {
    #[test]
    fn square_area_scales_with_calibration(side in 5.0f64..500.0, mpp in 0.001f64..1.0) {
        let cfg = TraceCfg { length_decimals: 6, ..TraceCfg::default() };
        let c = cal(mpp);
        let segs = segments_from_trace(&closed_square(3.0, 7.0, side), &c, &cfg);
        prop_assume!(segs.len() == 4);
        let area = zone_area(&segs, &c).unwrap();
        let expected = (side * mpp) * (side * mpp);
        prop_assert!((area - expected).abs() <= 1e-9 * (1.0 + expected));
    }
}
