//! Multi-zone session state: zones, facades, shared walls.
//!
//! Invariants
//! - Facade numbers run 1..=N across all zones, in zone order.
//! - A wall traced by two zones is a facade of neither: it is removed from the
//!   earlier zone and kept as a `Connection` on the later one.

use std::fmt;

use crate::geom::{adjust_angle, find_nearest_point, Point, Segment, TraceCfg};

use super::calibration::Calibration;
use super::compass::{facade_name, HorizonSectors};
use super::segments::{round_length, zone_area};

/// Default floor-to-ceiling height (m) used for wall areas.
pub const DEFAULT_ROOF_HEIGHT: f64 = 2.7;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ZoneId(pub u32);

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ZoneError {
    /// Area needs at least three segments.
    TooFewSegments { count: usize },
    UnknownZone(ZoneId),
    UnknownFacade { zone: ZoneId, index: usize },
}

impl fmt::Display for ZoneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewSegments { count } => {
                write!(f, "zone area needs 3+ segments (got {count})")
            }
            Self::UnknownZone(id) => write!(f, "no zone with id {id}"),
            Self::UnknownFacade { zone, index } => {
                write!(f, "zone {zone} has no facade at index {index}")
            }
        }
    }
}

impl std::error::Error for ZoneError {}

/// An exterior wall: a numbered segment plus shading metadata.
#[derive(Clone, Debug, PartialEq)]
pub struct Facade {
    pub number: u32,
    pub segment: Segment,
    pub horizon: HorizonSectors,
}

/// A wall shared by two zones (`zone_a` traced it first).
#[derive(Clone, Debug, PartialEq)]
pub struct Connection {
    pub segment: Segment,
    pub zone_a: ZoneId,
    pub zone_b: ZoneId,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Zone {
    pub id: ZoneId,
    pub name: String,
    pub facades: Vec<Facade>,
    pub connections: Vec<Connection>,
    /// Floor area (m²); 0 when it could not be computed.
    pub area: f64,
    pub roof_height: f64,
    /// Added to every bearing before naming/export (plan not drawn north-up).
    pub angle_adjustment: f64,
}

/// Flat per-facade view consumed by table/XML exporters.
#[derive(Clone, Debug, PartialEq)]
pub struct FacadeRow {
    pub zone: ZoneId,
    pub number: u32,
    pub length: f64,
    pub wall_area: f64,
    pub angle: f64,
    pub adjusted_angle: Option<f64>,
    pub name: String,
    pub horizon: HorizonSectors,
}

/// All completed zones of one drawing session.
#[derive(Clone, Debug)]
pub struct ZoneSet {
    zones: Vec<Zone>,
    calibration: Calibration,
    cfg: TraceCfg,
    next_id: u32,
}

impl ZoneSet {
    pub fn new(calibration: Calibration, cfg: TraceCfg) -> Self {
        Self {
            zones: Vec::new(),
            calibration,
            cfg,
            next_id: 1,
        }
    }

    #[inline]
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    #[inline]
    pub fn calibration(&self) -> Calibration {
        self.calibration
    }

    #[inline]
    pub fn cfg(&self) -> &TraceCfg {
        &self.cfg
    }

    pub fn zone(&self, id: ZoneId) -> Option<&Zone> {
        self.zones.iter().find(|z| z.id == id)
    }

    /// Every shared wall recorded so far, in zone order.
    pub fn connections(&self) -> impl Iterator<Item = &Connection> {
        self.zones.iter().flat_map(|z| z.connections.iter())
    }

    /// Complete a zone from its traced segments (in trace order).
    ///
    /// Segments matching an existing facade become shared walls. All traced
    /// segments, shared or not, bound the zone's area.
    pub fn add_zone(
        &mut self,
        segments: Vec<Segment>,
        roof_height: f64,
        angle_adjustment: f64,
    ) -> ZoneId {
        let id = ZoneId(self.next_id);
        self.next_id += 1;

        let area = zone_area(&segments, &self.calibration).unwrap_or_else(|err| {
            tracing::warn!(zone = %id, %err, "zone area not computed");
            0.0
        });

        let mut facades = Vec::with_capacity(segments.len());
        let mut connections = Vec::new();
        for segment in segments {
            match self.take_matching_facade(&segment) {
                Some(owner) => connections.push(Connection {
                    segment,
                    zone_a: owner,
                    zone_b: id,
                }),
                None => facades.push(Facade {
                    number: 0,
                    segment,
                    horizon: HorizonSectors::default(),
                }),
            }
        }

        tracing::info!(
            zone = %id,
            facades = facades.len(),
            shared = connections.len(),
            area,
            "zone added"
        );
        self.zones.push(Zone {
            id,
            name: format!("Sone {}", self.zones.len() + 1),
            facades,
            connections,
            area,
            roof_height,
            angle_adjustment,
        });
        self.renumber();
        id
    }

    // Remove the first facade (in zone order) that traces the same wall.
    fn take_matching_facade(&mut self, segment: &Segment) -> Option<ZoneId> {
        for zone in &mut self.zones {
            if let Some(idx) = zone.facades.iter().position(|f| f.segment.same_edge(segment)) {
                zone.facades.remove(idx);
                return Some(zone.id);
            }
        }
        None
    }

    fn renumber(&mut self) {
        let mut number = 1;
        for facade in self.zones.iter_mut().flat_map(|z| z.facades.iter_mut()) {
            facade.number = number;
            number += 1;
        }
    }

    /// Attach horizon shading to facade `index` of zone `id`.
    pub fn set_horizon(
        &mut self,
        id: ZoneId,
        index: usize,
        horizon: HorizonSectors,
    ) -> Result<(), ZoneError> {
        let zone = self
            .zones
            .iter_mut()
            .find(|z| z.id == id)
            .ok_or(ZoneError::UnknownZone(id))?;
        let facade = zone
            .facades
            .get_mut(index)
            .ok_or(ZoneError::UnknownFacade { zone: id, index })?;
        facade.horizon = horizon;
        Ok(())
    }

    /// Switch to a new scale: lengths are recomputed from pixel endpoints,
    /// areas scale by the squared ratio.
    pub fn recalibrate(&mut self, new: Calibration) {
        let ratio = self.calibration.rescale_ratio(&new);
        let decimals = self.cfg.length_decimals;
        let relength = |s: &mut Segment| {
            s.length = round_length(new.length(&s.start, &s.end), decimals);
        };
        for zone in &mut self.zones {
            zone.facades.iter_mut().for_each(|f| relength(&mut f.segment));
            zone.connections.iter_mut().for_each(|c| relength(&mut c.segment));
            zone.area *= ratio * ratio;
        }
        tracing::info!(
            old = self.calibration.meters_per_pixel(),
            new = new.meters_per_pixel(),
            ratio,
            "recalibrated"
        );
        self.calibration = new;
    }

    /// Snap candidates: every facade endpoint, then the in-progress trace.
    pub fn all_points(&self, in_progress: &[Point]) -> Vec<Point> {
        self.zones
            .iter()
            .flat_map(|z| z.facades.iter())
            .flat_map(|f| [f.segment.start, f.segment.end])
            .chain(in_progress.iter().copied())
            .collect()
    }

    /// Existing point the cursor at `position` snaps to, if any.
    pub fn snap(&self, position: &Point, in_progress: &[Point]) -> Option<Point> {
        find_nearest_point(position, &self.all_points(in_progress), self.cfg.snap_distance)
    }

    /// One row per facade across all zones, in numbering order.
    pub fn facade_rows(&self) -> Vec<FacadeRow> {
        self.zones
            .iter()
            .flat_map(|zone| {
                zone.facades.iter().map(move |f| {
                    let adjusted = adjust_angle(f.segment.angle, zone.angle_adjustment);
                    FacadeRow {
                        zone: zone.id,
                        number: f.number,
                        length: f.segment.length,
                        wall_area: f.segment.length * zone.roof_height,
                        angle: f.segment.angle,
                        adjusted_angle: adjusted,
                        name: facade_name(f.number, adjusted),
                        horizon: f.horizon,
                    }
                })
            })
            .collect()
    }
}
