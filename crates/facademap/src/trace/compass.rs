//! Compass sectors for facade names and per-facade horizon shading.

use std::fmt;
use std::str::FromStr;

/// Eight-way compass sector of an (adjusted) bearing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CompassSector {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl CompassSector {
    /// Sector of a bearing in `[0, 360]`.
    ///
    /// Cardinal sectors are 20° wide (±10°), intercardinal ones fill the gaps.
    /// 360 counts as North. Out-of-range or NaN input gives `None`.
    pub fn from_angle(angle: f64) -> Option<Self> {
        let sector = match angle {
            a if (350.0..=360.0).contains(&a) || (0.0..10.0).contains(&a) => Self::North,
            a if (10.0..80.0).contains(&a) => Self::NorthEast,
            a if (80.0..100.0).contains(&a) => Self::East,
            a if (100.0..170.0).contains(&a) => Self::SouthEast,
            a if (170.0..190.0).contains(&a) => Self::South,
            a if (190.0..260.0).contains(&a) => Self::SouthWest,
            a if (260.0..280.0).contains(&a) => Self::West,
            a if (280.0..350.0).contains(&a) => Self::NorthWest,
            _ => return None,
        };
        Some(sector)
    }

    /// Norwegian label used in facade names and exports.
    pub fn label(self) -> &'static str {
        match self {
            Self::North => "Nord",
            Self::NorthEast => "Nord-Øst",
            Self::East => "Øst",
            Self::SouthEast => "Sør-Øst",
            Self::South => "Sør",
            Self::SouthWest => "Sør-Vest",
            Self::West => "Vest",
            Self::NorthWest => "Nord-Vest",
        }
    }
}

impl fmt::Display for CompassSector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Display name of facade `number` facing `adjusted_angle`, e.g. `"3 Sør-Vest"`.
///
/// Falls back to `"Fasade <number + 1>"` when the bearing has no sector.
pub fn facade_name(number: u32, adjusted_angle: Option<f64>) -> String {
    match adjusted_angle.and_then(CompassSector::from_angle) {
        Some(sector) => format!("{number} {sector}"),
        None => {
            tracing::warn!(number, angle = ?adjusted_angle, "facade bearing has no compass sector");
            format!("Fasade {}", number + 1)
        }
    }
}

/// Horizon shading of one facade: four sector elevations in degrees, each in `[0, 90]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct HorizonSectors(pub [u8; 4]);

impl HorizonSectors {
    pub const MAX_DEGREES: u8 = 90;

    /// Build from raw values, clamping each into `[0, 90]`.
    pub fn clamped(values: [i64; 4]) -> Self {
        Self(values.map(|v| v.clamp(0, i64::from(Self::MAX_DEGREES)) as u8))
    }
}

/// Text form had more than four dash-separated sections.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HorizonParseError {
    pub sections: usize,
}

impl fmt::Display for HorizonParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected at most 4 horizon sectors, got {}", self.sections)
    }
}

impl std::error::Error for HorizonParseError {}

impl fmt::Display for HorizonSectors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "{a:02}-{b:02}-{c:02}-{d:02}")
    }
}

impl FromStr for HorizonSectors {
    type Err = HorizonParseError;

    /// Lenient `NN-NN-NN-NN` parser: sections are trimmed and may carry a
    /// leading `+`, missing or non-numeric sections read as 0, trailing junk
    /// after leading digits is ignored and values clamp to 90.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let sections: Vec<&str> = s.trim().split('-').collect();
        if sections.len() > 4 {
            return Err(HorizonParseError {
                sections: sections.len(),
            });
        }
        let mut out = [0u8; 4];
        for (slot, section) in out.iter_mut().zip(&sections) {
            let section = section.trim();
            let section = section.strip_prefix('+').unwrap_or(section);
            let digits: String = section.chars().take_while(char::is_ascii_digit).collect();
            if digits.is_empty() {
                continue;
            }
            *slot = digits
                .parse::<u64>()
                .map_or(Self::MAX_DEGREES, |v| v.min(u64::from(Self::MAX_DEGREES)) as u8);
        }
        Ok(Self(out))
    }
}
