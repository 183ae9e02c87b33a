//! Eight-point compass directions for wind reporting

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of eight 45°-wide compass sectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompassPoint {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl CompassPoint {
    /// Sectors in clockwise order starting at north
    pub const ALL: [Self; 8] = [
        Self::N,
        Self::NE,
        Self::E,
        Self::SE,
        Self::S,
        Self::SW,
        Self::W,
        Self::NW,
    ];

    /// Convert a wind direction in degrees to its compass sector
    ///
    /// Sectors are centered on each point, so the angle is shifted by 22.5°
    /// before dividing into 45° buckets: 0°..22.4° is `N`, 22.5°..67.4° is
    /// `NE`, 359° wraps back to `N`. Angles outside 0-360 are normalized first; NaN maps to `N`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_degrees(degrees: f64) -> Self {
        let degrees = degrees.rem_euclid(360.0);
        let sector = ((degrees + 22.5) / 45.0).trunc() as i64;
        let index = usize::try_from(sector.rem_euclid(8)).unwrap_or_default();
        Self::ALL[index]
    }

    /// Short label such as `"NE"`
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::N => "N",
            Self::NE => "NE",
            Self::E => "E",
            Self::SE => "SE",
            Self::S => "S",
            Self::SW => "SW",
            Self::W => "W",
            Self::NW => "NW",
        }
    }
}

impl fmt::Display for CompassPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Convert a wind direction in degrees to a compass label
#[must_use]
pub fn degrees_to_cardinal(degrees: f64) -> &'static str {
    CompassPoint::from_degrees(degrees).label()
}
