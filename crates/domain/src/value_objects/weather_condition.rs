//! Weather condition derived from WMO weather codes
//!
//! Open-Meteo reports sky conditions as WMO interpretation codes. The
//! launch report only cares about broad categories, so several codes share
//! a label (e.g. 1, 2 and 3 are all "Clouds").
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::{WeatherCondition, classify};
//!
//! assert_eq!(classify(0), WeatherCondition::Clear);
//! assert_eq!(classify(96).label(), "Thunderstorm with Hail");
//! assert_eq!(classify(42).label(), "Unknown");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Broad weather category for a WMO code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    /// Clear sky (WMO 0)
    Clear,
    /// Mainly clear, partly cloudy or overcast (WMO 1, 2, 3)
    Clouds,
    /// Fog (WMO 45, 48)
    Fog,
    /// Drizzle (WMO 51, 53, 55)
    Drizzle,
    /// Rain (WMO 61, 63, 65)
    Rain,
    /// Freezing rain (WMO 66, 67)
    FreezingRain,
    /// Snow fall (WMO 71, 73, 75)
    SnowFall,
    /// Snow grains (WMO 77)
    SnowGrains,
    /// Rain showers (WMO 80, 81, 82)
    RainShowers,
    /// Snow showers (WMO 85, 86)
    SnowShowers,
    /// Thunderstorm (WMO 95)
    Thunderstorm,
    /// Thunderstorm with hail (WMO 96, 99)
    ThunderstormWithHail,
    /// Any code outside the table
    Unknown,
}

impl WeatherCondition {
    /// Convert a WMO weather code to a `WeatherCondition`
    ///
    /// Total over all integers: codes outside the table map to `Unknown`.
    #[must_use]
    pub const fn from_wmo_code(code: i32) -> Self {
        match code {
            0 => Self::Clear,
            1..=3 => Self::Clouds,
            45 | 48 => Self::Fog,
            51 | 53 | 55 => Self::Drizzle,
            61 | 63 | 65 => Self::Rain,
            66 | 67 => Self::FreezingRain,
            71 | 73 | 75 => Self::SnowFall,
            77 => Self::SnowGrains,
            80..=82 => Self::RainShowers,
            85 | 86 => Self::SnowShowers,
            95 => Self::Thunderstorm,
            96 | 99 => Self::ThunderstormWithHail,
            _ => Self::Unknown,
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::Clouds => "Clouds",
            Self::Fog => "Fog",
            Self::Drizzle => "Drizzle",
            Self::Rain => "Rain",
            Self::FreezingRain => "Freezing Rain",
            Self::SnowFall => "Snow Fall",
            Self::SnowGrains => "Snow Grains",
            Self::RainShowers => "Rain Showers",
            Self::SnowShowers => "Snow Showers",
            Self::Thunderstorm => "Thunderstorm",
            Self::ThunderstormWithHail => "Thunderstorm with Hail",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a WMO weather code
#[must_use]
pub const fn classify(code: i32) -> WeatherCondition {
    WeatherCondition::from_wmo_code(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &[(i32, &str)] = &[
        (0, "Clear"),
        (1, "Clouds"),
        (2, "Clouds"),
        (3, "Clouds"),
        (45, "Fog"),
        (48, "Fog"),
        (51, "Drizzle"),
        (53, "Drizzle"),
        (55, "Drizzle"),
        (61, "Rain"),
        (63, "Rain"),
        (65, "Rain"),
        (66, "Freezing Rain"),
        (67, "Freezing Rain"),
        (71, "Snow Fall"),
        (73, "Snow Fall"),
        (75, "Snow Fall"),
        (77, "Snow Grains"),
        (80, "Rain Showers"),
        (81, "Rain Showers"),
        (82, "Rain Showers"),
        (85, "Snow Showers"),
        (86, "Snow Showers"),
        (95, "Thunderstorm"),
        (96, "Thunderstorm with Hail"),
        (99, "Thunderstorm with Hail"),
    ];

    #[test]
    fn test_documented_codes() {
        for &(code, label) in TABLE {
            assert_eq!(classify(code).label(), label, "code {code}");
        }
    }

    #[test]
    fn test_unmapped_codes_are_unknown() {
        for code in (-5..=120).filter(|c| !TABLE.iter().any(|(known, _)| known == c)) {
            assert_eq!(classify(code), WeatherCondition::Unknown, "code {code}");
        }
        assert_eq!(classify(i32::MAX), WeatherCondition::Unknown);
        assert_eq!(classify(i32::MIN), WeatherCondition::Unknown);
    }

    #[test]
    fn test_freezing_drizzle_codes_are_not_in_table() {
        assert_eq!(classify(56), WeatherCondition::Unknown);
        assert_eq!(classify(57), WeatherCondition::Unknown);
    }

    #[test]
    fn test_display_matches_label() {
        assert_eq!(WeatherCondition::SnowFall.to_string(), "Snow Fall");
        assert_eq!(WeatherCondition::Unknown.to_string(), "Unknown");
    }
}
