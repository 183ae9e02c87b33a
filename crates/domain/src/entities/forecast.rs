//! Parsed weather time-slices

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::value_objects::{CompassPoint, WeatherCondition};

/// One time-slice of weather at a site
///
/// Units follow the request: temperature in °F, wind speed in mph, wind
/// direction in degrees (0-360), precipitation probability in percent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub temperature: f64,
    pub wind_speed: f64,
    pub wind_direction: f64,
    pub weather_code: i32,
    /// Absent for current conditions, always present for forecast days
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precipitation_probability: Option<f64>,
}

impl WeatherSnapshot {
    /// Sky condition for the snapshot's weather code
    #[must_use]
    pub const fn condition(&self) -> WeatherCondition {
        WeatherCondition::from_wmo_code(self.weather_code)
    }

    /// Compass sector of the wind direction
    #[must_use]
    pub fn wind_compass(&self) -> CompassPoint {
        CompassPoint::from_degrees(self.wind_direction)
    }
}

/// Current conditions plus the outlook day for one site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteForecast {
    /// Conditions right now
    pub current: WeatherSnapshot,
    /// Tomorrow, or today when the API returned a single day
    pub outlook: WeatherSnapshot,
    /// Calendar date of the outlook day, when the API supplied one
    #[serde(default)]
    pub outlook_date: Option<NaiveDate>,
}
