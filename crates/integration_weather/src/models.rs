//! Weather data models
//!
//! Raw Open-Meteo response types. Every field is optional on the wire:
//! missing keys and `null` entries read as zero so a sparse response still
//! produces a forecast. Only a body that is not a JSON object of this shape
//! fails to parse.

use chrono::NaiveDate;
use domain::{SiteForecast, WeatherSnapshot};
use serde::Deserialize;

/// Raw `current_weather` block
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CurrentWeatherData {
    pub temperature: Option<f64>,
    pub windspeed: Option<f64>,
    pub winddirection: Option<f64>,
    pub weathercode: Option<i32>,
}

impl CurrentWeatherData {
    /// Snapshot of current conditions (no precipitation probability)
    #[must_use]
    pub fn snapshot(&self) -> WeatherSnapshot {
        WeatherSnapshot {
            temperature: self.temperature.unwrap_or_default(),
            wind_speed: self.windspeed.unwrap_or_default(),
            wind_direction: self.winddirection.unwrap_or_default(),
            weather_code: self.weathercode.unwrap_or_default(),
            precipitation_probability: None,
        }
    }
}

/// Raw `daily` block of parallel arrays
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DailyData {
    pub time: Vec<String>,
    pub temperature_2m_max: Vec<Option<f64>>,
    pub precipitation_probability_max: Vec<Option<f64>>,
    pub windspeed_10m_max: Vec<Option<f64>>,
    pub winddirection_10m_dominant: Vec<Option<f64>>,
    pub weathercode: Vec<Option<i32>>,
}

impl DailyData {
    /// Index of the outlook day: tomorrow when at least two days are
    /// present, otherwise today
    #[must_use]
    pub fn outlook_index(&self) -> usize {
        usize::from(self.time.len() > 1)
    }

    /// Snapshot of the outlook day
    ///
    /// Precipitation probability is always present, defaulting to zero.
    #[must_use]
    pub fn outlook(&self) -> WeatherSnapshot {
        let idx = self.outlook_index();
        WeatherSnapshot {
            temperature: value_at(&self.temperature_2m_max, idx),
            wind_speed: value_at(&self.windspeed_10m_max, idx),
            wind_direction: value_at(&self.winddirection_10m_dominant, idx),
            weather_code: value_at(&self.weathercode, idx),
            precipitation_probability: Some(value_at(&self.precipitation_probability_max, idx)),
        }
    }

    /// Calendar date of the outlook day, if the API sent a parseable one
    #[must_use]
    pub fn outlook_date(&self) -> Option<NaiveDate> {
        self.time
            .get(self.outlook_index())
            .and_then(|day| NaiveDate::parse_from_str(day, "%Y-%m-%d").ok())
    }
}

fn value_at<T: Copy + Default>(values: &[Option<T>], idx: usize) -> T {
    values.get(idx).copied().flatten().unwrap_or_default()
}

/// Raw API response
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiResponse {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub timezone: Option<String>,
    pub current_weather: CurrentWeatherData,
    pub daily: DailyData,
}

impl ApiResponse {
    /// Reduce the response to current conditions and the outlook day
    #[must_use]
    pub fn into_site_forecast(self) -> SiteForecast {
        SiteForecast {
            current: self.current_weather.snapshot(),
            outlook: self.daily.outlook(),
            outlook_date: self.daily.outlook_date(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> ApiResponse {
        serde_json::from_str(json).expect("should parse")
    }

    #[test]
    fn test_full_response() {
        let response = parse(
            r#"{
                "latitude": 39.75,
                "longitude": -105.22,
                "timezone": "America/Denver",
                "current_weather": {
                    "temperature": 64.3,
                    "windspeed": 8.1,
                    "winddirection": 290,
                    "weathercode": 2,
                    "time": "2024-06-01T14:00"
                },
                "daily": {
                    "time": ["2024-06-01", "2024-06-02"],
                    "temperature_2m_max": [70.1, 73.4],
                    "precipitation_probability_max": [5, 35],
                    "windspeed_10m_max": [12.0, 24.5],
                    "winddirection_10m_dominant": [280, 45],
                    "weathercode": [2, 95]
                }
            }"#,
        );

        let forecast = response.into_site_forecast();
        assert!((forecast.current.wind_speed - 8.1).abs() < f64::EPSILON);
        assert_eq!(forecast.current.weather_code, 2);
        assert_eq!(forecast.current.precipitation_probability, None);

        assert!((forecast.outlook.temperature - 73.4).abs() < f64::EPSILON);
        assert!((forecast.outlook.wind_speed - 24.5).abs() < f64::EPSILON);
        assert!((forecast.outlook.wind_direction - 45.0).abs() < f64::EPSILON);
        assert_eq!(forecast.outlook.weather_code, 95);
        assert_eq!(forecast.outlook.precipitation_probability, Some(35.0));
        assert_eq!(forecast.outlook_date, NaiveDate::from_ymd_opt(2024, 6, 2));
    }

    #[test]
    fn test_single_day_uses_index_zero() {
        let response = parse(
            r#"{
                "daily": {
                    "time": ["2024-06-01"],
                    "temperature_2m_max": [70.1],
                    "precipitation_probability_max": [20],
                    "windspeed_10m_max": [11.0],
                    "winddirection_10m_dominant": [90],
                    "weathercode": [3]
                }
            }"#,
        );
        assert_eq!(response.daily.outlook_index(), 0);

        let forecast = response.into_site_forecast();
        assert!((forecast.outlook.temperature - 70.1).abs() < f64::EPSILON);
        assert_eq!(forecast.outlook.precipitation_probability, Some(20.0));
        assert_eq!(forecast.outlook_date, NaiveDate::from_ymd_opt(2024, 6, 1));
    }

    #[test]
    fn test_missing_keys_default_to_zero() {
        let forecast = parse("{}").into_site_forecast();
        assert_eq!(forecast.current, WeatherSnapshot::default());
        assert_eq!(forecast.outlook.precipitation_probability, Some(0.0));
        assert!(forecast.outlook.wind_speed.abs() < f64::EPSILON);
        assert_eq!(forecast.outlook_date, None);
    }

    #[test]
    fn test_short_arrays_and_nulls_default_to_zero() {
        let response = parse(
            r#"{
                "daily": {
                    "time": ["2024-06-01", "2024-06-02"],
                    "temperature_2m_max": [70.1],
                    "precipitation_probability_max": [10, null],
                    "weathercode": [1, 61]
                }
            }"#,
        );
        let outlook = response.daily.outlook();
        assert!(outlook.temperature.abs() < f64::EPSILON);
        assert_eq!(outlook.precipitation_probability, Some(0.0));
        assert_eq!(outlook.weather_code, 61);
    }

    #[test]
    fn test_unparseable_shapes_fail() {
        assert!(serde_json::from_str::<ApiResponse>("not json").is_err());
        assert!(serde_json::from_str::<ApiResponse>("[1, 2, 3]").is_err());
        assert!(serde_json::from_str::<ApiResponse>(r#"{"daily": {"time": 7}}"#).is_err());
    }
}
