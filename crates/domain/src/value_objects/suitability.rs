//! Flying suitability rules and verdicts
//!
//! A [`Verdict`] is derived from wind speed, sky condition and (for forecast
//! days) precipitation probability. Rules are checked in a fixed order and
//! each failing rule appends exactly one [`Reason`]:
//!
//! 1. wind too calm, or wind too strong (never both)
//! 2. weather code outside the acceptable set
//! 3. precipitation probability above the ceiling
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::evaluate;
//!
//! let verdict = evaluate(25.0, 95, Some(50.0));
//! assert!(!verdict.is_ok());
//! assert_eq!(
//!     verdict.reason_strings(),
//!     vec!["Wind too strong", "Weather not ideal: Thunderstorm", "Precipitation too high"]
//! );
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use super::weather_condition::{WeatherCondition, classify};

/// Why a day failed the suitability check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "rule", content = "condition", rename_all = "snake_case")]
pub enum Reason {
    /// Wind below the minimum speed
    WindTooCalm,
    /// Wind above the maximum speed
    WindTooStrong,
    /// Sky condition outside the acceptable set
    WeatherNotIdeal(WeatherCondition),
    /// Precipitation probability above the ceiling
    PrecipitationTooHigh,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WindTooCalm => f.write_str("Wind too calm"),
            Self::WindTooStrong => f.write_str("Wind too strong"),
            Self::WeatherNotIdeal(condition) => write!(f, "Weather not ideal: {condition}"),
            Self::PrecipitationTooHigh => f.write_str("Precipitation too high"),
        }
    }
}

/// Pass/fail judgment with the reasons for failure
///
/// `ok` is derived from `reasons` on construction and cannot drift from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    ok: bool,
    reasons: Vec<Reason>,
}

impl Verdict {
    /// Build a verdict from accumulated reasons (order preserved)
    #[must_use]
    pub fn from_reasons(reasons: Vec<Reason>) -> Self {
        Self {
            ok: reasons.is_empty(),
            reasons,
        }
    }

    /// Whether every rule passed
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.ok
    }

    /// Failing rules in check order
    #[must_use]
    pub fn reasons(&self) -> &[Reason] {
        &self.reasons
    }

    /// Reasons rendered as display strings
    #[must_use]
    pub fn reason_strings(&self) -> Vec<String> {
        self.reasons.iter().map(ToString::to_string).collect()
    }
}

/// Thresholds applied by the evaluator
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SuitabilityRules {
    /// Minimum acceptable wind speed in mph (inclusive)
    pub min_wind_mph: f64,
    /// Maximum acceptable wind speed in mph (inclusive)
    pub max_wind_mph: f64,
    /// WMO codes considered flyable
    pub acceptable_codes: &'static [i32],
    /// Maximum acceptable precipitation probability in percent (inclusive)
    pub max_precipitation_pct: f64,
}

impl SuitabilityRules {
    /// Paragliding thresholds: 5-20 mph, clear to overcast skies, at most 10% precipitation
    pub const PARAGLIDING: Self = Self {
        min_wind_mph: 5.0,
        max_wind_mph: 20.0,
        acceptable_codes: &[0, 1, 2, 3],
        max_precipitation_pct: 10.0,
    };

    /// Evaluate one time-slice against these rules
    ///
    /// `precipitation_probability` of `None` skips the precipitation rule.
    #[must_use]
    pub fn evaluate(
        &self,
        wind_speed: f64,
        weather_code: i32,
        precipitation_probability: Option<f64>,
    ) -> Verdict {
        let mut reasons = Vec::new();

        if wind_speed < self.min_wind_mph {
            reasons.push(Reason::WindTooCalm);
        } else if wind_speed > self.max_wind_mph {
            reasons.push(Reason::WindTooStrong);
        }

        if !self.acceptable_codes.contains(&weather_code) {
            reasons.push(Reason::WeatherNotIdeal(classify(weather_code)));
        }

        if precipitation_probability.is_some_and(|pop| pop > self.max_precipitation_pct) {
            reasons.push(Reason::PrecipitationTooHigh);
        }

        Verdict::from_reasons(reasons)
    }
}

impl Default for SuitabilityRules {
    fn default() -> Self {
        Self::PARAGLIDING
    }
}

/// Evaluate with the paragliding rules
#[must_use]
pub fn evaluate(
    wind_speed: f64,
    weather_code: i32,
    precipitation_probability: Option<f64>,
) -> Verdict {
    SuitabilityRules::PARAGLIDING.evaluate(wind_speed, weather_code, precipitation_probability)
}
