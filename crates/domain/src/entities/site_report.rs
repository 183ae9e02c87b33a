//! Per-site outcomes and the batch that collects them

use chrono::NaiveDate;
use serde::Serialize;

use super::forecast::{SiteForecast, WeatherSnapshot};
use super::site::Site;
use crate::value_objects::{CompassPoint, SuitabilityRules, Verdict, WeatherCondition};

/// A snapshot with its derived labels and suitability verdict
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayAssessment {
    #[serde(flatten)]
    pub snapshot: WeatherSnapshot,
    pub condition: WeatherCondition,
    pub wind_compass: CompassPoint,
    pub verdict: Verdict,
}

impl DayAssessment {
    /// Classify and evaluate a snapshot
    ///
    /// The precipitation rule only applies when the snapshot carries a
    /// precipitation probability.
    #[must_use]
    pub fn assess(snapshot: WeatherSnapshot, rules: &SuitabilityRules) -> Self {
        let verdict = rules.evaluate(
            snapshot.wind_speed,
            snapshot.weather_code,
            snapshot.precipitation_probability,
        );
        Self {
            condition: snapshot.condition(),
            wind_compass: snapshot.wind_compass(),
            snapshot,
            verdict,
        }
    }
}

/// Outcome for one site: a full assessment or an error, never both
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SiteReport {
    /// Weather was fetched and both days were evaluated
    Assessed {
        site: Site,
        today: DayAssessment,
        tomorrow: DayAssessment,
        #[serde(skip_serializing_if = "Option::is_none")]
        tomorrow_date: Option<NaiveDate>,
    },
    /// Fetching or parsing failed
    Failed { site: Site, error: String },
}

impl SiteReport {
    /// Evaluate a fetched forecast for a site
    #[must_use]
    pub fn assessed(site: Site, forecast: SiteForecast, rules: &SuitabilityRules) -> Self {
        let current = WeatherSnapshot {
            precipitation_probability: None,
            ..forecast.current
        };
        Self::Assessed {
            site,
            today: DayAssessment::assess(current, rules),
            tomorrow: DayAssessment::assess(forecast.outlook, rules),
            tomorrow_date: forecast.outlook_date,
        }
    }

    /// Record a failure for a site
    #[must_use]
    pub fn failed(site: Site, error: impl Into<String>) -> Self {
        Self::Failed {
            site,
            error: error.into(),
        }
    }

    /// The site this report is about
    #[must_use]
    pub const fn site(&self) -> &Site {
        match self {
            Self::Assessed { site, .. } | Self::Failed { site, .. } => site,
        }
    }

    /// Whether this is the error variant
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// A report tagged with the position of its site in the input list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexedReport {
    pub index: usize,
    #[serde(flatten)]
    pub report: SiteReport,
}

/// Every report of one batch run, in completion order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchResult {
    reports: Vec<IndexedReport>,
}

impl BatchResult {
    /// Empty result with room for `capacity` reports
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            reports: Vec::with_capacity(capacity),
        }
    }

    /// Append a report as it completes
    pub fn push(&mut self, report: IndexedReport) {
        self.reports.push(report);
    }

    /// Number of reports collected
    #[must_use]
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    /// Whether no reports were collected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Whether a report for the given input position was collected
    #[must_use]
    pub fn contains_index(&self, index: usize) -> bool {
        self.reports.iter().any(|r| r.index == index)
    }

    /// Reports in the order they completed
    pub fn completion_order(&self) -> impl Iterator<Item = &SiteReport> {
        self.reports.iter().map(|r| &r.report)
    }

    /// Reports rearranged into input site order
    #[must_use]
    pub fn in_site_order(&self) -> Vec<&SiteReport> {
        let mut indexed: Vec<&IndexedReport> = self.reports.iter().collect();
        indexed.sort_by_key(|r| r.index);
        indexed.into_iter().map(|r| &r.report).collect()
    }

    /// Consume the batch, yielding reports in input site order
    #[must_use]
    pub fn into_site_order(mut self) -> Vec<SiteReport> {
        self.reports.sort_by_key(|r| r.index);
        self.reports.into_iter().map(|r| r.report).collect()
    }

    /// Report for the first site with the given name
    #[must_use]
    pub fn get(&self, site_name: &str) -> Option<&SiteReport> {
        self.completion_order().find(|r| r.site().name() == site_name)
    }

    /// Number of sites that were assessed
    #[must_use]
    pub fn assessed_count(&self) -> usize {
        self.completion_order().filter(|r| !r.is_failed()).count()
    }

    /// Number of sites that failed
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.completion_order().filter(|r| r.is_failed()).count()
    }
}
