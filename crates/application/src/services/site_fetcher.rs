//! Site fetcher
//!
//! Turns one launch site into a report: fetch the forecast, then classify
//! and evaluate both days. Failures never escape as errors; they become a
//! `Failed` report carrying the error text.

use std::fmt;
use std::sync::Arc;

use domain::{Site, SiteReport, SuitabilityRules};
use tracing::{debug, instrument, warn};

use crate::ports::ForecastPort;

/// Fetches and evaluates the forecast for a single site
#[derive(Clone)]
pub struct SiteFetcher {
    forecast_port: Arc<dyn ForecastPort>,
    rules: SuitabilityRules,
}

impl fmt::Debug for SiteFetcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SiteFetcher")
            .field("forecast_port", &"<dyn ForecastPort>")
            .field("rules", &self.rules)
            .finish()
    }
}

impl SiteFetcher {
    /// Create a fetcher using the paragliding rules
    #[must_use]
    pub fn new(forecast_port: Arc<dyn ForecastPort>) -> Self {
        Self {
            forecast_port,
            rules: SuitabilityRules::PARAGLIDING,
        }
    }

    /// Replace the suitability rules
    #[must_use]
    pub fn with_rules(mut self, rules: SuitabilityRules) -> Self {
        self.rules = rules;
        self
    }

    /// The rules applied to each snapshot
    #[must_use]
    pub const fn rules(&self) -> &SuitabilityRules {
        &self.rules
    }

    /// Fetch and evaluate one site
    #[instrument(skip(self, site), fields(site = %site.name()))]
    pub async fn fetch_site(&self, site: &Site) -> SiteReport {
        match self.forecast_port.get_site_forecast(site.location()).await {
            Ok(forecast) => {
                debug!("Forecast received");
                SiteReport::assessed(site.clone(), forecast, &self.rules)
            },
            Err(e) => {
                warn!(error = %e, "Failed to fetch forecast");
                SiteReport::failed(site.clone(), e.to_string())
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use domain::{Reason, SiteForecast, WeatherCondition, WeatherSnapshot};

    use super::*;
    use crate::error::ApplicationError;
    use crate::ports::MockForecastPort;

    fn forecast() -> SiteForecast {
        SiteForecast {
            current: WeatherSnapshot {
                temperature: 61.0,
                wind_speed: 9.5,
                wind_direction: 250.0,
                weather_code: 2,
                precipitation_probability: None,
            },
            outlook: WeatherSnapshot {
                temperature: 66.0,
                wind_speed: 3.0,
                wind_direction: 10.0,
                weather_code: 61,
                precipitation_probability: Some(40.0),
            },
            outlook_date: NaiveDate::from_ymd_opt(2024, 6, 2),
        }
    }

    fn boulder() -> Site {
        Site::new("Boulder Flying Park", 40.0150, -105.2705).unwrap()
    }

    #[tokio::test]
    async fn assesses_both_days() {
        let mut mock = MockForecastPort::new();
        mock.expect_get_site_forecast()
            .times(1)
            .returning(|_| Ok(forecast()));

        let fetcher = SiteFetcher::new(Arc::new(mock));
        let report = fetcher.fetch_site(&boulder()).await;

        let SiteReport::Assessed {
            site,
            today,
            tomorrow,
            tomorrow_date,
        } = report
        else {
            panic!("expected assessed report");
        };
        assert_eq!(site.name(), "Boulder Flying Park");
        assert!(today.verdict.is_ok());
        assert_eq!(today.condition, WeatherCondition::Clouds);
        assert_eq!(today.wind_compass.label(), "W");
        assert!(!tomorrow.verdict.is_ok());
        assert_eq!(
            tomorrow.verdict.reasons(),
            &[
                Reason::WindTooCalm,
                Reason::WeatherNotIdeal(WeatherCondition::Rain),
                Reason::PrecipitationTooHigh,
            ]
        );
        assert_eq!(tomorrow.wind_compass.label(), "N");
        assert_eq!(tomorrow_date, NaiveDate::from_ymd_opt(2024, 6, 2));
    }

    #[tokio::test]
    async fn passes_site_location_to_port() {
        let mut mock = MockForecastPort::new();
        mock.expect_get_site_forecast()
            .withf(|location| {
                (location.latitude() - 40.0150).abs() < f64::EPSILON
                    && (location.longitude() + 105.2705).abs() < f64::EPSILON
            })
            .times(1)
            .returning(|_| Ok(forecast()));

        let fetcher = SiteFetcher::new(Arc::new(mock));
        assert!(!fetcher.fetch_site(&boulder()).await.is_failed());
    }

    #[tokio::test]
    async fn port_error_becomes_failed_report() {
        let mut mock = MockForecastPort::new();
        mock.expect_get_site_forecast()
            .returning(|_| Err(ApplicationError::ExternalService("HTTP 503".into())));

        let fetcher = SiteFetcher::new(Arc::new(mock));
        let report = fetcher.fetch_site(&boulder()).await;

        assert_eq!(
            report,
            SiteReport::failed(boulder(), "External service error: HTTP 503")
        );
    }

    #[tokio::test]
    async fn custom_rules_are_applied() {
        let mut mock = MockForecastPort::new();
        mock.expect_get_site_forecast().returning(|_| Ok(forecast()));

        let rules = SuitabilityRules {
            min_wind_mph: 0.0,
            max_wind_mph: 30.0,
            acceptable_codes: &[0, 1, 2, 3, 61],
            max_precipitation_pct: 50.0,
        };
        let fetcher = SiteFetcher::new(Arc::new(mock)).with_rules(rules);
        let SiteReport::Assessed { tomorrow, .. } = fetcher.fetch_site(&boulder()).await else {
            panic!("expected assessed report");
        };
        assert!(tomorrow.verdict.is_ok());
    }
}
