//! Forecast service port
//!
//! Defines the interface for retrieving a site forecast.

use async_trait::async_trait;
use domain::{GeoLocation, SiteForecast};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for forecast retrieval
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ForecastPort: Send + Sync {
    /// Current conditions and the next-day outlook for a location
    async fn get_site_forecast(
        &self,
        location: &GeoLocation,
    ) -> Result<SiteForecast, ApplicationError>;
}
