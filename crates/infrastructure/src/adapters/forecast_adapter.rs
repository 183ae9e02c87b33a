//! Forecast adapter - Implements ForecastPort using integration_weather

use application::error::ApplicationError;
use application::ports::ForecastPort;
use async_trait::async_trait;
use domain::{GeoLocation, SiteForecast};
use integration_weather::{OpenMeteoClient, WeatherClient, WeatherConfig, WeatherError};
use tracing::{debug, instrument};

/// Adapter for launch forecasts using the Open-Meteo API
#[derive(Debug, Clone)]
pub struct ForecastAdapter {
    client: OpenMeteoClient,
}

impl ForecastAdapter {
    /// Create a new adapter with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new() -> Result<Self, ApplicationError> {
        Self::with_config(WeatherConfig::default())
    }

    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client =
            OpenMeteoClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Wrap an already configured client
    #[must_use]
    pub const fn from_client(client: OpenMeteoClient) -> Self {
        Self { client }
    }

    /// Map integration weather error to application error
    ///
    /// Transport and HTTP failures keep the weather error's text so the
    /// failed report says what went wrong.
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::Tls(_)
            | WeatherError::ConnectionFailed(_)
            | WeatherError::Timeout(_)
            | WeatherError::RequestFailed(_)
            | WeatherError::ServiceUnavailable(_) => {
                ApplicationError::ExternalService(err.to_string())
            },
            WeatherError::ParseError(_) => ApplicationError::Internal(err.to_string()),
            WeatherError::InvalidCoordinates => {
                ApplicationError::InvalidOperation("Invalid coordinates".into())
            },
            WeatherError::RateLimitExceeded => ApplicationError::RateLimited,
        }
    }
}

#[async_trait]
impl ForecastPort for ForecastAdapter {
    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    async fn get_site_forecast(
        &self,
        location: &GeoLocation,
    ) -> Result<SiteForecast, ApplicationError> {
        let result = self
            .client
            .get_site_forecast(location.latitude(), location.longitude())
            .await
            .map_err(Self::map_error);

        match &result {
            Ok(forecast) => {
                debug!(
                    current_code = forecast.current.weather_code,
                    outlook_code = forecast.outlook.weather_code,
                    "Retrieved site forecast"
                );
            },
            Err(e) => {
                debug!(error = %e, "Failed to get site forecast");
            },
        }

        result
    }
}
