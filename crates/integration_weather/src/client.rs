//! Open-Meteo weather client
//!
//! HTTP client for the Open-Meteo forecast endpoint. Requests go to the
//! secure base URL first; only a TLS-level failure (handshake or
//! certificate) is retried, once, against the plaintext base URL with the
//! same query. Every other transport error and every HTTP error status is
//! returned as-is.

use std::error::Error as StdError;
use std::time::Duration;

use async_trait::async_trait;
use domain::SiteForecast;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::models::ApiResponse;

/// Daily variables requested for the outlook day
pub const DAILY_VARIABLES: &str = "temperature_2m_max,precipitation_probability_max,\
windspeed_10m_max,winddirection_10m_dominant,weathercode";

/// Substrings that mark an error source as TLS-layer
const TLS_MARKERS: &[&str] = &["tls", "ssl", "certificate", "handshake", "corrupt message"];

/// Weather client errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeatherError {
    /// TLS handshake or certificate validation failed
    #[error("TLS failure: {0}")]
    Tls(String),

    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The request did not complete within the configured timeout
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Invalid coordinates provided
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

impl WeatherError {
    /// Whether this error should trigger the plaintext fallback
    #[must_use]
    pub const fn is_tls_failure(&self) -> bool {
        matches!(self, Self::Tls(_))
    }
}

/// Weather service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Encrypted API base URL (default: <https://api.open-meteo.com/v1>)
    #[serde(default = "default_secure_base_url")]
    pub secure_base_url: String,

    /// Plaintext API base URL used after a TLS failure (default: <http://api.open-meteo.com/v1>)
    #[serde(default = "default_plaintext_base_url")]
    pub plaintext_base_url: String,

    /// Per-request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Retry over plaintext after a TLS failure (default: true)
    #[serde(default = "default_plaintext_fallback")]
    pub plaintext_fallback: bool,
}

fn default_secure_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

fn default_plaintext_base_url() -> String {
    "http://api.open-meteo.com/v1".to_string()
}

const fn default_timeout() -> u64 {
    10
}

const fn default_plaintext_fallback() -> bool {
    true
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            secure_base_url: default_secure_base_url(),
            plaintext_base_url: default_plaintext_base_url(),
            timeout_secs: default_timeout(),
            plaintext_fallback: default_plaintext_fallback(),
        }
    }
}

/// Weather client trait for fetching launch forecasts
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Get current conditions and the outlook day for a location
    async fn get_site_forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<SiteForecast, WeatherError>;
}

/// Open-Meteo HTTP client implementation
///
/// Cloning is cheap and shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenMeteoClient {
    /// Create a new Open-Meteo client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(describe(&e)))?;

        Ok(Self { client, config })
    }

    /// Create a client on top of an existing connection pool
    ///
    /// The caller's client timeout applies; `config.timeout_secs` is still
    /// set on each request.
    #[must_use]
    pub const fn with_http_client(client: Client, config: WeatherConfig) -> Self {
        Self { client, config }
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, WeatherError> {
        Self::new(WeatherConfig::default())
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &WeatherConfig {
        &self.config
    }

    /// Validate coordinates
    fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), WeatherError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(WeatherError::InvalidCoordinates);
        }
        Ok(())
    }

    /// Query parameters for a forecast request
    fn forecast_query(latitude: f64, longitude: f64) -> Vec<(&'static str, String)> {
        vec![
            ("latitude", latitude.to_string()),
            ("longitude", longitude.to_string()),
            ("current_weather", "true".to_string()),
            ("daily", DAILY_VARIABLES.to_string()),
            ("timezone", "auto".to_string()),
            ("temperature_unit", "fahrenheit".to_string()),
            ("windspeed_unit", "mph".to_string()),
        ]
    }

    /// Forecast endpoint under a base URL
    fn forecast_url(base_url: &str) -> String {
        format!("{}/forecast", base_url.trim_end_matches('/'))
    }

    /// Send one GET and decode the body
    async fn fetch(
        &self,
        base_url: &str,
        query: &[(&'static str, String)],
    ) -> Result<ApiResponse, WeatherError> {
        let url = Self::forecast_url(base_url);
        debug!(url = %url, "Fetching launch forecast");

        let response = self
            .client
            .get(&url)
            .query(query)
            .timeout(Duration::from_secs(self.config.timeout_secs))
            .send()
            .await
            .map_err(|e| classify_transport_error(&e))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(WeatherError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(WeatherError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(WeatherError::RequestFailed(format!("HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| classify_transport_error(&e))?;

        serde_json::from_str(&body).map_err(|e| WeatherError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl WeatherClient for OpenMeteoClient {
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn get_site_forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<SiteForecast, WeatherError> {
        Self::validate_coordinates(latitude, longitude)?;

        let query = Self::forecast_query(latitude, longitude);

        let api_response = match self.fetch(&self.config.secure_base_url, &query).await {
            Err(err) if err.is_tls_failure() && self.config.plaintext_fallback => {
                warn!(error = %err, "TLS failed, retrying over plaintext");
                self.fetch(&self.config.plaintext_base_url, &query).await?
            },
            other => other?,
        };

        Ok(api_response.into_site_forecast())
    }}

/// Map a reqwest error onto the client's error taxonomy
fn classify_transport_error(err: &reqwest::Error) -> WeatherError {
    let message = describe(err);
    if err.is_timeout() {
        WeatherError::Timeout(message)
    } else if has_tls_cause(err) {
        WeatherError::Tls(message)
    } else if err.is_connect() {
        WeatherError::ConnectionFailed(message)
    } else if err.is_decode() {
        WeatherError::ParseError(message)
    } else {
        WeatherError::RequestFailed(message)
    }
}

/// Whether any cause below the top-level error comes from the TLS layer
///
/// The top-level message is skipped because it embeds the request URL.
/// TLS stacks surface handshake failures as `InvalidData` I/O errors or
/// with TLS/certificate wording in the message.
fn has_tls_cause(err: &(dyn StdError + 'static)) -> bool {
    let mut source = err.source();
    while let Some(cause) = source {
        if cause
            .downcast_ref::<std::io::Error>()
            .is_some_and(|io| io.kind() == std::io::ErrorKind::InvalidData)
        {
            return true;
        }
        let text = cause.to_string().to_lowercase();
        if TLS_MARKERS.iter().any(|marker| text.contains(marker)) {
            return true;
        }
        source = cause.source();
    }
    false
}

/// Render an error with its causes, e.g. `error sending request: tcp connect error: refused`
fn describe(err: &(dyn StdError + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
