//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer.
//! Contains the Open-Meteo forecast adapter, configuration loading and
//! tracing setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, ConfigLoadError, LogFormat, LoggingConfig};
pub use telemetry::{TelemetryError, init_tracing};
