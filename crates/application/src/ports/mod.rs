//! Port definitions (interfaces for adapters)

mod forecast_port;

#[cfg(test)]
pub use forecast_port::MockForecastPort;
pub use forecast_port::ForecastPort;
