//! Open-Meteo weather integration
//!
//! Client for the Open-Meteo forecast API (<https://open-meteo.com>).
//! Fetches current conditions and the next-day outlook for a launch site,
//! falling back to plaintext transport only when TLS itself fails.

pub mod client;
mod models;

pub use client::{DAILY_VARIABLES, OpenMeteoClient, WeatherClient, WeatherConfig, WeatherError};
pub use models::{ApiResponse, CurrentWeatherData, DailyData};
