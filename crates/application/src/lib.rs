//! Application layer - Use cases and orchestration
//!
//! Contains the site fetcher and the batch orchestrator, plus the port the
//! weather adapter implements.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
