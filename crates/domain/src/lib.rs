//! Domain layer for LaunchCheck
//!
//! Contains the launch site registry, weather snapshots, the weather code
//! classifier, the flying suitability rules and per-site reports.
//! This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
