//! Value Objects - Immutable, identity-less domain primitives

mod compass;
mod geo_location;
mod suitability;
mod weather_condition;

pub use compass::{CompassPoint, degrees_to_cardinal};
pub use geo_location::GeoLocation;
pub use suitability::{Reason, SuitabilityRules, Verdict, evaluate};
pub use weather_condition::{WeatherCondition, classify};
