//! Domain entities - Sites, weather snapshots and per-site reports

mod forecast;
mod site;
mod site_report;

pub use forecast::{SiteForecast, WeatherSnapshot};
pub use site::{Site, colorado_launch_sites, find_sites};
pub use site_report::{BatchResult, DayAssessment, IndexedReport, SiteReport};
