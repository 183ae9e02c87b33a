//! Application services

mod batch_service;
mod site_fetcher;

pub use batch_service::{BatchConfig, BatchService, DEFAULT_CONCURRENCY};
pub use site_fetcher::SiteFetcher;
