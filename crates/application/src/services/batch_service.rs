//! Batch orchestrator
//!
//! Fetches every site of a batch concurrently, at most `concurrency` at a
//! time, and yields reports in completion order tagged with their input
//! position. Each fetch runs on its own task; a task that dies becomes a
//! `Failed` report for its site. The batch never fails as a whole and
//! finishes only after every dispatched fetch has completed.

use std::sync::Arc;

use domain::{BatchResult, IndexedReport, Site, SiteReport};
use futures::stream::{self, Stream, StreamExt};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument, warn};

use super::site_fetcher::SiteFetcher;

/// Default number of in-flight fetches
pub const DEFAULT_CONCURRENCY: usize = 6;

/// Configuration for batch runs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Maximum number of concurrent fetches (default: 6)
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
}

const fn default_concurrency() -> usize {
    DEFAULT_CONCURRENCY
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            concurrency: default_concurrency(),
        }
    }
}

/// Runs the site fetcher over a list of sites
#[derive(Debug, Clone)]
pub struct BatchService {
    fetcher: Arc<SiteFetcher>,
    config: BatchConfig,
}

impl BatchService {
    /// Create a batch service
    #[must_use]
    pub fn new(fetcher: SiteFetcher, config: BatchConfig) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
            config,
        }
    }

    /// Create a batch service with the default concurrency
    #[must_use]
    pub fn with_defaults(fetcher: SiteFetcher) -> Self {
        Self::new(fetcher, BatchConfig::default())
    }

    /// Effective concurrency limit (never below one)
    #[must_use]
    pub fn concurrency(&self) -> usize {
        self.config.concurrency.max(1)
    }

    /// Stream reports as each fetch completes
    ///
    /// The stream yields exactly one report per input site.
    pub fn stream_reports(
        &self,
        sites: Vec<Site>,
    ) -> impl Stream<Item = IndexedReport> + Send + use<> {
        let fetcher = Arc::clone(&self.fetcher);

        stream::iter(sites.into_iter().enumerate())
            .map(move |(index, site)| fetch_indexed(Arc::clone(&fetcher), index, site))
            .buffer_unordered(self.concurrency())
    }

    /// Run the whole batch and collect every report
    #[instrument(skip(self, sites), fields(sites = sites.len(), concurrency = self.concurrency()))]
    pub async fn run_batch(&self, sites: &[Site]) -> BatchResult {
        let mut result = BatchResult::with_capacity(sites.len());
        let mut reports = Box::pin(self.stream_reports(sites.to_vec()));

        while let Some(report) = reports.next().await {
            result.push(report);
        }

        log_batch_summary(&result);
        result
    }
}

async fn fetch_indexed(fetcher: Arc<SiteFetcher>, index: usize, site: Site) -> IndexedReport {
    let task_site = site.clone();
    let handle = tokio::spawn(async move { fetcher.fetch_site(&task_site).await });

    let report = match handle.await {
        Ok(report) => report,
        Err(e) => {
            error!(site = %site.name(), error = %e, "Fetch task failed");
            SiteReport::failed(site, format!("Fetch task failed: {e}"))
        },
    };

    IndexedReport { index, report }
}

fn log_batch_summary(result: &BatchResult) {
    let total = result.len();
    let assessed = result.assessed_count();
    let failed = result.failed_count();

    if failed == 0 {
        info!(assessed, total, "Batch complete");
    } else if assessed > 0 {
        warn!(assessed, failed, total, "Batch complete with failures");
    } else {
        error!(failed, total, "Batch failed for every site");
    }
}
