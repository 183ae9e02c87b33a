//! LaunchCheck CLI
//!
//! Fetches forecasts for the Colorado launch sites and reports whether
//! today and tomorrow look flyable.

#![allow(clippy::print_stdout)]

mod render;

use std::io::Write;
use std::path::PathBuf;
use std::pin::pin;
use std::sync::Arc;

use anyhow::Context;
use application::{BatchService, SiteFetcher};
use clap::{Parser, Subcommand};
use domain::{Site, colorado_launch_sites, find_sites};
use futures::StreamExt;
use infrastructure::{AppConfig, ForecastAdapter, init_tracing};
use tracing::debug;

/// LaunchCheck CLI
#[derive(Parser)]
#[command(name = "launchcheck")]
#[command(author, version, about = "Paragliding launch weather check", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (default: ./launchcheck.toml when present)
    #[arg(short, long, env = "LAUNCHCHECK_CONFIG", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch forecasts and evaluate every launch site
    ///
    /// Reports are printed as each site completes.
    Check {
        /// Wait for all sites and print in site-list order
        #[arg(long)]
        ordered: bool,

        /// Print the reports as JSON instead of text
        #[arg(long, conflicts_with = "ordered")]
        json: bool,

        /// Only check sites whose name contains this text (case-insensitive)
        #[arg(short, long)]
        site: Option<String>,
    },

    /// List the launch sites
    Sites,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Sites selected by the optional name filter
fn select_sites(filter: Option<&str>) -> anyhow::Result<Vec<Site>> {
    let sites = colorado_launch_sites();
    match filter {
        Some(pattern) => Ok(find_sites(&sites, pattern)?),
        None => Ok(sites),
    }
}

fn batch_service(config: &AppConfig) -> anyhow::Result<BatchService> {
    let adapter = ForecastAdapter::with_config(config.weather.clone())
        .context("Failed to create forecast client")?;
    Ok(BatchService::new(
        SiteFetcher::new(Arc::new(adapter)),
        config.batch.clone(),
    ))
}

async fn run_check(
    config: &AppConfig,
    filter: Option<&str>,
    ordered: bool,
    json: bool,
) -> anyhow::Result<()> {
    let sites = select_sites(filter)?;
    let service = batch_service(config)?;
    debug!(sites = sites.len(), concurrency = service.concurrency(), "Starting check");

    if json {
        let reports = service.run_batch(&sites).await.into_site_order();
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    println!("{}\n", render::DISCLAIMER);
    println!("{}\n", render::FETCHING);

    let mut stdout = std::io::stdout();
    if ordered {
        for report in service.run_batch(&sites).await.into_site_order() {
            print!("{}", render::ReportBlock(&report));
        }
    } else {
        let mut reports = pin!(service.stream_reports(sites));
        while let Some(indexed) = reports.next().await {
            print!("{}", render::ReportBlock(&indexed.report));
            stdout.flush()?;
        }
    }

    println!("{}", render::DONE);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if cli.verbose > 0 {
        config.logging.filter = log_filter_from_verbosity(cli.verbose).to_string();
    }
    init_tracing(&config.logging)?;

    match cli.command {
        Commands::Check {
            ordered,
            json,
            site,
        } => run_check(&config, site.as_deref(), ordered, json).await,
        Commands::Sites => {
            print!("{}", render::SiteList(&colorado_launch_sites()));
            Ok(())
        },
    }
}
