//! Integration tests for CLI
//!
//! These tests verify CLI functionality without running actual commands,
//! but instead test the command parsing and structure.

#![allow(clippy::panic)] // Allow panic! in tests for clear failure messages

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

// Mock CLI structure for testing (mirrors main.rs)
#[derive(Parser)]
#[command(name = "launchcheck")]
#[command(author, version, about = "Paragliding launch weather check", long_about = None)]
struct Cli {
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    Check {
        #[arg(long)]
        ordered: bool,

        #[arg(long, conflicts_with = "ordered")]
        json: bool,

        #[arg(short, long)]
        site: Option<String>,
    },
    Sites,
}

fn parse_args(args: &[&str]) -> Result<Cli, clap::Error> {
    let os_args: Vec<OsString> = args.iter().map(OsString::from).collect();
    Cli::try_parse_from(os_args)
}

#[test]
fn cli_parses_check_command() {
    let cli = parse_args(&["launchcheck", "check"]).unwrap();
    if let Commands::Check {
        ordered,
        json,
        site,
    } = cli.command
    {
        assert!(!ordered);
        assert!(!json);
        assert!(site.is_none());
    } else {
        panic!("Expected Check command");
    }
}

#[test]
fn cli_parses_check_ordered() {
    let cli = parse_args(&["launchcheck", "check", "--ordered"]).unwrap();
    assert!(matches!(cli.command, Commands::Check { ordered: true, .. }));
}

#[test]
fn cli_parses_check_json() {
    let cli = parse_args(&["launchcheck", "check", "--json"]).unwrap();
    assert!(matches!(cli.command, Commands::Check { json: true, .. }));
}

#[test]
fn cli_rejects_json_with_ordered() {
    assert!(parse_args(&["launchcheck", "check", "--json", "--ordered"]).is_err());
}

#[test]
fn cli_parses_site_filter() {
    let cli = parse_args(&["launchcheck", "check", "--site", "Pikes"]).unwrap();
    if let Commands::Check { site, .. } = cli.command {
        assert_eq!(site.as_deref(), Some("Pikes"));
    } else {
        panic!("Expected Check command");
    }

    let cli = parse_args(&["launchcheck", "check", "-s", "pass"]).unwrap();
    assert!(matches!(cli.command, Commands::Check { site: Some(_), .. }));
}

#[test]
fn cli_parses_sites_command() {
    let cli = parse_args(&["launchcheck", "sites"]).unwrap();
    assert!(matches!(cli.command, Commands::Sites));
}

#[test]
fn cli_parses_config_before_or_after_subcommand() {
    let cli = parse_args(&["launchcheck", "--config", "/etc/launchcheck.toml", "check"]).unwrap();
    assert_eq!(cli.config, Some(PathBuf::from("/etc/launchcheck.toml")));

    let cli = parse_args(&["launchcheck", "check", "-c", "local.toml"]).unwrap();
    assert_eq!(cli.config, Some(PathBuf::from("local.toml")));
}

#[test]
fn cli_counts_verbosity() {
    let cli = parse_args(&["launchcheck", "-vv", "check"]).unwrap();
    assert_eq!(cli.verbose, 2);

    let cli = parse_args(&["launchcheck", "sites", "-v"]).unwrap();
    assert_eq!(cli.verbose, 1);
}

#[test]
fn cli_requires_subcommand() {
    assert!(parse_args(&["launchcheck"]).is_err());
}

#[test]
fn cli_rejects_unknown_subcommand() {
    assert!(parse_args(&["launchcheck", "fly"]).is_err());
}

#[test]
fn cli_help_flag() {
    let result = parse_args(&["launchcheck", "--help"]);
    assert!(result.is_err());
    let err = result.err().unwrap();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
}

#[test]
fn cli_version_flag() {
    let result = parse_args(&["launchcheck", "--version"]);
    assert!(result.is_err());
    let err = result.err().unwrap();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
}
