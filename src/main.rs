//! # nodecrawler
//!
//! A crawler for the Bitcoin P2P network that tracks reachable peers.
//!
//! The process environment selects the deployment profile at startup:
//! `TESTNET=1` targets testnet, `DEBUG=1` lowers the connection budget and
//! `CONN=<n>` overrides it outright. The resolved configuration drives
//! every downstream subsystem: peer stores, the DNS seed client, the
//! connection layer and the logger.
//!
//! ## Usage
//!
//! ```bash
//! # Crawl mainnet
//! nodecrawler
//!
//! # Crawl testnet with a tighter connection budget
//! TESTNET=1 CONN=10 nodecrawler
//!
//! # Print the effective configuration without starting anything
//! nodecrawler check
//! ```

mod cli;
mod config;

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::config::{Config, EnvOverrides};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Run);

    let overrides = EnvOverrides::capture();
    let config = Config::resolve(&overrides).context("failed to resolve startup configuration")?;

    match command {
        Command::Run => handle_run(config),
        Command::Check => handle_check(&config),
    }
}

fn handle_run(config: Config) -> Result<()> {
    init_tracing(&config.logs_file())?;
    announce_configuration(&config);

    tracing::info!(
        network = %config.network,
        connections_limit = config.connections_limit,
        seeds = config.dns_seeds.len(),
        "configuration resolved"
    );
    Ok(())
}

fn handle_check(config: &Config) -> Result<()> {
    println!("{}", render_configuration(config)?);
    Ok(())
}

fn render_configuration(config: &Config) -> Result<String> {
    serde_json::to_string_pretty(config).context("failed to render configuration as JSON")
}

fn announce_configuration(config: &Config) {
    println!("Starting nodecrawler on {}.", config.network);
    println!("Nodes db: {}", config.nodes_db.display());
    println!("Good nodes db: {}", config.good_nodes_db.display());
    println!(
        "DNS seeds ({}): {}",
        config.dns_seeds.len(),
        config.dns_seeds.join(", ")
    );
    println!("Connections limit: {}", config.connections_limit);
    println!("Logs → {}", config.logs_file().display());
    println!();
}

fn init_tracing(log_path: &Path) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create logs dir {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| format!("failed to open log file {}", log_path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(file);
    let _ = LOG_GUARD.set(guard);

    let init_result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(writer)
        .try_init();
    if init_result.is_err() {
        // The global subscriber was already installed elsewhere (tests, etc.); ignore.
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn resolved_config() -> Config {
        Config::resolve(&EnvOverrides::default()).expect("resolve defaults")
    }

    #[test]
    fn init_tracing_creates_logs_dir_and_file() {
        let temp = TempDir::new().expect("temp dir");
        let log_path = temp.path().join("logs").join("logs_test.log");

        init_tracing(&log_path).expect("init tracing");
        assert!(log_path.exists(), "log file should be created");
    }

    #[test]
    fn init_tracing_tolerates_repeat_initialization() {
        let temp = TempDir::new().expect("temp dir");
        let log_path = temp.path().join("repeat.log");

        init_tracing(&log_path).expect("first init");
        init_tracing(&log_path).expect("second init");
    }

    #[test]
    fn render_configuration_emits_profile_fields() {
        let rendered = render_configuration(&resolved_config()).expect("render");

        assert!(rendered.contains(r#""network": "mainnet""#));
        assert!(rendered.contains(r#""nodes_port": 8333"#));
        assert!(rendered.contains(r#""connections_limit": 50"#));
        assert!(rendered.contains("dnsseed.emzy.de"));
    }

    #[test]
    fn announce_configuration_handles_defaults() {
        announce_configuration(&resolved_config());
    }
}
