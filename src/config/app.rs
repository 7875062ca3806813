//! Startup configuration resolution.
//!
//! [`Config::resolve`] turns the captured environment overrides into the
//! single immutable configuration value the rest of the process reads.
//! Peer stores, the DNS seed client, the connection layer and the logger
//! all receive their settings from it.

use std::num::{NonZeroUsize, ParseIntError};
use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use super::env::EnvOverrides;
use super::network::{
    Network, DEBUG_CONNECTIONS_LIMIT, DEFAULT_CONNECTIONS_LIMIT, DNS_ADDRESS, LISTEN_INTERVAL,
    LOGS_DIR, NODE_TIMEOUT, PING_INTERVAL, PING_TIMEOUT, PROTOCOL_VERSION,
};

const LOGS_TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Errors surfaced while resolving the startup configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `CONN` was set but does not name a usable connection cap.
    #[error("invalid CONN override {value:?}: expected a positive base-10 integer")]
    InvalidOverride {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Fully resolved startup configuration.
///
/// Constructed exactly once at process start and never mutated afterwards;
/// shared by reference with every downstream subsystem.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Config {
    /// Selected deployment profile.
    pub network: Network,
    /// Store of every peer address the crawler has seen.
    pub nodes_db: PathBuf,
    /// Store of peers verified reachable.
    pub good_nodes_db: PathBuf,
    /// Default P2P port for the selected network.
    pub nodes_port: u16,
    /// Cap on a single peer connection attempt.
    pub node_timeout: Duration,
    /// Keep-alive ping cadence for connected peers.
    pub ping_interval: Duration,
    /// Cap on waiting for a ping reply.
    pub ping_timeout: Duration,
    /// Accept-loop polling cadence.
    pub listen_interval: Duration,
    /// Maximum concurrent peer connections.
    pub connections_limit: usize,
    /// Directory receiving run logs.
    pub logs_dir: PathBuf,
    /// Per-run log filename, derived from the startup instant.
    pub logs_filename: String,
    /// Resolver queried for DNS seeds.
    pub dns_address: String,
    /// Budget for a single DNS seed query.
    pub dns_timeout: Duration,
    /// Bootstrap seed hostnames, tried in listed order.
    pub dns_seeds: &'static [&'static str],
    /// Wire protocol version advertised to peers.
    pub pver: u32,
    /// Magic bytes identifying the selected network on the wire.
    pub magic: u32,
}

impl Config {
    /// Resolves the configuration against the wall clock.
    pub fn resolve(env: &EnvOverrides) -> Result<Self, ConfigError> {
        Self::resolve_at(env, Utc::now())
    }

    /// Resolves the configuration for an explicit startup instant.
    ///
    /// The instant only feeds the log filename; everything else is a pure
    /// function of the override snapshot.
    pub fn resolve_at(env: &EnvOverrides, started_at: DateTime<Utc>) -> Result<Self, ConfigError> {
        let network = match env.testnet.as_deref() {
            Some("1") => Network::Testnet,
            _ => Network::Mainnet,
        };

        let mut connections_limit = match env.debug.as_deref() {
            Some("1") => DEBUG_CONNECTIONS_LIMIT,
            _ => DEFAULT_CONNECTIONS_LIMIT,
        };
        // An explicit CONN override beats the DEBUG baseline.
        if let Some(raw) = env.conn.as_deref().filter(|raw| !raw.is_empty()) {
            let limit: NonZeroUsize =
                raw.parse().map_err(|source| ConfigError::InvalidOverride {
                    value: raw.to_string(),
                    source,
                })?;
            connections_limit = limit.get();
        }

        Ok(Self {
            network,
            nodes_db: PathBuf::from(network.nodes_db()),
            good_nodes_db: PathBuf::from(network.good_nodes_db()),
            nodes_port: network.default_port(),
            node_timeout: NODE_TIMEOUT,
            ping_interval: PING_INTERVAL,
            ping_timeout: PING_TIMEOUT,
            listen_interval: LISTEN_INTERVAL,
            connections_limit,
            logs_dir: PathBuf::from(LOGS_DIR),
            logs_filename: format!("logs_{}.log", started_at.format(LOGS_TIMESTAMP_FORMAT)),
            dns_address: DNS_ADDRESS.to_string(),
            dns_timeout: network.dns_timeout(),
            dns_seeds: network.dns_seeds(),
            pver: PROTOCOL_VERSION,
            magic: network.magic(),
        })
    }

    /// Full path of this run's log file.
    pub fn logs_file(&self) -> PathBuf {
        self.logs_dir.join(&self.logs_filename)
    }
}
