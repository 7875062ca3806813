//! Startup configuration for the crawler.
//!
//! The process environment is snapshotted once at startup and resolved into
//! a single immutable [`Config`] value shared with every other subsystem:
//!
//! - Environment overrides (`TESTNET`, `DEBUG`, `CONN`)
//! - Network profile selection (mainnet/testnet) with compiled-in defaults
//! - Derived fields such as the per-run log filename

mod app;
mod env;
mod network;

pub use app::{Config, ConfigError};
pub use env::EnvOverrides;
pub use network::Network;
