//! Command-line interface definitions and argument parsing.
//!
//! Configuration itself is environment-driven; the CLI only carries the
//! operational commands.

use clap::{Parser, Subcommand};

/// Command-line interface definition.
#[derive(Parser, Debug)]
#[command(
    name = "nodecrawler",
    author,
    version,
    about = "Bitcoin network crawler tracking reachable peers"
)]
pub struct Cli {
    /// Optional lifecycle subcommand (defaults to `run`).
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// High-level commands supported by the CLI.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start the crawler (default when no subcommand is provided).
    #[command(alias = "start")]
    Run,
    /// Resolve the startup configuration and print it as JSON.
    Check,
}
