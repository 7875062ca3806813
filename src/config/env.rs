//! Snapshot of the environment overrides consulted at startup.

use std::env;

/// Raw override strings captured from the process environment.
///
/// Captured once in `main` at process start; the resolver itself never
/// touches the process environment, so tests build snapshots directly
/// instead of mutating real variables.
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    /// `TESTNET`: exactly `"1"` selects the testnet profile.
    pub testnet: Option<String>,
    /// `DEBUG`: exactly `"1"` lowers the connection-cap baseline.
    pub debug: Option<String>,
    /// `CONN`: unconditional override of the connection cap.
    pub conn: Option<String>,
}

impl EnvOverrides {
    /// Reads `TESTNET`, `DEBUG` and `CONN` from the process environment.
    pub fn capture() -> Self {
        Self {
            testnet: env::var("TESTNET").ok(),
            debug: env::var("DEBUG").ok(),
            conn: env::var("CONN").ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::EnvOverrides;

    #[test]
    fn default_snapshot_has_no_overrides() {
        let snapshot = EnvOverrides::default();
        assert!(snapshot.testnet.is_none());
        assert!(snapshot.debug.is_none());
        assert!(snapshot.conn.is_none());
    }
}
