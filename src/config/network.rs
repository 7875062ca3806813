//! Network profiles and their compiled-in defaults.
//!
//! A [`Network`] names one of the two deployment profiles. Every
//! network-scoped value (wire magic, default port, seed list, store paths)
//! is derived from the selected variant, so a resolved configuration can
//! never mix mainnet and testnet fields.

use std::fmt;
use std::time::Duration;

use serde::Serialize;

/// Wire protocol version advertised during the version handshake.
pub const PROTOCOL_VERSION: u32 = 70016;

/// Resolver queried for DNS seeds (Cloudflare public DNS).
pub const DNS_ADDRESS: &str = "1.1.1.1:53";

/// Cap on a single peer connection attempt.
pub const NODE_TIMEOUT: Duration = Duration::from_secs(5);
/// Keep-alive ping cadence for connected peers.
pub const PING_INTERVAL: Duration = Duration::from_secs(60);
/// Cap on waiting for a ping reply before the peer counts as dead.
pub const PING_TIMEOUT: Duration = Duration::from_secs(15);
/// Accept-loop polling cadence.
pub const LISTEN_INTERVAL: Duration = Duration::from_secs(1);

/// Connection cap under `DEBUG=1`.
pub const DEBUG_CONNECTIONS_LIMIT: usize = 30;
/// Connection cap for regular runs.
pub const DEFAULT_CONNECTIONS_LIMIT: usize = 50;

/// Directory receiving run logs.
pub const LOGS_DIR: &str = "logs";

/// DNS seeds for Bitcoin mainnet, tried in listed order.
pub const MAINNET_DNS_SEEDS: &[&str] = &[
    "dnsseed.emzy.de",
    "dnsseed.bluematt.me",
    "dnsseed.bitcoin.dashjr.org",
    "seed.bitcoin.sipa.be",
    "seed.bitcoinstats.com",
    "seed.bitcoin.jonasschnelli.ch",
    "seed.btc.petertodd.org",
    "seed.bitcoin.sprovoost.nl",
    "seed.bitcoin.wiz.biz",
    "seed.bitnodes.io",
];

/// DNS seeds for Bitcoin testnet3, tried in listed order.
pub const TESTNET_DNS_SEEDS: &[&str] = &[
    "testnet-seed.bitcoin.jonasschnelli.ch",
    "seed.tbtc.petertodd.org",
    "seed.testnet.bitcoin.sprovoost.nl",
    "testnet-seed.bluematt.me",
];

/// Target Bitcoin network.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Testnet,
}

impl Network {
    /// Magic bytes prefixing every wire message on this network.
    pub const fn magic(self) -> u32 {
        match self {
            Network::Mainnet => 0xD9B4_BEF9,
            Network::Testnet => 0x0709_110B,
        }
    }

    /// Default P2P port peers listen on.
    pub const fn default_port(self) -> u16 {
        match self {
            Network::Mainnet => 8333,
            Network::Testnet => 18333,
        }
    }

    /// Budget for a single DNS seed query.
    pub const fn dns_timeout(self) -> Duration {
        match self {
            Network::Mainnet => Duration::from_secs(5),
            Network::Testnet => Duration::from_secs(10),
        }
    }

    /// Bootstrap seed hostnames for this network.
    pub const fn dns_seeds(self) -> &'static [&'static str] {
        match self {
            Network::Mainnet => MAINNET_DNS_SEEDS,
            Network::Testnet => TESTNET_DNS_SEEDS,
        }
    }

    /// Store of every peer address the crawler has seen.
    pub fn nodes_db(self) -> &'static str {
        match self {
            Network::Mainnet => "data/nodes_mainnet.json",
            Network::Testnet => "data/nodes_testnet.json",
        }
    }

    /// Store of peers verified reachable.
    pub fn good_nodes_db(self) -> &'static str {
        match self {
            Network::Mainnet => "data/nodes_good_mainnet.json",
            Network::Testnet => "data/nodes_good_testnet.json",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magic_matches_wire_constants() {
        assert_eq!(Network::Mainnet.magic(), 0xD9B4_BEF9);
        assert_eq!(Network::Testnet.magic(), 0x0709_110B);
    }

    #[test]
    fn default_ports_match_networks() {
        assert_eq!(Network::Mainnet.default_port(), 8333);
        assert_eq!(Network::Testnet.default_port(), 18333);
    }

    #[test]
    fn testnet_gets_larger_dns_budget() {
        assert_eq!(Network::Mainnet.dns_timeout(), Duration::from_secs(5));
        assert_eq!(Network::Testnet.dns_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn seed_lists_are_populated() {
        assert_eq!(Network::Mainnet.dns_seeds().len(), 10);
        assert_eq!(Network::Testnet.dns_seeds().len(), 4);
    }

    #[test]
    fn seed_lists_keep_their_order() {
        let mainnet = Network::Mainnet.dns_seeds();
        assert_eq!(mainnet.first(), Some(&"dnsseed.emzy.de"));
        assert_eq!(mainnet.last(), Some(&"seed.bitnodes.io"));

        let testnet = Network::Testnet.dns_seeds();
        assert_eq!(
            testnet.first(),
            Some(&"testnet-seed.bitcoin.jonasschnelli.ch")
        );
        assert_eq!(testnet.last(), Some(&"testnet-seed.bluematt.me"));
    }

    #[test]
    fn store_paths_carry_network_suffix() {
        assert_eq!(Network::Mainnet.nodes_db(), "data/nodes_mainnet.json");
        assert_eq!(
            Network::Mainnet.good_nodes_db(),
            "data/nodes_good_mainnet.json"
        );
        assert_eq!(Network::Testnet.nodes_db(), "data/nodes_testnet.json");
        assert_eq!(
            Network::Testnet.good_nodes_db(),
            "data/nodes_good_testnet.json"
        );
    }

    #[test]
    fn display_uses_lowercase_names() {
        assert_eq!(Network::Mainnet.to_string(), "mainnet");
        assert_eq!(Network::Testnet.to_string(), "testnet");
    }
}
