//! # Gateway Resolution
//!
//! The seam between the enumerator and the operating system. A [`GatewayResolver`]
//! reports the default route's gateway together with the own address and prefix length
//! of the interface carrying it.
//!
//! [`snapshot_from_table`] holds the lookup rules shared by every implementation, so an
//! in-memory table and the live OS table fail the same way.

use std::net::Ipv4Addr;

use async_trait::async_trait;
use lanlist_common::error::NetworkError;
use lanlist_common::network::interface::{self, InterfaceEntry};
use lanlist_common::network::snapshot::NetworkSnapshot;

/// The IPv4 default route: next hop and outgoing interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultRoute {
    pub gateway: Ipv4Addr,
    pub interface: String,
    /// Route metric, lower wins. Zero when the platform does not report one.
    pub metric: u32,
}

impl DefaultRoute {
    pub fn new(gateway: Ipv4Addr, interface: impl Into<String>) -> Self {
        Self {
            gateway,
            interface: interface.into(),
            metric: 0,
        }
    }
}

#[async_trait]
pub trait GatewayResolver: Send + Sync {
    async fn resolve(&self) -> Result<NetworkSnapshot, NetworkError>;
}

/// Resolves the snapshot for `route` from an interface table.
///
/// The interface must exist, must carry an IPv4 entry, and its first IPv4 entry must
/// carry a prefix length. That entry's address becomes the own address.
pub fn snapshot_from_table(
    route: &DefaultRoute,
    table: &[InterfaceEntry],
) -> Result<NetworkSnapshot, NetworkError> {
    let entry = interface::find_interface(table, &route.interface)
        .ok_or_else(|| NetworkError::InterfaceNotFound(route.interface.clone()))?;

    let (own_address, prefix) = entry
        .first_ipv4()
        .ok_or_else(|| NetworkError::AddressFamilyNotFound(route.interface.clone()))?;

    let prefix = prefix.ok_or_else(|| {
        NetworkError::PrefixNotFound(format!("{own_address} on {}", route.interface))
    })?;

    NetworkSnapshot::new(route.gateway, own_address, route.interface.clone(), prefix)
}

/// Always answers with the same outcome.
#[derive(Debug, Clone)]
pub struct StaticResolver {
    outcome: Result<NetworkSnapshot, NetworkError>,
}

impl StaticResolver {
    pub fn new(snapshot: NetworkSnapshot) -> Self {
        Self {
            outcome: Ok(snapshot),
        }
    }

    pub fn failing(error: NetworkError) -> Self {
        Self {
            outcome: Err(error),
        }
    }
}

#[async_trait]
impl GatewayResolver for StaticResolver {
    async fn resolve(&self) -> Result<NetworkSnapshot, NetworkError> {
        self.outcome.clone()
    }
}

/// Resolves against a fixed default route and interface table.
#[derive(Debug, Clone)]
pub struct TableResolver {
    route: DefaultRoute,
    table: Vec<InterfaceEntry>,
}

impl TableResolver {
    pub fn new(route: DefaultRoute, table: Vec<InterfaceEntry>) -> Self {
        Self { route, table }
    }
}

#[async_trait]
impl GatewayResolver for TableResolver {
    async fn resolve(&self) -> Result<NetworkSnapshot, NetworkError> {
        snapshot_from_table(&self.route, &self.table)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use lanlist_common::network::interface::InterfaceAddr;
    use std::net::Ipv6Addr;

    fn en0_route() -> DefaultRoute {
        DefaultRoute::new(Ipv4Addr::new(192, 168, 1, 1), "en0")
    }

    fn v4(address: Ipv4Addr, prefix: Option<u8>) -> InterfaceAddr {
        InterfaceAddr::V4 { address, prefix }
    }

    fn link_local() -> InterfaceAddr {
        InterfaceAddr::V6 {
            address: "fe80::146a:7118:260f:62a6".parse::<Ipv6Addr>().unwrap(),
            prefix: Some(64),
        }
    }

    fn table() -> Vec<InterfaceEntry> {
        vec![
            InterfaceEntry::new("lo0", vec![v4(Ipv4Addr::LOCALHOST, Some(8))]),
            InterfaceEntry::new(
                "en0",
                vec![link_local(), v4(Ipv4Addr::new(192, 168, 1, 11), Some(24))],
            ),
        ]
    }

    #[test]
    fn resolves_from_table() {
        let snapshot = snapshot_from_table(&en0_route(), &table()).unwrap();
        assert_eq!(
            snapshot,
            NetworkSnapshot::new(
                Ipv4Addr::new(192, 168, 1, 1),
                Ipv4Addr::new(192, 168, 1, 11),
                "en0",
                24
            )
            .unwrap()
        );
    }

    #[test]
    fn missing_interface() {
        assert_eq!(
            snapshot_from_table(&en0_route(), &[]),
            Err(NetworkError::InterfaceNotFound("en0".to_string()))
        );
    }

    #[test]
    fn missing_v4_family() {
        let table = vec![InterfaceEntry::new("en0", vec![link_local()])];
        let err = snapshot_from_table(&en0_route(), &table).unwrap_err();
        assert_eq!(err, NetworkError::AddressFamilyNotFound("en0".to_string()));
        assert_eq!(err.to_string(), "v4 family not found in interface en0");
    }

    #[test]
    fn missing_prefix() {
        let table = vec![InterfaceEntry::new(
            "en0",
            vec![v4(Ipv4Addr::new(192, 168, 1, 11), None)],
        )];
        assert!(matches!(
            snapshot_from_table(&en0_route(), &table),
            Err(NetworkError::PrefixNotFound(_))
        ));
    }

    #[tokio::test]
    async fn static_resolver_returns_outcome() {
        let snapshot = snapshot_from_table(&en0_route(), &table()).unwrap();
        let ok = StaticResolver::new(snapshot.clone());
        assert_eq!(ok.resolve().await, Ok(snapshot));

        let failing = StaticResolver::failing(NetworkError::GatewayNotFound("offline".into()));
        assert!(matches!(failing.resolve().await, Err(NetworkError::GatewayNotFound(_))));
    }

    #[tokio::test]
    async fn table_resolver_uses_shared_rules() {
        let resolver = TableResolver::new(en0_route(), table());
        let snapshot = resolver.resolve().await.unwrap();
        assert_eq!(snapshot.own_address, Ipv4Addr::new(192, 168, 1, 11));

        let resolver = TableResolver::new(DefaultRoute::new(Ipv4Addr::new(10, 0, 0, 1), "wlan0"), table());
        assert_eq!(
            resolver.resolve().await,
            Err(NetworkError::InterfaceNotFound("wlan0".to_string()))
        );
    }
}
