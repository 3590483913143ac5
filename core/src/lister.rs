//! # IPv4 Listing Service
//!
//! Implements the "list the hosts of my network" use case.
//!
//! The service awaits the resolver once, then hands the snapshot to the synchronous
//! [`Enumerator`]. Nothing is cached between calls.

use std::net::Ipv4Addr;

use lanlist_common::config::ListOptions;
use lanlist_common::error::NetworkError;
use lanlist_common::network::snapshot::NetworkSnapshot;
use tracing::{debug, info};

use crate::enumerator::{Enumerator, HostIter};
use crate::resolver::GatewayResolver;
use crate::system::SystemResolver;

/// Application service for listing the hosts of the local IPv4 network.
///
/// Orchestrates one listing by:
/// 1. delegating "where am I" to the [`GatewayResolver`].
/// 2. enumerating the subnet with the call's [`ListOptions`].
pub struct IpLister {
    resolver: Box<dyn GatewayResolver>,
}

impl IpLister {
    pub fn new(resolver: Box<dyn GatewayResolver>) -> Self {
        Self { resolver }
    }

    /// A lister backed by the operating system's routing and interface tables.
    pub fn system() -> Self {
        Self::new(Box::new(SystemResolver))
    }

    pub async fn snapshot(&self) -> Result<NetworkSnapshot, NetworkError> {
        let snapshot = self.resolver.resolve().await?;
        debug!("Resolved {snapshot}");
        Ok(snapshot)
    }

    /// Lists the hosts as addresses, ascending from the anchor of `options.mode`.
    pub async fn list_addrs(&self, options: &ListOptions) -> Result<Vec<Ipv4Addr>, NetworkError> {
        let snapshot = self.snapshot().await?;
        let ips = Enumerator::from_options(options).enumerate(&snapshot, &options.omit)?;
        info!("Listed {} addresses on {}", ips.len(), snapshot.interface);
        Ok(ips)
    }

    /// Lists the hosts as dotted-decimal strings.
    pub async fn list(&self, options: &ListOptions) -> Result<Vec<String>, NetworkError> {
        let ips = self.list_addrs(options).await?;
        Ok(ips.iter().map(Ipv4Addr::to_string).collect())
    }

    /// Resolves once and returns a lazy iterator over the hosts; `max_hosts` is ignored.
    pub async fn stream(&self, options: &ListOptions) -> Result<HostIter, NetworkError> {
        let snapshot = self.snapshot().await?;
        Enumerator::from_options(options).hosts(&snapshot, &options.omit)
    }
}

/// Lists the IPv4 hosts of the network behind the default route.
///
/// `None` lists everything the subnet holds except the network address.
///
/// ```no_run
/// use lanlist_common::config::ListOptions;
/// use lanlist_common::network::element::NetworkElement;
///
/// # async fn run() -> Result<(), lanlist_common::error::NetworkError> {
/// let ips = lanlist_core::v4_ip_list(Some(ListOptions::omit([NetworkElement::Broadcast]))).await?;
/// println!("{ips:?}"); // ["192.168.1.1", "192.168.1.2", ...]
/// # Ok(())
/// # }
/// ```
pub async fn v4_ip_list(options: Option<ListOptions>) -> Result<Vec<String>, NetworkError> {
    IpLister::system()
        .list(&options.unwrap_or_default())
        .await
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
