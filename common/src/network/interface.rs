//! # Interface Table
//!
//! A platform-neutral view of the operating system's interface table, reduced to what
//! the resolver needs: names, address families, addresses and prefix lengths.

use std::net::{Ipv4Addr, Ipv6Addr};

use pnet::datalink::NetworkInterface;
use pnet::ipnetwork::IpNetwork;

/// One address assigned to an interface.
///
/// `prefix` is `None` when the platform reported the address without a netmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterfaceAddr {
    V4 { address: Ipv4Addr, prefix: Option<u8> },
    V6 { address: Ipv6Addr, prefix: Option<u8> },
}

impl From<&IpNetwork> for InterfaceAddr {
    fn from(net: &IpNetwork) -> Self {
        match net {
            IpNetwork::V4(v4) => InterfaceAddr::V4 {
                address: v4.ip(),
                prefix: Some(v4.prefix()),
            },
            IpNetwork::V6(v6) => InterfaceAddr::V6 {
                address: v6.ip(),
                prefix: Some(v6.prefix()),
            },
        }
    }
}

/// An entry of the interface table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceEntry {
    pub name: String,
    pub addrs: Vec<InterfaceAddr>,
}

impl InterfaceEntry {
    pub fn new(name: impl Into<String>, addrs: Vec<InterfaceAddr>) -> Self {
        Self {
            name: name.into(),
            addrs,
        }
    }

    /// The first IPv4 entry of the interface, in table order.
    pub fn first_ipv4(&self) -> Option<(Ipv4Addr, Option<u8>)> {
        self.addrs.iter().find_map(|addr| match addr {
            InterfaceAddr::V4 { address, prefix } => Some((*address, *prefix)),
            InterfaceAddr::V6 { .. } => None,
        })
    }
}

impl From<&NetworkInterface> for InterfaceEntry {
    fn from(interface: &NetworkInterface) -> Self {
        Self {
            name: interface.name.clone(),
            addrs: interface.ips.iter().map(InterfaceAddr::from).collect(),
        }
    }
}

/// Looks an interface up by exact name.
pub fn find_interface<'a>(table: &'a [InterfaceEntry], name: &str) -> Option<&'a InterfaceEntry> {
    table.iter().find(|entry| entry.name == name)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
