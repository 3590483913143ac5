use std::fmt;
use std::net::Ipv4Addr;

use crate::error::NetworkError;
use crate::network::address::{self, validate_prefix};
use crate::network::range::{self, Ipv4Range};

/// The local network as resolved from the default route for a single listing call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkSnapshot {
    /// Next hop of the default route.
    pub gateway: Ipv4Addr,
    /// This machine's address on `interface`.
    pub own_address: Ipv4Addr,
    /// Name of the interface carrying the default route.
    pub interface: String,
    /// Bits of network mask on `interface`.
    pub prefix_len: u8,
}

impl NetworkSnapshot {
    pub fn new(
        gateway: Ipv4Addr,
        own_address: Ipv4Addr,
        interface: impl Into<String>,
        prefix_len: u8,
    ) -> Result<Self, NetworkError> {
        Ok(Self {
            gateway,
            own_address,
            interface: interface.into(),
            prefix_len: validate_prefix(prefix_len)?,
        })
    }

    /// Builds a snapshot from a gateway and the interface's own CIDR, e.g. `192.168.1.11/24`.
    pub fn from_cidr(
        gateway: &str,
        interface: impl Into<String>,
        cidr: &str,
    ) -> Result<Self, NetworkError> {
        let gateway = address::parse_ipv4(gateway)?;
        let (own_address, prefix_len) = address::parse_cidr(cidr)?;
        Self::new(gateway, own_address, interface, prefix_len)
    }

    /// The whole block the gateway sits in, network address to broadcast address.
    pub fn subnet(&self) -> Result<Ipv4Range, NetworkError> {
        range::cidr_range(self.gateway, self.prefix_len)
    }
}

impl fmt::Display for NetworkSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} via {} ({}/{})",
            self.interface, self.gateway, self.own_address, self.prefix_len
        )
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
