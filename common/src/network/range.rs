//! # IPv4 Range Model
//!
//! Continuous, inclusive runs of IPv4 addresses: whole CIDR blocks and runs of `n`
//! consecutive addresses from a starting point.

use std::net::Ipv4Addr;

use pnet::ipnetwork::Ipv4Network;

use crate::error::NetworkError;
use crate::network::address::IPV4_BITS;

/// Represents a continuous range of IPv4 addresses, inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ipv4Range {
    pub start_addr: Ipv4Addr,
    pub end_addr: Ipv4Addr,
}

impl Ipv4Range {
    pub fn new(start_addr: Ipv4Addr, end_addr: Ipv4Addr) -> Self {
        Self {
            start_addr,
            end_addr,
        }
    }

    /// `count` consecutive addresses beginning at `start`.
    ///
    /// `Ok(None)` when `count` is zero; `RangeOverflow` when the run would pass
    /// `255.255.255.255`.
    pub fn starting_at(start: Ipv4Addr, count: u64) -> Result<Option<Self>, NetworkError> {
        if count == 0 {
            return Ok(None);
        }
        let last = u64::from(u32::from(start)) + (count - 1);
        let end = u32::try_from(last).map_err(|_| NetworkError::RangeOverflow { start, count })?;
        Ok(Some(Self::new(start, Ipv4Addr::from(end))))
    }

    /// The integer view of the range, empty when `start_addr > end_addr`.
    pub fn as_u32_range(&self) -> std::ops::RangeInclusive<u32> {
        u32::from(self.start_addr)..=u32::from(self.end_addr)
    }

    pub fn len(&self) -> u64 {
        let start = u64::from(u32::from(self.start_addr));
        let end = u64::from(u32::from(self.end_addr));
        if start > end { 0 } else { end - start + 1 }
    }

    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        self.as_u32_range().contains(&u32::from(ip))
    }
}

/// Creates a range from an IP and a CIDR prefix (e.g., 192.168.1.0/24).
///
/// Returns the range covering the entire network block, network address to broadcast
/// address.
pub fn cidr_range(ip: Ipv4Addr, prefix: u8) -> Result<Ipv4Range, NetworkError> {
    let network = Ipv4Network::new(ip, prefix)
        .map_err(|_| NetworkError::InvalidPrefix(format!("{prefix} > {IPV4_BITS}")))?;
    let start = network.network();
    let end = network.broadcast();

    Ok(Ipv4Range::new(start, end))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
