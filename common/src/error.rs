use std::net::Ipv4Addr;

use thiserror::Error;

/// Failures of resolving the local network or enumerating its hosts.
///
/// The first three variants are raised by the resolver and are kept distinct because
/// callers branch on them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    /// The interface carrying the default route is missing from the interface table.
    #[error("interface not found: {0}")]
    InterfaceNotFound(String),

    /// The interface exists but has no IPv4 entry.
    #[error("v4 family not found in interface {0}")]
    AddressFamilyNotFound(String),

    /// The IPv4 entry carries no prefix length.
    #[error("cidr not found: {0}")]
    PrefixNotFound(String),

    #[error("invalid prefix length: {0}")]
    InvalidPrefix(String),

    #[error("invalid IPv4 address: {0}")]
    InvalidAddress(String),

    /// No IPv4 default route could be determined.
    #[error("unable to determine default gateway: {0}")]
    GatewayNotFound(String),

    /// Generating `count` addresses from `start` would pass 255.255.255.255.
    #[error("{count} addresses starting at {start} overflow the IPv4 address space")]
    RangeOverflow { start: Ipv4Addr, count: u64 },

    /// Materializing the list would exceed the configured host limit.
    #[error("refusing to list {hosts} addresses (limit is {limit})")]
    HostLimitExceeded { hosts: u64, limit: u64 },

    /// Reading the operating system's network state failed.
    #[error("resolver failed: {0}")]
    Resolver(String),
}
