//! # IPv4 Address Helpers
//!
//! Strict parsing of dotted-decimal addresses and CIDR strings, prefix checks, plus the
//! 32-bit arithmetic the enumerator builds on.

use std::net::Ipv4Addr;

use pnet::ipnetwork::Ipv4Network;

use crate::error::NetworkError;

/// Width of an IPv4 address in bits.
pub const IPV4_BITS: u8 = 32;

/// Parses a dotted-decimal IPv4 address.
///
/// Exactly four decimal octets in `0..=255`, no leading zeros, no surrounding whitespace.
pub fn parse_ipv4(s: &str) -> Result<Ipv4Addr, NetworkError> {
    s.parse::<Ipv4Addr>()
        .map_err(|_| NetworkError::InvalidAddress(s.to_string()))
}

/// Rejects prefix lengths above 32.
pub fn validate_prefix(prefix: u8) -> Result<u8, NetworkError> {
    if prefix > IPV4_BITS {
        return Err(NetworkError::InvalidPrefix(format!("{prefix} > {IPV4_BITS}")));
    }
    Ok(prefix)
}

/// Splits CIDR notation like `192.168.1.11/24` into address and prefix length.
///
/// The prefix may also be written as a netmask (`192.168.1.11/255.255.255.0`).
pub fn parse_cidr(s: &str) -> Result<(Ipv4Addr, u8), NetworkError> {
    let Some((ip_str, prefix_str)) = s.split_once('/') else {
        return Err(NetworkError::PrefixNotFound(s.to_string()));
    };
    parse_ipv4(ip_str)?;

    let network = s
        .parse::<Ipv4Network>()
        .map_err(|_| NetworkError::InvalidPrefix(prefix_str.to_string()))?;

    Ok((network.ip(), network.prefix()))
}

/// Number of addresses in a block of the given prefix length, `2^(32 - prefix)`.
pub fn address_count(prefix: u8) -> u64 {
    1u64 << (IPV4_BITS - prefix)
}

/// The address following `addr`, carrying across octets.
///
/// Returns `None` past `255.255.255.255`.
pub fn next_addr(addr: Ipv4Addr) -> Option<Ipv4Addr> {
    u32::from(addr).checked_add(1).map(Ipv4Addr::from)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
