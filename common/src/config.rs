use std::fmt;

use crate::network::element::Exclusions;

/// Upper bound on how many addresses a materialized list may hold unless the caller
/// overrides it. A `/16` (65 535 hosts) still fits.
pub const DEFAULT_MAX_HOSTS: u64 = 1 << 16;

/// Where the generated run of addresses is anchored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RangeMode {
    /// Start at the gateway and count consecutively. Assumes the gateway is the first
    /// host of the subnet; the broadcast exclusion drops the last generated address.
    #[default]
    FromGateway,
    /// Start right after the network address and end at the real broadcast address,
    /// wherever the gateway sits.
    Subnet,
}

impl fmt::Display for RangeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeMode::FromGateway => f.write_str("gateway"),
            RangeMode::Subnet => f.write_str("subnet"),
        }
    }
}

/// Options of one listing call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOptions {
    /// Network elements left out of the result.
    pub omit: Exclusions,
    pub mode: RangeMode,
    /// Refuse to materialize more addresses than this. `None` disables the check.
    pub max_hosts: Option<u64>,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            omit: Exclusions::default(),
            mode: RangeMode::default(),
            max_hosts: Some(DEFAULT_MAX_HOSTS),
        }
    }
}

impl ListOptions {
    pub fn omit(omit: impl Into<Exclusions>) -> Self {
        Self {
            omit: omit.into(),
            ..Self::default()
        }
    }
}
