//! # Subnet Enumerator
//!
//! Computes the host addresses of the subnet behind the default route.
//!
//! In [`RangeMode::FromGateway`] the run starts at the gateway and holds
//! `2^(32 - prefix) - 1` addresses (the network address is always left out), one fewer
//! when the broadcast address is excluded. Gateway and own address exclusions are
//! applied by value afterwards. [`RangeMode::Subnet`] keeps the same count but anchors
//! the run right after the real network address.

use std::net::Ipv4Addr;
use std::ops::RangeInclusive;

use lanlist_common::config::{DEFAULT_MAX_HOSTS, ListOptions, RangeMode};
use lanlist_common::error::NetworkError;
use lanlist_common::network::address::{self, address_count, validate_prefix};
use lanlist_common::network::element::Exclusions;
use lanlist_common::network::range::{self, Ipv4Range};
use lanlist_common::network::snapshot::NetworkSnapshot;
use tracing::debug;

use crate::policy::ExclusionPolicy;

/// What one enumeration will generate and drop, computed before any address is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostPlan {
    /// The consecutive run to generate. `None` when there is nothing to generate.
    pub range: Option<Ipv4Range>,
    pub policy: ExclusionPolicy,
}

impl HostPlan {
    /// Number of addresses generated before value filters apply.
    pub fn generated(&self) -> u64 {
        self.range.map(|range| range.len()).unwrap_or(0)
    }

    /// Number of addresses the enumeration yields once value filters apply.
    pub fn len(&self) -> u64 {
        let Some(range) = self.range else {
            return 0;
        };
        let dropped = self
            .policy
            .filtered
            .iter()
            .filter(|ip| range.contains(**ip))
            .count() as u64;
        range.len() - dropped
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Lazily yields the planned addresses in ascending order, skipping filtered ones.
#[derive(Debug, Clone)]
pub struct HostIter {
    inner: RangeInclusive<u32>,
    policy: ExclusionPolicy,
}

impl HostIter {
    fn new(plan: HostPlan) -> Self {
        let inner = match plan.range {
            Some(range) => range.as_u32_range(),
            None => RangeInclusive::new(1, 0),
        };
        Self {
            inner,
            policy: plan.policy,
        }
    }
}

impl Iterator for HostIter {
    type Item = Ipv4Addr;

    fn next(&mut self) -> Option<Ipv4Addr> {
        loop {
            let ip = Ipv4Addr::from(self.inner.next()?);
            if self.policy.keeps(ip) {
                return Some(ip);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.inner.size_hint();
        (lower.saturating_sub(self.policy.filtered.len()), upper)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Enumerator {
    mode: RangeMode,
    max_hosts: Option<u64>,
}

impl Default for Enumerator {
    fn default() -> Self {
        Self {
            mode: RangeMode::default(),
            max_hosts: Some(DEFAULT_MAX_HOSTS),
        }
    }
}

impl Enumerator {
    pub fn new(mode: RangeMode, max_hosts: Option<u64>) -> Self {
        Self { mode, max_hosts }
    }

    pub fn from_options(options: &ListOptions) -> Self {
        Self::new(options.mode, options.max_hosts)
    }

    /// Validates the snapshot and works out the run to generate.
    pub fn plan(
        &self,
        snapshot: &NetworkSnapshot,
        exclusions: &Exclusions,
    ) -> Result<HostPlan, NetworkError> {
        let prefix = validate_prefix(snapshot.prefix_len)?;
        let policy = ExclusionPolicy::evaluate(exclusions, snapshot.gateway, snapshot.own_address);

        let mut count = address_count(prefix) - 1;
        if policy.shrink_for_broadcast {
            count = count.saturating_sub(1);
        }

        let start = match self.mode {
            RangeMode::FromGateway => snapshot.gateway,
            RangeMode::Subnet => first_host(snapshot.gateway, prefix, count)?,
        };
        let range = Ipv4Range::starting_at(start, count)?;

        debug!(
            "Planned {count} addresses from {start} ({} mode, /{prefix}, omit: {exclusions})",
            self.mode
        );

        Ok(HostPlan { range, policy })
    }

    /// Streams the host addresses without materializing them. Not bound by `max_hosts`.
    pub fn hosts(
        &self,
        snapshot: &NetworkSnapshot,
        exclusions: &Exclusions,
    ) -> Result<HostIter, NetworkError> {
        Ok(HostIter::new(self.plan(snapshot, exclusions)?))
    }

    /// Collects the host addresses, refusing runs longer than `max_hosts`.
    pub fn enumerate(
        &self,
        snapshot: &NetworkSnapshot,
        exclusions: &Exclusions,
    ) -> Result<Vec<Ipv4Addr>, NetworkError> {
        let plan = self.plan(snapshot, exclusions)?;
        let hosts = plan.generated();

        if let Some(limit) = self.max_hosts {
            if hosts > limit {
                return Err(NetworkError::HostLimitExceeded { hosts, limit });
            }
        }

        let mut ips = Vec::with_capacity(hosts as usize);
        ips.extend(HostIter::new(plan));
        Ok(ips)
    }
}

/// The address right after the network address of the gateway's block.
fn first_host(gateway: Ipv4Addr, prefix: u8, count: u64) -> Result<Ipv4Addr, NetworkError> {
    let network = range::cidr_range(gateway, prefix)?.start_addr;
    if count == 0 {
        return Ok(network);
    }
    address::next_addr(network).ok_or(NetworkError::RangeOverflow {
        start: network,
        count,
    })
}

/// Lists the hosts of `gateway/prefix_len` as dotted-decimal strings.
///
/// String-level entry point: both addresses are parsed strictly and the default host
/// limit applies.
pub fn enumerate_hosts(
    gateway: &str,
    prefix_len: u8,
    own_address: &str,
    exclusions: &Exclusions,
) -> Result<Vec<String>, NetworkError> {
    let gateway = address::parse_ipv4(gateway)?;
    let own_address = address::parse_ipv4(own_address)?;
    let snapshot = NetworkSnapshot::new(gateway, own_address, String::new(), prefix_len)?;

    let ips = Enumerator::default().enumerate(&snapshot, exclusions)?;
    Ok(ips.iter().map(Ipv4Addr::to_string).collect())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
