//! Turns an exclusion set into the two decisions the enumerator acts on.
//!
//! Broadcast is handled by shrinking the generated run by one, since it is always the
//! last address of that run. Gateway and own address have no fixed position, so they are
//! matched by value after generation.

use std::collections::BTreeSet;
use std::net::Ipv4Addr;

use lanlist_common::network::element::{Exclusions, NetworkElement};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionPolicy {
    /// Generate one address fewer so the broadcast address is never produced.
    pub shrink_for_broadcast: bool,
    /// Addresses removed from the generated run.
    pub filtered: BTreeSet<Ipv4Addr>,
}

impl ExclusionPolicy {
    pub fn evaluate(exclusions: &Exclusions, gateway: Ipv4Addr, own_address: Ipv4Addr) -> Self {
        let mut policy = ExclusionPolicy::default();

        for element in exclusions.iter() {
            match element {
                NetworkElement::Broadcast => policy.shrink_for_broadcast = true,
                NetworkElement::CurrentDevice => {
                    policy.filtered.insert(own_address);
                }
                NetworkElement::Gateway => {
                    policy.filtered.insert(gateway);
                }
            }
        }

        policy
    }

    pub fn keeps(&self, ip: Ipv4Addr) -> bool {
        !self.filtered.contains(&ip)
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
