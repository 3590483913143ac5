//! # Network Elements
//!
//! The special addresses a caller may ask to leave out of a host list, and the set type
//! that carries those requests into one listing call.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// A special address of the local network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NetworkElement {
    /// The router handling traffic leaving the subnet.
    Gateway,
    /// This machine's own address on the default interface.
    CurrentDevice,
    /// The subnet-wide delivery address (all host bits set).
    Broadcast,
}

impl NetworkElement {
    pub const ALL: [NetworkElement; 3] = [
        NetworkElement::Gateway,
        NetworkElement::CurrentDevice,
        NetworkElement::Broadcast,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkElement::Gateway => "gateway",
            NetworkElement::CurrentDevice => "current-device",
            NetworkElement::Broadcast => "broadcast",
        }
    }
}

impl fmt::Display for NetworkElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NetworkElement {
    type Err = String;

    /// Accepts `gateway`, `current-device` and `broadcast`, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        NetworkElement::ALL
            .into_iter()
            .find(|element| element.as_str() == lower)
            .ok_or_else(|| {
                format!("invalid network element: {s} (expected gateway, current-device or broadcast)")
            })
    }
}

/// The network elements to omit from one listing call.
///
/// Insertion order is irrelevant and duplicates collapse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Exclusions {
    elements: BTreeSet<NetworkElement>,
}

impl Exclusions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, element: NetworkElement) {
        self.elements.insert(element);
    }

    pub fn with(mut self, element: NetworkElement) -> Self {
        self.insert(element);
        self
    }

    pub fn contains(&self, element: NetworkElement) -> bool {
        self.elements.contains(&element)
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = NetworkElement> + '_ {
        self.elements.iter().copied()
    }
}

impl FromIterator<NetworkElement> for Exclusions {
    fn from_iter<I: IntoIterator<Item = NetworkElement>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<const N: usize> From<[NetworkElement; N]> for Exclusions {
    fn from(elements: [NetworkElement; N]) -> Self {
        elements.into_iter().collect()
    }
}

impl fmt::Display for Exclusions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let joined: Vec<&str> = self.iter().map(|element| element.as_str()).collect();
        f.write_str(&joined.join(", "))
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
