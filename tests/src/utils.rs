use lanlist_common::network::interface::{InterfaceAddr, InterfaceEntry};
use lanlist_core::{DefaultRoute, IpLister, TableResolver};
use std::net::{Ipv4Addr, Ipv6Addr};

pub fn entry(name: &str, addrs: &[InterfaceAddr]) -> InterfaceEntry {
    InterfaceEntry::new(name, addrs.to_vec())
}

pub fn v4(a: u8, b: u8, c: u8, d: u8, p: u8) -> InterfaceAddr {
    InterfaceAddr::V4 {
        address: Ipv4Addr::new(a, b, c, d),
        prefix: Some(p),
    }
}

pub fn v6(s: &str, p: u8) -> InterfaceAddr {
    InterfaceAddr::V6 {
        address: s.parse::<Ipv6Addr>().unwrap(),
        prefix: Some(p),
    }
}

pub fn route(gateway: Ipv4Addr, interface: &str) -> DefaultRoute {
    DefaultRoute::new(gateway, interface)
}

pub fn lister(route: DefaultRoute, table: Vec<InterfaceEntry>) -> IpLister {
    IpLister::new(Box::new(TableResolver::new(route, table)))
}

/// Wi-Fi on `en0`, 192.168.1.11/24 behind 192.168.1.1.
pub fn wifi_lister() -> IpLister {
    lister(route(Ipv4Addr::new(192, 168, 1, 1), "en0"), wifi_table())
}

/// Wired on `Ethernet 3`, 192.168.3.220/23 behind 192.168.2.1.
pub fn ethernet_lister() -> IpLister {
    lister(route(Ipv4Addr::new(192, 168, 2, 1), "Ethernet 3"), ethernet_table())
}

pub fn wifi_table() -> Vec<InterfaceEntry> {
    vec![
        entry(
            "lo0",
            &[v4(127, 0, 0, 1, 8), v6("::1", 128), v6("fe80::1", 64)],
        ),
        entry(
            "en0",
            &[v6("fe80::146a:7118:260f:62a6", 64), v4(192, 168, 1, 11, 24)],
        ),
    ]
}

pub fn ethernet_table() -> Vec<InterfaceEntry> {
    vec![
        entry(
            "Ethernet 2",
            &[v6("fe80::ace8:247:de0:2c00", 64), v4(172, 16, 17, 16, 20)],
        ),
        entry(
            "Ethernet 3",
            &[v6("fe80::bdce:28a3:1d84:3755", 64), v4(192, 168, 3, 220, 23)],
        ),
    ]
}

/// `count` dotted-decimal addresses counting up from `start`.
pub fn expected(start: Ipv4Addr, count: u32) -> Vec<String> {
    let start = u32::from(start);
    (start..start + count)
        .map(|ip| Ipv4Addr::from(ip).to_string())
        .collect()
}
