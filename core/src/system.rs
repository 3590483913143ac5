//! Resolves the default route and interface table of the running machine.
//!
//! Linux reads `/proc/net/route`, the BSDs (macOS included) ask `route -n get default`.
//! The interface table always comes from `pnet::datalink`.

use std::net::Ipv4Addr;

use async_trait::async_trait;
use lanlist_common::error::NetworkError;
use lanlist_common::network::interface::InterfaceEntry;
use lanlist_common::network::snapshot::NetworkSnapshot;
use tracing::{debug, warn};

use crate::resolver::{DefaultRoute, GatewayResolver, snapshot_from_table};

const RTF_UP: u32 = 0x0001;
const RTF_GATEWAY: u32 = 0x0002;

/// Reads the live network configuration of the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

#[async_trait]
impl GatewayResolver for SystemResolver {
    async fn resolve(&self) -> Result<NetworkSnapshot, NetworkError> {
        tokio::task::spawn_blocking(|| {
            let route = default_route()?;
            debug!("Default route via {} on {}", route.gateway, route.interface);
            let table = interface_table();
            debug!("Interface table holds {} entries", table.len());
            snapshot_from_table(&route, &table)
        })
        .await
        .map_err(|e| NetworkError::Resolver(e.to_string()))?
    }
}

pub fn interface_table() -> Vec<InterfaceEntry> {
    pnet::datalink::interfaces()
        .iter()
        .map(InterfaceEntry::from)
        .collect()
}

#[cfg(target_os = "linux")]
fn default_route() -> Result<DefaultRoute, NetworkError> {
    let contents = std::fs::read_to_string("/proc/net/route")
        .map_err(|e| NetworkError::Resolver(format!("/proc/net/route: {e}")))?;
    parse_proc_net_route(&contents)
}

#[cfg(any(
    target_os = "macos",
    target_os = "freebsd",
    target_os = "openbsd",
    target_os = "netbsd"
))]
fn default_route() -> Result<DefaultRoute, NetworkError> {
    use std::process::Command;

    let output = Command::new("route")
        .args(["-n", "get", "default"])
        .output()
        .map_err(|e| NetworkError::Resolver(format!("route: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(NetworkError::GatewayNotFound(stderr.trim().to_string()));
    }

    parse_route_get(&String::from_utf8_lossy(&output.stdout))
}

#[cfg(not(any(
    target_os = "linux",
    target_os = "macos",
    target_os = "freebsd",
    target_os = "openbsd",
    target_os = "netbsd"
)))]
fn default_route() -> Result<DefaultRoute, NetworkError> {
    Err(NetworkError::GatewayNotFound(
        "default route lookup is not supported on this platform".to_string(),
    ))
}

/// Picks the IPv4 default route out of the contents of `/proc/net/route`.
///
/// A default route has destination and mask `00000000` and is flagged up and gateway.
/// Addresses are printed in host byte order. With several candidates the lowest metric
/// wins.
pub fn parse_proc_net_route(contents: &str) -> Result<DefaultRoute, NetworkError> {
    let mut candidates: Vec<DefaultRoute> = contents
        .lines()
        .skip(1)
        .filter_map(parse_route_line)
        .collect();

    candidates.sort_by_key(|route| route.metric);

    if candidates.len() > 1 {
        warn!(
            "Found {} default routes, using {} via {}",
            candidates.len(),
            candidates[0].interface,
            candidates[0].gateway
        );
    }

    candidates
        .into_iter()
        .next()
        .ok_or_else(|| NetworkError::GatewayNotFound("no default route in /proc/net/route".to_string()))
}

fn parse_route_line(line: &str) -> Option<DefaultRoute> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 8 {
        return None;
    }

    let hex = |s: &str| u32::from_str_radix(s, 16).ok();
    let destination = hex(fields[1])?;
    let gateway = hex(fields[2])?;
    let flags = hex(fields[3])?;
    let metric = fields[6].parse::<u32>().ok()?;
    let mask = hex(fields[7])?;

    let is_default = destination == 0 && mask == 0;
    let wanted = RTF_UP | RTF_GATEWAY;
    let is_usable = flags & wanted == wanted;
    if !is_default || !is_usable {
        return None;
    }

    Some(DefaultRoute {
        gateway: Ipv4Addr::from(gateway.to_ne_bytes()),
        interface: fields[0].to_string(),
        metric,
    })
}

/// Reads gateway and interface out of `route -n get default` output.
pub fn parse_route_get(output: &str) -> Result<DefaultRoute, NetworkError> {
    let mut gateway: Option<&str> = None;
    let mut interface: Option<&str> = None;

    for line in output.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        match key.trim() {
            "gateway" => gateway = Some(value.trim()),
            "interface" => interface = Some(value.trim()),
            _ => {}
        }
    }

    let (Some(gateway), Some(interface)) = (gateway, interface) else {
        return Err(NetworkError::GatewayNotFound(
            "route output lacks gateway or interface".to_string(),
        ));
    };

    let gateway = gateway
        .parse::<Ipv4Addr>()
        .map_err(|_| NetworkError::GatewayNotFound(format!("gateway is not an IPv4 address: {gateway}")))?;

    Ok(DefaultRoute::new(gateway, interface))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
