use anyhow::Context;
use colored::*;
use lanlist_common::network::address::address_count;
use lanlist_common::network::snapshot::NetworkSnapshot;

use crate::commands::SourceArgs;
use crate::terminal::{colors, print};

const KEY_WIDTH: usize = 9;

pub async fn info(args: &SourceArgs, q_level: u8) -> anyhow::Result<()> {
    let lister = args.lister()?;
    let snapshot = lister
        .snapshot()
        .await
        .context("failed to resolve the default network")?;
    let subnet = snapshot.subnet()?;
    let hosts = host_count(&snapshot);

    let own_cidr: ColoredString = format!(
        "{}/{}",
        snapshot.own_address.to_string().color(colors::IPV4_ADDR),
        snapshot.prefix_len.to_string().color(colors::IPV4_PREFIX)
    )
    .normal();

    print::header("default network", q_level);
    print::aligned_line("Interface", snapshot.interface.as_str(), KEY_WIDTH);
    print::aligned_line("Gateway", snapshot.gateway.to_string().color(colors::IPV4_ADDR), KEY_WIDTH);
    print::aligned_line("Address", own_cidr, KEY_WIDTH);
    print::aligned_line("Network", subnet.start_addr.to_string(), KEY_WIDTH);
    print::aligned_line("Broadcast", subnet.end_addr.to_string(), KEY_WIDTH);
    print::aligned_line("Hosts", hosts.to_string().color(colors::ACCENT), KEY_WIDTH);
    print::fat_separator(q_level);
    Ok(())
}

/// Addresses a listing with no exclusions yields, whether or not the run fits below
/// `255.255.255.255`.
fn host_count(snapshot: &NetworkSnapshot) -> u64 {
    address_count(snapshot.prefix_len) - 1
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
