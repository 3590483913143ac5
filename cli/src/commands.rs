pub mod info;
pub mod list;

use clap::{ArgAction, Args, Parser, Subcommand};
use lanlist_common::config::{DEFAULT_MAX_HOSTS, ListOptions, RangeMode};
use lanlist_common::network::element::NetworkElement;
use lanlist_common::network::snapshot::NetworkSnapshot;
use lanlist_core::{IpLister, StaticResolver};

#[derive(Parser)]
#[command(name = "lanlist")]
#[command(about = "Lists the IPv4 hosts of the network behind your default route.")]
#[command(version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Less terminal output; repeat to silence warnings too
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Show debug logs
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the host addresses of the local network
    #[command(alias = "l")]
    List(ListArgs),
    /// Show the resolved default network
    #[command(alias = "i")]
    Info(SourceArgs),
}

/// Where the network snapshot comes from.
#[derive(Args)]
pub struct SourceArgs {
    /// Own address with prefix, e.g. 192.168.1.11/24, instead of asking the OS
    #[arg(long, requires = "gateway")]
    pub cidr: Option<String>,

    /// Gateway address to pair with --cidr
    #[arg(long, requires = "cidr")]
    pub gateway: Option<String>,
}

impl SourceArgs {
    pub fn lister(&self) -> anyhow::Result<IpLister> {
        match (&self.gateway, &self.cidr) {
            (Some(gateway), Some(cidr)) => {
                let snapshot = NetworkSnapshot::from_cidr(gateway, "manual", cidr)?;
                Ok(IpLister::new(Box::new(StaticResolver::new(snapshot))))
            }
            _ => Ok(IpLister::system()),
        }
    }
}

#[derive(Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Leave out network elements: gateway, current-device, broadcast
    #[arg(short, long, value_delimiter = ',')]
    pub omit: Vec<NetworkElement>,

    /// Anchor the range on the real network address instead of the gateway
    #[arg(long)]
    pub subnet: bool,

    /// Refuse to list more addresses than this; 0 streams without a limit
    #[arg(long, default_value_t = DEFAULT_MAX_HOSTS)]
    pub max_hosts: u64,

    /// Print the number of addresses instead of the addresses
    #[arg(short, long)]
    pub count: bool,
}

impl ListArgs {
    pub fn options(&self) -> ListOptions {
        ListOptions {
            omit: self.omit.iter().copied().collect(),
            mode: if self.subnet {
                RangeMode::Subnet
            } else {
                RangeMode::FromGateway
            },
            max_hosts: (self.max_hosts > 0).then_some(self.max_hosts),
        }
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
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
