//! # lanlist core
//!
//! Lists the IPv4 host addresses of the subnet behind the machine's default route.
//!
//! * **[`resolver`]**: the [`GatewayResolver`] seam and the interface-table lookup rules.
//! * **[`system`]**: the resolver backed by the running operating system.
//! * **[`policy`]**: turns the requested exclusions into generation decisions.
//! * **[`enumerator`]**: the address arithmetic, lazy or materialized.
//! * **[`lister`]**: the async listing call tying resolver and enumerator together.

pub mod enumerator;
pub mod lister;
pub mod policy;
pub mod resolver;
pub mod system;

pub use enumerator::{Enumerator, HostIter, enumerate_hosts};
pub use lister::{IpLister, v4_ip_list};
pub use resolver::{DefaultRoute, GatewayResolver, StaticResolver, TableResolver};
pub use system::SystemResolver;
