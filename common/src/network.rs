//! # Network Model
//!
//! Value types describing the local IPv4 network as seen from the default route.

pub mod address;
pub mod element;
pub mod interface;
pub mod range;
pub mod snapshot;
