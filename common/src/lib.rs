//! # lanlist common
//!
//! Shared data model for the `lanlist` workspace.
//!
//! * **[`network`]**: addresses, CIDR parsing, range arithmetic, interface table and the
//!   resolved network snapshot.
//! * **[`config`]**: options of a single listing call.
//! * **[`error`]**: the error taxonomy every crate reports with.

pub mod config;
pub mod error;
pub mod network;
