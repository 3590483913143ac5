//! End-to-end tests of the listing call over injected resolvers.

#[cfg(test)]
mod utils;

mod listing;
mod resolution;
