//! Service registration and deregistration.
//!
//! A [`ports::Registrator`] publishes a service instance under an identifier,
//! an optional `host:port` address and a list of tags, and removes it again
//! by identifier. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
