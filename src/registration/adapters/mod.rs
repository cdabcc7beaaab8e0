//! Adapter implementations for the registrator port.

pub mod consul;
pub mod memory;
