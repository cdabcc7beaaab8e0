//! Discovery: service registration against a service-discovery backend.
//!
//! This crate lets a process announce itself to a service catalog and
//! withdraw that announcement later. One backend is provided: the Consul
//! agent HTTP API.
//!
//! # Architecture
//!
//! Discovery follows hexagonal architecture principles:
//!
//! - **Domain**: Identifier and address parsing with no infrastructure dependencies
//! - **Ports**: The [`Registrator`](registration::ports::Registrator) capability trait
//! - **Adapters**: Consul over HTTP, plus an in-memory catalog for tests
//!
//! # Modules
//!
//! - [`registration`]: Service registration and deregistration

pub mod registration;
