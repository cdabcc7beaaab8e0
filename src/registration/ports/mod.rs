//! Port contracts for service registration.
//!
//! Ports define backend-agnostic interfaces used by code that announces
//! services to a discovery catalog.

mod registrator;

pub use registrator::{Registrator, RegistratorError, RegistratorOperation, RegistratorResult};
