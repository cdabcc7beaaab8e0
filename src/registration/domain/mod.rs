//! Domain model for service registration.
//!
//! The registration domain turns raw registrator inputs (an identifier, an
//! optional `host:port` string and tags) into a backend-neutral
//! [`ServiceRegistration`] record. Network and backend concerns remain
//! outside this boundary.

mod address;
mod error;
mod identity;
mod registration;

pub use address::ServiceAddress;
pub use error::AddressError;
pub use identity::{NAME_SEPARATOR, ServiceIdentity};
pub use registration::ServiceRegistration;
