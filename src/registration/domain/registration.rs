//! Backend-neutral registration record.

use super::{AddressError, ServiceAddress, ServiceIdentity};

/// A service instance as submitted to a discovery backend.
///
/// Built from the raw inputs of a registration call. An empty address means
/// the backend should infer the address from the caller, so no address or
/// port is recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRegistration {
    identity: ServiceIdentity,
    address: Option<ServiceAddress>,
    tags: Vec<String>,
}

impl ServiceRegistration {
    /// Builds a registration record from raw registrator inputs.
    ///
    /// # Errors
    ///
    /// Returns [`AddressError`] when `address` is non-empty and not a valid
    /// `host:port` pair.
    pub fn new(id: &str, address: &str, tags: &[String]) -> Result<Self, AddressError> {
        let parsed_address = if address.is_empty() {
            None
        } else {
            Some(ServiceAddress::parse(address)?)
        };

        Ok(Self {
            identity: ServiceIdentity::parse(id),
            address: parsed_address,
            tags: tags.to_vec(),
        })
    }

    /// Returns the split service identity.
    #[must_use]
    pub const fn identity(&self) -> &ServiceIdentity {
        &self.identity
    }

    /// Returns the logical service name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.identity.name()
    }

    /// Returns the explicit instance identifier, if any.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.identity.id()
    }

    /// Returns the identifier the backend stores the entry under.
    #[must_use]
    pub fn effective_id(&self) -> &str {
        self.identity.effective_id()
    }

    /// Returns the parsed address, if one was supplied.
    #[must_use]
    pub const fn address(&self) -> Option<&ServiceAddress> {
        self.address.as_ref()
    }

    /// Returns the tags in the order supplied.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}
