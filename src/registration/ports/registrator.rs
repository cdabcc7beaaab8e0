//! Registrator port for publishing and unpublishing services.

use crate::registration::domain::AddressError;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Result type for registrator operations.
pub type RegistratorResult<T> = Result<T, RegistratorError>;

/// Publishes and unpublishes service instances in a discovery catalog.
///
/// Implementations hold whatever client handle their backend needs and
/// translate each call into a single remote operation. They keep no
/// per-service bookkeeping and never retry.
#[async_trait]
pub trait Registrator: Send + Sync {
    /// Registers, or re-registers, a service instance.
    ///
    /// `id` may take the form `name.instance`, in which case the instance is
    /// discoverable under `name` and stored under the full `id`. `address`
    /// is either empty, leaving the backend to infer it, or a `host:port`
    /// pair.
    ///
    /// # Errors
    ///
    /// Returns a [`RegistratorOperation::ExtractPort`] or
    /// [`RegistratorOperation::ParsePort`] error for a malformed address,
    /// in which case the backend is never contacted, and a
    /// [`RegistratorOperation::Register`] error when the backend rejects
    /// the call.
    async fn register(&self, id: &str, address: &str, tags: &[String]) -> RegistratorResult<()>;

    /// Removes a service instance by identifier.
    ///
    /// Whether removing an unknown identifier is an error is up to the
    /// backend.
    ///
    /// # Errors
    ///
    /// Returns a [`RegistratorOperation::Deregister`] error when the backend
    /// rejects the call.
    async fn deregister(&self, id: &str) -> RegistratorResult<()>;
}

/// Operation a [`RegistratorError`] occurred in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistratorOperation {
    /// Creating the backend client.
    Connect,
    /// Splitting the service address into host and port.
    ExtractPort,
    /// Parsing the port number.
    ParsePort,
    /// Submitting a registration.
    Register,
    /// Submitting a deregistration.
    Deregister,
    /// Releasing the backend client.
    Close,
}

impl RegistratorOperation {
    /// Returns the context phrase attached to errors from this operation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Connect => "connecting to consul",
            Self::ExtractPort => "extracting port",
            Self::ParsePort => "parsing port number",
            Self::Register => "registering service",
            Self::Deregister => "deregistering service",
            Self::Close => "closing registrator",
        }
    }
}

impl fmt::Display for RegistratorOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by registrator adapters.
///
/// Carries the failing [`RegistratorOperation`] and the underlying cause,
/// which stays reachable through [`std::error::Error::source`] and
/// [`RegistratorError::cause`].
#[derive(Debug, Clone, Error)]
#[error("{operation}: {source}")]
pub struct RegistratorError {
    operation: RegistratorOperation,
    source: Arc<dyn std::error::Error + Send + Sync>,
}

impl RegistratorError {
    /// Wraps a cause with the operation it interrupted.
    #[must_use]
    pub fn new(
        operation: RegistratorOperation,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            operation,
            source: Arc::new(err),
        }
    }

    /// Returns the operation that failed.
    #[must_use]
    pub const fn operation(&self) -> RegistratorOperation {
        self.operation
    }

    /// Returns the underlying cause, suitable for downcasting.
    #[must_use]
    pub fn cause(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        self.source.as_ref()
    }
}

impl From<AddressError> for RegistratorError {
    fn from(err: AddressError) -> Self {
        let operation = if err.is_invalid_port() {
            RegistratorOperation::ParsePort
        } else {
            RegistratorOperation::ExtractPort
        };
        Self::new(operation, err)
    }
}
