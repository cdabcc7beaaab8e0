//! Transport seam between the Consul registrator and the agent API.

use crate::registration::domain::ServiceRegistration;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for Consul agent calls.
pub type ConsulAgentResult<T> = Result<T, ConsulAgentError>;

/// Service endpoints of a Consul agent.
///
/// [`super::HttpConsulAgent`] talks to a real agent; tests substitute
/// recording doubles.
#[async_trait]
pub trait ConsulAgent: Send + Sync {
    /// Submits a service registration to the agent.
    async fn service_register(&self, registration: &ServiceRegistration)
    -> ConsulAgentResult<()>;

    /// Removes a service instance from the agent.
    async fn service_deregister(&self, service_id: &str) -> ConsulAgentResult<()>;

    /// Releases client resources. Registered services are left untouched.
    async fn close(&self) -> ConsulAgentResult<()>;
}

#[async_trait]
impl<A: ConsulAgent + ?Sized> ConsulAgent for Arc<A> {
    async fn service_register(
        &self,
        registration: &ServiceRegistration,
    ) -> ConsulAgentResult<()> {
        self.as_ref().service_register(registration).await
    }

    async fn service_deregister(&self, service_id: &str) -> ConsulAgentResult<()> {
        self.as_ref().service_deregister(service_id).await
    }

    async fn close(&self) -> ConsulAgentResult<()> {
        self.as_ref().close().await
    }
}

/// Errors returned by Consul agent clients.
#[derive(Debug, Clone, Error)]
pub enum ConsulAgentError {
    /// Configuration could not be loaded.
    #[error("invalid consul configuration: {0}")]
    Config(Arc<figment::Error>),

    /// The agent address uses a transport this client cannot speak.
    #[error("unsupported consul address {0}: unix sockets are not supported")]
    UnsupportedAddress(String),

    /// The agent address does not form a valid URL.
    #[error("invalid consul address {address}: {source}")]
    InvalidAddress {
        /// The address as configured.
        address: String,
        /// URL parsing failure.
        source: url::ParseError,
    },

    /// The agent address cannot carry an API path.
    #[error("consul address {0} cannot be used as an API base")]
    CannotBeBase(String),

    /// The HTTP client could not be built.
    #[error("building HTTP client failed: {0}")]
    Client(Arc<reqwest::Error>),

    /// The request did not complete.
    #[error("consul request failed: {0}")]
    Http(Arc<reqwest::Error>),

    /// The agent answered with a status other than `200 OK`.
    #[error("unexpected response code: {status} ({body})")]
    UnexpectedStatus {
        /// HTTP status code.
        status: u16,
        /// Response body, trimmed.
        body: String,
    },

    /// The client was closed before the call.
    #[error("consul client is closed")]
    Closed,
}

impl ConsulAgentError {
    /// Wraps an HTTP client construction error.
    #[must_use]
    pub fn client(err: reqwest::Error) -> Self {
        Self::Client(Arc::new(err))
    }

    /// Wraps an HTTP transport error.
    #[must_use]
    pub fn http(err: reqwest::Error) -> Self {
        Self::Http(Arc::new(err))
    }
}
