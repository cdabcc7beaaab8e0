//! Consul implementation of the registrator port.

use super::{ConsulAgent, ConsulConfig, HttpConsulAgent};
use crate::registration::{
    domain::ServiceRegistration,
    ports::{Registrator, RegistratorError, RegistratorOperation, RegistratorResult},
};
use async_trait::async_trait;
use tracing::{debug, info};

/// [`Registrator`] that registers services with a Consul agent.
///
/// Owns one agent handle for its whole lifetime and holds no other state,
/// so a single instance can serve any number of concurrent calls. Call
/// [`ConsulRegistrator::close`] to release the handle; services registered
/// through it stay registered until explicitly deregistered.
#[derive(Debug)]
pub struct ConsulRegistrator<A = HttpConsulAgent> {
    agent: A,
}

impl ConsulRegistrator<HttpConsulAgent> {
    /// Creates a registrator for the agent at `address`, pinned to
    /// `datacenter` when it is non-empty.
    ///
    /// An empty `address` falls back to `CONSUL_HTTP_ADDR` or the default
    /// `127.0.0.1:8500`. `CONSUL_HTTP_TOKEN` and `CONSUL_HTTP_SSL` are
    /// honoured as well. No request is sent here.
    ///
    /// # Errors
    ///
    /// Returns a [`RegistratorOperation::Connect`] error when the
    /// configuration or the address is invalid, or the HTTP client cannot
    /// be built.
    pub fn new(address: &str, datacenter: &str) -> RegistratorResult<Self> {
        let config = ConsulConfig::from_env()
            .map_err(|err| RegistratorError::new(RegistratorOperation::Connect, err))?
            .with_address(address)
            .with_datacenter(datacenter);
        Self::with_config(&config)
    }

    /// Creates a registrator from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`RegistratorOperation::Connect`] error when the address
    /// is invalid or the HTTP client cannot be built.
    pub fn with_config(config: &ConsulConfig) -> RegistratorResult<Self> {
        let agent = HttpConsulAgent::new(config)
            .map_err(|err| RegistratorError::new(RegistratorOperation::Connect, err))?;
        info!(
            base_url = %agent.base_url(),
            datacenter = %config.datacenter,
            "consul registrator created"
        );
        Ok(Self::with_agent(agent))
    }
}

impl<A: ConsulAgent> ConsulRegistrator<A> {
    /// Wraps an existing agent client.
    #[must_use]
    pub const fn with_agent(agent: A) -> Self {
        Self { agent }
    }

    /// Returns the underlying agent client.
    #[must_use]
    pub const fn agent(&self) -> &A {
        &self.agent
    }

    /// Releases the agent client.
    ///
    /// Nothing is deregistered: callers that want their services removed
    /// must call [`Registrator::deregister`] first.
    ///
    /// # Errors
    ///
    /// Returns a [`RegistratorOperation::Close`] error when the client
    /// fails to release its resources.
    pub async fn close(self) -> RegistratorResult<()> {
        self.agent
            .close()
            .await
            .map_err(|err| RegistratorError::new(RegistratorOperation::Close, err))?;
        info!("consul registrator closed");
        Ok(())
    }
}

#[async_trait]
impl<A: ConsulAgent> Registrator for ConsulRegistrator<A> {
    async fn register(&self, id: &str, address: &str, tags: &[String]) -> RegistratorResult<()> {
        let registration = ServiceRegistration::new(id, address, tags)?;
        debug!(
            service_name = registration.name(),
            service_id = registration.effective_id(),
            address,
            "registering service"
        );
        self.agent
            .service_register(&registration)
            .await
            .map_err(|err| RegistratorError::new(RegistratorOperation::Register, err))
    }

    async fn deregister(&self, id: &str) -> RegistratorResult<()> {
        debug!(service_id = id, "deregistering service");
        self.agent
            .service_deregister(id)
            .await
            .map_err(|err| RegistratorError::new(RegistratorOperation::Deregister, err))
    }
}
