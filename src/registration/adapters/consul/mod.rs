//! Consul backend for the registrator port.
//!
//! [`ConsulRegistrator`] translates registrator calls into Consul agent
//! calls: `PUT /v1/agent/service/register` and
//! `PUT /v1/agent/service/deregister/{id}`. The HTTP work lives behind the
//! [`ConsulAgent`] seam, implemented by [`HttpConsulAgent`].

mod agent;
mod config;
mod http;
mod models;
mod registrator;

pub use agent::{ConsulAgent, ConsulAgentError, ConsulAgentResult};
pub use config::{ConsulConfig, DEFAULT_ADDRESS, ENV_PREFIX};
pub use http::HttpConsulAgent;
pub use models::AgentServiceRegistration;
pub use registrator::ConsulRegistrator;
