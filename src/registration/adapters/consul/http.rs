//! Consul agent client over the HTTP API.

use super::{
    AgentServiceRegistration, ConsulAgent, ConsulAgentError, ConsulAgentResult, ConsulConfig,
};
use crate::registration::domain::ServiceRegistration;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;
use url::Url;

/// Header carrying the ACL token.
const TOKEN_HEADER: &str = "X-Consul-Token";

/// Stands in for a response body that could not be read.
const UNREADABLE_BODY: &str = "<unreadable body>";

/// [`ConsulAgent`] backed by the agent HTTP API.
///
/// Construction is purely local: the base URL is validated and an HTTP
/// client is built, but nothing is sent until the first call. The client is
/// safe for concurrent use.
#[derive(Debug)]
pub struct HttpConsulAgent {
    client: Client,
    base_url: Url,
    datacenter: Option<String>,
    token: Option<String>,
    closed: AtomicBool,
}

impl HttpConsulAgent {
    /// Builds a client for the agent described by `config`.
    ///
    /// # Errors
    ///
    /// Returns address errors from [`ConsulConfig::base_url`] or
    /// [`ConsulAgentError::Client`] when the HTTP client cannot be built.
    pub fn new(config: &ConsulConfig) -> ConsulAgentResult<Self> {
        let base_url = config.base_url()?;
        if base_url.cannot_be_a_base() {
            return Err(ConsulAgentError::CannotBeBase(base_url.to_string()));
        }
        let client = Client::builder().build().map_err(ConsulAgentError::client)?;

        Ok(Self {
            client,
            base_url,
            datacenter: Some(config.datacenter.clone()).filter(|dc| !dc.is_empty()),
            token: config.token.clone().filter(|token| !token.is_empty()),
            closed: AtomicBool::new(false),
        })
    }

    /// Returns the base URL requests are resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns `true` once [`ConsulAgent::close`] has been called.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    fn endpoint(&self, segments: &[&str]) -> ConsulAgentResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ConsulAgentError::CannotBeBase(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        if let Some(datacenter) = &self.datacenter {
            url.query_pairs_mut().append_pair("dc", datacenter);
        }
        Ok(url)
    }

    async fn put(
        &self,
        url: Url,
        body: Option<&AgentServiceRegistration>,
    ) -> ConsulAgentResult<()> {
        if self.is_closed() {
            return Err(ConsulAgentError::Closed);
        }

        let mut request = self.client.put(url);
        if let Some(token) = &self.token {
            request = request.header(TOKEN_HEADER, token);
        }
        if let Some(payload) = body {
            request = request.json(payload);
        }

        let response = request.send().await.map_err(ConsulAgentError::http)?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(ConsulAgentError::UnexpectedStatus {
                status: status.as_u16(),
                body: error_body(response.text().await),
            });
        }
        Ok(())
    }
}

fn error_body(text: reqwest::Result<String>) -> String {
    text.map_or_else(|_| UNREADABLE_BODY.to_owned(), |body| body.trim().to_owned())
}

#[async_trait]
impl ConsulAgent for HttpConsulAgent {
    async fn service_register(
        &self,
        registration: &ServiceRegistration,
    ) -> ConsulAgentResult<()> {
        let url = self.endpoint(&["v1", "agent", "service", "register"])?;
        let body = AgentServiceRegistration::from(registration);
        debug!(
            service_name = registration.name(),
            service_id = registration.effective_id(),
            %url,
            "submitting consul service registration"
        );
        self.put(url, Some(&body)).await
    }

    async fn service_deregister(&self, service_id: &str) -> ConsulAgentResult<()> {
        let url = self.endpoint(&["v1", "agent", "service", "deregister", service_id])?;
        debug!(service_id, %url, "submitting consul service deregistration");
        self.put(url, None).await
    }

    async fn close(&self) -> ConsulAgentResult<()> {
        self.closed.store(true, Ordering::Release);
        Ok(())
    }
}
