//! Consul client configuration.

use super::ConsulAgentError;
use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::Arc;
use tracing::warn;
use url::Url;

/// Agent address used when none is configured.
pub const DEFAULT_ADDRESS: &str = "127.0.0.1:8500";

/// Prefix of the environment variables read by [`ConsulConfig::from_env`].
pub const ENV_PREFIX: &str = "CONSUL_HTTP_";

/// Connection settings for the Consul agent HTTP API.
///
/// Defaults match the stock Consul client: agent on `127.0.0.1:8500`, plain
/// HTTP, no datacenter pinning and no ACL token. [`ConsulConfig::from_env`]
/// layers the standard `CONSUL_HTTP_ADDR`, `CONSUL_HTTP_TOKEN` and
/// `CONSUL_HTTP_SSL` variables on top.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsulConfig {
    /// Agent address as `host:port`, optionally prefixed with `http://` or
    /// `https://`.
    pub addr: String,
    /// Datacenter sent with every request; empty means the agent's own.
    pub datacenter: String,
    /// ACL token sent in the `X-Consul-Token` header.
    pub token: Option<String>,
    /// Use HTTPS when `addr` carries no scheme.
    #[serde(deserialize_with = "lenient_flag")]
    pub ssl: bool,
}

impl Default for ConsulConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDRESS.to_owned(),
            datacenter: String::new(),
            token: None,
            ssl: false,
        }
    }
}

impl ConsulConfig {
    /// Returns the figment that [`ConsulConfig::from_env`] extracts from.
    ///
    /// Environment values are merged as raw strings so that all-digit
    /// tokens or addresses are not coerced into numbers.
    #[must_use]
    pub fn figment() -> Figment {
        let env = Env::prefixed(ENV_PREFIX).only(&["addr", "token", "ssl"]);
        env.iter().fold(
            Figment::from(Serialized::defaults(Self::default())),
            |figment, (key, value)| figment.merge(Serialized::default(key.as_str(), value)),
        )
    }

    /// Loads defaults overridden by `CONSUL_HTTP_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConsulAgentError::Config`] when the merged values cannot be
    /// extracted. An unrecognised `CONSUL_HTTP_SSL` value is logged and
    /// treated as `false` rather than failing.
    pub fn from_env() -> Result<Self, ConsulAgentError> {
        Self::figment()
            .extract()
            .map_err(|err| ConsulAgentError::Config(Arc::new(err)))
    }

    /// Replaces the agent address. An empty value keeps the current one.
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        let value = address.into();
        if !value.is_empty() {
            self.addr = value;
        }
        self
    }

    /// Replaces the datacenter.
    #[must_use]
    pub fn with_datacenter(mut self, datacenter: impl Into<String>) -> Self {
        self.datacenter = datacenter.into();
        self
    }

    /// Sets the ACL token.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Resolves the base URL of the agent HTTP API.
    ///
    /// # Errors
    ///
    /// Returns [`ConsulAgentError::UnsupportedAddress`] for `unix://`
    /// addresses and [`ConsulAgentError::InvalidAddress`] when the address
    /// does not form a valid URL.
    pub fn base_url(&self) -> Result<Url, ConsulAgentError> {
        let address = if self.addr.is_empty() {
            DEFAULT_ADDRESS
        } else {
            self.addr.as_str()
        };

        if address.starts_with("unix://") {
            return Err(ConsulAgentError::UnsupportedAddress(address.to_owned()));
        }

        let default_scheme = if self.ssl { "https" } else { "http" };
        let (scheme, authority) = address
            .strip_prefix("https://")
            .map(|rest| ("https", rest))
            .or_else(|| address.strip_prefix("http://").map(|rest| ("http", rest)))
            .unwrap_or((default_scheme, address));

        let trimmed = authority.trim_end_matches('/');
        Url::parse(&format!("{scheme}://{trimmed}/")).map_err(|source| {
            ConsulAgentError::InvalidAddress {
                address: address.to_owned(),
                source,
            }
        })
    }
}

/// Accepts a boolean or the spellings `1 t T TRUE true True` and
/// `0 f F FALSE false False`. Anything else is logged and read as `false`.
fn lenient_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(value) => value,
        Flag::Text(text) => parse_flag(&text).unwrap_or_else(|| {
            warn!(value = %text, "ignoring unrecognised CONSUL_HTTP_SSL value");
            false
        }),
    })
}

fn parse_flag(text: &str) -> Option<bool> {
    match text {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}
