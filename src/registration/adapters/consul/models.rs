//! Wire models for the Consul agent HTTP API.

use crate::registration::domain::ServiceRegistration;
use serde::Serialize;

/// Request body of `PUT /v1/agent/service/register`.
///
/// Empty fields are omitted so the agent applies its own defaults: a
/// missing `ID` defaults to `Name`, a missing `Address` to the agent's
/// address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AgentServiceRegistration {
    /// Unique instance identifier.
    #[serde(rename = "ID", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Logical service name.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Service tags.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Service port.
    #[serde(skip_serializing_if = "is_zero")]
    pub port: u16,
    /// Service host.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub address: String,
}

impl From<&ServiceRegistration> for AgentServiceRegistration {
    fn from(registration: &ServiceRegistration) -> Self {
        let (address, port) = registration
            .address()
            .map_or_else(|| (String::new(), 0), |addr| (addr.host().to_owned(), addr.port()));

        Self {
            id: registration.id().map(str::to_owned),
            name: registration.name().to_owned(),
            tags: registration.tags().to_vec(),
            port,
            address,
        }
    }
}

#[expect(
    clippy::trivially_copy_pass_by_ref,
    reason = "serde passes skipped fields by reference"
)]
const fn is_zero(port: &u16) -> bool {
    *port == 0
}
