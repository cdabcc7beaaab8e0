//! Recording in-memory service catalog.

use crate::registration::{
    domain::ServiceRegistration,
    ports::{Registrator, RegistratorResult},
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// In-memory [`Registrator`].
///
/// Applies the same identifier and address rules as the Consul adapter and
/// keeps the resulting entries keyed by their effective identifier, the way
/// an agent catalog does. Every deregistration call is recorded, whether or
/// not the identifier was registered. Clones share the same catalog.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRegistrator {
    state: Arc<RwLock<InMemoryCatalogState>>,
}

#[derive(Debug, Default)]
struct InMemoryCatalogState {
    entries: HashMap<String, ServiceRegistration>,
    deregistrations: Vec<String>,
}

impl InMemoryRegistrator {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all registered entries ordered by effective identifier.
    #[must_use]
    pub fn entries(&self) -> Vec<ServiceRegistration> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        let mut entries: Vec<ServiceRegistration> = state.entries.values().cloned().collect();
        entries.sort_by(|left, right| left.effective_id().cmp(right.effective_id()));
        entries
    }

    /// Returns the entry stored under `id`, if any.
    #[must_use]
    pub fn entry(&self, id: &str) -> Option<ServiceRegistration> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state.entries.get(id).cloned()
    }

    /// Returns the identifiers passed to `deregister`, in call order.
    #[must_use]
    pub fn deregistrations(&self) -> Vec<String> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state.deregistrations.clone()
    }
}

#[async_trait]
impl Registrator for InMemoryRegistrator {
    async fn register(&self, id: &str, address: &str, tags: &[String]) -> RegistratorResult<()> {
        let registration = ServiceRegistration::new(id, address, tags)?;
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state
            .entries
            .insert(registration.effective_id().to_owned(), registration);
        Ok(())
    }

    async fn deregister(&self, id: &str) -> RegistratorResult<()> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.entries.remove(id);
        state.deregistrations.push(id.to_owned());
        Ok(())
    }
}
