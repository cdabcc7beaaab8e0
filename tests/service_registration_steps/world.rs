//! Shared world state for service registration BDD scenarios.

use discovery::registration::{adapters::memory::InMemoryRegistrator, ports::RegistratorResult};
use rstest::fixture;

/// Scenario world for service registration behaviour tests.
pub struct RegistrationWorld {
    /// The catalog under test.
    pub catalog: InMemoryRegistrator,
    /// Result of the last registration attempt.
    pub last_register_result: Option<RegistratorResult<()>>,
}

impl RegistrationWorld {
    /// Creates a world around an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            catalog: InMemoryRegistrator::new(),
            last_register_result: None,
        }
    }
}

impl Default for RegistrationWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> RegistrationWorld {
    RegistrationWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
