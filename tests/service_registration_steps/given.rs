//! Given steps for service registration BDD scenarios.

use super::world::RegistrationWorld;
use rstest_bdd_macros::given;

#[given("an empty service catalog")]
fn an_empty_service_catalog(world: &mut RegistrationWorld) -> Result<(), eyre::Report> {
    if !world.catalog.entries().is_empty() {
        return Err(eyre::eyre!("expected a fresh catalog"));
    }
    Ok(())
}
