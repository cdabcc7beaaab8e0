//! When steps for service registration BDD scenarios.

use super::world::{RegistrationWorld, run_async};
use discovery::registration::ports::Registrator;
use rstest_bdd_macros::when;

#[when(r#""{id}" is registered at "{address}" with tag "{tag}""#)]
fn register_with_tag(world: &mut RegistrationWorld, id: String, address: String, tag: String) {
    let result = run_async(world.catalog.register(&id, &address, &[tag]));
    world.last_register_result = Some(result);
}

#[when(r#""{id}" is registered without an address"#)]
fn register_without_address(world: &mut RegistrationWorld, id: String) {
    let result = run_async(world.catalog.register(&id, "", &[]));
    world.last_register_result = Some(result);
}

#[when(r#""{id}" is deregistered"#)]
fn deregister(world: &mut RegistrationWorld, id: String) -> Result<(), eyre::Report> {
    run_async(world.catalog.deregister(&id))
        .map_err(|err| eyre::eyre!("deregistration failed: {err}"))
}
