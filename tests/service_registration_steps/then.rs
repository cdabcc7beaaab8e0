//! Then steps for service registration BDD scenarios.

use super::world::RegistrationWorld;
use discovery::registration::ports::RegistratorOperation;
use rstest_bdd_macros::then;

#[then(r#"the catalog holds "{id}" as service "{name}" at "{host}" port {port:u16}"#)]
fn catalog_holds_instance(
    world: &RegistrationWorld,
    id: String,
    name: String,
    host: String,
    port: u16,
) -> Result<(), eyre::Report> {
    let entry = world
        .catalog
        .entry(&id)
        .ok_or_else(|| eyre::eyre!("expected '{id}' in the catalog"))?;
    if entry.name() != name || entry.id() != Some(id.as_str()) {
        return Err(eyre::eyre!(
            "expected {name}/{id}, found {}/{:?}",
            entry.name(),
            entry.id()
        ));
    }
    let address = entry
        .address()
        .ok_or_else(|| eyre::eyre!("expected an address for '{id}'"))?;
    if address.host() != host || address.port() != port {
        return Err(eyre::eyre!("expected {host}:{port}, found {address}"));
    }
    Ok(())
}

#[then(r#""{id}" is tagged "{tag}""#)]
fn instance_is_tagged(world: &RegistrationWorld, id: String, tag: String) -> Result<(), eyre::Report> {
    let entry = world
        .catalog
        .entry(&id)
        .ok_or_else(|| eyre::eyre!("expected '{id}' in the catalog"))?;
    if entry.tags() != [tag.clone()].as_slice() {
        return Err(eyre::eyre!("expected tags [{tag}], found {:?}", entry.tags()));
    }
    Ok(())
}

#[then(r#"the catalog holds "{id}" under its own name with no address"#)]
fn catalog_holds_bare_name(world: &RegistrationWorld, id: String) -> Result<(), eyre::Report> {
    let entry = world
        .catalog
        .entry(&id)
        .ok_or_else(|| eyre::eyre!("expected '{id}' in the catalog"))?;
    if entry.name() != id || entry.id().is_some() || entry.address().is_some() {
        return Err(eyre::eyre!("unexpected entry shape: {entry:?}"));
    }
    Ok(())
}

#[then("registration fails while extracting the port")]
fn registration_fails_extracting_port(world: &RegistrationWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_register_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing registration result in scenario world"))?;
    match result {
        Err(err) if err.operation() == RegistratorOperation::ExtractPort => Ok(()),
        other => Err(eyre::eyre!("expected an extracting port error, got {other:?}")),
    }
}

#[then("the catalog is empty")]
fn catalog_is_empty(world: &RegistrationWorld) -> Result<(), eyre::Report> {
    let entries = world.catalog.entries();
    if !entries.is_empty() {
        return Err(eyre::eyre!("expected an empty catalog, found {entries:?}"));
    }
    Ok(())
}
