//! Announces a service to Consul, withdraws it again and closes the client.
//!
//! Usage:
//!
//! ```text
//! discovery_demo [--consul-address <host:port>] [--datacenter <dc>]
//!                [--service-id <name.instance>] [--service-address <host:port>]
//!                [--tag <tag>]...
//! ```
//!
//! With no arguments the demo registers `service.worker1` at
//! `10.0.0.1:5001` tagged `production` with the agent on `localhost:8500`.
//! Set `RUST_LOG=debug` to see each agent call.

use clap::Parser;
use discovery::registration::{adapters::consul::ConsulRegistrator, ports::Registrator};
use eyre::WrapErr;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "discovery_demo",
    about = "Register and deregister a service with Consul"
)]
struct Args {
    /// Consul agent address; empty falls back to `CONSUL_HTTP_ADDR`.
    #[arg(long, default_value = "localhost:8500")]
    consul_address: String,

    /// Datacenter to register in; empty means the agent's own.
    #[arg(long, default_value = "")]
    datacenter: String,

    /// Service identifier, optionally `name.instance`.
    #[arg(long, default_value = "service.worker1")]
    service_id: String,

    /// Address the service listens on, as `host:port`; empty lets Consul
    /// use the agent's address.
    #[arg(long, default_value = "10.0.0.1:5001")]
    service_address: String,

    /// Service tag; repeat for several.
    #[arg(long = "tag", default_value = "production")]
    tags: Vec<String>,
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    let registrator = ConsulRegistrator::new(&args.consul_address, &args.datacenter)
        .wrap_err("creating consul registrator")?;

    let outcome = announce(&registrator, &args).await;
    registrator
        .close()
        .await
        .wrap_err("closing consul registrator")?;
    outcome
}

/// Registers the service, then deregisters it.
///
/// A failed registration aborts; a failed deregistration is only logged.
async fn announce<R>(registrator: &R, args: &Args) -> eyre::Result<()>
where
    R: Registrator + ?Sized,
{
    registrator
        .register(&args.service_id, &args.service_address, &args.tags)
        .await
        .wrap_err_with(|| format!("registering {}", args.service_id))?;
    info!(
        service_id = %args.service_id,
        address = %args.service_address,
        tags = ?args.tags,
        "service registered"
    );

    match registrator.deregister(&args.service_id).await {
        Ok(()) => info!(service_id = %args.service_id, "service deregistered"),
        Err(err) => warn!(service_id = %args.service_id, error = %err, "deregistration failed"),
    }
    Ok(())
}
