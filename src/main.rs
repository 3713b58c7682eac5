//! Subdomain router demo server.
//!
//! Serves a default site on the bare domain and a tenant dashboard on every
//! subdomain listed in the config file. Tenants and host settings reload when
//! the file changes.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use subdomain_router::config::{load_config, AppConfig, ConfigError, Environment, SharedConfig};
use subdomain_router::config::watcher::ConfigWatcher;
use subdomain_router::lifecycle::{build_router_config, reload_with_override};
use subdomain_router::observability::init_logging;
use subdomain_router::routing::TenantSet;
use subdomain_router::HttpServer;

#[derive(Parser)]
#[command(name = "subdomain-router")]
#[command(about = "Multi-tenant subdomain routing demo server", long_about = None)]
struct Cli {
    /// TOML configuration file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the environment preset from the config file.
    #[arg(short, long)]
    environment: Option<Environment>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };
    if let Some(environment) = cli.environment {
        config.environment = environment;
        subdomain_router::config::validation::validate_config(&config)
            .map_err(ConfigError::Validation)?;
    }

    init_logging(&config.observability)?;
    tracing::info!("subdomain-router v0.1.0 starting");

    let tenants = Arc::new(TenantSet::default());
    let shared = SharedConfig::new(build_router_config(&config, tenants.clone()));

    tracing::info!(
        environment = ?config.environment,
        domain = %shared.load().domain,
        tenants = tenants.len(),
        bind_address = %config.server.bind_address,
        "Configuration loaded"
    );

    // Keep the watcher alive for the lifetime of the server.
    let _watcher = match &cli.config {
        Some(path) => {
            let (watcher, mut updates) = ConfigWatcher::new(path);
            let watcher = watcher.run()?;

            let shared = shared.clone();
            let tenants = tenants.clone();
            let environment = cli.environment;
            let mut current = config.clone();
            tokio::spawn(async move {
                while let Some(next) = updates.recv().await {
                    if let Ok(applied) =
                        reload_with_override(&shared, &tenants, &current, next, environment)
                    {
                        current = applied;
                    }
                }
            });
            Some(watcher)
        }
        None => None,
    };

    let listener = TcpListener::bind(&config.server.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let server = HttpServer::new(shared, tenants, &config.server);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
