//! Startup orchestration.
//!
//! # Responsibilities
//! - Turn a loaded AppConfig into the shared runtime configuration
//! - Apply reloaded configurations to the shared handle and tenant set

use std::sync::Arc;

use crate::config::validation::{validate_config, ValidationError};
use crate::config::{AppConfig, Environment, RouterConfig, SharedConfig};
use crate::routing::TenantSet;

/// Runtime configuration backed by the given tenant set.
pub fn build_router_config(config: &AppConfig, tenants: Arc<TenantSet>) -> RouterConfig {
    tenants.replace(&config.tenants.known);
    RouterConfig::from_app_config(config, tenants)
}

/// Install a reloaded configuration.
///
/// Server settings are not reloadable; changes to them are logged and skipped.
pub fn apply_reload(
    shared: &SharedConfig,
    tenants: &Arc<TenantSet>,
    current: &AppConfig,
    next: &AppConfig,
) {
    if current.server.bind_address != next.server.bind_address
        || current.server.request_timeout_secs != next.server.request_timeout_secs
    {
        tracing::warn!("Server settings changed; restart required for them to apply");
    }

    shared.store(build_router_config(next, tenants.clone()));
    tracing::info!(tenants = tenants.len(), "Configuration reloaded");
}

/// Apply the environment override to a reloaded file, re-validate, and install it.
///
/// Returns the configuration now in effect. On validation failure nothing is
/// stored and the errors are returned.
pub fn reload_with_override(
    shared: &SharedConfig,
    tenants: &Arc<TenantSet>,
    current: &AppConfig,
    mut next: AppConfig,
    environment: Option<Environment>,
) -> Result<AppConfig, Vec<ValidationError>> {
    if let Some(environment) = environment {
        next.environment = environment;
        if let Err(errors) = validate_config(&next) {
            for error in &errors {
                tracing::error!(
                    error = %error,
                    environment = ?environment,
                    "Config reload failed, keeping current configuration"
                );
            }
            return Err(errors);
        }
    }

    apply_reload(shared, tenants, current, &next);
    Ok(next)
}
