//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check host labels are usable for composing hosts
//! - Check the listener address parses
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use crate::config::schema::AppConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("domain must not be empty")]
    EmptyDomain,

    #[error("domain {0:?} contains a blank label")]
    BlankDomainLabel(String),

    #[error("default subdomain {0:?} must be a single label")]
    MultiLabelDefaultSubdomain(String),

    #[error("tenant {0:?} must be a single non-blank label")]
    InvalidTenant(String),

    #[error("invalid bind address {0:?}")]
    InvalidBindAddress(String),
}

/// Validate a loaded configuration.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let domain = config.resolved_domain();
    if domain.is_empty() {
        errors.push(ValidationError::EmptyDomain);
    } else if domain.split('.').any(|label| label.trim().is_empty()) {
        errors.push(ValidationError::BlankDomainLabel(domain.clone()));
    } else {
        let labels = domain.split('.').count();
        let tld_components = config.resolved_tld_components();
        if labels < tld_components + 1 {
            tracing::warn!(
                domain = %domain,
                tld_components,
                "Domain has fewer labels than tld_components + 1"
            );
        }
    }

    let default_subdomain = config.resolved_default_subdomain();
    if default_subdomain.contains('.') {
        errors.push(ValidationError::MultiLabelDefaultSubdomain(default_subdomain));
    }

    for tenant in &config.tenants.known {
        if tenant.trim().is_empty() || tenant.contains('.') {
            errors.push(ValidationError::InvalidTenant(tenant.clone()));
        }
    }

    if config.server.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.server.bind_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
