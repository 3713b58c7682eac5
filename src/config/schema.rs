//! Configuration schema definitions.
//!
//! This module defines the on-disk configuration structure.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Deployment environment, selects the built-in subdomain defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Test,
    Production,
}

impl Environment {
    /// Label treated as "no real subdomain" in this environment.
    pub fn default_subdomain(self) -> &'static str {
        match self {
            Environment::Test => "",
            Environment::Development | Environment::Production => "www",
        }
    }

    /// Fallback domain used when neither the options nor a request supply a host.
    /// Production has none; it must be configured.
    pub fn default_domain(self) -> &'static str {
        match self {
            Environment::Development => "lvh.me",
            Environment::Test => "test.host",
            Environment::Production => "",
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "test" => Ok(Environment::Test),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(format!("unknown environment: {}", other)),
        }
    }
}

/// Root configuration for the subdomain router.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Environment preset the subdomain settings are layered over.
    pub environment: Environment,

    /// Host shape settings.
    pub subdomains: SubdomainConfig,

    /// HTTP listener settings.
    pub server: ServerConfig,

    /// Statically known tenant labels.
    pub tenants: TenantsConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// Default subdomain after applying environment defaults.
    pub fn resolved_default_subdomain(&self) -> String {
        self.subdomains
            .default_subdomain
            .clone()
            .unwrap_or_else(|| self.environment.default_subdomain().to_string())
    }

    /// Fallback domain after applying environment defaults.
    pub fn resolved_domain(&self) -> String {
        self.subdomains
            .domain
            .clone()
            .unwrap_or_else(|| self.environment.default_domain().to_string())
    }

    pub fn resolved_tld_components(&self) -> usize {
        self.subdomains.tld_components.unwrap_or(1)
    }
}

/// Host shape settings. Unset fields fall back to the environment preset.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SubdomainConfig {
    /// Label meaning "no subdomain" (e.g. "www").
    pub default_subdomain: Option<String>,

    /// Base domain used when no other host is available.
    pub domain: Option<String>,

    /// Number of trailing labels forming the TLD (2 for "example.co.uk").
    pub tld_components: Option<usize>,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            request_timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct TenantsConfig {
    /// Subdomain labels accepted as tenants.
    pub known: Vec<String>,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
