//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → AppConfig + environment presets
//!     → RouterConfig (immutable snapshot, carries the subdomain matcher)
//!     → SharedConfig (ArcSwap) read by rewriter and constraint
//!
//! On file change:
//!     watcher.rs detects change
//!     → loader.rs loads new config
//!     → validation.rs validates
//!     → atomic swap of Arc<RouterConfig>
//! ```
//!
//! # Design Decisions
//! - A RouterConfig is never mutated after it is shared; changes swap a whole snapshot
//! - All file fields have defaults to allow minimal configs
//! - No process-wide global: callers pass the config (or a snapshot) explicitly

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::routing::matcher::{RejectAll, SubdomainMatcher};

pub use loader::{load_config, ConfigError};
pub use schema::{AppConfig, Environment, ObservabilityConfig, ServerConfig, SubdomainConfig};

/// Settings shared by the host rewriter and the subdomain constraint.
#[derive(Clone)]
pub struct RouterConfig {
    /// Label treated as "no subdomain" (often "" or "www").
    pub default_subdomain: String,

    /// Fallback host when neither the options nor a request provide one.
    pub domain: String,

    /// Trailing labels forming the TLD; the registrable domain is one more.
    pub tld_components: usize,

    /// Decides whether a lower-cased label names a dynamic tenant.
    pub subdomain_matcher: Arc<dyn SubdomainMatcher>,
}

impl RouterConfig {
    /// Defaults for the given environment with a matcher that rejects everything.
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            default_subdomain: environment.default_subdomain().to_string(),
            domain: environment.default_domain().to_string(),
            tld_components: 1,
            subdomain_matcher: Arc::new(RejectAll),
        }
    }

    /// Build from a loaded file configuration.
    pub fn from_app_config(config: &AppConfig, matcher: Arc<dyn SubdomainMatcher>) -> Self {
        Self {
            default_subdomain: config.resolved_default_subdomain(),
            domain: config.resolved_domain(),
            tld_components: config.resolved_tld_components(),
            subdomain_matcher: matcher,
        }
    }

    pub fn with_default_subdomain(mut self, label: impl Into<String>) -> Self {
        self.default_subdomain = label.into();
        self
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    pub fn with_tld_components(mut self, tld_components: usize) -> Self {
        self.tld_components = tld_components;
        self
    }

    pub fn with_matcher<M>(mut self, matcher: M) -> Self
    where
        M: SubdomainMatcher + 'static,
    {
        self.subdomain_matcher = Arc::new(matcher);
        self
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl fmt::Debug for RouterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouterConfig")
            .field("default_subdomain", &self.default_subdomain)
            .field("domain", &self.domain)
            .field("tld_components", &self.tld_components)
            .finish_non_exhaustive()
    }
}

/// Atomically swappable handle to the current [`RouterConfig`].
#[derive(Clone)]
pub struct SharedConfig {
    inner: Arc<ArcSwap<RouterConfig>>,
}

impl SharedConfig {
    pub fn new(config: RouterConfig) -> Self {
        Self {
            inner: Arc::new(ArcSwap::from_pointee(config)),
        }
    }

    /// Snapshot of the current configuration.
    pub fn load(&self) -> Arc<RouterConfig> {
        self.inner.load_full()
    }

    /// Replace the configuration. Readers see either the old or the new snapshot.
    pub fn store(&self, config: RouterConfig) {
        tracing::info!(
            domain = %config.domain,
            default_subdomain = %config.default_subdomain,
            tld_components = config.tld_components,
            "Subdomain configuration updated"
        );
        self.inner.store(Arc::new(config));
    }
}

impl fmt::Debug for SharedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedConfig").field(&self.load()).finish()
    }
}
