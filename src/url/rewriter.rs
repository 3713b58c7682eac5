//! Host rewriting for the `subdomain` URL option.
//!
//! # Responsibilities
//! - Interpret the `subdomain` directive
//! - Pick the host to rewrite: explicit option, current request, configured domain
//! - Replace everything left of the registrable domain with the requested label
//!
//! # Design Decisions
//! - Only the `subdomain` and `host` options are touched; everything else passes through
//! - Blank labels are dropped, so an empty default subdomain means "bare domain"
//! - Hosts shorter than the registrable domain are kept whole, never padded

use std::sync::Arc;

use crate::config::RouterConfig;
use crate::url::directive::SubdomainDirective;
use crate::url::error::RewriteError;
use crate::url::options::{UrlOptions, HOST, SUBDOMAIN};

/// Rewrites the `host` option according to the `subdomain` option.
#[derive(Debug, Clone)]
pub struct HostRewriter {
    config: Arc<RouterConfig>,
}

impl HostRewriter {
    pub fn new(config: Arc<RouterConfig>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Apply the `subdomain` directive in `options`.
    ///
    /// `current_host` is the host of the request being served, when there is one.
    pub fn rewrite(
        &self,
        mut options: UrlOptions,
        current_host: Option<&str>,
    ) -> Result<UrlOptions, RewriteError> {
        let label = match options.subdomain()? {
            None => return Ok(options),
            Some(SubdomainDirective::Unset) => {
                options.remove(SUBDOMAIN);
                return Ok(options);
            }
            Some(SubdomainDirective::UseDefault) => self.config.default_subdomain.clone(),
            Some(SubdomainDirective::Explicit(label)) => label,
        };
        options.remove(SUBDOMAIN);

        let source = options
            .host()
            .or(current_host)
            .unwrap_or(self.config.domain.as_str());
        let host = rewrite_host(source, &label, self.config.tld_components);

        tracing::debug!(from = %source, to = %host, "Rewrote URL host");

        options.insert(HOST, host);
        Ok(options)
    }
}

/// Replace the subdomain part of `host` with `label`.
///
/// Keeps the last `tld_components + 1` labels, prepends `label`, and drops blank labels.
/// A trailing dot (fully qualified host) does not count as a label.
pub fn rewrite_host(host: &str, label: &str, tld_components: usize) -> String {
    let labels: Vec<&str> = host.trim_end_matches('.').split('.').collect();
    let keep = labels.len().min(tld_components.saturating_add(1));

    std::iter::once(label)
        .chain(labels[labels.len() - keep..].iter().copied())
        .filter(|l| !l.trim().is_empty())
        .collect::<Vec<_>>()
        .join(".")
}
