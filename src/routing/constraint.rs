//! Dynamic subdomain route constraint.
//!
//! A request passes when it carries exactly one subdomain label, that label is
//! not the default subdomain, and the configured matcher accepts it (lower-cased).

use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;

use crate::config::RouterConfig;
use crate::routing::matcher::Matcher;
use crate::routing::request::RequestHost;

/// Restricts routes to requests on a valid dynamic subdomain.
#[derive(Debug, Clone)]
pub struct SubdomainConstraint {
    config: Arc<RouterConfig>,
}

impl SubdomainConstraint {
    pub fn new(config: Arc<RouterConfig>) -> Self {
        Self { config }
    }

    /// The tenant label this request resolves to, if it passes the constraint.
    pub fn tenant_label(&self, request: &RequestHost) -> Option<String> {
        let [label] = request.subdomains() else {
            return None;
        };

        // Compared before lower-casing.
        if *label == self.config.default_subdomain {
            return None;
        }

        let label = label.to_lowercase();
        let accepted = self.config.subdomain_matcher.matches(&label, request);
        tracing::debug!(host = %request.host(), label = %label, accepted, "Subdomain constraint evaluated");

        accepted.then_some(label)
    }

    /// Whether the request has a dynamic tenant subdomain.
    pub fn matches(&self, request: &RequestHost) -> bool {
        self.tenant_label(request).is_some()
    }
}

impl Matcher for SubdomainConstraint {
    fn matches(&self, req: &Request<Body>) -> bool {
        RequestHost::from_request(req, self.config.tld_components)
            .map(|host| SubdomainConstraint::matches(self, &host))
            .unwrap_or(false)
    }
}
