//! Route matching logic.
//!
//! # Responsibilities
//! - Define the route guard seam (`Matcher`)
//! - Define the injected tenant predicate (`SubdomainMatcher`)
//! - Provide the default reject-all predicate and an in-memory tenant set
//!
//! # Design Decisions
//! - Tenant lookup is owned by application code; this module only defines the seam
//! - Closures work as matchers so tests and apps can inject predicates inline
//! - TenantSet stores lower-case labels; lookups are exact

use axum::body::Body;
use axum::http::Request;
use dashmap::DashSet;

use crate::routing::request::RequestHost;

/// Trait for matching requests against conditions.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the request matches this condition.
    fn matches(&self, req: &Request<Body>) -> bool;
}

/// Decides whether a (lower-cased) subdomain label names a dynamic tenant.
pub trait SubdomainMatcher: Send + Sync {
    fn matches(&self, label: &str, request: &RequestHost) -> bool;
}

impl<F> SubdomainMatcher for F
where
    F: Fn(&str, &RequestHost) -> bool + Send + Sync,
{
    fn matches(&self, label: &str, request: &RequestHost) -> bool {
        self(label, request)
    }
}

/// Rejects every label. Used until an application installs a real matcher.
#[derive(Debug, Clone, Copy, Default)]
pub struct RejectAll;

impl SubdomainMatcher for RejectAll {
    fn matches(&self, _label: &str, _request: &RequestHost) -> bool {
        false
    }
}

/// A concurrent set of known tenant labels.
#[derive(Debug, Default)]
pub struct TenantSet {
    labels: DashSet<String>,
}

impl TenantSet {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set = Self::default();
        for label in labels {
            set.insert(label.as_ref());
        }
        set
    }

    /// Add a label. Returns false if it was already present.
    pub fn insert(&self, label: &str) -> bool {
        self.labels.insert(label.to_lowercase())
    }

    pub fn remove(&self, label: &str) -> bool {
        self.labels.remove(&label.to_lowercase()).is_some()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    /// Replace the whole set, e.g. after a config reload.
    ///
    /// Not atomic: a concurrent lookup may briefly see a mix of old and new labels.
    pub fn replace<I, S>(&self, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let next: Vec<String> = labels
            .into_iter()
            .map(|label| label.as_ref().to_lowercase())
            .collect();
        self.labels.retain(|label| next.contains(label));
        for label in next {
            self.labels.insert(label);
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Sorted snapshot of the labels.
    pub fn labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = self.labels.iter().map(|l| l.key().clone()).collect();
        labels.sort();
        labels
    }
}

impl SubdomainMatcher for TenantSet {
    fn matches(&self, label: &str, _request: &RequestHost) -> bool {
        self.contains(label)
    }
}
