//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use serde_json::Value;
use subdomain_router::config::Environment;
use subdomain_router::routing::{RequestHost, SubdomainMatcher, TenantSet};
use subdomain_router::url::{RewriteError, SubdomainUrlFor, UrlGenerator, UrlTarget};
use subdomain_router::RouterConfig;

/// Generator that returns the target it was given, like a framework stub.
#[derive(Debug, Default)]
pub struct EchoGenerator;

impl UrlGenerator for EchoGenerator {
    type Output = UrlTarget;
    type Error = RewriteError;

    fn generate(&self, target: UrlTarget) -> Result<UrlTarget, RewriteError> {
        Ok(target)
    }
}

/// Fresh test-environment configuration: default subdomain "", domain "test.host".
pub fn test_config() -> RouterConfig {
    RouterConfig::for_environment(Environment::Test)
}

pub fn echo_url_for(config: RouterConfig) -> SubdomainUrlFor<EchoGenerator> {
    SubdomainUrlFor::new(EchoGenerator, Arc::new(config))
}

/// Config whose matcher accepts only the given tenants.
pub fn config_with_tenants(labels: &[&str]) -> (RouterConfig, Arc<TenantSet>) {
    let tenants = Arc::new(TenantSet::new(labels.iter().copied()));
    let matcher: Arc<dyn SubdomainMatcher> = tenants.clone();
    let mut config = test_config();
    config.subdomain_matcher = matcher;
    (config, tenants)
}

pub fn request_with_subdomains(subdomains: &[&str]) -> RequestHost {
    let labels: Vec<String> = subdomains.iter().map(|s| s.to_string()).collect();
    let mut host = labels.join(".");
    if !host.is_empty() {
        host.push('.');
    }
    host.push_str("test.host");
    RequestHost::new(host, labels)
}

pub fn get(path: &str, host: &str) -> Request<Body> {
    Request::builder()
        .uri(path)
        .header("Host", host)
        .body(Body::empty())
        .unwrap()
}

pub async fn json_body(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
