//! Host information extracted from an incoming request.
//!
//! # Responsibilities
//! - Read the Host header (or URI authority)
//! - Strip the port
//! - Split off subdomain labels using the configured TLD length
//!
//! # Design Decisions
//! - IP literals never have subdomains
//! - Labels keep their original case; callers normalize if they need to

use std::net::IpAddr;

use axum::http::{header, Request};

/// The host of a request and its subdomain labels, outermost first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestHost {
    host: String,
    subdomains: Vec<String>,
}

impl RequestHost {
    /// Build from already split parts.
    pub fn new(host: impl Into<String>, subdomains: Vec<String>) -> Self {
        Self {
            host: host.into(),
            subdomains,
        }
    }

    /// Parse a host (optionally with port), treating everything left of the last
    /// `tld_components + 1` labels as subdomains.
    pub fn parse(authority: &str, tld_components: usize) -> Self {
        let host = strip_port(authority);

        if is_ip_literal(host) {
            return Self::new(host, Vec::new());
        }

        // Trailing dot of a fully qualified host is not a label.
        let labels: Vec<&str> = host.trim_end_matches('.').split('.').collect();
        let keep = tld_components.saturating_add(1);
        let subdomains = if labels.len() > keep {
            labels[..labels.len() - keep]
                .iter()
                .map(|label| label.to_string())
                .collect()
        } else {
            Vec::new()
        };

        Self::new(host, subdomains)
    }

    /// Extract from an HTTP request. Returns `None` when no host is present.
    pub fn from_request<B>(req: &Request<B>, tld_components: usize) -> Option<Self> {
        req.headers()
            .get(header::HOST)
            .and_then(|h| h.to_str().ok())
            .or_else(|| req.uri().authority().map(|a| a.as_str()))
            .filter(|h| !h.is_empty())
            .map(|h| Self::parse(h, tld_components))
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn subdomains(&self) -> &[String] {
        &self.subdomains
    }
}

fn strip_port(authority: &str) -> &str {
    // [::1]:8080
    if authority.starts_with('[') {
        return match authority.find(']') {
            Some(end) => &authority[..=end],
            None => authority,
        };
    }
    match authority.rsplit_once(':') {
        Some((host, port)) if port.bytes().all(|b| b.is_ascii_digit()) => host,
        _ => authority,
    }
}

fn is_ip_literal(host: &str) -> bool {
    host.starts_with('[') || host.parse::<IpAddr>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    #[test]
    fn test_parse_subdomains() {
        let host = RequestHost::parse("baz.bat.foo.bar", 1);
        assert_eq!(host.host(), "baz.bat.foo.bar");
        assert_eq!(host.subdomains(), ["baz", "bat"]);

        assert!(RequestHost::parse("foo.bar", 1).subdomains().is_empty());
        assert!(RequestHost::parse("localhost", 1).subdomains().is_empty());
    }

    #[test]
    fn test_parse_respects_tld_components() {
        let host = RequestHost::parse("acme.example.co.uk", 2);
        assert_eq!(host.subdomains(), ["acme"]);

        let host = RequestHost::parse("acme.localhost", 0);
        assert_eq!(host.subdomains(), ["acme"]);
    }

    #[test]
    fn test_parse_fully_qualified_host() {
        let host = RequestHost::parse("acme.test.host.", 1);
        assert_eq!(host.host(), "acme.test.host.");
        assert_eq!(host.subdomains(), ["acme"]);

        assert!(RequestHost::parse("test.host.:8080", 1).subdomains().is_empty());
    }

    #[test]
    fn test_parse_huge_tld_components() {
        assert!(RequestHost::parse("a.b.c", usize::MAX).subdomains().is_empty());
    }

    #[test]
    fn test_port_stripped_and_case_kept() {
        let host = RequestHost::parse("ACME.lvh.me:3000", 1);
        assert_eq!(host.host(), "ACME.lvh.me");
        assert_eq!(host.subdomains(), ["ACME"]);
    }

    #[test]
    fn test_ip_literals_have_no_subdomains() {
        assert!(RequestHost::parse("192.168.1.10:8080", 1).subdomains().is_empty());
        let v6 = RequestHost::parse("[::1]:8080", 1);
        assert_eq!(v6.host(), "[::1]");
        assert!(v6.subdomains().is_empty());
    }

    #[test]
    fn test_from_request() {
        let req = Request::builder()
            .header("Host", "acme.test.host")
            .body(Body::default())
            .unwrap();
        let host = RequestHost::from_request(&req, 1).unwrap();
        assert_eq!(host.subdomains(), ["acme"]);

        let req = Request::builder()
            .uri("http://globex.test.host/dashboard")
            .body(Body::default())
            .unwrap();
        let host = RequestHost::from_request(&req, 1).unwrap();
        assert_eq!(host.subdomains(), ["globex"]);

        let req = Request::builder().uri("/").body(Body::default()).unwrap();
        assert!(RequestHost::from_request(&req, 1).is_none());
    }
}
