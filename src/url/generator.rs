//! URL generation with subdomain support.
//!
//! `SubdomainUrlFor` decorates any [`UrlGenerator`]: it rewrites the options,
//! calls the wrapped generator once, and hands back whatever it produced.

use std::sync::Arc;

use url::Url;

use crate::config::RouterConfig;
use crate::url::error::{GenerateError, RewriteError};
use crate::url::options::UrlOptions;
use crate::url::rewriter::HostRewriter;

/// Something to generate a URL for.
#[derive(Debug, Clone, PartialEq)]
pub enum UrlTarget {
    /// Option map; subject to host rewriting.
    Options(UrlOptions),
    /// A ready-made URL or path, passed through untouched.
    Literal(String),
}

impl From<UrlOptions> for UrlTarget {
    fn from(options: UrlOptions) -> Self {
        UrlTarget::Options(options)
    }
}

impl From<&str> for UrlTarget {
    fn from(literal: &str) -> Self {
        UrlTarget::Literal(literal.to_string())
    }
}

impl From<String> for UrlTarget {
    fn from(literal: String) -> Self {
        UrlTarget::Literal(literal)
    }
}

/// The routine that turns a target into a URL.
pub trait UrlGenerator {
    type Output;
    type Error: From<RewriteError>;

    fn generate(&self, target: UrlTarget) -> Result<Self::Output, Self::Error>;
}

/// Adds the `subdomain` option to a URL generator.
#[derive(Debug, Clone)]
pub struct SubdomainUrlFor<G> {
    generator: G,
    rewriter: HostRewriter,
}

impl<G: UrlGenerator> SubdomainUrlFor<G> {
    pub fn new(generator: G, config: Arc<RouterConfig>) -> Self {
        Self {
            generator,
            rewriter: HostRewriter::new(config),
        }
    }

    /// Generate a URL, honouring a `subdomain` option if present.
    pub fn url_for(
        &self,
        target: impl Into<UrlTarget>,
        current_host: Option<&str>,
    ) -> Result<G::Output, G::Error> {
        let target = match target.into() {
            UrlTarget::Options(options) => {
                UrlTarget::Options(self.rewriter.rewrite(options, current_host)?)
            }
            literal => literal,
        };
        self.generator.generate(target)
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub fn rewriter(&self) -> &HostRewriter {
        &self.rewriter
    }
}

/// Builds absolute URL strings from `protocol`, `host`, `port`, `path`,
/// `params` and `anchor` options.
#[derive(Debug, Clone, Copy, Default)]
pub struct UrlBuilder;

impl UrlGenerator for UrlBuilder {
    type Output = String;
    type Error = GenerateError;

    fn generate(&self, target: UrlTarget) -> Result<String, GenerateError> {
        let options = match target {
            UrlTarget::Options(options) => options,
            UrlTarget::Literal(literal) => return Ok(literal),
        };

        let host = options.host().ok_or(GenerateError::MissingHost)?;
        let protocol = options
            .get_str("protocol")
            .unwrap_or("http")
            .trim_end_matches("://");
        let mut url = Url::parse(&format!("{}://{}", protocol, host))?;

        if let Some(port) = options.get("port").filter(|p| !p.is_null()) {
            let parsed = port
                .as_u64()
                .and_then(|p| u16::try_from(p).ok())
                .or_else(|| port.as_str().and_then(|p| p.parse().ok()));
            match parsed {
                Some(p) if url.set_port(Some(p)).is_ok() => {}
                _ => return Err(GenerateError::InvalidPort(port.clone())),
            }
        }

        url.set_path(options.get_str("path").unwrap_or("/"));

        if let Some(params) = options.get("params").and_then(|p| p.as_object()) {
            if !params.is_empty() {
                let mut query = url.query_pairs_mut();
                for (key, value) in params {
                    match value.as_str() {
                        Some(s) => query.append_pair(key, s),
                        None => query.append_pair(key, &value.to_string()),
                    };
                }
            }
        }

        if let Some(anchor) = options.get_str("anchor") {
            url.set_fragment(Some(anchor));
        }

        Ok(url.to_string())
    }
}
