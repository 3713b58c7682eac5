//! Errors raised while generating URLs.

use serde_json::Value;

/// Message carried by [`RewriteError::InvalidArgument`] for malformed directives.
pub const INVALID_DIRECTIVE: &str = "subdomain must be null, false, or a string";

/// The only error originating in host rewriting.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RewriteError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Errors from [`UrlBuilder`](crate::url::UrlBuilder).
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error(transparent)]
    Rewrite(#[from] RewriteError),

    #[error("missing host to link to")]
    MissingHost,

    #[error("invalid port: {0}")]
    InvalidPort(Value),

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
