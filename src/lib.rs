//! Dynamic subdomain support for URL generation and routing.
//!
//! - [`url`]: generate URLs "as if" issued from another subdomain
//! - [`routing`]: route constraint accepting only valid tenant subdomains
//! - [`config`]: the settings both share

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;
pub mod url;

pub use config::{RouterConfig, SharedConfig};
pub use http::HttpServer;
pub use routing::{SubdomainConstraint, SubdomainMatcher};
pub use crate::url::{HostRewriter, SubdomainDirective, SubdomainUrlFor, UrlOptions};
