//! URL generation subsystem.
//!
//! # Data Flow
//! ```text
//! caller: url_for(options { subdomain, host, ... }, current request host)
//!     → directive.rs (absent / null / false / string, else InvalidArgument)
//!     → rewriter.rs (pick host, slice labels, prepend label)
//!     → generator.rs (wrapped UrlGenerator called once with rewritten options)
//!     → generator output returned untouched
//! ```

pub mod directive;
pub mod error;
pub mod generator;
pub mod options;
pub mod rewriter;

pub use directive::SubdomainDirective;
pub use error::{GenerateError, RewriteError};
pub use generator::{SubdomainUrlFor, UrlBuilder, UrlGenerator, UrlTarget};
pub use options::UrlOptions;
pub use rewriter::{rewrite_host, HostRewriter};
