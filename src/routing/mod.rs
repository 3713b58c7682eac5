//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (Host header)
//!     → request.rs (strip port, split subdomain labels)
//!     → constraint.rs (single label? not default? matcher accepts?)
//!     → guard.rs (404 or forward with TenantLabel extension)
//! ```
//!
//! # Design Decisions
//! - The constraint is a pure predicate; it never stores anything on the request
//! - Tenant validity is delegated to an injected SubdomainMatcher
//! - Any input, however degenerate, yields a boolean rather than an error

pub mod constraint;
pub mod guard;
pub mod matcher;
pub mod request;

pub use constraint::SubdomainConstraint;
pub use guard::{subdomain_guard, TenantLabel};
pub use matcher::{Matcher, RejectAll, SubdomainMatcher, TenantSet};
pub use request::RequestHost;
