//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, trace + timeout layers)
//!     → /            : links built with SubdomainUrlFor<UrlBuilder>
//!     → /dashboard   : subdomain_guard → handler with TenantLabel
//! ```

pub mod server;

pub use server::{AppState, HttpServer};
