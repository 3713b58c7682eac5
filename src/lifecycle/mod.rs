//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Validate → Build RouterConfig → Watch file → Start listener
//!
//! Shutdown (signals.rs):
//!     Ctrl+C → axum graceful shutdown → Exit
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - A broken config edit at runtime is logged and ignored

pub mod signals;
pub mod startup;

pub use signals::shutdown_signal;
pub use startup::{apply_reload, build_router_config, reload_with_override};
