//! Observability subsystem.
//!
//! All subsystems emit `tracing` events; this module only wires the subscriber.

pub mod logging;

pub use logging::init_logging;
