//! Observability
//!
//! Structured JSON logging. One line per event, deterministic field order.

pub mod logger;

pub use logger::{Logger, Severity};
