//! chronokv - An in-memory key-value store that keeps every write
//!
//! Every put appends an immutable history entry; deletes are soft markers.
//! The store is the core; HTTP, config, CLI, and logging are adapters
//! around it.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod store;
