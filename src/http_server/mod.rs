//! HTTP transport adapter
//!
//! Thin layer between HTTP and the versioned store:
//! - `entry_routes` - PUT/GET/DELETE for values, GET/DELETE for histories
//! - `HttpServer` - Router + listener bootstrap with CORS
//! - `HttpServerConfig` - Host, port, and CORS origins
//! - `ApiError` - Validation (400) and not-found (404) mapping

pub mod config;
pub mod entry_routes;
pub mod errors;
pub mod server;

pub use config::HttpServerConfig;
pub use entry_routes::{entry_routes, EntriesState, EntryRecord};
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use server::HttpServer;
