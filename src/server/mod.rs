//! HTTP server for coursedb
//!
//! axum wiring around the API handler: one dispatch endpoint, a schema
//! endpoint, and a health check, with CORS and request tracing.

mod config;
mod routes;
mod server;

pub use config::HttpServerConfig;
pub use routes::{api_routes, health_routes};
pub use server::HttpServer;
