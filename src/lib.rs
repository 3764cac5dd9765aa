//! coursedb - an in-memory course-catalog query/mutation API server
//!
//! Serves a schema describing one entity type and resolves five named
//! operations against a sequence of course records held in process
//! memory. No persistence: the store dies with the process.

pub mod api;
pub mod catalog;
pub mod cli;
pub mod resolver;
pub mod schema;
pub mod server;
