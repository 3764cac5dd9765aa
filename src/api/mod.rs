//! API layer for coursedb
//!
//! Parses a JSON request envelope naming an operation, dispatches it by
//! name to the matching resolver behind a single global lock, and wraps
//! the result in a success envelope.
//!
//! # Design Principles
//!
//! - Single global mutex around the store; one operation runs to
//!   completion before the next begins
//! - Malformed requests are rejected before any resolver is invoked
//! - Absent results are `data: null`, never errors
//!
//! # Supported Operations
//!
//! - courses
//! - coursesByPartialTitle
//! - course
//! - updateCourseTopic
//! - addCourse

mod errors;
mod handler;
mod request;
mod response;

pub use errors::{ApiError, ApiErrorCode, ApiResult};
pub use handler::ApiHandler;
pub use request::Request;
pub use response::{ErrorResponse, Response, SuccessResponse};
