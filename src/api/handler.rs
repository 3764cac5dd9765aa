//! API handler for coursedb
//!
//! Dispatches parsed requests to the resolver table behind a single
//! global mutex. The HTTP layer may accept requests concurrently; the
//! lock serializes them, so each resolver sees the store quiescent for
//! the whole operation.

use std::sync::Mutex;

use serde_json::{json, Value};

use crate::catalog::CourseStore;
use crate::resolver;

use super::request::Request;
use super::response::Response;

/// Request dispatcher owning the store behind a global lock
pub struct ApiHandler {
    store: Mutex<CourseStore>,
}

impl ApiHandler {
    /// Create a handler over the given store
    pub fn new(store: CourseStore) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }

    /// Create a handler over the seeded three-record store
    pub fn seeded() -> Self {
        Self::new(CourseStore::seeded())
    }

    /// Handle a raw JSON request string
    pub fn handle(&self, json_request: &str) -> Response {
        let request = match Request::parse(json_request) {
            Ok(r) => r,
            Err(e) => return Response::error(&e),
        };

        Response::success(self.dispatch(request))
    }

    /// Dispatch a parsed request to its resolver.
    ///
    /// Infallible: resolvers signal "not found" and "nothing to add" as
    /// `None`, which serializes to `null` here. `json!` on an `Option`
    /// does that conversion.
    pub fn dispatch(&self, request: Request) -> Value {
        // Global lock for the duration of one operation.
        let mut store = self.store.lock().expect("store lock poisoned");

        match request {
            Request::Courses { topic } => json!(resolver::courses(&store, topic.as_deref())),
            Request::CoursesByPartialTitle { partial_title } => {
                json!(resolver::courses_by_partial_title(
                    &store,
                    partial_title.as_deref()
                ))
            }
            Request::Course { id } => json!(resolver::course(&store, id)),
            Request::UpdateCourseTopic { id, topic } => {
                json!(resolver::update_course_topic(&mut store, id, topic))
            }
            Request::AddCourse { course } => json!(resolver::add_course(&mut store, course)),
        }
    }
}
