//! API request types
//!
//! JSON request parsing for all supported operations. The envelope names
//! the operation in `op`; the remaining fields are that operation's
//! arguments. Required arguments are checked here, so a `Request` handed
//! to the dispatcher is always complete.

use serde::{Deserialize, Serialize};

use crate::catalog::CourseInput;

use super::errors::{ApiError, ApiResult};

/// Parsed request envelope
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// `courses(topic?)`
    Courses { topic: Option<String> },
    /// `coursesByPartialTitle(partialTitle?)`
    CoursesByPartialTitle { partial_title: Option<String> },
    /// `course(id!)`
    Course { id: i64 },
    /// `updateCourseTopic(id!, topic!)`
    UpdateCourseTopic { id: i64, topic: String },
    /// `addCourse(course?)`
    AddCourse { course: Option<CourseInput> },
}

/// Raw request for parsing
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawRequest {
    op: String,
    #[serde(default)]
    topic: Option<String>,
    #[serde(default, rename = "partialTitle")]
    partial_title: Option<String>,
    #[serde(default)]
    id: Option<i64>,
    #[serde(default)]
    course: Option<CourseInput>,
}

impl Request {
    /// Parse a request from a JSON string
    pub fn parse(json: &str) -> ApiResult<Self> {
        let raw: RawRequest = serde_json::from_str(json)
            .map_err(|e| ApiError::invalid_request(format!("Invalid JSON: {}", e)))?;

        match raw.op.as_str() {
            "courses" => Ok(Request::Courses { topic: raw.topic }),
            "coursesByPartialTitle" => Ok(Request::CoursesByPartialTitle {
                partial_title: raw.partial_title,
            }),
            "course" => {
                let id = raw
                    .id
                    .ok_or_else(|| ApiError::invalid_request("Missing id"))?;
                Ok(Request::Course { id })
            }
            "updateCourseTopic" => {
                let id = raw
                    .id
                    .ok_or_else(|| ApiError::invalid_request("Missing id"))?;
                let topic = raw
                    .topic
                    .ok_or_else(|| ApiError::invalid_request("Missing topic"))?;
                Ok(Request::UpdateCourseTopic { id, topic })
            }
            "addCourse" => Ok(Request::AddCourse { course: raw.course }),
            other => Err(ApiError::unknown_operation(other)),
        }
    }
}
