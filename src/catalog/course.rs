//! Course record types
//!
//! `Course` is the sole entity. Every text field is `Option<String>`:
//! absence is explicit at the type level and serializes as JSON `null`
//! (never omitted), so clients can tell "no topic" from "empty topic".

use serde::{Deserialize, Serialize};

/// A course record held in the store.
///
/// The `id` is assigned by the store on creation, never by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub title: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
    pub topic: Option<String>,
    pub url: Option<String>,
}

/// Caller-supplied payload for creating a course.
///
/// Carries the five optional text fields and nothing else; an `id` in the
/// incoming JSON is rejected at parse time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CourseInput {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl CourseInput {
    /// Build the stored record from this payload and a store-assigned id.
    pub fn into_course(self, id: i64) -> Course {
        Course {
            id,
            title: self.title,
            author: self.author,
            description: self.description,
            topic: self.topic,
            url: self.url,
        }
    }
}
