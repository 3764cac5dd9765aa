//! Resolver set: the five named operations over the course store
//!
//! Each resolver is a synchronous function of its arguments and the
//! current store state; the two mutations also mutate the store. All
//! "failure" is an absent value (`None`), never an error: the signatures
//! have no error channel at all. Results are owned clones, so no resolver
//! retains a reference into the store across calls.
//!
//! Matching is case-sensitive throughout: topic lookup is exact equality,
//! title lookup is substring containment.

use crate::catalog::{Course, CourseInput, CourseStore};

/// `courses(topic?)`: with a topic, the ordered sub-sequence of records
/// whose `topic` equals it exactly; without, all records in store order.
pub fn courses(store: &CourseStore, topic: Option<&str>) -> Vec<Course> {
    match topic {
        Some(topic) => store
            .all()
            .iter()
            .filter(|c| c.topic.as_deref() == Some(topic))
            .cloned()
            .collect(),
        None => store.all().to_vec(),
    }
}

/// `coursesByPartialTitle(partialTitle?)`: records whose title is present
/// and contains the fragment as a substring, in store order. Records with
/// an absent title are never returned. An absent fragment is treated as
/// the empty fragment, which every present title contains.
pub fn courses_by_partial_title(store: &CourseStore, partial_title: Option<&str>) -> Vec<Course> {
    let fragment = partial_title.unwrap_or("");
    store
        .all()
        .iter()
        .filter(|c| c.title.as_deref().is_some_and(|t| t.contains(fragment)))
        .cloned()
        .collect()
}

/// `course(id)`: linear search for the first record with that id.
pub fn course(store: &CourseStore, id: i64) -> Option<Course> {
    store.find(id).cloned()
}

/// `updateCourseTopic(id, topic)`: overwrite the matching record's topic
/// in place and return the updated record, or `None` when no record
/// matches (store untouched).
pub fn update_course_topic(store: &mut CourseStore, id: i64, topic: String) -> Option<Course> {
    let record = store.find_mut(id)?;
    record.topic = Some(topic);
    Some(record.clone())
}

/// `addCourse(course?)`: `None` when the payload is absent (store
/// untouched); otherwise append a record carrying every provided field
/// plus the store-assigned id and return the full updated sequence.
pub fn add_course(store: &mut CourseStore, input: Option<CourseInput>) -> Option<Vec<Course>> {
    let input = input?;
    store.append(input);
    Some(store.all().to_vec())
}
