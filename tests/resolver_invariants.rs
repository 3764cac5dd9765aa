//! Resolver Invariant Tests
//!
//! End-to-end properties of the resolver set over isolated stores:
//! - Topic filtering is exact and case-sensitive
//! - Partial-title matching is case-sensitive substring over present titles
//! - Absence is signaled by None, never by an error or an empty list
//! - Mutations touch exactly one record and are visible to later reads
//! - Ids are store-assigned and strictly increasing

use coursedb::catalog::{CourseInput, CourseStore};
use coursedb::resolver;

// =============================================================================
// Helper Functions
// =============================================================================

fn input(title: Option<&str>, topic: Option<&str>) -> CourseInput {
    CourseInput {
        title: title.map(str::to_string),
        topic: topic.map(str::to_string),
        ..Default::default()
    }
}

// =============================================================================
// Read Operations
// =============================================================================

/// courses() with no topic returns every record in store order.
#[test]
fn test_courses_without_topic_is_full_store_order() {
    let store = CourseStore::seeded();
    let all = resolver::courses(&store, None);
    let ids: Vec<i64> = all.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

/// courses(T) returns exactly the sub-sequence whose topic equals T.
#[test]
fn test_courses_topic_filter_is_ordered_subsequence() {
    let store = CourseStore::seeded();
    let node = resolver::courses(&store, Some("Node.js"));
    let ids: Vec<i64> = node.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 2]);

    let js = resolver::courses(&store, Some("JavaScript"));
    assert_eq!(js.len(), 1);
    assert_eq!(js[0].id, 3);
}

/// Topic equality never falls back to substring or case folding.
#[test]
fn test_topic_filter_rejects_near_matches() {
    let store = CourseStore::seeded();
    assert!(resolver::courses(&store, Some("node.js")).is_empty());
    assert!(resolver::courses(&store, Some("Node")).is_empty());
    assert!(resolver::courses(&store, Some("Node.js ")).is_empty());
}

/// Partial-title lookup returns records whose present title contains the
/// fragment; a record with an absent title is never returned.
#[test]
fn test_partial_title_excludes_absent_titles() {
    let mut store = CourseStore::new();
    store.append(input(Some("Intro to Rust"), None));
    store.append(input(None, Some("Rust")));
    store.append(input(Some("Advanced Rust"), None));

    let hits = resolver::courses_by_partial_title(&store, Some("Rust"));
    let ids: Vec<i64> = hits.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

/// An absent fragment behaves as the empty fragment: every record with a
/// present title matches.
#[test]
fn test_partial_title_absent_fragment_matches_all_titled() {
    let mut store = CourseStore::seeded();
    store.append(input(None, Some("Untitled")));

    let hits = resolver::courses_by_partial_title(&store, None);
    assert_eq!(hits.len(), 3);
}

/// course(id) finds each seeded record and is absent for unknown ids.
#[test]
fn test_course_lookup_by_id() {
    let store = CourseStore::seeded();
    for (id, title) in [
        (1, "The Complete Node.js Developer Course"),
        (2, "Node.js, Express & MongoDB Dev to Deployment"),
        (3, "JavaScript: Understanding The Weird Parts"),
    ] {
        let found = resolver::course(&store, id).unwrap();
        assert_eq!(found.id, id);
        assert_eq!(found.title.as_deref(), Some(title));
    }

    assert!(resolver::course(&store, 999).is_none());
}

// =============================================================================
// Write Operations
// =============================================================================

/// updateCourseTopic(2, "Backend") returns the record with the new topic,
/// and a subsequent course(2) reflects the change.
#[test]
fn test_update_topic_then_read_back() {
    let mut store = CourseStore::seeded();

    let updated = resolver::update_course_topic(&mut store, 2, "Backend".to_string()).unwrap();
    assert_eq!(updated.id, 2);
    assert_eq!(updated.topic.as_deref(), Some("Backend"));

    let read = resolver::course(&store, 2).unwrap();
    assert_eq!(read.topic.as_deref(), Some("Backend"));
}

/// Updating a missing id is absent and leaves every record untouched.
#[test]
fn test_update_missing_id_is_noop() {
    let mut store = CourseStore::seeded();
    let before: Vec<_> = store.all().to_vec();

    assert!(resolver::update_course_topic(&mut store, 999, "X".to_string()).is_none());
    assert_eq!(store.all(), &before[..]);
}

/// The update touches only the topic field of the matched record.
#[test]
fn test_update_leaves_other_fields_and_records_alone() {
    let mut store = CourseStore::seeded();
    let before_1 = resolver::course(&store, 1).unwrap();
    let before_2 = resolver::course(&store, 2).unwrap();

    resolver::update_course_topic(&mut store, 2, "Backend".to_string()).unwrap();

    assert_eq!(resolver::course(&store, 1).unwrap(), before_1);
    let after_2 = resolver::course(&store, 2).unwrap();
    assert_eq!(after_2.title, before_2.title);
    assert_eq!(after_2.author, before_2.author);
    assert_eq!(after_2.description, before_2.description);
    assert_eq!(after_2.url, before_2.url);
}

/// addCourse appends exactly one record with the next id and returns the
/// full sequence including it.
#[test]
fn test_add_course_appends_with_next_id() {
    let mut store = CourseStore::seeded();

    let all = resolver::add_course(&mut store, Some(input(Some("X"), Some("Go")))).unwrap();
    assert_eq!(all.len(), 4);
    assert_eq!(all[3].id, 4);
    assert_eq!(all[3].topic.as_deref(), Some("Go"));

    // The new record is reachable by topic afterwards.
    let go = resolver::courses(&store, Some("Go"));
    assert_eq!(go.len(), 1);
    assert_eq!(go[0].id, 4);
    assert_eq!(go[0].title.as_deref(), Some("X"));
}

/// addCourse with an absent payload is absent and does not grow the store.
#[test]
fn test_add_course_absent_payload_is_noop() {
    let mut store = CourseStore::seeded();
    assert!(resolver::add_course(&mut store, None).is_none());
    assert_eq!(store.len(), 3);
}

/// The id counter is decoupled from store contents: an empty store hands
/// out 1, and repeated appends stay strictly increasing.
#[test]
fn test_id_allocation_is_monotonic() {
    let mut store = CourseStore::new();
    let first = resolver::add_course(&mut store, Some(CourseInput::default())).unwrap();
    assert_eq!(first[0].id, 1);

    for expected in 2..=5 {
        let all = resolver::add_course(&mut store, Some(CourseInput::default())).unwrap();
        assert_eq!(all.last().unwrap().id, expected);
    }
}
