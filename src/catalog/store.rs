//! In-memory course store
//!
//! Holds the ordered sequence of `Course` records plus a monotonic id
//! counter. Ids come from the counter, not from the position or value of
//! the last record, so appending to an empty store is well defined and id
//! uniqueness survives any future mutation pattern.
//!
//! Insertion order is preserved; reads and updates never reorder.

use super::course::{Course, CourseInput};

/// The ordered in-memory collection of course records.
pub struct CourseStore {
    courses: Vec<Course>,
    next_id: i64,
}

impl CourseStore {
    /// Create an empty store. The first appended record receives id 1.
    pub fn new() -> Self {
        Self {
            courses: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a store holding the three fixed seed records, ids 1..=3.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        store.append(CourseInput {
            title: Some("The Complete Node.js Developer Course".to_string()),
            author: Some("Andrew Mead, Rob Percival".to_string()),
            description: Some(
                "Learn Node.js by building real-world applications with Node, \
                 Express, MongoDB, Mocha, and more!"
                    .to_string(),
            ),
            topic: Some("Node.js".to_string()),
            url: Some("https://codingthesmartway.com/courses/nodejs/".to_string()),
        });
        store.append(CourseInput {
            title: Some("Node.js, Express & MongoDB Dev to Deployment".to_string()),
            author: Some("Brad Traversy".to_string()),
            description: Some(
                "Learn by example building & deploying real-world Node.js \
                 applications from absolute scratch"
                    .to_string(),
            ),
            topic: Some("Node.js".to_string()),
            url: Some("https://codingthesmartway.com/courses/nodejs-express-mongodb/".to_string()),
        });
        store.append(CourseInput {
            title: Some("JavaScript: Understanding The Weird Parts".to_string()),
            author: Some("Anthony Alicea".to_string()),
            description: Some(
                "An advanced JavaScript course for everyone! Scope, closures, \
                 prototypes, this, build your own framework, and more."
                    .to_string(),
            ),
            topic: Some("JavaScript".to_string()),
            url: Some("https://codingthesmartway.com/courses/understand-javascript/".to_string()),
        });
        store
    }

    /// All records, in insertion order.
    pub fn all(&self) -> &[Course] {
        &self.courses
    }

    /// First record with the given id, if any.
    pub fn find(&self, id: i64) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    /// Mutable access to the first record with the given id, if any.
    pub fn find_mut(&mut self, id: i64) -> Option<&mut Course> {
        self.courses.iter_mut().find(|c| c.id == id)
    }

    /// Append a record built from the payload, assigning the next id.
    /// Returns the stored record.
    pub fn append(&mut self, input: CourseInput) -> &Course {
        let id = self.next_id;
        self.next_id += 1;
        self.courses.push(input.into_course(id));
        self.courses.last().expect("push cannot leave the store empty")
    }

    /// Number of records currently in the store.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

impl Default for CourseStore {
    fn default() -> Self {
        Self::new()
    }
}
