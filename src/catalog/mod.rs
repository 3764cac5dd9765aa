//! Course catalog: the record types and the in-memory store
//!
//! The catalog is the system's sole state. It is an owned value injected
//! into the layers above it, never a process-wide global, so tests can
//! build isolated stores per case.

mod course;
mod store;

pub use course::{Course, CourseInput};
pub use store::CourseStore;
