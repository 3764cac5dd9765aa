//! Served schema: a programmatic description of the API surface
//!
//! Describes the `Course` entity, the `CourseInput` payload, and the five
//! operations with their argument and result shapes. The description is
//! data, not behavior: it is what `GET /api/v1/schema` serves and what
//! `coursedb schema` prints. Dispatch does not consult it.

mod types;

pub use types::{
    ApiSchema, ArgDef, EntityDef, FieldDef, FieldType, OperationDef, OperationKind, ResultShape,
};
