//! Schema type definitions
//!
//! Supported field types:
//! - int: 64-bit signed integer
//! - text: UTF-8 string

use serde::{Deserialize, Serialize};

/// Supported field types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// 64-bit signed integer
    Int,
    /// UTF-8 string
    Text,
}

/// Field of an entity or input payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Whether the field may be absent (serialized as JSON null)
    pub nullable: bool,
}

impl FieldDef {
    /// A field that may be absent
    pub fn nullable(name: &str, field_type: FieldType) -> Self {
        Self {
            name: name.to_string(),
            field_type,
            nullable: true,
        }
    }

    /// A field that is always present
    pub fn required(name: &str, field_type: FieldType) -> Self {
        Self {
            name: name.to_string(),
            field_type,
            nullable: false,
        }
    }
}

/// Named collection of fields (an entity or an input payload)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityDef {
    pub name: String,
    pub fields: Vec<FieldDef>,
}

/// Argument of an operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgDef {
    pub name: String,
    #[serde(rename = "type")]
    pub arg_type: String,
    pub required: bool,
}

impl ArgDef {
    pub fn required(name: &str, arg_type: &str) -> Self {
        Self {
            name: name.to_string(),
            arg_type: arg_type.to_string(),
            required: true,
        }
    }

    pub fn optional(name: &str, arg_type: &str) -> Self {
        Self {
            name: name.to_string(),
            arg_type: arg_type.to_string(),
            required: false,
        }
    }
}

/// Whether an operation reads or writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Query,
    Mutation,
}

/// Shape of an operation result. Every result is nullable: `null` is the
/// designated absent signal, distinct from an empty list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultShape {
    /// A single Course, or null
    Entity,
    /// A list of Course, or null
    EntityList,
}

/// One named operation with its argument and result shapes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationDef {
    pub name: String,
    pub kind: OperationKind,
    pub args: Vec<ArgDef>,
    pub result: ResultShape,
}

/// The complete served schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSchema {
    pub entity: EntityDef,
    pub input: EntityDef,
    pub operations: Vec<OperationDef>,
}

impl ApiSchema {
    /// The course-catalog schema served by this process.
    pub fn catalog() -> Self {
        let entity = EntityDef {
            name: "Course".to_string(),
            fields: vec![
                FieldDef::required("id", FieldType::Int),
                FieldDef::nullable("title", FieldType::Text),
                FieldDef::nullable("author", FieldType::Text),
                FieldDef::nullable("description", FieldType::Text),
                FieldDef::nullable("topic", FieldType::Text),
                FieldDef::nullable("url", FieldType::Text),
            ],
        };

        // Same five text fields, no id accepted from the caller.
        let input = EntityDef {
            name: "CourseInput".to_string(),
            fields: vec![
                FieldDef::nullable("title", FieldType::Text),
                FieldDef::nullable("author", FieldType::Text),
                FieldDef::nullable("description", FieldType::Text),
                FieldDef::nullable("topic", FieldType::Text),
                FieldDef::nullable("url", FieldType::Text),
            ],
        };

        let operations = vec![
            OperationDef {
                name: "course".to_string(),
                kind: OperationKind::Query,
                args: vec![ArgDef::required("id", "int")],
                result: ResultShape::Entity,
            },
            OperationDef {
                name: "coursesByPartialTitle".to_string(),
                kind: OperationKind::Query,
                args: vec![ArgDef::optional("partialTitle", "text")],
                result: ResultShape::EntityList,
            },
            OperationDef {
                name: "courses".to_string(),
                kind: OperationKind::Query,
                args: vec![ArgDef::optional("topic", "text")],
                result: ResultShape::EntityList,
            },
            OperationDef {
                name: "updateCourseTopic".to_string(),
                kind: OperationKind::Mutation,
                args: vec![
                    ArgDef::required("id", "int"),
                    ArgDef::required("topic", "text"),
                ],
                result: ResultShape::Entity,
            },
            OperationDef {
                name: "addCourse".to_string(),
                kind: OperationKind::Mutation,
                args: vec![ArgDef::optional("course", "CourseInput")],
                result: ResultShape::EntityList,
            },
        ];

        Self {
            entity,
            input,
            operations,
        }
    }

    /// Serialize to pretty JSON for `coursedb schema`.
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).expect("ApiSchema serialization cannot fail")
    }
}
