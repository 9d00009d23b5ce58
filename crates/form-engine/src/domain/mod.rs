//! Form domain model
//!
//! - **Value Objects**: FormId, FieldId, FieldValue, FileUpload
//! - **Fields**: the closed set of field variants and the shared Field state
//! - **Aggregates**: Form, the owner of an ordered field sequence

pub mod aggregates;
pub mod fields;
pub mod value_objects;
