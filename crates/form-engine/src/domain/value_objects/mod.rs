//! Value Objects module
//!
//! Identifiers and the values a field can hold.

pub mod ids;
pub mod value;

pub use ids::{FieldId, FormId};
pub use value::{FieldValue, FileUpload, ValueKind};
