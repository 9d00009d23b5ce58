//! Error types for the form engine
//!
//! Validation failures are plain data ([`FieldError`]) accumulated on a
//! field. Caller mistakes such as a bad regex or an out-of-range insert are
//! reported through [`FormError`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::value_objects::{FieldId, FormId, ValueKind};

/// A single validation diagnostic attached to a field
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum FieldError {
    /// Required field has no value
    #[error("value cannot be empty")]
    Empty,

    /// Text shorter than the configured minimum
    #[error("value must be at least {min} characters")]
    TooShort { min: usize },

    /// Text longer than the configured maximum
    #[error("value must be at most {max} characters")]
    TooLong { max: usize },

    /// Text does not match the configured pattern
    #[error("invalid format")]
    InvalidFormat,

    /// Selected value is not one of the options
    #[error("value not in allowed choices")]
    NotAChoice,

    /// File name does not match the configured pattern
    #[error("invalid file name")]
    InvalidFileName,

    /// File exceeds the configured size limit
    #[error("file size must not exceed {max} bytes")]
    FileTooLarge { max: u64 },

    /// File extension missing from the allow-list
    #[error("file extension not allowed: {extension}")]
    ExtensionNotAllowed { extension: String },

    /// File name has no extension while an allow-list is enforced
    #[error("file has no extension")]
    ExtensionMissing,
}

/// Form engine error type
#[derive(Error, Debug)]
pub enum FormError {
    /// Insert position past the end of the field sequence
    #[error("index {index} out of bounds for form with {len} fields")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Regular expression failed to compile
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Value of the wrong kind for the field
    #[error("value kind mismatch: expected {expected}, found {found}")]
    ValueKindMismatch { expected: ValueKind, found: ValueKind },

    /// Field identifier already present in the form
    #[error("duplicate field: {0}")]
    DuplicateField(FieldId),

    /// Field identifier not present in the form
    #[error("field not found: {0}")]
    FieldNotFound(FieldId),

    /// Field already belongs to another form
    #[error("field {field} already attached to form {form}")]
    AlreadyAttached { field: FieldId, form: FormId },

    /// Configuration error
    #[error("config error: {0}")]
    Config(String),
}

/// Result type for the form engine
pub type FormResult<T> = Result<T, FormError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_messages() {
        assert_eq!(FieldError::Empty.to_string(), "value cannot be empty");
        assert_eq!(
            FieldError::TooShort { min: 5 }.to_string(),
            "value must be at least 5 characters"
        );
        assert_eq!(
            FieldError::TooLong { max: 5 }.to_string(),
            "value must be at most 5 characters"
        );
        assert_eq!(FieldError::InvalidFormat.to_string(), "invalid format");
        assert_eq!(FieldError::NotAChoice.to_string(), "value not in allowed choices");
        assert_eq!(FieldError::InvalidFileName.to_string(), "invalid file name");
        assert_eq!(
            FieldError::FileTooLarge { max: 1024 }.to_string(),
            "file size must not exceed 1024 bytes"
        );
    }

    #[test]
    fn test_field_error_serializes_with_code() {
        let json = serde_json::to_value(FieldError::TooLong { max: 3 }).unwrap();
        assert_eq!(json["code"], "too_long");
        assert_eq!(json["max"], 3);
    }

    #[test]
    fn test_index_error_message() {
        let err = FormError::IndexOutOfBounds { index: 4, len: 2 };
        assert_eq!(err.to_string(), "index 4 out of bounds for form with 2 fields");
    }
}
