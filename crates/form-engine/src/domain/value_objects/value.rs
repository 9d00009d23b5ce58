//! Field values

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of value a field accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Text,
    Bool,
    Choice,
    File,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::Bool => "bool",
            Self::Choice => "choice",
            Self::File => "file",
        };
        f.write_str(name)
    }
}

/// An uploaded file as seen by validation: its name and size in bytes
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileUpload {
    pub name: String,
    pub size: u64,
}

impl FileUpload {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self { name: name.into(), size }
    }

    /// Lower-cased text after the last `.`, if the name has one
    pub fn extension(&self) -> Option<String> {
        let (stem, ext) = self.name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext.to_lowercase())
    }
}

/// A field's current value
///
/// Equality is the natural equality of the wrapped type; conditional
/// visibility compares with it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    Text(String),
    Bool(bool),
    Choice(String),
    File(FileUpload),
}

impl FieldValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Text(_) => ValueKind::Text,
            Self::Bool(_) => ValueKind::Bool,
            Self::Choice(_) => ValueKind::Choice,
            Self::File(_) => ValueKind::File,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<FileUpload> for FieldValue {
    fn from(value: FileUpload) -> Self {
        Self::File(value)
    }
}
