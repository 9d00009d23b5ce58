//! File upload field

use regex::Regex;

use super::{compile_pattern, ValueRules};
use crate::domain::value_objects::{FieldValue, FileUpload, ValueKind};
use crate::error::{FieldError, FormError, FormResult};

/// File field with optional size limit, file-name pattern and extension
/// allow-list.
///
/// The allow-list is only checked once `enforce_extensions` is switched on.
#[derive(Debug, Clone, Default)]
pub struct FileField {
    value: Option<FileUpload>,
    max_size: Option<u64>,
    file_name_pattern: Option<Regex>,
    allowed_extensions: Vec<String>,
    enforce_extensions: bool,
}

impl FileField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, upload: FileUpload) -> Self {
        self.value = Some(upload);
        self
    }

    pub fn with_max_size(mut self, bytes: u64) -> Self {
        self.max_size = Some(bytes);
        self
    }

    pub fn with_file_name_pattern(mut self, pattern: &str) -> FormResult<Self> {
        self.file_name_pattern = Some(compile_pattern(pattern)?);
        Ok(self)
    }

    pub fn with_enforced_extensions(mut self, enforce: bool) -> Self {
        self.enforce_extensions = enforce;
        self
    }

    /// Append to the allow-list. Stored without a leading dot, lower-cased.
    pub fn add_allowed_extension(&mut self, extension: &str) {
        let normalized = extension.trim().trim_start_matches('.').to_lowercase();
        if !normalized.is_empty() && !self.allowed_extensions.contains(&normalized) {
            self.allowed_extensions.push(normalized);
        }
    }

    pub fn allowed_extensions(&self) -> &[String] {
        &self.allowed_extensions
    }

    pub fn set_enforce_extensions(&mut self, enforce: bool) {
        self.enforce_extensions = enforce;
    }

    pub fn enforces_extensions(&self) -> bool {
        self.enforce_extensions
    }

    pub fn max_size(&self) -> Option<u64> {
        self.max_size
    }

    pub fn upload(&self) -> Option<&FileUpload> {
        self.value.as_ref()
    }

    fn extension_error(&self, upload: &FileUpload) -> Option<FieldError> {
        if !self.enforce_extensions || self.allowed_extensions.is_empty() {
            return None;
        }
        match upload.extension() {
            None => Some(FieldError::ExtensionMissing),
            Some(extension) if self.allowed_extensions.contains(&extension) => None,
            Some(extension) => Some(FieldError::ExtensionNotAllowed { extension }),
        }
    }
}

impl ValueRules for FileField {
    fn kind(&self) -> ValueKind {
        ValueKind::File
    }

    fn value(&self) -> Option<FieldValue> {
        self.value.clone().map(FieldValue::File)
    }

    fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    fn check_value(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        let Some(upload) = &self.value else {
            return errors;
        };

        if let Some(pattern) = &self.file_name_pattern {
            if !pattern.is_match(&upload.name) {
                errors.push(FieldError::InvalidFileName);
            }
        }
        if let Some(max) = self.max_size {
            if upload.size > max {
                errors.push(FieldError::FileTooLarge { max });
            }
        }
        errors.extend(self.extension_error(upload));
        errors
    }

    fn set_value(&mut self, value: FieldValue) -> FormResult<()> {
        match value {
            FieldValue::File(upload) => {
                self.value = Some(upload);
                Ok(())
            }
            other => Err(FormError::ValueKindMismatch {
                expected: ValueKind::File,
                found: other.kind(),
            }),
        }
    }

    fn clear_value(&mut self) {
        self.value = None;
    }
}
