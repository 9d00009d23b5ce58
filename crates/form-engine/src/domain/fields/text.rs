//! Text and email fields

use regex::Regex;
use std::sync::OnceLock;

use super::{compile_pattern, ValueRules};
use crate::domain::value_objects::{FieldValue, ValueKind};
use crate::error::{FieldError, FormError, FormResult};

/// Built-in email-shaped expression used by [`EmailField::new`]
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

fn builtin_email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("built-in email pattern compiles"))
}

/// Plain text field with optional length bounds and pattern
#[derive(Debug, Clone, Default)]
pub struct TextField {
    value: Option<String>,
    min_length: Option<usize>,
    max_length: Option<usize>,
    pattern: Option<Regex>,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Set the pattern a present value must match
    pub fn with_pattern(mut self, pattern: &str) -> FormResult<Self> {
        self.set_pattern(pattern)?;
        Ok(self)
    }

    pub fn set_pattern(&mut self, pattern: &str) -> FormResult<()> {
        self.pattern = Some(compile_pattern(pattern)?);
        Ok(())
    }

    pub fn clear_pattern(&mut self) {
        self.pattern = None;
    }

    pub fn set_min_length(&mut self, min: Option<usize>) {
        self.min_length = min;
    }

    pub fn set_max_length(&mut self, max: Option<usize>) {
        self.max_length = max;
    }

    pub fn text(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn set_text(&mut self, value: impl Into<String>) {
        self.value = Some(value.into());
    }

    pub fn min_length(&self) -> Option<usize> {
        self.min_length
    }

    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_ref().map(Regex::as_str)
    }
}

impl ValueRules for TextField {
    fn kind(&self) -> ValueKind {
        ValueKind::Text
    }

    fn value(&self) -> Option<FieldValue> {
        self.value.clone().map(FieldValue::Text)
    }

    fn is_empty(&self) -> bool {
        self.value.as_deref().map_or(true, str::is_empty)
    }

    fn check_value(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        let Some(value) = self.value.as_deref() else {
            return errors;
        };

        let len = value.chars().count();
        if let Some(min) = self.min_length {
            if len < min {
                errors.push(FieldError::TooShort { min });
            }
        }
        if let Some(max) = self.max_length {
            if len > max {
                errors.push(FieldError::TooLong { max });
            }
        }
        if let Some(pattern) = &self.pattern {
            if !pattern.is_match(value) {
                errors.push(FieldError::InvalidFormat);
            }
        }
        errors
    }

    fn set_value(&mut self, value: FieldValue) -> FormResult<()> {
        match value {
            FieldValue::Text(text) => {
                self.value = Some(text);
                Ok(())
            }
            other => Err(FormError::ValueKindMismatch {
                expected: ValueKind::Text,
                found: other.kind(),
            }),
        }
    }

    fn clear_value(&mut self) {
        self.value = None;
    }
}

/// Text field whose pattern starts out as [`EMAIL_PATTERN`]
#[derive(Debug, Clone)]
pub struct EmailField {
    inner: TextField,
}

impl EmailField {
    pub fn new() -> Self {
        Self::with_regex(builtin_email_regex().clone())
    }

    /// Email field using a caller-chosen expression instead of the built-in one
    pub fn with_email_pattern(pattern: &str) -> FormResult<Self> {
        Ok(Self::with_regex(compile_pattern(pattern)?))
    }

    fn with_regex(pattern: Regex) -> Self {
        Self {
            inner: TextField {
                pattern: Some(pattern),
                ..TextField::default()
            },
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.inner = self.inner.with_value(value);
        self
    }

    pub fn with_min_length(mut self, min: usize) -> Self {
        self.inner = self.inner.with_min_length(min);
        self
    }

    pub fn with_max_length(mut self, max: usize) -> Self {
        self.inner = self.inner.with_max_length(max);
        self
    }

    pub fn with_pattern(mut self, pattern: &str) -> FormResult<Self> {
        self.inner.set_pattern(pattern)?;
        Ok(self)
    }

    pub fn text_field(&self) -> &TextField {
        &self.inner
    }

    pub fn text_field_mut(&mut self) -> &mut TextField {
        &mut self.inner
    }
}

impl Default for EmailField {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueRules for EmailField {
    fn kind(&self) -> ValueKind {
        self.inner.kind()
    }

    fn value(&self) -> Option<FieldValue> {
        self.inner.value()
    }

    fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    fn check_value(&self) -> Vec<FieldError> {
        self.inner.check_value()
    }

    fn set_value(&mut self, value: FieldValue) -> FormResult<()> {
        self.inner.set_value(value)
    }

    fn clear_value(&mut self) {
        self.inner.clear_value();
    }
}
