//! Boolean field

use super::ValueRules;
use crate::domain::value_objects::{FieldValue, ValueKind};
use crate::error::{FieldError, FormError, FormResult};

/// Checkbox-style field. Unset reads as `false`, and `false` counts as a
/// value, so the required rule never fires for it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BooleanField {
    value: bool,
}

impl BooleanField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, value: bool) -> Self {
        self.value = value;
        self
    }

    pub fn checked(&self) -> bool {
        self.value
    }

    pub fn set_checked(&mut self, value: bool) {
        self.value = value;
    }
}

impl ValueRules for BooleanField {
    fn kind(&self) -> ValueKind {
        ValueKind::Bool
    }

    fn value(&self) -> Option<FieldValue> {
        Some(FieldValue::Bool(self.value))
    }

    fn is_empty(&self) -> bool {
        false
    }

    fn check_value(&self) -> Vec<FieldError> {
        Vec::new()
    }

    fn set_value(&mut self, value: FieldValue) -> FormResult<()> {
        match value {
            FieldValue::Bool(flag) => {
                self.value = flag;
                Ok(())
            }
            other => Err(FormError::ValueKindMismatch {
                expected: ValueKind::Bool,
                found: other.kind(),
            }),
        }
    }

    fn clear_value(&mut self) {
        self.value = false;
    }
}
