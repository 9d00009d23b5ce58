//! Single-select field

use super::ValueRules;
use crate::domain::value_objects::{FieldValue, ValueKind};
use crate::error::{FieldError, FormError, FormResult};

/// Field whose value must be one of an ordered option list
#[derive(Debug, Clone, PartialEq)]
pub struct SelectField<O> {
    options: Vec<O>,
    selected: Option<O>,
}

impl<O: PartialEq + Clone> SelectField<O> {
    pub fn new(options: impl IntoIterator<Item = O>) -> Self {
        Self {
            options: options.into_iter().collect(),
            selected: None,
        }
    }

    /// Pre-select an option. Membership is checked at validation time.
    pub fn with_default(mut self, option: O) -> Self {
        self.selected = Some(option);
        self
    }

    pub fn options(&self) -> &[O] {
        &self.options
    }

    pub fn selected(&self) -> Option<&O> {
        self.selected.as_ref()
    }

    pub fn select(&mut self, option: O) {
        self.selected = Some(option);
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Exact membership of the current selection in the option set
    pub fn selection_allowed(&self) -> bool {
        self.selected
            .as_ref()
            .map_or(true, |selected| self.options.contains(selected))
    }
}

impl ValueRules for SelectField<String> {
    fn kind(&self) -> ValueKind {
        ValueKind::Choice
    }

    fn value(&self) -> Option<FieldValue> {
        self.selected.clone().map(FieldValue::Choice)
    }

    /// No selection, or the blank placeholder choice `""`
    fn is_empty(&self) -> bool {
        self.selected.as_deref().map_or(true, str::is_empty)
    }

    fn check_value(&self) -> Vec<FieldError> {
        if self.selection_allowed() {
            Vec::new()
        } else {
            vec![FieldError::NotAChoice]
        }
    }

    /// Accepts plain text as well as choices, so `"basic".into()` works
    fn set_value(&mut self, value: FieldValue) -> FormResult<()> {
        match value {
            FieldValue::Choice(choice) | FieldValue::Text(choice) => {
                self.selected = Some(choice);
                Ok(())
            }
            other => Err(FormError::ValueKindMismatch {
                expected: ValueKind::Choice,
                found: other.kind(),
            }),
        }
    }

    fn clear_value(&mut self) {
        self.selected = None;
    }
}
