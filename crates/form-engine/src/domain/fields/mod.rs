//! Fields
//!
//! A [`Field`] carries the state every field shares (label, required flag,
//! latest errors, owning form, conditional link) and a [`FieldKind`] holding
//! the variant's value and rules.
//!
//! # Validation
//! 1. Required and empty: [`FieldError::Empty`]
//! 2. Value present: the variant's [`ValueRules::check_value`]
//!
//! Emptiness is variant-specific: unset or `""` for text and selects,
//! unset for files, never for booleans.

pub mod boolean;
pub mod file;
pub mod select;
pub mod text;

pub use boolean::BooleanField;
pub use file::FileField;
pub use select::SelectField;
pub use text::{EmailField, TextField, EMAIL_PATTERN};

use regex::Regex;
use tracing::{debug, trace};

use crate::domain::aggregates::Form;
use crate::domain::value_objects::{FieldId, FieldValue, FormId, ValueKind};
use crate::error::{FieldError, FormError, FormResult};

pub(crate) fn compile_pattern(pattern: &str) -> FormResult<Regex> {
    Regex::new(pattern).map_err(|source| FormError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Value storage and variant-specific rules
pub trait ValueRules {
    /// Kind of value this variant holds
    fn kind(&self) -> ValueKind;

    /// Current value, `None` when unset
    fn value(&self) -> Option<FieldValue>;

    /// Whether the value counts as missing for the required rule
    fn is_empty(&self) -> bool;

    /// Variant rules. Only consulted when the value is not empty.
    fn check_value(&self) -> Vec<FieldError>;

    fn set_value(&mut self, value: FieldValue) -> FormResult<()>;

    fn clear_value(&mut self);
}

/// The closed set of field variants
#[derive(Debug, Clone)]
pub enum FieldKind {
    PlainText(TextField),
    Email(EmailField),
    Boolean(BooleanField),
    SingleSelect(SelectField<String>),
    File(FileField),
}

impl FieldKind {
    fn rules(&self) -> &dyn ValueRules {
        match self {
            Self::PlainText(field) => field,
            Self::Email(field) => field,
            Self::Boolean(field) => field,
            Self::SingleSelect(field) => field,
            Self::File(field) => field,
        }
    }

    fn rules_mut(&mut self) -> &mut dyn ValueRules {
        match self {
            Self::PlainText(field) => field,
            Self::Email(field) => field,
            Self::Boolean(field) => field,
            Self::SingleSelect(field) => field,
            Self::File(field) => field,
        }
    }

    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::PlainText(_) => "plain_text",
            Self::Email(_) => "email",
            Self::Boolean(_) => "boolean",
            Self::SingleSelect(_) => "single_select",
            Self::File(_) => "file",
        }
    }

    /// Normalize a value into this kind, or report the mismatch
    fn coerce(&self, value: FieldValue) -> FormResult<FieldValue> {
        let expected = self.kind();
        match (expected, value) {
            (ValueKind::Choice, FieldValue::Text(text)) => Ok(FieldValue::Choice(text)),
            (expected, value) if value.kind() == expected => Ok(value),
            (expected, value) => Err(FormError::ValueKindMismatch {
                expected,
                found: value.kind(),
            }),
        }
    }
}

impl ValueRules for FieldKind {
    fn kind(&self) -> ValueKind {
        self.rules().kind()
    }

    fn value(&self) -> Option<FieldValue> {
        self.rules().value()
    }

    fn is_empty(&self) -> bool {
        self.rules().is_empty()
    }

    fn check_value(&self) -> Vec<FieldError> {
        self.rules().check_value()
    }

    fn set_value(&mut self, value: FieldValue) -> FormResult<()> {
        self.rules_mut().set_value(value)
    }

    fn clear_value(&mut self) {
        self.rules_mut().clear_value();
    }
}

impl From<TextField> for FieldKind {
    fn from(field: TextField) -> Self {
        Self::PlainText(field)
    }
}

impl From<EmailField> for FieldKind {
    fn from(field: EmailField) -> Self {
        Self::Email(field)
    }
}

impl From<BooleanField> for FieldKind {
    fn from(field: BooleanField) -> Self {
        Self::Boolean(field)
    }
}

impl From<SelectField<String>> for FieldKind {
    fn from(field: SelectField<String>) -> Self {
        Self::SingleSelect(field)
    }
}

impl From<FileField> for FieldKind {
    fn from(field: FileField) -> Self {
        Self::File(field)
    }
}

/// Visibility link: shown only while `source` holds `expected`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conditional {
    pub source: FieldId,
    pub expected: FieldValue,
}

impl Conditional {
    /// Evaluate against the source field's current value
    pub fn is_met_by(&self, source: &Field) -> bool {
        source.value().as_ref() == Some(&self.expected)
    }
}

/// A typed input slot within a form
#[derive(Debug, Clone)]
pub struct Field {
    id: FieldId,
    label: String,
    required: bool,
    errors: Vec<FieldError>,
    form: Option<FormId>,
    conditional: Option<Conditional>,
    kind: FieldKind,
}

impl Field {
    pub fn new(label: impl Into<String>, kind: impl Into<FieldKind>) -> Self {
        Self::with_id(FieldId::new(), label, kind)
    }

    pub fn with_id(id: FieldId, label: impl Into<String>, kind: impl Into<FieldKind>) -> Self {
        Self {
            id,
            label: label.into(),
            required: false,
            errors: Vec::new(),
            form: None,
            conditional: None,
            kind: kind.into(),
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    // =========================================================================
    // Getters
    // =========================================================================

    pub fn id(&self) -> &FieldId { &self.id }
    pub fn label(&self) -> &str { &self.label }
    pub fn is_required(&self) -> bool { self.required }
    pub fn errors(&self) -> &[FieldError] { &self.errors }
    pub fn form_id(&self) -> Option<&FormId> { self.form.as_ref() }
    pub fn conditional(&self) -> Option<&Conditional> { self.conditional.as_ref() }
    pub fn kind(&self) -> &FieldKind { &self.kind }
    pub fn kind_mut(&mut self) -> &mut FieldKind { &mut self.kind }
    pub fn value(&self) -> Option<FieldValue> { self.kind.value() }

    pub fn set_required(&mut self, required: bool) {
        self.required = required;
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Replace the current value. The value must fit the field's kind.
    pub fn set_value(&mut self, value: impl Into<FieldValue>) -> FormResult<()> {
        let value = self.kind.coerce(value.into())?;
        self.kind.set_value(value)
    }

    pub fn clear_value(&mut self) {
        self.kind.clear_value();
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Compute this field's errors for its current value without storing them
    pub fn check(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.kind.is_empty() {
            if self.required {
                errors.push(FieldError::Empty);
            }
        } else {
            errors.extend(self.kind.check_value());
        }
        errors
    }

    /// Recompute and store errors, replacing those of the previous run
    pub fn validate(&mut self) -> &[FieldError] {
        self.errors = self.check();
        debug!(
            field_id = %self.id,
            kind = self.kind.name(),
            error_count = self.errors.len(),
            "field validated"
        );
        &self.errors
    }

    /// Whether the last validation run produced no errors
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    // =========================================================================
    // Conditional visibility
    // =========================================================================

    /// Show this field only while `source` holds `expected`.
    ///
    /// Replaces any previous link. The source is remembered by identifier and
    /// resolved in whatever form [`Field::visible`] is asked about.
    pub fn add_conditional(
        &mut self,
        source: &Field,
        expected: impl Into<FieldValue>,
    ) -> FormResult<()> {
        let expected = source.kind.coerce(expected.into())?;
        self.conditional = Some(Conditional {
            source: source.id.clone(),
            expected,
        });
        Ok(())
    }

    pub fn remove_conditional(&mut self) -> Option<Conditional> {
        self.conditional.take()
    }

    /// Whether this field is shown, looking up its conditional source in `scope`.
    ///
    /// Evaluated fresh on every call and only one level deep: a hidden
    /// source does not hide its dependents. A source missing from `scope`
    /// makes the field hidden.
    pub fn visible(&self, scope: &Form) -> bool {
        let Some(conditional) = &self.conditional else {
            return true;
        };
        match scope.field(&conditional.source) {
            Some(source) => {
                let shown = conditional.is_met_by(source);
                trace!(field_id = %self.id, source_id = %source.id, shown, "visibility resolved");
                shown
            }
            None => {
                debug!(
                    field_id = %self.id,
                    source_id = %conditional.source,
                    form_id = %scope.id(),
                    "conditional source not found in form"
                );
                false
            }
        }
    }

    pub(crate) fn attach(&mut self, form: &FormId) -> FormResult<()> {
        match &self.form {
            Some(existing) if existing != form => Err(FormError::AlreadyAttached {
                field: self.id.clone(),
                form: existing.clone(),
            }),
            _ => {
                self.form = Some(form.clone());
                Ok(())
            }
        }
    }

    pub(crate) fn set_conditional(&mut self, conditional: Conditional) {
        self.conditional = Some(conditional);
    }

    pub(crate) fn coerce_value(&self, value: FieldValue) -> FormResult<FieldValue> {
        self.kind.coerce(value)
    }
}
