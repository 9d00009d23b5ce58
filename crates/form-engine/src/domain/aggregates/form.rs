//! Form Aggregate
//!
//! Owns an ordered sequence of fields. Every field in the sequence points
//! back at this form through its `form_id`; a field's order is its position
//! in the sequence and is never stored.

use serde::Serialize;
use tracing::debug;

use crate::domain::fields::{Conditional, Field};
use crate::domain::value_objects::{FieldId, FieldValue, FormId};
use crate::error::{FieldError, FormError, FormResult};

/// Form aggregate root
///
/// # Invariants
/// - Field identifiers are unique within the form
/// - Every field's back-reference names this form
/// - Insertion order is preserved
#[derive(Debug, Clone)]
pub struct Form {
    id: FormId,
    title: String,
    description: Option<String>,
    fields: Vec<Field>,
}

impl Form {
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_id(FormId::new(), title)
    }

    pub fn with_id(id: FormId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: None,
            fields: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn id(&self) -> &FormId { &self.id }
    pub fn title(&self) -> &str { &self.title }
    pub fn description(&self) -> Option<&str> { self.description.as_deref() }
    pub fn fields(&self) -> &[Field] { &self.fields }
    pub fn len(&self) -> usize { self.fields.len() }
    pub fn is_empty(&self) -> bool { self.fields.is_empty() }

    /// Append a field
    pub fn add_field(&mut self, field: Field) -> FormResult<()> {
        let index = self.fields.len();
        self.add_field_at(index, field)
    }

    /// Insert a field at `index`, shifting later fields back by one.
    ///
    /// `index` may equal the current length, which appends. A rejected field
    /// is dropped; call [`Form::can_insert`] first to keep it on failure.
    pub fn add_field_at(&mut self, index: usize, mut field: Field) -> FormResult<()> {
        self.can_insert(index, &field)?;
        field.attach(&self.id)?;

        debug!(form_id = %self.id, field_id = %field.id(), index, "field added");
        self.fields.insert(index, field);
        Ok(())
    }

    /// Check whether `add_field_at(index, field)` would succeed, without
    /// taking the field
    pub fn can_insert(&self, index: usize, field: &Field) -> FormResult<()> {
        if index > self.fields.len() {
            return Err(FormError::IndexOutOfBounds {
                index,
                len: self.fields.len(),
            });
        }
        if self.field(field.id()).is_some() {
            return Err(FormError::DuplicateField(field.id().clone()));
        }
        match field.form_id() {
            Some(owner) if owner != &self.id => Err(FormError::AlreadyAttached {
                field: field.id().clone(),
                form: owner.clone(),
            }),
            _ => Ok(()),
        }
    }

    pub fn field(&self, id: &FieldId) -> Option<&Field> {
        self.fields.iter().find(|f| f.id() == id)
    }

    pub fn field_mut(&mut self, id: &FieldId) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.id() == id)
    }

    /// Position of the field in this form
    pub fn order_of(&self, id: &FieldId) -> Option<usize> {
        self.fields.iter().position(|f| f.id() == id)
    }

    /// Show `dependent` only while `source` holds `expected`
    pub fn add_conditional(
        &mut self,
        dependent: &FieldId,
        source: &FieldId,
        expected: impl Into<FieldValue>,
    ) -> FormResult<()> {
        let source_field = self
            .field(source)
            .ok_or_else(|| FormError::FieldNotFound(source.clone()))?;
        let expected = source_field.coerce_value(expected.into())?;
        let source = source_field.id().clone();

        let field = self
            .field_mut(dependent)
            .ok_or_else(|| FormError::FieldNotFound(dependent.clone()))?;
        field.set_conditional(Conditional { source, expected });
        Ok(())
    }

    /// Visibility of a field of this form, resolved against this form
    pub fn is_visible(&self, id: &FieldId) -> Option<bool> {
        self.field(id).map(|f| f.visible(self))
    }

    pub fn visible_fields(&self) -> impl Iterator<Item = &Field> + '_ {
        self.fields.iter().filter(move |f| f.visible(self))
    }

    /// Validate every field in sequence order
    pub fn validate(&mut self) -> ValidationReport {
        let results: Vec<FieldReport> = self
            .fields
            .iter_mut()
            .map(|field| FieldReport {
                field_id: field.id().clone(),
                errors: field.validate().to_vec(),
            })
            .collect();

        let report = ValidationReport {
            form_id: self.id.clone(),
            fields: results,
        };
        debug!(
            form_id = %self.id,
            field_count = self.fields.len(),
            error_count = report.error_count(),
            "form validated"
        );
        report
    }

    /// Whether every field's last validation run was clean. Hidden fields count.
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(Field::is_valid)
    }
}

/// Errors of one field from a validation pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldReport {
    pub field_id: FieldId,
    pub errors: Vec<FieldError>,
}

/// Outcome of [`Form::validate`], one entry per field in form order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub form_id: FormId,
    pub fields: Vec<FieldReport>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(|f| f.errors.is_empty())
    }

    pub fn error_count(&self) -> usize {
        self.fields.iter().map(|f| f.errors.len()).sum()
    }

    pub fn errors_for(&self, id: &FieldId) -> Option<&[FieldError]> {
        self.fields
            .iter()
            .find(|f| &f.field_id == id)
            .map(|f| f.errors.as_slice())
    }

    /// Fields that reported at least one error
    pub fn invalid_fields(&self) -> impl Iterator<Item = &FieldReport> {
        self.fields.iter().filter(|f| !f.errors.is_empty())
    }
}
