//! OpenSASE Form Engine
//!
//! Typed form definitions, per-field validation and conditional visibility,
//! independent of any rendering or transport layer.
//!
//! ## Architecture
//!
//! - **Value Objects**: identifiers and field values
//! - **Fields**: a closed set of variants (plain text, email, boolean,
//!   single select, file) behind one validation contract
//! - **Aggregate**: [`Form`], the ordered owner of its fields
//!
//! ## Example
//!
//! ```
//! use form_engine::{BooleanField, Field, Form, SelectField, TextField};
//!
//! let mut form = Form::new("Signup");
//! let name = Field::new("Name", TextField::new().with_min_length(2)).required();
//! let newsletter = Field::new("Newsletter", BooleanField::new().with_value(true));
//! let mut topic = Field::new("Topic", SelectField::new(["rust".to_string(), "go".to_string()]));
//! topic.add_conditional(&newsletter, true).unwrap();
//!
//! let topic_id = topic.id().clone();
//! form.add_field(name).unwrap();
//! form.add_field(newsletter).unwrap();
//! form.add_field(topic).unwrap();
//!
//! let report = form.validate();
//! assert!(!report.is_valid());
//! assert_eq!(form.is_visible(&topic_id), Some(true));
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod domain;
pub mod error;

pub use config::FormConfig;
pub use domain::aggregates::{FieldReport, Form, ValidationReport};
pub use domain::fields::{
    BooleanField, Conditional, EmailField, Field, FieldKind, FileField, SelectField, TextField,
    ValueRules, EMAIL_PATTERN,
};
pub use domain::value_objects::{FieldId, FieldValue, FileUpload, FormId, ValueKind};
pub use error::{FieldError, FormError, FormResult};
