//! Aggregates module

pub mod form;

pub use form::{FieldReport, Form, ValidationReport};
