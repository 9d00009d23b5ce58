//! Engine configuration
//!
//! Loaded from TOML:
//!
//! ```toml
//! email_pattern = '^[^@\s]+@corp\.example$'
//! enforce_file_extensions = true
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::fields::{compile_pattern, EmailField, Field, FileField};
use crate::error::{FormError, FormResult};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormConfig {
    /// Replaces the built-in email expression for fields built here
    pub email_pattern: Option<String>,
    /// Check file extensions against each field's allow-list
    pub enforce_file_extensions: bool,
}

impl FormConfig {
    pub fn from_toml_str(content: &str) -> FormResult<Self> {
        let config: Self = toml::from_str(content).map_err(|e| FormError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> FormResult<String> {
        toml::to_string_pretty(self).map_err(|e| FormError::Config(e.to_string()))
    }

    /// Reject settings that would only fail later, at field construction
    pub fn validate(&self) -> FormResult<()> {
        if let Some(pattern) = &self.email_pattern {
            compile_pattern(pattern)
                .map_err(|e| FormError::Config(format!("email_pattern: {e}")))?;
        }
        Ok(())
    }

    /// Email field using the configured pattern, if any
    pub fn email_field(&self, label: impl Into<String>) -> FormResult<Field> {
        let email = match &self.email_pattern {
            Some(pattern) => EmailField::with_email_pattern(pattern)?,
            None => EmailField::new(),
        };
        Ok(Field::new(label, email))
    }

    pub fn file_field(&self, label: impl Into<String>) -> Field {
        let file = FileField::new().with_enforced_extensions(self.enforce_file_extensions);
        Field::new(label, file)
    }
}
