//! Identifier value objects
//!
//! Identifiers are opaque. A host that owns ID generation passes its own
//! through `from_string`; otherwise `new` mints a UUIDv4.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Generate a fresh identifier
            pub fn new() -> Self {
                Self(uuid::Uuid::new_v4().to_string())
            }

            /// Wrap a caller-supplied identifier
            pub fn from_string(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

opaque_id!(
    /// Form identifier (Value Object)
    FormId
);

opaque_id!(
    /// Field identifier (Value Object)
    FieldId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique() {
        assert_ne!(FieldId::new(), FieldId::new());
        assert_ne!(FormId::new(), FormId::new());
    }

    #[test]
    fn test_caller_supplied_id() {
        let id = FieldId::from_string("email");
        assert_eq!(id.as_str(), "email");
        assert_eq!(id.to_string(), "email");
        assert_eq!(id, FieldId::from_string("email"));
    }

    #[test]
    fn test_id_serializes_transparently() {
        let json = serde_json::to_string(&FormId::from_string("signup")).unwrap();
        assert_eq!(json, "\"signup\"");
    }
}
