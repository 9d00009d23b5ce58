//! Property tests for the validation contract

use form_engine::{
    BooleanField, EmailField, Field, FieldError, FileField, FileUpload, Form, SelectField,
    TextField,
};
use proptest::prelude::*;

fn text_field() -> impl Strategy<Value = Field> {
    (
        proptest::option::of(0usize..8),
        proptest::option::of(0usize..8),
        proptest::option::of("\\PC{0,12}"),
        any::<bool>(),
    )
        .prop_map(|(min, max, value, required)| {
            let mut text = TextField::new();
            text.set_min_length(min);
            text.set_max_length(max);
            if let Some(value) = value {
                text.set_text(value);
            }
            let field = Field::new("text", text);
            if required { field.required() } else { field }
        })
}

fn any_field() -> impl Strategy<Value = Field> {
    prop_oneof![
        text_field(),
        ("[a-z@.]{0,16}", any::<bool>()).prop_map(|(value, required)| {
            let field = Field::new("email", EmailField::new().with_value(value));
            if required { field.required() } else { field }
        }),
        any::<bool>().prop_map(|v| Field::new("flag", BooleanField::new().with_value(v))),
        "[a-d]{0,2}".prop_map(|choice| {
            let select = SelectField::new(["a", "b", "c"].map(String::from));
            Field::new("choice", select.with_default(choice))
        }),
        ("[a-z]{1,6}\\.(pdf|exe)", 0u64..4096).prop_map(|(name, size)| {
            Field::new(
                "file",
                FileField::new().with_max_size(2048).with_value(FileUpload::new(name, size)),
            )
        }),
    ]
}

fn text_rules() -> impl Strategy<Value = TextField> {
    (proptest::option::of(0usize..8), proptest::option::of(0usize..8), any::<bool>()).prop_map(
        |(min, max, digits_only)| {
            let mut text = TextField::new();
            text.set_min_length(min);
            text.set_max_length(max);
            if digits_only {
                text.set_pattern(r"^\d+$").unwrap();
            }
            text
        },
    )
}

fn file_rules() -> impl Strategy<Value = FileField> {
    (proptest::option::of(0u64..4096), any::<bool>(), any::<bool>()).prop_map(
        |(max_size, name_rule, enforce)| {
            let mut file = FileField::new().with_enforced_extensions(enforce);
            if let Some(max) = max_size {
                file = file.with_max_size(max);
            }
            if name_rule {
                file = file.with_file_name_pattern(r"^[a-z]+\.pdf$").unwrap();
            }
            file.add_allowed_extension("pdf");
            file
        },
    )
}

fn select_rules() -> impl Strategy<Value = SelectField<String>> {
    proptest::collection::vec("[a-z]{1,6}", 0..4).prop_map(|options| SelectField::new(options))
}

/// Every variant that can be unset, with arbitrary rules and no value
fn unset_field() -> impl Strategy<Value = Field> {
    prop_oneof![
        text_rules().prop_map(|text| Field::new("text", text)),
        (proptest::option::of(1usize..4), proptest::option::of(4usize..40)).prop_map(|(min, max)| {
            let mut email = EmailField::new();
            email.text_field_mut().set_min_length(min);
            email.text_field_mut().set_max_length(max);
            Field::new("email", email)
        }),
        select_rules().prop_map(|select| Field::new("choice", select)),
        file_rules().prop_map(|file| Field::new("file", file)),
    ]
}

/// String-valued variants holding `""`
fn blank_string_field() -> impl Strategy<Value = Field> {
    prop_oneof![
        text_rules().prop_map(|text| Field::new("text", text)),
        Just(Field::new("email", EmailField::new())),
        select_rules().prop_map(|select| Field::new("choice", select)),
    ]
    .prop_map(|mut field| {
        field.set_value("").unwrap();
        field
    })
}

proptest! {
    #[test]
    fn validate_is_idempotent(mut field in any_field()) {
        let first = field.validate().to_vec();
        let second = field.validate().to_vec();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn required_unset_field_reports_only_empty(field in unset_field()) {
        let mut field = field.required();
        prop_assert_eq!(field.validate(), &[FieldError::Empty][..]);
    }

    #[test]
    fn required_blank_string_reports_only_empty(field in blank_string_field()) {
        let mut field = field.required();
        prop_assert_eq!(field.validate(), &[FieldError::Empty][..]);
    }

    #[test]
    fn optional_blank_string_is_valid(field in blank_string_field()) {
        let mut field = field;
        prop_assert!(field.validate().is_empty());
    }

    #[test]
    fn required_boolean_never_empty(value in any::<bool>()) {
        let mut field = Field::new("flag", BooleanField::new().with_value(value)).required();
        prop_assert!(!field.validate().contains(&FieldError::Empty));
    }

    #[test]
    fn form_valid_iff_all_fields_clean(fields in proptest::collection::vec(any_field(), 0..6)) {
        let mut form = Form::new("generated");
        for field in fields {
            form.add_field(field).unwrap();
        }
        let report = form.validate();
        let all_clean = form.fields().iter().all(|f| f.errors().is_empty());
        prop_assert_eq!(form.is_valid(), all_clean);
        prop_assert_eq!(report.is_valid(), all_clean);
    }
}
