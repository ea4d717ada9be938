//! Form schemas for creating and updating posts and categories.
//!
//! Two rule sets exist for each form. [`PostForm`] and [`CategoryForm`] are
//! the canonical ones used by the admin forms. [`LegacyPostForm`] and
//! [`LegacyCategoryForm`] keep the older, divergent declaration (different
//! required/optional rules for slug, category_id, is_published and
//! parent_id). They are separate types on purpose so that callers pick one
//! explicitly.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;
pub use validator::Validate;
use validator::{ValidationError, ValidationErrors};

mod category;
mod post;

pub use self::category::{CategoryForm, CategorySchema, LegacyCategoryForm};
pub use self::post::{LegacyPostForm, PostForm, PostSchema};

/// Field-name to messages map produced by a failed validation.
///
/// Ordered by field name so output is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    /// Key used for errors that belong to the whole form rather than one field.
    pub const FORM: &'static str = "_form";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// First message recorded for `field`.
    pub fn first(&self, field: &str) -> Option<&str> {
        self.get(field)
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }

    pub fn contains(&self, field: &str, message: &str) -> bool {
        self.get(field)
            .map(|messages| messages.iter().any(|m| m == message))
            .unwrap_or(false)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in self.iter() {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{}: {}", field, message)?;
                first = false;
            }
        }
        Ok(())
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut out = FieldErrors::new();
        for (field, field_errors) in errors.field_errors() {
            for error in field_errors.iter() {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                out.add(&field, message);
            }
        }
        out
    }
}

/// Runs a form's validators and collects every failing field.
pub fn check<T: Validate>(form: &T) -> Result<(), FieldErrors> {
    form.validate().map_err(FieldErrors::from)
}

/// JSON type a form field must have.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Integer,
    Boolean,
}

impl FieldKind {
    fn name(self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Integer => "integer",
            FieldKind::Boolean => "boolean",
        }
    }

    fn accepts(self, value: &serde_json::Value) -> bool {
        match self {
            FieldKind::String => value.is_string(),
            FieldKind::Integer => value.is_i64(),
            FieldKind::Boolean => value.is_boolean(),
        }
    }
}

/// Shape of one form field: its JSON type, whether the key must be present
/// and whether `null` is accepted.
#[derive(Clone, Copy, Debug)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub nullable: bool,
}

impl FieldSpec {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
            nullable: false,
        }
    }

    /// May be absent or `null`.
    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            nullable: true,
        }
    }

    /// May be absent (a default applies) but not `null`.
    pub const fn defaulted(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            nullable: false,
        }
    }
}

/// Declares the JSON shape of a form so raw input can be checked field by
/// field before it is deserialized.
pub trait FormShape {
    const FIELDS: &'static [FieldSpec];
}

pub const REQUIRED: &str = "Required";

fn json_type(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Checks every declared field of `value` and records one entry per missing
/// or mistyped field. Unknown keys are ignored.
pub fn check_shape<T: FormShape>(value: &serde_json::Value) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    let object = match value.as_object() {
        Some(object) => object,
        None => {
            errors.add(
                FieldErrors::FORM,
                format!("Expected object, received {}", json_type(value)),
            );
            return Err(errors);
        }
    };

    for spec in T::FIELDS {
        match object.get(spec.name) {
            None if spec.required => errors.add(spec.name, REQUIRED),
            None => {}
            Some(serde_json::Value::Null) if spec.nullable => {}
            Some(field) if !spec.kind.accepts(field) => errors.add(
                spec.name,
                format!(
                    "Expected {}, received {}",
                    spec.kind.name(),
                    json_type(field)
                ),
            ),
            Some(_) => {}
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Checks the shape of raw form input, deserializes it and runs the form's
/// validators. Missing and mistyped fields are reported under their own
/// names; [`FieldErrors::FORM`] is only used when the input is not an object.
pub fn parse_form<T>(value: serde_json::Value) -> Result<T, FieldErrors>
where
    T: DeserializeOwned + Validate + FormShape,
{
    check_shape::<T>(&value)?;
    let form: T = serde_json::from_value(value).map_err(|e| {
        let mut errors = FieldErrors::new();
        errors.add(FieldErrors::FORM, e.to_string());
        errors
    })?;
    check(&form)?;
    Ok(form)
}

/// Length check with separate messages for empty and oversized input.
/// Counts characters, not bytes.
pub(crate) fn check_length(
    value: &str,
    max: usize,
    empty: &'static str,
    too_long: &'static str,
) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len == 0 {
        return Err(message_error("length", empty));
    }
    if len > max {
        return Err(message_error("length", too_long));
    }
    Ok(())
}

pub(crate) fn message_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

/// Maps an empty optional string to `None`.
pub(crate) fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_errors_collects_per_field() {
        let mut errors = FieldErrors::new();
        errors.add("title", "Заголовок обов'язковий");
        errors.add("content_raw", "Контент обов'язковий");
        errors.add("title", "second");
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.first("title"), Some("Заголовок обов'язковий"));
        assert_eq!(errors.get("title").unwrap().len(), 2);
        assert!(errors.contains("content_raw", "Контент обов'язковий"));
        assert!(!errors.contains("slug", "anything"));
    }

    #[test]
    fn field_errors_display_is_ordered() {
        let mut errors = FieldErrors::new();
        errors.add("title", "a");
        errors.add("content_raw", "b");
        assert_eq!(errors.to_string(), "content_raw: b; title: a");
    }

    #[test]
    fn field_errors_serialize_as_map() {
        let mut errors = FieldErrors::new();
        errors.add("slug", "Slug обов'язковий");
        let value = serde_json::to_value(&errors).unwrap();
        assert_eq!(value, serde_json::json!({"slug": ["Slug обов'язковий"]}));
    }

    #[test]
    fn check_length_counts_characters() {
        assert!(check_length(&"ї".repeat(255), 255, "empty", "long").is_ok());
        let err = check_length(&"ї".repeat(256), 255, "empty", "long").unwrap_err();
        assert_eq!(err.message.as_deref(), Some("long"));
        let err = check_length("", 255, "empty", "long").unwrap_err();
        assert_eq!(err.message.as_deref(), Some("empty"));
    }

    #[test]
    fn non_empty_drops_blank() {
        assert_eq!(non_empty(&Some(String::new())), None);
        assert_eq!(non_empty(&Some("x".to_string())), Some("x".to_string()));
        assert_eq!(non_empty(&None), None);
    }
}
