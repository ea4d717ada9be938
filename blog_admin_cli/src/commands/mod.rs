//! CLI subcommand implementations.

pub mod categories;
pub mod posts;

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use blog_admin_lib::schemas::{self, FormShape, Validate};
use blog_admin_lib::BlogAdminError;
use serde::de::DeserializeOwned;

use crate::output::print_field_errors;

/// Reads a JSON form from disk and runs its schema. Field errors are printed
/// to stderr, the returned error only names the file.
pub fn read_form<T>(file: &Path) -> Result<T>
where
    T: DeserializeOwned + Validate + FormShape,
{
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read form file {}", file.display()))?;
    let value: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not valid JSON", file.display()))?;
    schemas::parse_form(value).map_err(|errors| {
        eprintln!("Form {} is invalid:", file.display());
        print_field_errors(&errors);
        anyhow!("form {} is invalid", file.display())
    })
}

/// Reports validation failures field by field, passing every other error through.
pub fn report(err: BlogAdminError) -> anyhow::Error {
    match err {
        BlogAdminError::Validation(errors) => {
            print_field_errors(&errors);
            anyhow!("form is invalid")
        }
        other => other.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blog_admin_lib::{CategoryForm, FieldErrors};
    use std::path::PathBuf;

    fn write_form(name: &str, body: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("blog-admin-{}-{}", std::process::id(), name));
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn validation_error_message_omits_field_list() {
        let mut errors = FieldErrors::default();
        errors.add("title", "Назва обов'язкова");
        let message = report(BlogAdminError::Validation(errors)).to_string();
        assert_eq!(message, "form is invalid");
        assert!(!message.contains("Назва"));
    }

    #[test]
    fn other_errors_keep_their_message() {
        let err = report(BlogAdminError::InvalidInput("page must be at least 1".into()));
        assert!(err.to_string().contains("page must be at least 1"));
    }

    #[test]
    fn invalid_form_file_names_the_file_only() {
        let path = write_form("invalid-category.json", r#"{"title": ""}"#);
        let err = read_form::<CategoryForm>(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        let message = err.to_string();
        assert!(message.starts_with("form "));
        assert!(message.ends_with(" is invalid"));
        assert!(!message.contains("Slug"));
    }

    #[test]
    fn valid_form_file_is_parsed() {
        let path = write_form(
            "valid-category.json",
            r#"{"title": "Новини", "slug": "novyny", "parent_id": null}"#,
        );
        let form = read_form::<CategoryForm>(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(form.parent_id, Some(None));
    }
}
