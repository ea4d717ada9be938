//! Category form schemas.

use blog_api::types::CategoryPatch;
use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use super::{check_length, message_error, FieldKind, FieldSpec, FormShape};

pub const TITLE_REQUIRED: &str = "Назва обов'язкова";
pub const TITLE_TOO_LONG: &str = "Назва занадто довга";
pub const SLUG_REQUIRED: &str = "Slug обов'язковий";
pub const SLUG_TOO_LONG: &str = "Slug занадто довгий";
pub const DESCRIPTION_TOO_LONG: &str = "Опис занадто довгий";
pub const PARENT_NOT_POSITIVE: &str = "ID батьківської категорії має бути позитивним";

/// A category form that can be turned into a write payload.
pub trait CategorySchema: Validate {
    fn to_patch(&self) -> CategoryPatch;
}

/// Canonical category form.
///
/// `parent_id` keeps "absent" and "null" apart: a missing key leaves the
/// parent untouched, an explicit `null` makes the category a root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryForm {
    pub title: String,

    pub slug: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(
        default,
        deserialize_with = "present_or_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub parent_id: Option<Option<i64>>,
}

/// Maps a present key to `Some`, so `null` becomes `Some(None)`. A missing key
/// never reaches here and falls back to the field default.
fn present_or_null<'de, D>(deserializer: D) -> Result<Option<Option<i64>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<i64>::deserialize(deserializer).map(Some)
}

impl Validate for CategoryForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Err(e) = validate_title(&self.title) {
            errors.add("title", e);
        }
        if let Err(e) = validate_required_slug(&self.slug) {
            errors.add("slug", e);
        }
        if let Some(description) = &self.description {
            if description.chars().count() > 1000 {
                errors.add("description", message_error("length", DESCRIPTION_TOO_LONG));
            }
        }
        if let Some(Some(parent_id)) = self.parent_id {
            if parent_id <= 0 {
                errors.add("parent_id", message_error("range", PARENT_NOT_POSITIVE));
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl FormShape for CategoryForm {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("title", FieldKind::String),
        FieldSpec::required("slug", FieldKind::String),
        FieldSpec::optional("description", FieldKind::String),
        FieldSpec::optional("parent_id", FieldKind::Integer),
    ];
}

impl CategorySchema for CategoryForm {
    fn to_patch(&self) -> CategoryPatch {
        CategoryPatch {
            title: Some(self.title.clone()),
            slug: Some(self.slug.clone()),
            description: self.description.clone(),
            parent_id: self.parent_id,
        }
    }
}

/// Older category form declaration.
///
/// Differs from [`CategoryForm`]: slug is optional and `parent_id` is a plain
/// optional number with no sign check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct LegacyCategoryForm {
    #[validate(custom(function = "validate_title"))]
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 255, message = "Slug занадто довгий"))]
    pub slug: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 1000, message = "Опис занадто довгий"))]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
}

impl FormShape for LegacyCategoryForm {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("title", FieldKind::String),
        FieldSpec::optional("slug", FieldKind::String),
        FieldSpec::optional("description", FieldKind::String),
        FieldSpec::optional("parent_id", FieldKind::Integer),
    ];
}

impl CategorySchema for LegacyCategoryForm {
    fn to_patch(&self) -> CategoryPatch {
        CategoryPatch {
            title: Some(self.title.clone()),
            slug: self.slug.clone().filter(|s| !s.is_empty()),
            description: self.description.clone(),
            parent_id: self.parent_id.map(Some),
        }
    }
}

fn validate_title(title: &str) -> Result<(), ValidationError> {
    check_length(title, 255, TITLE_REQUIRED, TITLE_TOO_LONG)
}

fn validate_required_slug(slug: &str) -> Result<(), ValidationError> {
    check_length(slug, 255, SLUG_REQUIRED, SLUG_TOO_LONG)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::{check, parse_form};
    use serde_json::json;

    fn valid_form() -> CategoryForm {
        CategoryForm {
            title: "Новини".to_string(),
            slug: "novyny".to_string(),
            description: None,
            parent_id: None,
        }
    }

    fn valid_legacy() -> LegacyCategoryForm {
        LegacyCategoryForm {
            title: "Новини".to_string(),
            slug: None,
            description: None,
            parent_id: None,
        }
    }

    #[test]
    fn valid_form_passes() {
        assert!(check(&valid_form()).is_ok());
        let with_parent = CategoryForm {
            parent_id: Some(Some(1)),
            ..valid_form()
        };
        assert!(check(&with_parent).is_ok());
    }

    #[test]
    fn empty_title_is_required() {
        let form = CategoryForm {
            title: String::new(),
            ..valid_form()
        };
        let errors = check(&form).unwrap_err();
        assert_eq!(errors.first("title"), Some(TITLE_REQUIRED));
    }

    #[test]
    fn long_title_is_too_long() {
        let form = CategoryForm {
            title: "н".repeat(256),
            ..valid_form()
        };
        let errors = check(&form).unwrap_err();
        assert_eq!(errors.first("title"), Some(TITLE_TOO_LONG));
    }

    #[test]
    fn slug_is_required() {
        let form = CategoryForm {
            slug: String::new(),
            ..valid_form()
        };
        let errors = check(&form).unwrap_err();
        assert_eq!(errors.first("slug"), Some(SLUG_REQUIRED));
    }

    #[test]
    fn description_limit() {
        let form = CategoryForm {
            description: Some("о".repeat(1001)),
            ..valid_form()
        };
        let errors = check(&form).unwrap_err();
        assert_eq!(errors.first("description"), Some(DESCRIPTION_TOO_LONG));
    }

    #[test]
    fn negative_parent_rejected_by_canonical_form() {
        let form = CategoryForm {
            parent_id: Some(Some(-1)),
            ..valid_form()
        };
        let errors = check(&form).unwrap_err();
        assert_eq!(errors.first("parent_id"), Some(PARENT_NOT_POSITIVE));

        let zero = CategoryForm {
            parent_id: Some(Some(0)),
            ..valid_form()
        };
        assert!(check(&zero).is_err());
    }

    #[test]
    fn negative_parent_accepted_by_legacy_form() {
        let form = LegacyCategoryForm {
            parent_id: Some(-1),
            ..valid_legacy()
        };
        assert!(check(&form).is_ok());
    }

    #[test]
    fn parse_keeps_null_parent_apart_from_missing() {
        let detached: CategoryForm = parse_form(json!({
            "title": "Новини",
            "slug": "novyny",
            "parent_id": null
        }))
        .unwrap();
        assert_eq!(detached.parent_id, Some(None));

        let untouched: CategoryForm = parse_form(json!({
            "title": "Новини",
            "slug": "novyny"
        }))
        .unwrap();
        assert_eq!(untouched.parent_id, None);

        let child: CategoryForm = parse_form(json!({
            "title": "Новини",
            "slug": "novyny",
            "parent_id": 4
        }))
        .unwrap();
        assert_eq!(child.parent_id, Some(Some(4)));
    }

    #[test]
    fn missing_parent_is_left_out_of_patch() {
        let form: CategoryForm = parse_form(json!({"title": "Новини", "slug": "novyny"})).unwrap();
        let value = serde_json::to_value(form.to_patch()).unwrap();
        assert_eq!(value, json!({"title": "Новини", "slug": "novyny"}));
    }

    #[test]
    fn null_parent_is_sent_as_null() {
        let form: CategoryForm = parse_form(json!({
            "title": "Новини",
            "slug": "novyny",
            "parent_id": null
        }))
        .unwrap();
        let value = serde_json::to_value(form.to_patch()).unwrap();
        assert_eq!(
            value,
            json!({"title": "Новини", "slug": "novyny", "parent_id": null})
        );
    }

    #[test]
    fn parse_reports_missing_slug_and_mistyped_parent() {
        let errors = parse_form::<CategoryForm>(json!({
            "title": "Новини",
            "parent_id": "1"
        }))
        .unwrap_err();
        assert_eq!(errors.first("slug"), Some(crate::schemas::REQUIRED));
        assert_eq!(
            errors.first("parent_id"),
            Some("Expected integer, received string")
        );
    }

    #[test]
    fn legacy_slug_is_optional() {
        assert!(check(&valid_legacy()).is_ok());
        let value = serde_json::to_value(valid_legacy().to_patch()).unwrap();
        assert_eq!(value, json!({"title": "Новини"}));
    }

    #[test]
    fn legacy_slug_still_bounded() {
        let form = LegacyCategoryForm {
            slug: Some("s".repeat(256)),
            ..valid_legacy()
        };
        let errors = check(&form).unwrap_err();
        assert_eq!(errors.first("slug"), Some(SLUG_TOO_LONG));
    }
}
