//! Post form schemas.

use blog_api::types::PostPatch;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::{check_length, non_empty, FieldKind, FieldSpec, FormShape};

pub const TITLE_REQUIRED: &str = "Заголовок обов'язковий";
pub const TITLE_TOO_LONG: &str = "Заголовок занадто довгий";
pub const SLUG_REQUIRED: &str = "Slug обов'язковий";
pub const SLUG_TOO_LONG: &str = "Slug занадто довгий";

/// A post form that can be turned into a write payload.
pub trait PostSchema: Validate {
    fn to_patch(&self) -> PostPatch;
}

/// Canonical post form.
///
/// The slug is optional; an empty or missing slug is left out of the payload
/// and the backend derives one from the title. Unpublished by default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct PostForm {
    #[validate(custom(function = "validate_title"))]
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 255, message = "Slug занадто довгий"))]
    pub slug: Option<String>,

    #[validate(range(min = 1, message = "Категорія обов'язкова"))]
    pub category_id: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 500, message = "Короткий опис занадто довгий"))]
    pub excerpt: Option<String>,

    #[validate(length(min = 1, message = "Контент обов'язковий"))]
    pub content_raw: String,

    #[serde(default)]
    pub is_published: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
}

impl FormShape for PostForm {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("title", FieldKind::String),
        FieldSpec::optional("slug", FieldKind::String),
        FieldSpec::required("category_id", FieldKind::Integer),
        FieldSpec::optional("excerpt", FieldKind::String),
        FieldSpec::required("content_raw", FieldKind::String),
        FieldSpec::defaulted("is_published", FieldKind::Boolean),
        FieldSpec::optional("published_at", FieldKind::String),
    ];
}

impl PostSchema for PostForm {
    fn to_patch(&self) -> PostPatch {
        PostPatch {
            title: Some(self.title.clone()),
            slug: non_empty(&self.slug),
            excerpt: self.excerpt.clone(),
            content_raw: Some(self.content_raw.clone()),
            category_id: Some(self.category_id),
            is_published: Some(self.is_published),
            published_at: non_empty(&self.published_at),
        }
    }
}

/// Older post form declaration.
///
/// Differs from [`PostForm`]: slug is required (1-255), category_id may be
/// omitted, and is_published has no default and must be present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct LegacyPostForm {
    #[validate(custom(function = "validate_title"))]
    pub title: String,

    #[validate(custom(function = "validate_required_slug"))]
    pub slug: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, message = "Категорія обов'язкова"))]
    pub category_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 500, message = "Короткий опис занадто довгий"))]
    pub excerpt: Option<String>,

    #[validate(length(min = 1, message = "Контент обов'язковий"))]
    pub content_raw: String,

    pub is_published: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
}

impl FormShape for LegacyPostForm {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("title", FieldKind::String),
        FieldSpec::required("slug", FieldKind::String),
        FieldSpec::optional("category_id", FieldKind::Integer),
        FieldSpec::optional("excerpt", FieldKind::String),
        FieldSpec::required("content_raw", FieldKind::String),
        FieldSpec::required("is_published", FieldKind::Boolean),
        FieldSpec::optional("published_at", FieldKind::String),
    ];
}

impl PostSchema for LegacyPostForm {
    fn to_patch(&self) -> PostPatch {
        PostPatch {
            title: Some(self.title.clone()),
            slug: Some(self.slug.clone()),
            excerpt: self.excerpt.clone(),
            content_raw: Some(self.content_raw.clone()),
            category_id: self.category_id,
            is_published: Some(self.is_published),
            published_at: non_empty(&self.published_at),
        }
    }
}

fn validate_title(title: &str) -> Result<(), ValidationError> {
    check_length(title, 255, TITLE_REQUIRED, TITLE_TOO_LONG)
}

fn validate_required_slug(slug: &str) -> Result<(), ValidationError> {
    check_length(slug, 255, SLUG_REQUIRED, SLUG_TOO_LONG)
}
