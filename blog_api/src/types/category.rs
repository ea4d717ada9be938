//! Category types returned and accepted by the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp::parse_timestamp;

/// Numeric identifier of a category.
pub type CategoryID = i64;

/// A blog category as returned by `/blog/categories`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BlogCategory {
    pub id: CategoryID,

    pub title: String,

    /// URL-safe identifier, unique across categories.
    pub slug: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Parent category, `None` for a root category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<CategoryID>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_title: Option<String>,

    /// Number of posts in the category, when the endpoint includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posts_count: Option<i64>,

    pub is_root: bool,

    pub created_at: String,

    pub updated_at: String,
}

impl BlogCategory {
    /// Whether `is_root` agrees with `parent_id`. A category with a parent is never a root.
    pub fn is_consistent(&self) -> bool {
        !(self.parent_id.is_some() && self.is_root)
    }

    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created_at)
    }

    pub fn updated_at_utc(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.updated_at)
    }
}

/// Write payload for creating or updating a category.
///
/// `parent_id` is doubly optional: `None` leaves the field out of the body,
/// `Some(None)` sends an explicit `null` and detaches the category from its parent.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct CategoryPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Option<CategoryID>>,
}

impl CategoryPatch {
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_slug(mut self, slug: &str) -> Self {
        self.slug = Some(slug.to_string());
        self
    }

    pub fn with_parent(mut self, parent_id: CategoryID) -> Self {
        self.parent_id = Some(Some(parent_id));
        self
    }

    /// Sends `parent_id: null`, making the category a root.
    pub fn detach_parent(mut self) -> Self {
        self.parent_id = Some(None);
        self
    }
}
