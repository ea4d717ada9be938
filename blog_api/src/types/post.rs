//! Post-related types returned and accepted by the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp::parse_timestamp;

/// Numeric identifier of a post.
pub type PostID = i64;

/// A blog post as returned by `/blog/posts`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BlogPost {
    pub id: PostID,

    pub title: String,

    /// URL-safe identifier, unique across posts.
    pub slug: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,

    /// Raw (unrendered) post body.
    pub content_raw: String,

    pub category_id: i64,

    pub is_published: bool,

    /// Publication time as sent by the backend. See [`BlogPost::published_at_utc`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,

    /// Author of the post.
    pub user: PostAuthor,

    /// Category summary embedded in the post.
    pub category: PostCategory,

    pub created_at: String,

    pub updated_at: String,
}

impl BlogPost {
    /// Publication time, if present and in a recognised format.
    pub fn published_at_utc(&self) -> Option<DateTime<Utc>> {
        self.published_at.as_deref().and_then(parse_timestamp)
    }

    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created_at)
    }

    pub fn updated_at_utc(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.updated_at)
    }
}

/// Author summary embedded in a post.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PostAuthor {
    pub id: i64,
    pub name: String,
}

/// Category summary embedded in a post.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PostCategory {
    pub id: i64,
    pub title: String,
    pub slug: String,
}

/// Write payload for creating or updating a post.
///
/// Every field is optional and unset fields are left out of the request body,
/// so the same payload serves both full and partial updates.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct PostPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_raw: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,
    /// Sent as-is; the backend parses the date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
}

impl PostPatch {
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_slug(mut self, slug: &str) -> Self {
        self.slug = Some(slug.to_string());
        self
    }

    pub fn with_content_raw(mut self, content_raw: &str) -> Self {
        self.content_raw = Some(content_raw.to_string());
        self
    }

    pub fn with_category_id(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_published(mut self, is_published: bool) -> Self {
        self.is_published = Some(is_published);
        self
    }
}
