//! Library layer for the blog admin: form schemas, configuration, and a
//! validating wrapper around the `blog_api` client.
//!
//! Forms are checked locally before anything is sent, so a rejected form never
//! costs a network round trip.

pub mod client;
pub mod config;
pub mod error;
pub mod schemas;
pub mod validation;

pub use blog_api;
pub use blog_api::types;
pub use blog_api::{CategoryQuery, ClientConfig, PostQuery, Query};

pub use client::AdminClient;
pub use error::BlogAdminError;
pub use schemas::{
    CategoryForm, CategorySchema, FieldErrors, FormShape, LegacyCategoryForm, LegacyPostForm,
    PostForm, PostSchema,
};
