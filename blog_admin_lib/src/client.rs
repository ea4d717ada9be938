//! Validating wrapper around the API client.

use blog_api::types::{BlogCategory, BlogPost, CategoryID, PaginatedResponse, PostID};
use blog_api::{CategoryQuery, Client, ClientConfig, PostQuery, Query};

use crate::config;
use crate::error::BlogAdminError;
use crate::schemas::{self, CategorySchema, PostSchema};
use crate::validation::{validate_id, validate_page, validate_per_page, validate_slug};

/// API client wrapper that checks arguments and forms before sending.
///
/// Reads pass straight through after their page/slug arguments are checked.
/// Writes run the form's schema first; an invalid form returns
/// [`BlogAdminError::Validation`] and no request is made.
#[derive(Clone, Debug)]
pub struct AdminClient {
    inner: Client,
}

impl AdminClient {
    pub fn new(config: ClientConfig) -> Result<Self, BlogAdminError> {
        Ok(Self {
            inner: Client::new(config)?,
        })
    }

    /// Creates a client configured from `BLOG_API_BASE` / `BLOG_API_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, BlogAdminError> {
        Self::new(config::from_env()?)
    }

    /// Creates a client with a custom base URL. Used for testing.
    pub fn with_base_url(base_url: &str) -> Result<Self, BlogAdminError> {
        Ok(Self {
            inner: Client::with_base_url(base_url)?,
        })
    }

    /// The unwrapped API client.
    pub fn api(&self) -> &Client {
        &self.inner
    }

    fn check_form<F: validator::Validate>(&self, label: &str, form: &F) -> Result<(), BlogAdminError> {
        schemas::check(form).map_err(|errors| {
            tracing::warn!("{} form rejected: {}", label, errors);
            BlogAdminError::Validation(errors)
        })
    }

    // -- Posts --

    pub async fn get_posts(&self, page: i64) -> Result<PaginatedResponse<BlogPost>, BlogAdminError> {
        let page = validate_page(page)?;
        Ok(self.inner.get_posts(&PostQuery::page(page)).await?)
    }

    pub async fn get_post(&self, slug: &str) -> Result<BlogPost, BlogAdminError> {
        let slug = validate_slug(slug)?;
        Ok(self.inner.get_post(&slug).await?)
    }

    pub async fn create_post<F: PostSchema>(&self, form: &F) -> Result<BlogPost, BlogAdminError> {
        self.check_form("post", form)?;
        let post = self.inner.create_post(&form.to_patch()).await?;
        tracing::info!("Created post {} ({})", post.id, post.slug);
        Ok(post)
    }

    pub async fn update_post<F: PostSchema>(
        &self,
        id: PostID,
        form: &F,
    ) -> Result<BlogPost, BlogAdminError> {
        let id = validate_id(id)?;
        self.check_form("post", form)?;
        let post = self.inner.update_post(id, &form.to_patch()).await?;
        tracing::info!("Updated post {}", post.id);
        Ok(post)
    }

    pub async fn delete_post(&self, id: PostID) -> Result<(), BlogAdminError> {
        let id = validate_id(id)?;
        self.inner.delete_post(id).await?;
        tracing::info!("Deleted post {}", id);
        Ok(())
    }

    // -- Categories --

    pub async fn get_categories(&self) -> Result<Vec<BlogCategory>, BlogAdminError> {
        Ok(self.inner.get_categories().await?)
    }

    pub async fn get_categories_paginated(
        &self,
        page: i64,
        per_page: i64,
    ) -> Result<PaginatedResponse<BlogCategory>, BlogAdminError> {
        let query = CategoryQuery::default()
            .with_page(validate_page(page)?)
            .with_per_page(validate_per_page(per_page)?);
        Ok(self.inner.get_categories_paginated(&query).await?)
    }

    pub async fn get_category(&self, slug: &str) -> Result<BlogCategory, BlogAdminError> {
        let slug = validate_slug(slug)?;
        Ok(self.inner.get_category(&slug).await?)
    }

    pub async fn create_category<F: CategorySchema>(
        &self,
        form: &F,
    ) -> Result<BlogCategory, BlogAdminError> {
        self.check_form("category", form)?;
        let category = self.inner.create_category(&form.to_patch()).await?;
        tracing::info!("Created category {} ({})", category.id, category.slug);
        Ok(category)
    }

    pub async fn update_category<F: CategorySchema>(
        &self,
        id: CategoryID,
        form: &F,
    ) -> Result<BlogCategory, BlogAdminError> {
        let id = validate_id(id)?;
        self.check_form("category", form)?;
        let category = self.inner.update_category(id, &form.to_patch()).await?;
        tracing::info!("Updated category {}", category.id);
        Ok(category)
    }

    pub async fn delete_category(&self, id: CategoryID) -> Result<(), BlogAdminError> {
        let id = validate_id(id)?;
        self.inner.delete_category(id).await?;
        tracing::info!("Deleted category {}", id);
        Ok(())
    }

    pub async fn get_category_posts(
        &self,
        slug: &str,
        page: i64,
    ) -> Result<PaginatedResponse<BlogPost>, BlogAdminError> {
        let slug = validate_slug(slug)?;
        let page = validate_page(page)?;
        Ok(self
            .inner
            .get_category_posts(&slug, &PostQuery::page(page))
            .await?)
    }
}
