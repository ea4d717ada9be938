//! Checks on the non-form arguments of client calls: page numbers, page sizes,
//! ids and slugs.

use crate::error::BlogAdminError;

pub const MAX_PER_PAGE: i64 = 100;
pub const MAX_SLUG_LENGTH: usize = 255;

/// Validate page number (must be >= 1).
pub fn validate_page(page: i64) -> Result<i64, BlogAdminError> {
    if page < 1 {
        return Err(BlogAdminError::InvalidInput(
            "page must be >= 1".to_string(),
        ));
    }
    Ok(page)
}

/// Validate page size (must be 1..=100).
pub fn validate_per_page(per_page: i64) -> Result<i64, BlogAdminError> {
    if !(1..=MAX_PER_PAGE).contains(&per_page) {
        return Err(BlogAdminError::InvalidInput(format!(
            "per_page must be between 1 and {}",
            MAX_PER_PAGE
        )));
    }
    Ok(per_page)
}

/// Validate a resource id (server ids start at 1).
pub fn validate_id(id: i64) -> Result<i64, BlogAdminError> {
    if id < 1 {
        return Err(BlogAdminError::InvalidInput(format!(
            "id must be positive, got {}",
            id
        )));
    }
    Ok(id)
}

/// Trim a slug and reject empty, oversized or whitespace-containing input.
pub fn validate_slug(input: &str) -> Result<String, BlogAdminError> {
    let slug = input.trim();
    if slug.is_empty() {
        return Err(BlogAdminError::InvalidInput("slug is empty".to_string()));
    }
    if slug.chars().count() > MAX_SLUG_LENGTH {
        return Err(BlogAdminError::InvalidInput(format!(
            "slug exceeds maximum length of {} characters",
            MAX_SLUG_LENGTH
        )));
    }
    if slug.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(BlogAdminError::InvalidInput(format!(
            "slug '{}' contains whitespace",
            slug
        )));
    }
    Ok(slug.to_string())
}
