//! Query builder for the paginated category listing.

use url::Url;

use super::common::{Query, QueryCommon};

/// Default page size of the paginated category listing.
pub const DEFAULT_CATEGORY_PER_PAGE: i64 = 10;

/// Query for `/blog/categories`. Always sends both `page` and `per_page`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CategoryQuery {
    pub common: QueryCommon,
}

impl Default for CategoryQuery {
    fn default() -> Self {
        Self {
            common: QueryCommon {
                page: 1,
                per_page: Some(DEFAULT_CATEGORY_PER_PAGE),
            },
        }
    }
}

impl Query for CategoryQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn add_to_url(&self, url: &Url) -> Url {
        let mut common = self.common;
        common.per_page = Some(common.per_page.unwrap_or(DEFAULT_CATEGORY_PER_PAGE));
        common.add_to_url(url)
    }
}
