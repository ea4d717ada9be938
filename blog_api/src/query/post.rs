//! Query builder for the post listing endpoints.

use url::Url;

use super::common::{Query, QueryCommon};

/// Query for `/blog/posts` and `/blog/categories/{slug}/posts`.
///
/// Only `page` is sent unless [`Query::with_per_page`] is called.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PostQuery {
    pub common: QueryCommon,
}

impl PostQuery {
    pub fn page(page: i64) -> Self {
        Self::default().with_page(page)
    }
}

impl Query for PostQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn add_to_url(&self, url: &Url) -> Url {
        self.common.add_to_url(url)
    }
}
