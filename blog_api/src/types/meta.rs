use serde::{Deserialize, Serialize};

/// Page metadata of a paginated envelope.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PageMeta {
    pub current_page: i64,
    /// 1-based index of the first item on this page. `None` on an empty page.
    pub from: Option<i64>,
    /// 1-based index of the last item on this page. `None` on an empty page.
    pub to: Option<i64>,
    pub last_page: i64,
    pub per_page: i64,
    pub total: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PageLinks {
    pub first: String,
    pub last: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

/// A page of results plus page metadata and navigation links.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
    pub links: PageLinks,
}

impl<T> PaginatedResponse<T> {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// True when the backend advertises a following page.
    pub fn has_next_page(&self) -> bool {
        self.links.next.is_some() || self.meta.current_page < self.meta.last_page
    }

    pub fn has_prev_page(&self) -> bool {
        self.links.prev.is_some() || self.meta.current_page > 1
    }
}
