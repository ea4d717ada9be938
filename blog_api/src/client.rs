//! HTTP client for the blog administration REST API.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::{
    config::ClientConfig,
    query::{CategoryQuery, PostQuery, Query},
    types::{BlogCategory, BlogPost, CategoryID, CategoryPatch, PaginatedResponse, PostID, PostPatch},
    Error,
};

/// HTTP client for the blog REST API.
///
/// Every request carries `Accept: application/json` and
/// `Content-Type: application/json`. Each method performs exactly one HTTP
/// call; nothing is retried or cached.
#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
}

impl Client {
    /// Creates a client from an explicit configuration. No network traffic happens here.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            Error::Transport(e)
        })?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Creates a client for `base_url` with no timeout. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::new(ClientConfig::parse(base_url)?)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Joins path segments onto the base URL. Segments are percent-encoded,
    /// so a slug can never escape its position in the path.
    fn get_url(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|_| Error::InvalidUrl(format!("{} cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        tracing::debug!("{} {}", method, url);
        self.http.request(method, url)
    }

    fn with_body<B: Serialize>(&self, request: RequestBuilder, body: &B) -> Result<RequestBuilder, Error> {
        let payload = serde_json::to_vec(body).map_err(|e| {
            tracing::error!("Failed to encode request body: {}", e);
            Error::Encode(e)
        })?;
        Ok(request.body(payload))
    }

    /// Sends the request and turns any non-2xx status into an error.
    async fn execute(&self, request: RequestBuilder) -> Result<Response, Error> {
        let resp = request.send().await.map_err(|e| {
            tracing::error!("Request failed: {}", e);
            Error::Transport(e)
        })?;

        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Transport(e)
        })?;
        let snippet = truncate_body(&body);
        if status == StatusCode::NOT_FOUND {
            tracing::debug!("Resource not found: {}", snippet);
            return Err(Error::NotFound { body: snippet });
        }
        tracing::error!("Request failed with status {}: {}", status, snippet);
        Err(Error::HttpStatus {
            status: status.as_u16(),
            body: snippet,
        })
    }

    async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, Error> {
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Transport(e)
        })?;
        serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::Decode {
                source: e,
                body: snippet,
            }
        })
    }

    async fn get<T, Q>(&self, segments: &[&str], query: Option<&Q>) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let url = self.get_url(segments)?;
        let url = match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        };
        let resp = self.execute(self.request(Method::GET, url)).await?;
        Self::read_json(resp).await
    }

    async fn send_json<T, B>(&self, method: Method, segments: &[&str], body: &B) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let url = self.get_url(segments)?;
        let request = self.with_body(self.request(method, url), body)?;
        let resp = self.execute(request).await?;
        Self::read_json(resp).await
    }

    /// Issues a DELETE. The response body of a successful call is never read.
    async fn delete(&self, segments: &[&str]) -> Result<(), Error> {
        let url = self.get_url(segments)?;
        self.execute(self.request(Method::DELETE, url)).await?;
        Ok(())
    }

    // -- Posts --

    /// Fetches one page of posts. Sends `page` (and `per_page` when set).
    pub async fn get_posts(&self, query: &PostQuery) -> Result<PaginatedResponse<BlogPost>, Error> {
        self.get(&["blog", "posts"], Some(query)).await
    }

    /// Fetches a single post by slug. Returns [`Error::NotFound`] for an unknown slug.
    pub async fn get_post(&self, slug: &str) -> Result<BlogPost, Error> {
        self.get::<BlogPost, PostQuery>(&["blog", "posts", slug], None)
            .await
    }

    /// Creates a post. The server assigns the id.
    pub async fn create_post(&self, post: &PostPatch) -> Result<BlogPost, Error> {
        self.send_json(Method::POST, &["blog", "posts"], post)
            .await
    }

    /// Replaces the given fields of a post.
    pub async fn update_post(&self, id: PostID, post: &PostPatch) -> Result<BlogPost, Error> {
        let id = id.to_string();
        self.send_json(Method::PUT, &["blog", "posts", &id], post)
            .await
    }

    pub async fn delete_post(&self, id: PostID) -> Result<(), Error> {
        let id = id.to_string();
        self.delete(&["blog", "posts", &id]).await
    }

    // -- Categories --

    /// Fetches every category in one unpaginated list.
    pub async fn get_categories(&self) -> Result<Vec<BlogCategory>, Error> {
        self.get::<Vec<BlogCategory>, CategoryQuery>(&["blog", "categories-all"], None)
            .await
    }

    /// Fetches one page of categories. Always sends `page` and `per_page`.
    pub async fn get_categories_paginated(
        &self,
        query: &CategoryQuery,
    ) -> Result<PaginatedResponse<BlogCategory>, Error> {
        self.get(&["blog", "categories"], Some(query)).await
    }

    pub async fn get_category(&self, slug: &str) -> Result<BlogCategory, Error> {
        self.get::<BlogCategory, CategoryQuery>(&["blog", "categories", slug], None)
            .await
    }

    pub async fn create_category(&self, category: &CategoryPatch) -> Result<BlogCategory, Error> {
        self.send_json(Method::POST, &["blog", "categories"], category)
            .await
    }

    pub async fn update_category(
        &self,
        id: CategoryID,
        category: &CategoryPatch,
    ) -> Result<BlogCategory, Error> {
        let id = id.to_string();
        self.send_json(Method::PUT, &["blog", "categories", &id], category)
            .await
    }

    pub async fn delete_category(&self, id: CategoryID) -> Result<(), Error> {
        let id = id.to_string();
        self.delete(&["blog", "categories", &id]).await
    }

    /// Fetches one page of the posts filed under the category `slug`.
    pub async fn get_category_posts(
        &self,
        slug: &str,
        query: &PostQuery,
    ) -> Result<PaginatedResponse<BlogPost>, Error> {
        self.get(&["blog", "categories", slug, "posts"], Some(query))
            .await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
