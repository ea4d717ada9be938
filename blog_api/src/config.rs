//! Client configuration passed explicitly into [`Client::new`](crate::Client::new).

use std::time::Duration;

use url::Url;

use crate::Error;

/// Settings shared by every request a [`Client`](crate::Client) makes.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    /// API base URL, e.g. `https://blog.example.com/api`. Any path prefix is kept.
    pub base_url: Url,
    /// Per-request timeout. `None` means the caller owns cancellation.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: None,
        }
    }

    /// Parses `base_url` and builds a config without a timeout.
    pub fn parse(base_url: &str) -> Result<Self, Error> {
        let url = Url::parse(base_url).map_err(|e| {
            tracing::error!("Invalid base URL {}: {}", base_url, e);
            Error::InvalidUrl(format!("{}: {}", base_url, e))
        })?;
        if url.cannot_be_a_base() {
            return Err(Error::InvalidUrl(format!("{} cannot be a base URL", base_url)));
        }
        Ok(Self::new(url))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
