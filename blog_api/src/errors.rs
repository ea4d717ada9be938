//! Error types for the API client.

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The base URL and path did not combine into a usable URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    /// The request never produced a response (connection refused, timeout, TLS).
    #[error("Request failed")]
    Transport(#[from] reqwest::Error),
    /// The API answered 404 for the requested resource.
    #[error("Resource not found")]
    NotFound { body: String },
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The response body was not the JSON shape the endpoint promises.
    #[error("Failed to parse response")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },
    /// The request payload could not be serialized.
    #[error("Failed to encode request body")]
    Encode(#[source] serde_json::Error),
}

impl Error {
    /// HTTP status code carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::NotFound { .. } => Some(404),
            Error::HttpStatus { status, .. } => Some(*status),
            Error::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
