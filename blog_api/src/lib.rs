//! Typed HTTP client for the blog administration REST API.
//!
//! [`Client`] exposes one async method per backend endpoint; [`types`] holds
//! the wire shapes shared with callers.

mod client;
mod config;
mod errors;
mod query;
pub mod types;
pub use self::client::Client;
pub use self::config::ClientConfig;
pub use self::errors::Error;
pub use self::query::{CategoryQuery, PostQuery, Query, QueryCommon};
