//! App sources
//!
//! Where listings and app payloads come from. The synchronizer only talks
//! to the [`AppSource`] trait; [`HttpAppSource`] is the production
//! implementation over HTTP.

mod http;
mod listing;

pub use http::HttpAppSource;
pub use listing::{Listing, ListingEntry};

use crate::Result;
use async_trait::async_trait;

/// Raw app payload handed to the app-creation collaborator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPayload {
    /// HTML/JS text exactly as served by the repository
    pub value: String,
}

impl AppPayload {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// Backend serving repository listings and app payloads
#[async_trait]
pub trait AppSource: Send + Sync {
    /// Fetch and parse `<base_url>listing.json`
    async fn fetch_listing(&self, base_url: &str) -> Result<Listing>;

    /// Fetch the raw payload at `<base_url><path>`
    async fn fetch_payload(&self, base_url: &str, path: &str) -> Result<AppPayload>;
}
