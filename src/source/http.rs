//! HTTP app source

use super::{AppPayload, AppSource, Listing};
use crate::config::FetchConfig;
use crate::repository::RepositorySet;
use crate::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Fetches listings and payloads over HTTP(S)
#[derive(Debug, Clone)]
pub struct HttpAppSource {
    client: reqwest::Client,
}

impl HttpAppSource {
    /// Create a source from fetch settings
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }

        Ok(Self {
            client: builder.build()?,
        })
    }

    async fn get_text(&self, url: &str) -> Result<String> {
        tracing::debug!(url = %url, "GET");

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow::anyhow!("{} returned {}", url, status).into());
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl AppSource for HttpAppSource {
    async fn fetch_listing(&self, base_url: &str) -> Result<Listing> {
        let url = RepositorySet::listing_url(base_url);
        let body = self.get_text(&url).await?;
        Listing::parse(&body)
    }

    async fn fetch_payload(&self, base_url: &str, path: &str) -> Result<AppPayload> {
        let url = format!("{}{}", base_url, path);
        let body = self.get_text(&url).await?;

        tracing::debug!(url = %url, bytes = body.len(), "Fetched app payload");

        Ok(AppPayload::new(body))
    }
}
