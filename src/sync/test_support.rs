//! In-memory collaborators for synchronizer tests

use super::{AppLauncher, RepositoryPrompt};
use crate::repository::RepositorySet;
use crate::source::{AppPayload, AppSource, Listing};
use crate::{PockitError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

enum ListingResponse {
    Body(String),
    Delayed(String, Duration),
    Fail,
    Hang,
}

/// App source serving canned responses; unknown URLs fail
#[derive(Default)]
pub struct FakeSource {
    listings: HashMap<String, ListingResponse>,
    payloads: HashMap<String, String>,
    listing_fetches: AtomicUsize,
    payload_fetches: AtomicUsize,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_listing(mut self, base_url: &str, body: &str) -> Self {
        self.listings
            .insert(base_url.to_string(), ListingResponse::Body(body.to_string()));
        self
    }

    pub fn with_delayed_listing(mut self, base_url: &str, body: &str, delay: Duration) -> Self {
        self.listings.insert(
            base_url.to_string(),
            ListingResponse::Delayed(body.to_string(), delay),
        );
        self
    }

    pub fn with_failure(mut self, base_url: &str) -> Self {
        self.listings
            .insert(base_url.to_string(), ListingResponse::Fail);
        self
    }

    pub fn with_hang(mut self, base_url: &str) -> Self {
        self.listings
            .insert(base_url.to_string(), ListingResponse::Hang);
        self
    }

    pub fn with_payload(mut self, url: &str, body: &str) -> Self {
        self.payloads.insert(url.to_string(), body.to_string());
        self
    }

    pub fn listing_fetches(&self) -> usize {
        self.listing_fetches.load(Ordering::SeqCst)
    }

    pub fn payload_fetches(&self) -> usize {
        self.payload_fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AppSource for FakeSource {
    async fn fetch_listing(&self, base_url: &str) -> Result<Listing> {
        self.listing_fetches.fetch_add(1, Ordering::SeqCst);

        match self.listings.get(base_url) {
            Some(ListingResponse::Body(body)) => Listing::parse(body),
            Some(ListingResponse::Delayed(body, delay)) => {
                tokio::time::sleep(*delay).await;
                Listing::parse(body)
            }
            Some(ListingResponse::Hang) => futures::future::pending().await,
            Some(ListingResponse::Fail) | None => Err(PockitError::Network(format!(
                "{} unreachable",
                RepositorySet::listing_url(base_url)
            ))),
        }
    }

    async fn fetch_payload(&self, base_url: &str, path: &str) -> Result<AppPayload> {
        self.payload_fetches.fetch_add(1, Ordering::SeqCst);

        let url = format!("{}{}", base_url, path);
        self.payloads
            .get(&url)
            .map(|body| AppPayload::new(body.clone()))
            .ok_or_else(|| PockitError::Network(format!("{} returned 404 Not Found", url)))
    }
}

#[derive(Default)]
pub struct RecordingLauncher {
    pub launched: Vec<AppPayload>,
}

impl AppLauncher for RecordingLauncher {
    fn create_app(&mut self, payload: AppPayload) -> Result<()> {
        self.launched.push(payload);
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingPrompt {
    pub opened: usize,
    pub closed: usize,
}

impl RepositoryPrompt for RecordingPrompt {
    fn open(&mut self) {
        self.opened += 1;
    }

    fn close(&mut self) {
        self.closed += 1;
    }
}
