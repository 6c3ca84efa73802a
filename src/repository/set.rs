//! Ordered set of repository base URLs

use crate::{PockitError, Result};

/// Repository every new session starts with
pub const DEFAULT_REPOSITORY: &str = "https://raw.githubusercontent.com/pockitos/apps/main/";

/// Name of the manifest file at the root of every repository
pub const LISTING_FILE: &str = "listing.json";

/// Normalize a user-supplied repository URL
///
/// Trims surrounding whitespace and ensures a trailing `/` so relative
/// paths can be appended directly. Returns `None` for empty input.
pub fn normalize_url(url: &str) -> Option<String> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return None;
    }

    if trimmed.ends_with('/') {
        Some(trimmed.to_string())
    } else {
        Some(format!("{}/", trimmed))
    }
}

/// Whether a URL uses a scheme repositories can be fetched over
pub fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Normalize a URL and check it can name a repository
///
/// This is the rule configuration loading enforces, so anything it
/// accepts can be saved and read back.
pub fn check_url(url: &str) -> Result<String> {
    let normalized = normalize_url(url)
        .ok_or_else(|| PockitError::InvalidUrl("URL cannot be empty".to_string()))?;

    if !is_http_url(&normalized) {
        return Err(PockitError::InvalidUrl(format!(
            "{} must use http or https",
            normalized
        )));
    }

    Ok(normalized)
}

/// Ordered, duplicate-free sequence of repository base URLs
///
/// Only grows: URLs are appended, never removed or reordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositorySet {
    urls: Vec<String>,
}

impl RepositorySet {
    /// Create an empty set
    pub fn new() -> Self {
        Self { urls: Vec::new() }
    }

    /// Create a set seeded with [`DEFAULT_REPOSITORY`]
    pub fn with_default() -> Self {
        let mut set = Self::new();
        set.insert(DEFAULT_REPOSITORY);
        set
    }

    /// Build a set from configured URLs, dropping blanks and duplicates
    pub fn from_urls<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for url in urls {
            if !set.insert(url.as_ref()) {
                tracing::debug!(url = %url.as_ref(), "Ignoring blank or duplicate repository");
            }
        }
        set
    }

    /// Append a repository
    ///
    /// Returns `false` without changing the set when the URL is blank or
    /// already present after normalization.
    pub fn insert(&mut self, url: &str) -> bool {
        let Some(normalized) = normalize_url(url) else {
            return false;
        };

        if self.contains(&normalized) {
            return false;
        }

        self.urls.push(normalized);
        true
    }

    /// Check whether a URL is present (compared after normalization)
    pub fn contains(&self, url: &str) -> bool {
        match normalize_url(url) {
            Some(normalized) => self.urls.iter().any(|u| *u == normalized),
            None => false,
        }
    }

    /// Listing URL for a repository
    pub fn listing_url(base_url: &str) -> String {
        format!("{}{}", base_url, LISTING_FILE)
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.urls.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.urls
    }
}

impl Default for RepositorySet {
    fn default() -> Self {
        Self::with_default()
    }
}
