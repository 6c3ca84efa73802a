//! Pockit - App-repository loader for the Pockit desktop shell
//!
//! Pockit loads small HTML/JS "apps" from remote app repositories. Each
//! repository serves a `listing.json` manifest mapping app names to payload
//! paths. Pockit fetches every listing concurrently, aggregates them into a
//! single "Apps" menu and keeps that menu in step as repositories are added.
//!
//! # Architecture
//!
//! - **repository**: Ordered, duplicate-free set of repository base URLs
//! - **source**: Listing parsing and the HTTP app source
//! - **menu**: Menu model and the host menu interface
//! - **sync**: Synchronization passes, repository adds, menu activation
//! - **config**: YAML configuration and validation

pub mod config;
pub mod error;
pub mod logging;
pub mod menu;
pub mod repository;
pub mod source;
pub mod sync;

// Re-exports
pub use error::{PockitError, Result};
