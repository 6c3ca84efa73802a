//! Apps menu synchronization
//!
//! Fetches every repository's listing concurrently, flattens the results
//! into the Apps menu and installs it on a [`MenuHost`](crate::menu::MenuHost).
//! Adding a repository re-runs the whole pass.

mod form;
mod synchronizer;

#[cfg(test)]
mod test_support;

pub use form::submit_repository_form;
pub use synchronizer::{AddOutcome, AppLauncher, RepositoryPrompt, Synchronizer};
