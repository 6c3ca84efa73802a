//! App repositories
//!
//! An app repository is a remote base URL serving a `listing.json`
//! manifest plus the HTML/JS payloads it names. The [`RepositorySet`] is
//! the ordered, duplicate-free list of repositories a session loads from.

mod set;

pub use set::{
    check_url, is_http_url, normalize_url, RepositorySet, DEFAULT_REPOSITORY, LISTING_FILE,
};
