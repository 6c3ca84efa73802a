//! Configuration system
//!
//! Loads ~/.config/pockit/config.yaml with support for:
//! - The list of app repositories to load from
//! - HTTP fetch settings (timeout, user agent)

mod pockit_config;
pub mod validation;

pub use pockit_config::{FetchConfig, PockitConfig};
pub use validation::{validate_config, validate_config_result, ValidationError};
