//! Configuration validation
//!
//! Validates Pockit configuration for correctness:
//! - At least one repository
//! - Repository URLs are non-empty http(s) URLs
//! - No duplicates once URLs are normalized

use super::pockit_config::PockitConfig;
use crate::repository::{is_http_url, normalize_url};
use crate::PockitError;
use std::collections::HashSet;

/// Validation error details
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validation result
pub type ValidationResult = std::result::Result<(), Vec<ValidationError>>;

/// Validate a Pockit configuration
pub fn validate_config(config: &PockitConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if config.repositories.is_empty() {
        errors.push(ValidationError::new(
            "repositories",
            "At least one repository must be defined",
        ));
    }

    let mut seen = HashSet::new();
    for (index, url) in config.repositories.iter().enumerate() {
        let field = format!("repositories[{}]", index);

        let Some(normalized) = normalize_url(url) else {
            errors.push(ValidationError::new(field, "Repository URL cannot be empty"));
            continue;
        };

        if !is_http_url(&normalized) {
            errors.push(ValidationError::new(
                field.clone(),
                format!("Repository URL must use http or https: {}", url),
            ));
        }

        if !seen.insert(normalized.clone()) {
            errors.push(ValidationError::new(
                field,
                format!("Duplicate repository: {}", normalized),
            ));
        }
    }

    if config.fetch.user_agent.trim().is_empty() {
        errors.push(ValidationError::new(
            "fetch.user_agent",
            "User agent cannot be empty",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate and fold all problems into one [`PockitError::Config`]
pub fn validate_config_result(config: &PockitConfig) -> crate::Result<()> {
    validate_config(config).map_err(|errors| {
        let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        PockitError::Config(format!(
            "Configuration validation failed:\n  - {}",
            messages.join("\n  - ")
        ))
    })
}
