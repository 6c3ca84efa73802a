//! Pockit configuration file handling
//!
//! Loads and manages the ~/.config/pockit/config.yaml file.

use crate::repository::{RepositorySet, DEFAULT_REPOSITORY};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// HTTP fetch settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Per-request timeout in seconds (0 disables the timeout)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("pockit/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

/// Pockit configuration
///
/// Represents the complete ~/.config/pockit/config.yaml file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PockitConfig {
    /// App repository base URLs, in menu order
    #[serde(default = "default_repositories")]
    pub repositories: Vec<String>,

    /// HTTP fetch settings
    #[serde(default)]
    pub fetch: FetchConfig,
}

fn default_repositories() -> Vec<String> {
    vec![DEFAULT_REPOSITORY.to_string()]
}

impl PockitConfig {
    /// Create a configuration with the default repository
    pub fn new() -> Self {
        Self {
            repositories: default_repositories(),
            fetch: FetchConfig::default(),
        }
    }

    /// Load configuration from a specific path
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(crate::PockitError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        tracing::info!(path = %path.display(), "Loading Pockit configuration");

        let content = fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;

        tracing::debug!(
            repositories = config.repositories.len(),
            timeout_secs = config.fetch.timeout_secs,
            "Configuration loaded successfully"
        );

        Ok(config)
    }

    /// Load from `path` (or the default path), falling back to defaults
    /// when the file does not exist yet
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::default_path);

        if path.exists() {
            Self::load(&path)
        } else {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            Ok(Self::new())
        }
    }

    /// Save configuration to a specific path
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        tracing::info!(path = %path.display(), "Saving Pockit configuration");

        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;

        Ok(())
    }

    /// Get the default config path (~/.config/pockit/config.yaml)
    pub fn default_path() -> PathBuf {
        let mut path = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(".config");
        path.push("pockit");
        path.push("config.yaml");
        path
    }

    /// Repository set built from the configured URLs
    pub fn repository_set(&self) -> RepositorySet {
        RepositorySet::from_urls(&self.repositories)
    }

    /// Replace the stored repository list with the contents of `set`
    pub fn set_repositories(&mut self, set: &RepositorySet) {
        self.repositories = set.as_slice().to_vec();
    }
}

impl Default for PockitConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_config_has_default_repository() {
        let config = PockitConfig::new();
        assert_eq!(config.repositories, vec![DEFAULT_REPOSITORY.to_string()]);
        assert_eq!(config.fetch.timeout_secs, 30);
        assert!(config.fetch.user_agent.starts_with("pockit/"));
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.yaml");

        let mut config = PockitConfig::new();
        config.repositories.push("https://a.test/".to_string());
        config.fetch.timeout_secs = 5;
        config.save(&path).unwrap();

        let loaded = PockitConfig::load(&path).unwrap();
        assert_eq!(loaded.repositories.len(), 2);
        assert_eq!(loaded.repositories[1], "https://a.test/");
        assert_eq!(loaded.fetch.timeout_secs, 5);
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = PockitConfig::load(temp_dir.path().join("missing.yaml")).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_load_or_default_without_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.yaml");
        let config = PockitConfig::load_or_default(Some(path.as_path())).unwrap();
        assert_eq!(config.repositories.len(), 1);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: PockitConfig = serde_yaml::from_str("fetch:\n  timeout_secs: 3\n").unwrap();
        assert_eq!(config.repositories, vec![DEFAULT_REPOSITORY.to_string()]);
        assert_eq!(config.fetch.timeout_secs, 3);
        assert!(config.fetch.user_agent.starts_with("pockit/"));
    }

    #[test]
    fn test_repository_set_round_trip() {
        let mut config = PockitConfig::new();
        config.repositories = vec!["https://a.test".to_string(), "https://a.test/".to_string()];

        let set = config.repository_set();
        assert_eq!(set.len(), 1);

        config.set_repositories(&set);
        assert_eq!(config.repositories, vec!["https://a.test/".to_string()]);
    }
}
