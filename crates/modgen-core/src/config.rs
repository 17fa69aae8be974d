//! Configuration management for Modgen.
//!
//! This module defines the `Config` struct loaded from an optional
//! `modgen.yaml` at the project root. The configuration can be created
//! programmatically, loaded from a file, or defaulted when no file exists.
//!
//! # Examples
//!
//! ```no_run
//! use modgen_core::config::Config;
//!
//! let mut config = Config::default();
//! config.template_dir = Some("vendor/templates".to_string());
//! ```

// Internal imports (std, crate)
use std::path::Path;

// External imports (alphabetized)
use serde::{Deserialize, Serialize};
use tokio::fs;

/// Name of the configuration file looked up at the project root
pub const CONFIG_FILE: &str = "modgen.yaml";

/// Project-level configuration for Modgen
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Optional path to the template directory, overriding discovery
    #[serde(default)]
    pub template_dir: Option<String>,
}

impl Config {
    /// Load configuration from a file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = fs::read_to_string(path).await?;
        let config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load `modgen.yaml` from the project root, or defaults when absent
    pub async fn load_or_default(root: &Path) -> crate::Result<Self> {
        let path = root.join(CONFIG_FILE);
        if path.exists() {
            Self::from_file(path).await
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a file
    pub async fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let content = serde_yaml::to_string(self)?;
        fs::write(path, content).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_config_roundtrip() -> crate::Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join(CONFIG_FILE);

        let config = Config {
            template_dir: Some("vendor/templates".to_string()),
        };
        config.save(&file_path).await?;

        let loaded = Config::from_file(&file_path).await?;
        assert_eq!(loaded.template_dir.as_deref(), Some("vendor/templates"));

        Ok(())
    }

    #[tokio::test]
    async fn test_missing_config_defaults() -> crate::Result<()> {
        let dir = tempdir()?;
        let config = Config::load_or_default(dir.path()).await?;
        assert!(config.template_dir.is_none());
        Ok(())
    }
}
