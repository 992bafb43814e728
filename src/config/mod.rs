//! Configuration file handling for assetsync
//!
//! Settings live in a YAML file (`config.yaml`):
//!
//! ```yaml
//! engine:
//!   url: http://localhost:9200
//!   username: elastic
//!   password: changeme
//!   timeout_secs: 30
//! store:
//!   root: /var/lib/assetsync
//!   collection: epm-packages
//! ```
//!
//! Every field is optional; command-line flags and environment variables
//! override the file (see [`loader`]).

pub mod loader;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Result, config_invalid, config_parse_failed};
use crate::store::DEFAULT_COLLECTION;

pub use loader::{ConfigOverrides, default_config_path, load};

/// All runtime settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub engine: EngineSettings,
    pub store: StoreSettings,
}

/// Where and how to reach the engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    pub url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    pub timeout_secs: u64,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            url: "http://localhost:9200".to_string(),
            username: None,
            password: None,
            timeout_secs: 30,
        }
    }
}

/// Where package records are persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSettings {
    pub root: PathBuf,
    pub collection: String,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            root: default_store_root(),
            collection: DEFAULT_COLLECTION.to_string(),
        }
    }
}

fn default_store_root() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("assetsync"))
        .unwrap_or_else(|| PathBuf::from(".assetsync"))
}

impl Settings {
    /// Parse settings from YAML; `source` names the file for error messages
    pub fn from_yaml(yaml: &str, source: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(|e| config_parse_failed(source, e.to_string()))
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        let url = self.engine.url.as_str();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(config_invalid(format!(
                "engine.url must start with http:// or https://, got '{url}'"
            )));
        }
        if self.engine.timeout_secs == 0 {
            return Err(config_invalid("engine.timeout_secs must be greater than zero"));
        }
        if self.engine.password.is_some() && self.engine.username.is_none() {
            return Err(config_invalid("engine.password is set without engine.username"));
        }
        if self.store.collection.trim().is_empty() {
            return Err(config_invalid("store.collection cannot be empty"));
        }
        if self.store.root.as_os_str().is_empty() {
            return Err(config_invalid("store.root cannot be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.engine.url, "http://localhost:9200");
        assert_eq!(settings.store.collection, "epm-packages");
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let settings = Settings::from_yaml(
            "engine:\n  url: https://es.internal:9243\n  username: elastic\n",
            "config.yaml",
        )
        .unwrap();
        assert_eq!(settings.engine.url, "https://es.internal:9243");
        assert_eq!(settings.engine.username.as_deref(), Some("elastic"));
        assert_eq!(settings.engine.timeout_secs, 30);
        assert_eq!(settings.store, StoreSettings::default());
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(
            Settings::from_yaml("  \n", "config.yaml").unwrap(),
            Settings::default()
        );
    }

    #[test]
    fn test_invalid_yaml_names_source() {
        let err = Settings::from_yaml("engine: [unclosed", "/etc/assetsync.yaml").unwrap_err();
        assert!(matches!(
            err,
            crate::error::AssetSyncError::ConfigParseFailed { ref path, .. } if path == "/etc/assetsync.yaml"
        ));
    }

    #[test]
    fn test_validate_rejects_bad_url() {
        let mut settings = Settings::default();
        settings.engine.url = "localhost:9200".to_string();
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("Invalid configuration"));
    }

    #[test]
    fn test_validate_rejects_password_without_username() {
        let mut settings = Settings::default();
        settings.engine.password = Some("secret".to_string());
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_collection() {
        let mut settings = Settings::default();
        settings.store.collection = " ".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_yaml_round_trip_omits_missing_credentials() {
        let yaml = Settings::default().to_yaml().unwrap();
        assert!(!yaml.contains("username"));
        assert!(yaml.contains("collection: epm-packages"));
    }
}
