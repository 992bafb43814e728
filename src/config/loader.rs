//! Settings resolution
//!
//! Precedence, highest first:
//! 1. command-line flags / environment variables ([`ConfigOverrides`])
//! 2. the file given with `--config` (or `ASSETSYNC_CONFIG`), which must exist
//! 3. `<config dir>/assetsync/config.yaml`, if present
//! 4. built-in defaults

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::Settings;
use crate::error::{Result, config_not_found, file_read_failed};

/// Values supplied on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub config_path: Option<PathBuf>,
    pub engine_url: Option<String>,
    pub store_root: Option<PathBuf>,
    pub collection: Option<String>,
}

/// Default location of the settings file
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("assetsync").join("config.yaml"))
}

fn read_settings(path: &Path) -> Result<Settings> {
    let yaml = fs::read_to_string(path)
        .map_err(|e| file_read_failed(path.display().to_string(), e.to_string()))?;
    Settings::from_yaml(&yaml, &path.display().to_string())
}

/// Resolve settings from file, defaults and overrides, then validate them
pub fn load(overrides: &ConfigOverrides) -> Result<Settings> {
    let mut settings = match &overrides.config_path {
        Some(path) => {
            if !path.is_file() {
                return Err(config_not_found(path.display().to_string()));
            }
            debug!(path = %path.display(), "loading settings");
            read_settings(path)?
        }
        None => match default_config_path().filter(|p| p.is_file()) {
            Some(path) => {
                debug!(path = %path.display(), "loading default settings file");
                read_settings(&path)?
            }
            None => Settings::default(),
        },
    };

    if let Some(url) = &overrides.engine_url {
        settings.engine.url.clone_from(url);
    }
    if let Some(root) = &overrides.store_root {
        settings.store.root.clone_from(root);
    }
    if let Some(collection) = &overrides.collection {
        settings.store.collection.clone_from(collection);
    }

    settings.validate()?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AssetSyncError;
    use tempfile::TempDir;

    #[test]
    fn test_explicit_missing_file_is_error() {
        let temp = TempDir::new().unwrap();
        let overrides = ConfigOverrides {
            config_path: Some(temp.path().join("missing.yaml")),
            ..ConfigOverrides::default()
        };
        assert!(matches!(
            load(&overrides).unwrap_err(),
            AssetSyncError::ConfigNotFound { .. }
        ));
    }

    #[test]
    fn test_file_values_are_applied() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");
        fs::write(
            &path,
            "engine:\n  url: http://es:9200\nstore:\n  root: /srv/assetsync\n",
        )
        .unwrap();

        let settings = load(&ConfigOverrides {
            config_path: Some(path),
            ..ConfigOverrides::default()
        })
        .unwrap();

        assert_eq!(settings.engine.url, "http://es:9200");
        assert_eq!(settings.store.root, PathBuf::from("/srv/assetsync"));
    }

    #[test]
    fn test_overrides_win_over_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");
        fs::write(&path, "engine:\n  url: http://es:9200\n").unwrap();

        let settings = load(&ConfigOverrides {
            config_path: Some(path),
            engine_url: Some("https://override:9243".to_string()),
            store_root: Some(temp.path().join("store")),
            collection: Some("packages".to_string()),
        })
        .unwrap();

        assert_eq!(settings.engine.url, "https://override:9243");
        assert_eq!(settings.store.root, temp.path().join("store"));
        assert_eq!(settings.store.collection, "packages");
    }

    #[test]
    fn test_invalid_override_fails_validation() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");
        fs::write(&path, "").unwrap();

        let result = load(&ConfigOverrides {
            config_path: Some(path),
            engine_url: Some("ftp://es".to_string()),
            ..ConfigOverrides::default()
        });

        assert!(matches!(
            result.unwrap_err(),
            AssetSyncError::ConfigInvalid { .. }
        ));
    }
}
