//! Command helper utilities

use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::{self, ConfigOverrides, Settings};
use crate::engine::HttpEngineClient;
use crate::error::Result;
use crate::store::FileStore;

/// Options shared by every subcommand
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    pub config: Option<PathBuf>,
    pub engine_url: Option<String>,
    pub store: Option<PathBuf>,
}

impl From<&Cli> for GlobalOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            config: cli.config.clone(),
            engine_url: cli.engine_url.clone(),
            store: cli.store.clone(),
        }
    }
}

/// Resolve settings from the configuration file and command-line overrides
pub fn load_settings(options: &GlobalOptions) -> Result<Settings> {
    config::load(&ConfigOverrides {
        config_path: options.config.clone(),
        engine_url: options.engine_url.clone(),
        store_root: options.store.clone(),
        collection: None,
    })
}

/// Store and engine client built from resolved settings
pub struct Backends {
    pub store: FileStore,
    pub engine: HttpEngineClient,
    pub collection: String,
}

impl Backends {
    pub fn connect(settings: &Settings) -> Result<Self> {
        Ok(Self {
            store: FileStore::new(&settings.store.root),
            engine: HttpEngineClient::new(&settings.engine)?,
            collection: settings.store.collection.clone(),
        })
    }
}
