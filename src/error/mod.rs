//! Error types and handling for assetsync
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`engine`]: Engine transport errors
//! - [`package`]: Package manifest and bundled asset errors
//! - [`store`]: Document store errors
//! - [`config`]: Configuration errors
//! - [`fs`]: File system errors
//! - [`cli`]: Command-line argument errors

pub mod cli;
pub mod config;
pub mod engine;
pub mod fs;
pub mod package;
pub mod store;

pub use cli::invalid_argument;
pub use config::{
    invalid as config_invalid, not_found as config_not_found, parse_failed as config_parse_failed,
};
pub use engine::{request_failed as engine_request_failed, unreachable as engine_unreachable};
pub use fs::read_failed as file_read_failed;
pub use package::{asset_invalid, asset_not_found, manifest_invalid, manifest_not_found};
pub use store::{
    read_failed as store_read_failed, record_not_found, write_failed as store_write_failed,
};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for assetsync operations
#[derive(Error, Diagnostic, Debug)]
pub enum AssetSyncError {
    // Engine errors
    #[error("{method} {path} failed with status {status}: {reason}")]
    #[diagnostic(code(assetsync::engine::request_failed))]
    EngineRequestFailed {
        method: String,
        path: String,
        status: u16,
        reason: String,
    },

    #[error("Engine unreachable at {url}: {reason}")]
    #[diagnostic(
        code(assetsync::engine::unreachable),
        help("Check engine.url in the configuration or pass --engine-url")
    )]
    EngineUnreachable { url: String, reason: String },

    // Package errors
    #[error("Package manifest not found: {path}")]
    #[diagnostic(
        code(assetsync::package::manifest_not_found),
        help("A package directory must contain a manifest.yml at its root")
    )]
    ManifestNotFound { path: String },

    #[error("Invalid package manifest {path}: {reason}")]
    #[diagnostic(code(assetsync::package::manifest_invalid))]
    ManifestInvalid { path: String, reason: String },

    #[error("Bundled asset not found: {path}")]
    #[diagnostic(code(assetsync::package::asset_not_found))]
    AssetNotFound { path: String },

    #[error("Invalid asset definition {path}: {reason}")]
    #[diagnostic(
        code(assetsync::package::asset_invalid),
        help("Asset definitions must be valid JSON documents")
    )]
    AssetInvalid { path: String, reason: String },

    // Store errors
    #[error("Record '{id}' not found in collection '{collection}'")]
    #[diagnostic(
        code(assetsync::store::record_not_found),
        help("Install the package with 'assetsync install' before reconciling it")
    )]
    RecordNotFound { collection: String, id: String },

    #[error("Failed to read store document: {path}")]
    #[diagnostic(code(assetsync::store::read_failed))]
    StoreReadFailed { path: String, reason: String },

    #[error("Failed to write store document: {path}")]
    #[diagnostic(code(assetsync::store::write_failed))]
    StoreWriteFailed { path: String, reason: String },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(assetsync::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(code(assetsync::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(assetsync::config::invalid))]
    ConfigInvalid { message: String },

    // Command-line errors
    #[error("Invalid argument: {message}")]
    #[diagnostic(code(assetsync::cli::invalid_argument))]
    InvalidArgument { message: String },

    // File system errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(assetsync::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(assetsync::fs::io_error))]
    IoError { message: String },
}

impl AssetSyncError {
    /// Status code of a failed engine request, if this is one
    pub fn engine_status(&self) -> Option<u16> {
        match self {
            AssetSyncError::EngineRequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<std::io::Error> for AssetSyncError {
    fn from(err: std::io::Error) -> Self {
        AssetSyncError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for AssetSyncError {
    fn from(err: serde_yaml::Error) -> Self {
        AssetSyncError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for AssetSyncError {
    fn from(err: inquire::InquireError) -> Self {
        AssetSyncError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, AssetSyncError>;
