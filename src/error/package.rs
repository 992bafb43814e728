//! Package and bundled asset errors

use super::AssetSyncError;

/// Creates a manifest not found error
pub fn manifest_not_found(path: impl Into<String>) -> AssetSyncError {
    AssetSyncError::ManifestNotFound { path: path.into() }
}

/// Creates an invalid manifest error
pub fn manifest_invalid(path: impl Into<String>, reason: impl Into<String>) -> AssetSyncError {
    AssetSyncError::ManifestInvalid {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an asset not found error
pub fn asset_not_found(path: impl Into<String>) -> AssetSyncError {
    AssetSyncError::AssetNotFound { path: path.into() }
}

/// Creates an invalid asset definition error
pub fn asset_invalid(path: impl Into<String>, reason: impl Into<String>) -> AssetSyncError {
    AssetSyncError::AssetInvalid {
        path: path.into(),
        reason: reason.into(),
    }
}
