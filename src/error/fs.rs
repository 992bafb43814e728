//! File system errors

use super::AssetSyncError;

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> AssetSyncError {
    AssetSyncError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

