//! Document store errors

use super::AssetSyncError;

/// Creates a record not found error
pub fn record_not_found(collection: impl Into<String>, id: impl Into<String>) -> AssetSyncError {
    AssetSyncError::RecordNotFound {
        collection: collection.into(),
        id: id.into(),
    }
}

/// Creates a store read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> AssetSyncError {
    AssetSyncError::StoreReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a store write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> AssetSyncError {
    AssetSyncError::StoreWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
