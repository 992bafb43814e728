//! Command-line argument errors

use super::AssetSyncError;

/// Creates an invalid argument error
pub fn invalid_argument(message: impl Into<String>) -> AssetSyncError {
    AssetSyncError::InvalidArgument {
        message: message.into(),
    }
}
