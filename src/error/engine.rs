//! Engine transport errors

use super::AssetSyncError;
use crate::engine::TransportRequest;

/// Creates an error for a request the engine answered with a non-success status
pub fn request_failed(
    request: &TransportRequest,
    status: u16,
    reason: impl Into<String>,
) -> AssetSyncError {
    AssetSyncError::EngineRequestFailed {
        method: request.method.to_string(),
        path: request.path.clone(),
        status,
        reason: reason.into(),
    }
}

/// Creates an error for an engine that could not be reached at all
pub fn unreachable(url: impl Into<String>, reason: impl Into<String>) -> AssetSyncError {
    AssetSyncError::EngineUnreachable {
        url: url.into(),
        reason: reason.into(),
    }
}
