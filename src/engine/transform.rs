//! Transform job lifecycle calls
//!
//! | Verb   | Method | Path                     | Query                   |
//! |--------|--------|--------------------------|-------------------------|
//! | stop   | POST   | `_transform/{id}/_stop`  | `force=true`            |
//! | delete | DELETE | `_transform/{id}`        | `force=true`            |
//! | create | PUT    | `_transform/{id}`        | `defer_validation=true` |
//! | start  | POST   | `_transform/{id}/_start` |                         |
//!
//! Stop and delete treat 404 as "already gone".

use tracing::info;

use super::{EngineClient, TransportRequest, dispatch};
use crate::error::Result;

const NOT_FOUND: u16 = 404;

pub fn stop_request(id: &str) -> TransportRequest {
    TransportRequest::post(format!("_transform/{id}/_stop"))
        .with_query("force=true")
        .ignoring(NOT_FOUND)
}

pub fn delete_request(id: &str) -> TransportRequest {
    TransportRequest::delete(format!("_transform/{id}"))
        .with_query("force=true")
        .ignoring(NOT_FOUND)
}

pub fn create_request(id: &str, definition: impl Into<String>) -> TransportRequest {
    TransportRequest::put(format!("_transform/{id}"))
        .with_query("defer_validation=true")
        .with_body(definition)
}

pub fn start_request(id: &str) -> TransportRequest {
    TransportRequest::post(format!("_transform/{id}/_start"))
}

/// Transform lifecycle operations over an engine client
pub struct TransformApi<'a> {
    client: &'a dyn EngineClient,
}

impl<'a> TransformApi<'a> {
    pub fn new(client: &'a dyn EngineClient) -> Self {
        Self { client }
    }

    pub fn stop(&self, id: &str) -> Result<()> {
        info!(transform = id, "stopping transform");
        dispatch(self.client, &stop_request(id))?;
        Ok(())
    }

    pub fn delete(&self, id: &str) -> Result<()> {
        info!(transform = id, "deleting transform");
        dispatch(self.client, &delete_request(id))?;
        Ok(())
    }

    /// Stop then delete, both tolerating an absent transform
    pub fn teardown(&self, id: &str) -> Result<()> {
        self.stop(id)?;
        self.delete(id)
    }

    pub fn create(&self, id: &str, definition: &str) -> Result<()> {
        info!(transform = id, "creating transform");
        dispatch(self.client, &create_request(id, definition))?;
        Ok(())
    }

    pub fn start(&self, id: &str) -> Result<()> {
        info!(transform = id, "starting transform");
        dispatch(self.client, &start_request(id))?;
        Ok(())
    }
}
