//! Test fixtures and in-memory collaborators for unit tests.
//!
//! Each fake records what it was asked to do so tests can assert on the exact
//! sequence of engine calls and store updates:
//!
//! ```ignore
//! use crate::test_fixtures::{MemoryStore, RecordingEngine};
//!
//! let engine = RecordingEngine::new();
//! engine.respond(Method::Delete, "_transform/old", 404);
//! // ... run the code under test ...
//! assert_eq!(engine.requests(), vec![/* expected requests */]);
//! ```

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};

use crate::assets::AssetLoader;
use crate::domain::{AssetRef, AssetType, DatasetDefinition, Inventory, PackageManifest};
use crate::engine::{EngineClient, EngineResponse, Method, TransportRequest};
use crate::error::{Result, asset_not_found, record_not_found};
use crate::registry::InstallationRegistry;
use crate::store::{InventoryStore, PackageRecord, RecordPatch};

/// Engine fake answering 200 unless a status was scripted for (method, path)
#[derive(Default)]
pub struct RecordingEngine {
    requests: RefCell<Vec<TransportRequest>>,
    statuses: RefCell<HashMap<(Method, String), u16>>,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every request for `method path` with `status`
    pub fn respond(&self, method: Method, path: &str, status: u16) {
        self.statuses
            .borrow_mut()
            .insert((method, path.to_string()), status);
    }

    /// Every request received, in order
    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.borrow().clone()
    }
}

impl EngineClient for RecordingEngine {
    fn transport_request(&self, request: &TransportRequest) -> Result<EngineResponse> {
        self.requests.borrow_mut().push(request.clone());
        let status = self
            .statuses
            .borrow()
            .get(&(request.method, request.path.clone()))
            .copied()
            .unwrap_or(200);
        if status < 300 {
            Ok(EngineResponse::ok())
        } else {
            Ok(EngineResponse::new(
                status,
                format!(r#"{{"status":{status}}}"#),
            ))
        }
    }
}

/// In-memory document store recording every update
#[derive(Default)]
pub struct MemoryStore {
    records: RefCell<BTreeMap<(String, String), PackageRecord>>,
    updates: RefCell<Vec<(String, String, RecordPatch)>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, collection: &str, record: PackageRecord) {
        self.records
            .borrow_mut()
            .insert((collection.to_string(), record.name.clone()), record);
    }

    pub fn record(&self, collection: &str, id: &str) -> Option<PackageRecord> {
        self.records
            .borrow()
            .get(&(collection.to_string(), id.to_string()))
            .cloned()
    }

    /// Every update call as (collection, id, patch), in order
    pub fn updates(&self) -> Vec<(String, String, RecordPatch)> {
        self.updates.borrow().clone()
    }

    /// Inventories written by successive updates
    pub fn written_inventories(&self) -> Vec<Inventory> {
        self.updates
            .borrow()
            .iter()
            .filter_map(|(_, _, patch)| patch.installed_es.clone())
            .collect()
    }
}

impl InventoryStore for MemoryStore {
    fn get(&self, collection: &str, id: &str) -> Result<Option<PackageRecord>> {
        Ok(self.record(collection, id))
    }

    fn create(&self, collection: &str, record: &PackageRecord) -> Result<()> {
        self.insert(collection, record.clone());
        Ok(())
    }

    fn update(&self, collection: &str, id: &str, patch: &RecordPatch) -> Result<()> {
        let mut records = self.records.borrow_mut();
        let record = records
            .get_mut(&(collection.to_string(), id.to_string()))
            .ok_or_else(|| record_not_found(collection, id))?;
        record.apply(patch);
        self.updates
            .borrow_mut()
            .push((collection.to_string(), id.to_string(), patch.clone()));
        Ok(())
    }

    fn list(&self, collection: &str) -> Result<Vec<PackageRecord>> {
        Ok(self
            .records
            .borrow()
            .iter()
            .filter(|((c, _), _)| c == collection)
            .map(|(_, record)| record.clone())
            .collect())
    }
}

/// Registry returning fixed snapshots
pub struct ScriptedRegistry {
    previous: Option<PackageRecord>,
    current: Option<PackageRecord>,
}

impl ScriptedRegistry {
    pub fn new(previous: Option<PackageRecord>, current: Option<PackageRecord>) -> Self {
        Self { previous, current }
    }
}

impl InstallationRegistry for ScriptedRegistry {
    fn previous_installation(&self, _package: &str) -> Result<Option<PackageRecord>> {
        Ok(self.previous.clone())
    }

    fn current_installation(&self, _package: &str) -> Result<Option<PackageRecord>> {
        Ok(self.current.clone())
    }
}

/// Asset loader over an in-memory map of bundled paths
#[derive(Default)]
pub struct MemoryAssets {
    files: HashMap<String, Vec<u8>>,
}

impl MemoryAssets {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, path: &str, content: &str) -> Self {
        self.files
            .insert(path.to_string(), content.as_bytes().to_vec());
        self
    }
}

impl AssetLoader for MemoryAssets {
    fn load(&self, path: &str) -> Result<Vec<u8>> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| asset_not_found(path))
    }
}

/// Dataset definition as found in the endpoint package
pub fn dataset(name: &str, path: &str) -> DatasetDefinition {
    DatasetDefinition {
        dataset_type: "metrics".to_string(),
        name: name.to_string(),
        title: None,
        release: Some("experimental".to_string()),
        package: Some("endpoint".to_string()),
        ingest_pipeline: Some("default".to_string()),
        elasticsearch: BTreeMap::new(),
        path: path.to_string(),
    }
}

/// Endpoint package manifest with `metadata` and `metadata_current` datasets
pub fn endpoint_manifest(version: &str) -> PackageManifest {
    PackageManifest {
        name: "endpoint".to_string(),
        version: version.to_string(),
        title: None,
        datasets: vec![
            dataset("endpoint.metadata", "metadata"),
            dataset("endpoint.metadata_current", "metadata_current"),
        ],
    }
}

/// Package record owning the given assets
pub fn record(name: &str, version: &str, assets: &[AssetRef]) -> PackageRecord {
    PackageRecord {
        name: name.to_string(),
        version: version.to_string(),
        installed_es: assets.iter().cloned().collect(),
    }
}

pub fn pipeline(id: &str) -> AssetRef {
    AssetRef::new(id, AssetType::IngestPipeline)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_engine_defaults_to_ok() {
        let engine = RecordingEngine::new();
        let response = engine
            .transport_request(&TransportRequest::get("_cat"))
            .unwrap();
        assert!(response.is_success());
    }

    #[test]
    fn test_memory_store_update_requires_record() {
        let store = MemoryStore::new();
        assert!(
            store
                .update("c", "missing", &RecordPatch::version("1"))
                .is_err()
        );
        assert!(store.updates().is_empty());
    }
}
