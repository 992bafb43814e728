//! Package transform teardown

use tracing::info;

use super::{patch_inventory, stored_record};
use crate::domain::{AssetRef, AssetType};
use crate::engine::{EngineClient, TransformApi};
use crate::error::Result;
use crate::store::{DEFAULT_COLLECTION, InventoryStore};

/// Tears down the transforms recorded for a package
pub struct PackageRemover<'a> {
    engine: &'a dyn EngineClient,
    store: &'a dyn InventoryStore,
    collection: String,
}

impl<'a> PackageRemover<'a> {
    pub fn new(engine: &'a dyn EngineClient, store: &'a dyn InventoryStore) -> Self {
        Self {
            engine,
            store,
            collection: DEFAULT_COLLECTION.to_string(),
        }
    }

    #[must_use]
    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    /// Stop and delete every transform of `package`, then drop them from its record.
    ///
    /// Other asset types stay in the record. Returns the removed transforms.
    pub fn remove(&self, package: &str) -> Result<Vec<AssetRef>> {
        let record = stored_record(self.store, &self.collection, package)?;
        let transforms: Vec<AssetRef> = record
            .installed_es
            .of_type(AssetType::Transform)
            .cloned()
            .collect();
        if transforms.is_empty() {
            info!(package, "no transforms to remove");
            return Ok(transforms);
        }

        let api = TransformApi::new(self.engine);
        for asset in &transforms {
            api.teardown(&asset.id)?;
        }

        let ids: Vec<&str> = transforms.iter().map(|a| a.id.as_str()).collect();
        patch_inventory(
            self.store,
            &self.collection,
            package,
            record.installed_es.without(&ids),
        )?;
        info!(package, removed = transforms.len(), "removed transforms");
        Ok(transforms)
    }
}
