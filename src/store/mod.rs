//! Package record persistence
//!
//! A package record tracks which engine assets an installed package owns.
//! Records are documents keyed by package name inside a collection.

pub mod file;

use serde::{Deserialize, Serialize};

use crate::domain::Inventory;
use crate::error::Result;

pub use file::FileStore;

/// Collection holding package records
pub const DEFAULT_COLLECTION: &str = "epm-packages";

/// Persisted record of one installed package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRecord {
    pub name: String,

    pub version: String,

    /// Engine assets owned by this package, in install order
    #[serde(default)]
    pub installed_es: Inventory,
}

impl PackageRecord {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            installed_es: Inventory::new(),
        }
    }

    /// Apply a partial update in place
    pub fn apply(&mut self, patch: &RecordPatch) {
        if let Some(installed_es) = &patch.installed_es {
            self.installed_es = installed_es.clone();
        }
        if let Some(version) = &patch.version {
            self.version.clone_from(version);
        }
    }
}

/// Partial update of a package record; absent fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installed_es: Option<Inventory>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl RecordPatch {
    /// Patch replacing the asset inventory
    pub fn inventory(installed_es: Inventory) -> Self {
        Self {
            installed_es: Some(installed_es),
            version: None,
        }
    }

    /// Patch replacing the recorded version
    pub fn version(version: impl Into<String>) -> Self {
        Self {
            installed_es: None,
            version: Some(version.into()),
        }
    }
}

/// Document store over package records
pub trait InventoryStore {
    /// Fetch a record, `None` if it does not exist
    fn get(&self, collection: &str, id: &str) -> Result<Option<PackageRecord>>;

    /// Create or replace a record, keyed by its name
    fn create(&self, collection: &str, record: &PackageRecord) -> Result<()>;

    /// Apply a patch to an existing record
    fn update(&self, collection: &str, id: &str, patch: &RecordPatch) -> Result<()>;

    /// Every record in a collection, ordered by id
    fn list(&self, collection: &str) -> Result<Vec<PackageRecord>>;
}

impl<T: InventoryStore + ?Sized> InventoryStore for &T {
    fn get(&self, collection: &str, id: &str) -> Result<Option<PackageRecord>> {
        (**self).get(collection, id)
    }

    fn create(&self, collection: &str, record: &PackageRecord) -> Result<()> {
        (**self).create(collection, record)
    }

    fn update(&self, collection: &str, id: &str, patch: &RecordPatch) -> Result<()> {
        (**self).update(collection, id, patch)
    }

    fn list(&self, collection: &str) -> Result<Vec<PackageRecord>> {
        (**self).list(collection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AssetRef;

    #[test]
    fn test_apply_inventory_patch() {
        let mut record = PackageRecord::new("endpoint", "0.15.0");
        record.apply(&RecordPatch::inventory(
            vec![AssetRef::transform("t1")].into(),
        ));
        assert_eq!(record.installed_es.ids(), vec!["t1"]);
        assert_eq!(record.version, "0.15.0");
    }

    #[test]
    fn test_apply_version_patch_keeps_inventory() {
        let mut record = PackageRecord::new("endpoint", "0.15.0");
        record.installed_es.push(AssetRef::transform("t1"));
        record.apply(&RecordPatch::version("0.16.0"));
        assert_eq!(record.version, "0.16.0");
        assert_eq!(record.installed_es.len(), 1);
    }

    #[test]
    fn test_patch_serializes_only_present_fields() {
        let json = serde_json::to_string(&RecordPatch::inventory(Inventory::new())).unwrap();
        assert_eq!(json, r#"{"installed_es":[]}"#);
    }

    #[test]
    fn test_record_without_inventory_deserializes() {
        let record: PackageRecord =
            serde_json::from_str(r#"{"name":"endpoint","version":"1.0.0"}"#).unwrap();
        assert!(record.installed_es.is_empty());
    }
}
