//! Installation registry
//!
//! Answers "what did this package have installed before this install" and
//! "what does it have installed now". The reconciler reads both snapshots but
//! never writes through the registry.

use crate::error::Result;
use crate::store::{InventoryStore, PackageRecord};

/// Source of installation snapshots for a package
pub trait InstallationRegistry {
    /// Installation as it stood before the current install started
    fn previous_installation(&self, package: &str) -> Result<Option<PackageRecord>>;

    /// Installation as currently declared
    fn current_installation(&self, package: &str) -> Result<Option<PackageRecord>>;
}

/// Registry reading installations from an inventory store.
///
/// Both snapshots are read from the same record at call time, so the
/// previous and current installations are always identical.
pub struct StoreRegistry<'a> {
    store: &'a dyn InventoryStore,
    collection: String,
}

impl<'a> StoreRegistry<'a> {
    pub fn new(store: &'a dyn InventoryStore, collection: impl Into<String>) -> Self {
        Self {
            store,
            collection: collection.into(),
        }
    }
}

impl InstallationRegistry for StoreRegistry<'_> {
    fn previous_installation(&self, package: &str) -> Result<Option<PackageRecord>> {
        self.store.get(&self.collection, package)
    }

    fn current_installation(&self, package: &str) -> Result<Option<PackageRecord>> {
        self.store.get(&self.collection, package)
    }
}
