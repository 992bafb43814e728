//! Transform reconciliation
//!
//! Brings the transforms running in the engine in line with the ones a
//! package version bundles, and keeps the package record's inventory in sync:
//!
//! 1. derive target ids from the bundled paths ([`transform_targets`])
//! 2. diff them against the previous installation ([`ReconcilePlan`])
//! 3. stop and delete every removed transform, then patch it out of the record
//! 4. create every new transform, start them all, then patch them into the record
//!
//! Calls are issued one at a time. Nothing is rolled back on failure.

pub mod plan;
mod remove;


use tracing::{debug, info};

use crate::assets::AssetLoader;
use crate::domain::{AssetRef, Inventory, PackageManifest};
use crate::engine::{EngineClient, TransformApi};
use crate::error::{Result, asset_invalid, record_not_found};
use crate::registry::InstallationRegistry;
use crate::store::{DEFAULT_COLLECTION, InventoryStore, PackageRecord, RecordPatch};

pub use plan::{ReconcilePlan, TransformTarget, transform_targets};
pub use remove::PackageRemover;

/// Result of a completed reconcile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileOutcome {
    pub plan: ReconcilePlan,

    /// Inventory the registry reports as currently declared.
    ///
    /// With [`StoreRegistry`](crate::registry::StoreRegistry) both snapshots
    /// come from the same stored record, so this equals the previous
    /// inventory.
    pub declared: Inventory,

    /// Persisted inventory after both patches
    pub inventory: Inventory,

    pub removed: Vec<AssetRef>,
    pub installed: Vec<AssetRef>,
}

/// Reconciles one package's transforms against its collaborators
pub struct Reconciler<'a> {
    engine: &'a dyn EngineClient,
    store: &'a dyn InventoryStore,
    registry: &'a dyn InstallationRegistry,
    assets: &'a dyn AssetLoader,
    collection: String,
}

impl<'a> Reconciler<'a> {
    pub fn new(
        engine: &'a dyn EngineClient,
        store: &'a dyn InventoryStore,
        registry: &'a dyn InstallationRegistry,
        assets: &'a dyn AssetLoader,
    ) -> Self {
        Self {
            engine,
            store,
            registry,
            assets,
            collection: DEFAULT_COLLECTION.to_string(),
        }
    }

    #[must_use]
    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    /// Compute what [`Reconciler::reconcile`] would do, without side effects
    pub fn plan<S: AsRef<str>>(
        &self,
        manifest: &PackageManifest,
        paths: &[S],
    ) -> Result<ReconcilePlan> {
        let targets = transform_targets(manifest, paths);
        let previous = self.previous_inventory(&manifest.name)?;
        Ok(ReconcilePlan::compute(&previous, &targets))
    }

    /// Reconcile the transforms of `manifest` against the previous installation
    pub fn reconcile<S: AsRef<str>>(
        &self,
        manifest: &PackageManifest,
        paths: &[S],
    ) -> Result<ReconcileOutcome> {
        let package = manifest.name.as_str();
        let targets = transform_targets(manifest, paths);

        let previous = self.previous_inventory(package)?;
        let declared = self
            .registry
            .current_installation(package)?
            .map(|record| record.installed_es)
            .unwrap_or_default();
        debug!(
            package,
            previous = previous.len(),
            declared = declared.len(),
            targets = targets.len(),
            "fetched installation snapshots"
        );

        let plan = ReconcilePlan::compute(&previous, &targets);
        if plan.is_noop() {
            info!(package, "transforms already up to date");
            let inventory = self
                .store
                .get(&self.collection, package)?
                .map(|record| record.installed_es)
                .unwrap_or(previous);
            return Ok(ReconcileOutcome {
                plan,
                declared,
                inventory,
                removed: Vec::new(),
                installed: Vec::new(),
            });
        }

        // Fail before touching the engine when there is nothing to patch
        let mut record = self.record(package)?;
        let api = TransformApi::new(self.engine);

        if !plan.to_remove.is_empty() {
            for asset in &plan.to_remove {
                api.teardown(&asset.id)?;
            }
            record = self.patch_inventory(package, record.installed_es.without(&plan.remove_ids()))?;
        }

        if !plan.to_install.is_empty() {
            let definitions = self.load_definitions(&plan.to_install)?;
            for (target, definition) in plan.to_install.iter().zip(&definitions) {
                api.create(&target.id, definition)?;
            }
            for target in &plan.to_install {
                api.start(&target.id)?;
            }
            let installed = plan.install_refs();
            record = self.patch_inventory(package, record.installed_es.with_appended(&installed))?;
        }

        info!(
            package,
            removed = plan.to_remove.len(),
            installed = plan.to_install.len(),
            "reconciled transforms"
        );

        Ok(ReconcileOutcome {
            removed: plan.to_remove.clone(),
            installed: plan.install_refs(),
            plan,
            declared,
            inventory: record.installed_es,
        })
    }

    fn previous_inventory(&self, package: &str) -> Result<Inventory> {
        Ok(self
            .registry
            .previous_installation(package)?
            .map(|record| record.installed_es)
            .unwrap_or_default())
    }

    fn record(&self, package: &str) -> Result<PackageRecord> {
        stored_record(self.store, &self.collection, package)
    }

    fn patch_inventory(&self, package: &str, inventory: Inventory) -> Result<PackageRecord> {
        patch_inventory(self.store, &self.collection, package, inventory)
    }

    /// Load every definition up front; each must be a JSON document
    fn load_definitions(&self, targets: &[TransformTarget]) -> Result<Vec<String>> {
        targets
            .iter()
            .map(|target| {
                let bytes = self.assets.load(&target.path)?;
                let body = String::from_utf8(bytes)
                    .map_err(|e| asset_invalid(&target.path, e.to_string()))?;
                serde_json::from_str::<serde_json::Value>(&body)
                    .map_err(|e| asset_invalid(&target.path, e.to_string()))?;
                Ok(body)
            })
            .collect()
    }
}

fn stored_record(
    store: &dyn InventoryStore,
    collection: &str,
    package: &str,
) -> Result<PackageRecord> {
    store
        .get(collection, package)?
        .ok_or_else(|| record_not_found(collection, package))
}

/// Write `inventory` to the record and return the record as stored
fn patch_inventory(
    store: &dyn InventoryStore,
    collection: &str,
    package: &str,
    inventory: Inventory,
) -> Result<PackageRecord> {
    debug!(package, assets = inventory.len(), "updating package inventory");
    store.update(collection, package, &RecordPatch::inventory(inventory))?;
    stored_record(store, collection, package)
}
