//! Install command implementation
//!
//! Loads an unpacked package, makes sure its record exists, reconciles the
//! bundled transforms and finally records the installed version.

use tracing::info;

use super::helpers::{Backends, GlobalOptions, load_settings};
use crate::cli::InstallArgs;
use crate::error::Result;
use crate::package::Package;
use crate::reconcile::Reconciler;
use crate::registry::StoreRegistry;
use crate::store::{InventoryStore, PackageRecord, RecordPatch};
use crate::ui;

/// Run install command
pub fn run(options: &GlobalOptions, args: InstallArgs) -> Result<()> {
    let settings = load_settings(options)?;
    let package = Package::load(&args.package)?;
    let backends = Backends::connect(&settings)?;
    let manifest = &package.manifest;

    let registry = StoreRegistry::new(&backends.store, backends.collection.clone());
    let assets = package.assets();
    let reconciler = Reconciler::new(&backends.engine, &backends.store, &registry, &assets)
        .with_collection(backends.collection.clone());

    if args.dry_run {
        let plan = reconciler.plan(manifest, &package.paths)?;
        ui::print_plan(&manifest.name, &manifest.version, &plan);
        return Ok(());
    }

    ensure_record(&backends, &package)?;
    let outcome = reconciler.reconcile(manifest, &package.paths)?;
    backends.store.update(
        &backends.collection,
        &manifest.name,
        &RecordPatch::version(manifest.version.clone()),
    )?;

    ui::print_outcome(&manifest.name, &manifest.version, &outcome);
    Ok(())
}

/// Create an empty record on first install
fn ensure_record(backends: &Backends, package: &Package) -> Result<()> {
    let name = &package.manifest.name;
    if backends.store.get(&backends.collection, name)?.is_some() {
        return Ok(());
    }
    info!(package = %name, "creating package record");
    backends.store.create(
        &backends.collection,
        &PackageRecord::new(name.clone(), package.manifest.version.clone()),
    )
}
