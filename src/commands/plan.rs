//! Plan command implementation

use super::helpers::{Backends, GlobalOptions, load_settings};
use crate::cli::PlanArgs;
use crate::error::Result;
use crate::package::Package;
use crate::reconcile::Reconciler;
use crate::registry::StoreRegistry;
use crate::ui;

/// Run plan command
pub fn run(options: &GlobalOptions, args: PlanArgs) -> Result<()> {
    let settings = load_settings(options)?;
    let package = Package::load(&args.package)?;
    let backends = Backends::connect(&settings)?;

    let registry = StoreRegistry::new(&backends.store, backends.collection.clone());
    let assets = package.assets();
    let plan = Reconciler::new(&backends.engine, &backends.store, &registry, &assets)
        .with_collection(backends.collection.clone())
        .plan(&package.manifest, &package.paths)?;

    ui::print_plan(&package.manifest.name, &package.manifest.version, &plan);
    Ok(())
}
