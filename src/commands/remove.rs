//! Remove command implementation
//!
//! Tears down every transform recorded for a package. Other asset types stay
//! in the record untouched.

use inquire::Confirm;

use super::helpers::{Backends, GlobalOptions, load_settings};
use crate::cli::RemoveArgs;
use crate::domain::AssetType;
use crate::error::{Result, record_not_found};
use crate::reconcile::PackageRemover;
use crate::store::InventoryStore;
use crate::ui;

/// Run remove command
pub fn run(options: &GlobalOptions, args: RemoveArgs) -> Result<()> {
    let settings = load_settings(options)?;
    let backends = Backends::connect(&settings)?;

    let record = backends
        .store
        .get(&backends.collection, &args.name)?
        .ok_or_else(|| record_not_found(&backends.collection, &args.name))?;
    let transforms = record
        .installed_es
        .of_type(AssetType::Transform)
        .count();

    if transforms > 0 && !args.yes && !confirm_remove(&args.name, transforms)? {
        println!("Removal cancelled.");
        return Ok(());
    }

    let removed = PackageRemover::new(&backends.engine, &backends.store)
        .with_collection(backends.collection.clone())
        .remove(&args.name)?;

    ui::print_removed(&args.name, &removed);
    Ok(())
}

fn confirm_remove(package: &str, transforms: usize) -> Result<bool> {
    println!("\n{transforms} transform(s) of {package} will be stopped and deleted.\n");
    Ok(Confirm::new("Proceed with removal?")
        .with_default(true)
        .with_help_message("Press Enter to confirm, or 'n' to cancel")
        .prompt()?)
}
