//! List command implementation
//!
//! Lists package records with the engine assets each one owns.

use super::helpers::{GlobalOptions, load_settings};
use crate::cli::ListArgs;
use crate::error::Result;
use crate::store::{FileStore, InventoryStore};
use crate::ui;

/// Run list command
pub fn run(options: &GlobalOptions, args: ListArgs) -> Result<()> {
    let settings = load_settings(options)?;
    let store = FileStore::new(&settings.store.root);

    let mut records = store.list(&settings.store.collection)?;
    if let Some(name) = &args.name {
        records.retain(|r| &r.name == name);
    }

    ui::print_records(&records);
    Ok(())
}
