//! assetsync - installs package transforms into a search engine
//!
//! The core is [`reconcile::Reconciler`], which diffs the transforms a package
//! version bundles against the ones its previous version installed, then
//! stops, deletes, creates and starts transforms through an
//! [`engine::EngineClient`] and keeps the package record in an
//! [`store::InventoryStore`] in sync.

pub mod assets;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod grouping;
pub mod package;
pub mod reconcile;
pub mod registry;
pub mod store;
pub mod ui;

#[cfg(test)]
mod test_fixtures;
