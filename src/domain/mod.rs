//! Domain models for assetsync
//!
//! This module contains pure domain objects: asset references, inventories,
//! package manifests and bundled asset paths.
//! These types are free of I/O and carry the ordering and uniqueness invariants
//! the reconciler relies on.

pub mod asset;
pub mod manifest;
pub mod path;

pub use asset::{AssetRef, AssetType, Inventory};
pub use manifest::{DatasetDefinition, PackageManifest};
pub use path::AssetPath;
