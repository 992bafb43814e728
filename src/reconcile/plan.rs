//! Transform diff computation
//!
//! Pure functions only: nothing here talks to the engine or the store.

use tracing::warn;

use crate::domain::{AssetPath, AssetRef, AssetType, Inventory, PackageManifest};

/// A transform the package bundles, with the id it is installed under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformTarget {
    pub id: String,

    /// Bundled path of the definition
    pub path: String,
}

impl TransformTarget {
    pub fn asset_ref(&self) -> AssetRef {
        AssetRef::transform(self.id.clone())
    }
}

/// Transforms bundled with `manifest`, in path order.
///
/// The id is `{type}-{dataset}-{file stem}-{version}`. Paths outside any
/// declared dataset are skipped; an id derived twice is kept once.
pub fn transform_targets<S: AsRef<str>>(
    manifest: &PackageManifest,
    paths: &[S],
) -> Vec<TransformTarget> {
    let mut targets: Vec<TransformTarget> = Vec::new();

    for path in paths {
        let path = path.as_ref();
        let Some(parts) = AssetPath::parse(path) else {
            continue;
        };
        if !parts.is_asset(AssetType::Transform) {
            continue;
        }

        let Some(dataset) = parts
            .dataset
            .and_then(|segment| manifest.dataset_for_path(segment))
        else {
            warn!(path, "transform definition outside any declared dataset, skipping");
            continue;
        };

        let id = format!(
            "{}-{}-{}-{}",
            dataset.dataset_type,
            dataset.name,
            parts.file_stem(),
            manifest.version
        );
        if targets.iter().any(|t| t.id == id) {
            continue;
        }
        targets.push(TransformTarget {
            id,
            path: path.to_string(),
        });
    }

    targets
}

/// What a reconcile has to tear down and install
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcilePlan {
    /// Previously installed transforms no longer bundled, in previous order
    pub to_remove: Vec<AssetRef>,

    /// Bundled transforms not yet installed, in path order
    pub to_install: Vec<TransformTarget>,

    /// Previously installed transforms that are still bundled
    pub kept: Vec<AssetRef>,
}

impl ReconcilePlan {
    /// Diff the transforms of `previous` against `targets` by id
    pub fn compute(previous: &Inventory, targets: &[TransformTarget]) -> Self {
        let (kept, to_remove): (Vec<AssetRef>, Vec<AssetRef>) = previous
            .of_type(AssetType::Transform)
            .cloned()
            .partition(|asset| targets.iter().any(|t| t.id == asset.id));

        let to_install = targets
            .iter()
            .filter(|t| !previous.contains(&t.id))
            .cloned()
            .collect();

        Self {
            to_remove,
            to_install,
            kept,
        }
    }

    pub fn is_noop(&self) -> bool {
        self.to_remove.is_empty() && self.to_install.is_empty()
    }

    pub fn remove_ids(&self) -> Vec<&str> {
        self.to_remove.iter().map(|a| a.id.as_str()).collect()
    }

    pub fn install_refs(&self) -> Vec<AssetRef> {
        self.to_install.iter().map(TransformTarget::asset_ref).collect()
    }
}
