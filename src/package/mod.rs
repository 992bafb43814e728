//! Unpacked package directories
//!
//! A package directory holds `manifest.yml` at its root plus the bundled
//! assets, e.g. `dataset/metadata/elasticsearch/transform/default.json`.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::assets::DirectoryAssets;
use crate::domain::PackageManifest;
use crate::error::{Result, file_read_failed, manifest_not_found};

const MANIFEST_FILES: [&str; 2] = ["manifest.yml", "manifest.yaml"];

/// A package loaded from disk
#[derive(Debug, Clone)]
pub struct Package {
    pub root: PathBuf,
    pub manifest: PackageManifest,
    /// Bundled asset paths, sorted
    pub paths: Vec<String>,
}

impl Package {
    /// Read the manifest and discover bundled assets
    pub fn load(root: &Path) -> Result<Self> {
        let manifest_path = MANIFEST_FILES
            .iter()
            .map(|name| root.join(name))
            .find(|path| path.is_file())
            .ok_or_else(|| manifest_not_found(root.join(MANIFEST_FILES[0]).display().to_string()))?;

        let yaml = fs::read_to_string(&manifest_path)
            .map_err(|e| file_read_failed(manifest_path.display().to_string(), e.to_string()))?;
        let manifest = PackageManifest::from_yaml(&yaml, &manifest_path.display().to_string())?;

        let paths = DirectoryAssets::new(root, manifest.pkgkey()).discover()?;
        debug!(
            package = %manifest.name,
            version = %manifest.version,
            assets = paths.len(),
            "loaded package"
        );

        Ok(Self {
            root: root.to_path_buf(),
            manifest,
            paths,
        })
    }

    /// Loader serving this package's bundled assets
    pub fn assets(&self) -> DirectoryAssets {
        DirectoryAssets::new(&self.root, self.manifest.pkgkey())
    }
}
