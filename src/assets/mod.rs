//! Bundled asset loading
//!
//! Assets are addressed by their bundled path (`{pkgkey}/...`). A
//! [`DirectoryAssets`] loader serves them from an unpacked package directory.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, asset_not_found, file_read_failed};

/// Resolves a bundled definition body by asset path
pub trait AssetLoader {
    fn load(&self, path: &str) -> Result<Vec<u8>>;
}

impl<T: AssetLoader + ?Sized> AssetLoader for &T {
    fn load(&self, path: &str) -> Result<Vec<u8>> {
        (**self).load(path)
    }
}

/// Assets of one package version unpacked into a directory
#[derive(Debug, Clone)]
pub struct DirectoryAssets {
    root: PathBuf,
    pkgkey: String,
}

impl DirectoryAssets {
    pub fn new(root: impl Into<PathBuf>, pkgkey: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            pkgkey: pkgkey.into(),
        }
    }

    /// Every file below the package root as a bundled path, sorted.
    ///
    /// Hidden files and directories are skipped.
    pub fn discover(&self) -> Result<Vec<String>> {
        let mut paths = Vec::new();

        let walker = WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                entry.depth() == 0 || !entry.file_name().to_string_lossy().starts_with('.')
            });

        for entry in walker {
            let entry =
                entry.map_err(|e| file_read_failed(self.root.display().to_string(), e.to_string()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            if let Some(path) = self.bundled_path(entry.path()) {
                paths.push(path);
            }
        }

        paths.sort();
        Ok(paths)
    }

    fn bundled_path(&self, file: &Path) -> Option<String> {
        let relative = file.strip_prefix(&self.root).ok()?;
        let segments: Vec<String> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        Some(format!("{}/{}", self.pkgkey, segments.join("/")))
    }

    fn file_for(&self, path: &str) -> Option<PathBuf> {
        let relative = path.strip_prefix(&self.pkgkey)?.strip_prefix('/')?;
        if relative.is_empty() || relative.split('/').any(|s| s == "..") {
            return None;
        }
        Some(self.root.join(relative))
    }
}

impl AssetLoader for DirectoryAssets {
    fn load(&self, path: &str) -> Result<Vec<u8>> {
        let file = self.file_for(path).ok_or_else(|| asset_not_found(path))?;
        if !file.is_file() {
            return Err(asset_not_found(path));
        }
        fs::read(&file).map_err(|e| file_read_failed(file.display().to_string(), e.to_string()))
    }
}
