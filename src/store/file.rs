//! JSON document store on the local filesystem
//!
//! Layout: `<root>/<collection>/<id>.json`. Writes go through a temporary file
//! in the same directory and are renamed into place.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use super::{InventoryStore, PackageRecord, RecordPatch};
use crate::error::{Result, record_not_found, store_read_failed, store_write_failed};

/// Filesystem-backed [`InventoryStore`]
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn document_path(&self, collection: &str, id: &str) -> Result<PathBuf> {
        for (kind, value) in [("collection", collection), ("id", id)] {
            if value.is_empty()
                || value.contains(['/', '\\'])
                || value == "."
                || value == ".."
            {
                return Err(store_write_failed(
                    format!("{collection}/{id}"),
                    format!("invalid document {kind} '{value}'"),
                ));
            }
        }
        Ok(self.root.join(collection).join(format!("{id}.json")))
    }

    fn read_document(path: &Path) -> Result<PackageRecord> {
        let content = fs::read_to_string(path)
            .map_err(|e| store_read_failed(path.display().to_string(), e.to_string()))?;
        serde_json::from_str(&content)
            .map_err(|e| store_read_failed(path.display().to_string(), e.to_string()))
    }

    fn write_document(path: &Path, record: &PackageRecord) -> Result<()> {
        let display = path.display().to_string();
        let dir = path
            .parent()
            .ok_or_else(|| store_write_failed(&display, "document has no parent directory"))?;
        fs::create_dir_all(dir).map_err(|e| store_write_failed(&display, e.to_string()))?;

        let json = serde_json::to_string_pretty(record)
            .map_err(|e| store_write_failed(&display, e.to_string()))?;

        let mut temp =
            NamedTempFile::new_in(dir).map_err(|e| store_write_failed(&display, e.to_string()))?;
        temp.write_all(json.as_bytes())
            .and_then(|()| temp.write_all(b"\n"))
            .map_err(|e| store_write_failed(&display, e.to_string()))?;
        temp.persist(path)
            .map_err(|e| store_write_failed(&display, e.error.to_string()))?;
        Ok(())
    }
}

impl InventoryStore for FileStore {
    fn get(&self, collection: &str, id: &str) -> Result<Option<PackageRecord>> {
        let path = self.document_path(collection, id)?;
        if !path.is_file() {
            return Ok(None);
        }
        Self::read_document(&path).map(Some)
    }

    fn create(&self, collection: &str, record: &PackageRecord) -> Result<()> {
        let path = self.document_path(collection, &record.name)?;
        debug!(collection, id = %record.name, "writing package record");
        Self::write_document(&path, record)
    }

    fn update(&self, collection: &str, id: &str, patch: &RecordPatch) -> Result<()> {
        let path = self.document_path(collection, id)?;
        if !path.is_file() {
            return Err(record_not_found(collection, id));
        }
        let mut record = Self::read_document(&path)?;
        record.apply(patch);
        debug!(collection, id, "updating package record");
        Self::write_document(&path, &record)
    }

    fn list(&self, collection: &str) -> Result<Vec<PackageRecord>> {
        let dir = self.root.join(collection);
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&dir)
            .map_err(|e| store_read_failed(dir.display().to_string(), e.to_string()))?;

        let mut paths: Vec<PathBuf> = entries
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .collect();
        paths.sort();

        paths.iter().map(|path| Self::read_document(path)).collect()
    }
}
