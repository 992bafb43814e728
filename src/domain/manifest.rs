//! Package manifest (manifest.yml) data structures

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, manifest_invalid};

/// Declared contents of one package version
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageManifest {
    pub name: String,

    pub version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default)]
    pub datasets: Vec<DatasetDefinition>,
}

/// One data stream declared by a package
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetDefinition {
    /// Data stream type (e.g., "metrics", "logs")
    #[serde(rename = "type")]
    pub dataset_type: String,

    /// Fully qualified dataset name (e.g., "endpoint.metadata")
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingest_pipeline: Option<String>,

    /// Index template settings, keyed by dotted setting name
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub elasticsearch: BTreeMap<String, serde_yaml::Value>,

    /// Directory name of this dataset inside the package
    pub path: String,
}

impl PackageManifest {
    /// Parse a manifest from YAML; `source` names the file for error messages
    pub fn from_yaml(yaml: &str, source: &str) -> Result<Self> {
        let manifest: Self =
            serde_yaml::from_str(yaml).map_err(|e| manifest_invalid(source, e.to_string()))?;
        manifest.validate(source)?;
        Ok(manifest)
    }

    /// Key prefixing every bundled asset path of this package version
    pub fn pkgkey(&self) -> String {
        format!("{}-{}", self.name, self.version)
    }

    /// Dataset whose directory matches the given path segment
    pub fn dataset_for_path(&self, dataset_dir: &str) -> Option<&DatasetDefinition> {
        self.datasets.iter().find(|d| d.path == dataset_dir)
    }

    /// Check required fields
    pub fn validate(&self, source: &str) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(manifest_invalid(source, "package name cannot be empty"));
        }
        if self.name.contains('/') {
            return Err(manifest_invalid(source, "package name cannot contain '/'"));
        }
        if self.version.trim().is_empty() {
            return Err(manifest_invalid(source, "package version cannot be empty"));
        }
        for dataset in &self.datasets {
            if dataset.name.is_empty() || dataset.path.is_empty() {
                return Err(manifest_invalid(
                    source,
                    "every dataset needs a name and a path",
                ));
            }
        }
        Ok(())
    }
}
