//! Asset reference and inventory types
//!
//! An inventory is the ordered list of engine assets a package installation
//! owns. Ids are unique within an inventory; equality for diffing is by id.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of engine-managed asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetType {
    IngestPipeline,
    IndexTemplate,
    ComponentTemplate,
    IlmPolicy,
    Transform,
}

impl AssetType {
    /// Directory segment / serialized name of this asset type
    pub fn as_str(self) -> &'static str {
        match self {
            AssetType::IngestPipeline => "ingest_pipeline",
            AssetType::IndexTemplate => "index_template",
            AssetType::ComponentTemplate => "component_template",
            AssetType::IlmPolicy => "ilm_policy",
            AssetType::Transform => "transform",
        }
    }

    /// Parse an asset type from a bundled path segment
    pub fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "ingest_pipeline" => Some(AssetType::IngestPipeline),
            "index_template" => Some(AssetType::IndexTemplate),
            "component_template" => Some(AssetType::ComponentTemplate),
            "ilm_policy" => Some(AssetType::IlmPolicy),
            "transform" => Some(AssetType::Transform),
            _ => None,
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference to one installed engine asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRef {
    pub id: String,

    #[serde(rename = "type")]
    pub asset_type: AssetType,
}

impl AssetRef {
    pub fn new(id: impl Into<String>, asset_type: AssetType) -> Self {
        Self {
            id: id.into(),
            asset_type,
        }
    }

    /// Reference to a transform job
    pub fn transform(id: impl Into<String>) -> Self {
        Self::new(id, AssetType::Transform)
    }
}

/// Ordered, id-unique list of asset references
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<AssetRef>", into = "Vec<AssetRef>")]
pub struct Inventory {
    assets: Vec<AssetRef>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an asset unless its id is already present.
    ///
    /// Returns `false` when the id was already in the inventory.
    pub fn push(&mut self, asset: AssetRef) -> bool {
        if self.contains(&asset.id) {
            return false;
        }
        self.assets.push(asset);
        true
    }

    pub fn contains(&self, id: &str) -> bool {
        self.assets.iter().any(|a| a.id == id)
    }

    /// Copy of this inventory with every asset whose id is listed removed
    pub fn without<S: AsRef<str>>(&self, ids: &[S]) -> Inventory {
        self.assets
            .iter()
            .filter(|a| !ids.iter().any(|id| id.as_ref() == a.id))
            .cloned()
            .collect()
    }

    /// Copy of this inventory with the given assets appended (duplicates skipped)
    pub fn with_appended<'a>(&self, extra: impl IntoIterator<Item = &'a AssetRef>) -> Inventory {
        let mut result = self.clone();
        for asset in extra {
            result.push(asset.clone());
        }
        result
    }

    /// Assets of one type, in inventory order
    pub fn of_type(&self, asset_type: AssetType) -> impl Iterator<Item = &AssetRef> {
        self.assets.iter().filter(move |a| a.asset_type == asset_type)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AssetRef> {
        self.assets.iter()
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    pub fn as_slice(&self) -> &[AssetRef] {
        &self.assets
    }

    pub fn ids(&self) -> Vec<&str> {
        self.assets.iter().map(|a| a.id.as_str()).collect()
    }
}

impl From<Vec<AssetRef>> for Inventory {
    fn from(assets: Vec<AssetRef>) -> Self {
        assets.into_iter().collect()
    }
}

impl From<Inventory> for Vec<AssetRef> {
    fn from(inventory: Inventory) -> Self {
        inventory.assets
    }
}

impl FromIterator<AssetRef> for Inventory {
    fn from_iter<I: IntoIterator<Item = AssetRef>>(iter: I) -> Self {
        let mut inventory = Inventory::new();
        for asset in iter {
            inventory.push(asset);
        }
        inventory
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a AssetRef;
    type IntoIter = std::slice::Iter<'a, AssetRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.assets.iter()
    }
}
