//! Bundled asset path parsing
//!
//! Package archives lay assets out as
//! `{pkgkey}/{service}/{type}/{file}` or, for dataset-scoped assets,
//! `{pkgkey}/dataset/{dataset}/{service}/{type}/{file}`.

use super::asset::AssetType;

/// Parsed segments of a bundled asset path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPath<'a> {
    pub pkgkey: &'a str,
    pub dataset: Option<&'a str>,
    pub service: &'a str,
    pub asset_type: &'a str,
    pub file: &'a str,
    pub path: &'a str,
}

impl<'a> AssetPath<'a> {
    /// Split a bundled path into its segments.
    ///
    /// Three-segment paths are field definitions (`{pkgkey}/fields/{file}`) and
    /// get an empty service with type `fields`.
    pub fn parse(path: &'a str) -> Option<Self> {
        let segments: Vec<&str> = path.split('/').collect();

        let (dataset, rest): (Option<&str>, Vec<&str>) =
            if segments.len() > 2 && segments[1] == "dataset" {
                let mut rest = vec![segments[0]];
                rest.extend_from_slice(&segments[3..]);
                (Some(segments[2]), rest)
            } else {
                (None, segments)
            };

        match rest.as_slice() {
            [pkgkey, service, asset_type, file, ..] => Some(Self {
                pkgkey: *pkgkey,
                dataset,
                service: *service,
                asset_type: *asset_type,
                file: *file,
                path,
            }),
            [pkgkey, _, file] => Some(Self {
                pkgkey: *pkgkey,
                dataset,
                service: "",
                asset_type: "fields",
                file: *file,
                path,
            }),
            _ => None,
        }
    }

    /// Whether this path is a definition file of the given engine asset type
    pub fn is_asset(&self, asset_type: AssetType) -> bool {
        !self.path.ends_with('/') && self.asset_type == asset_type.as_str()
    }

    /// Last path segment up to its first dot (`default.json` -> `default`)
    pub fn file_stem(&self) -> &'a str {
        let last = self.path.rsplit('/').next().unwrap_or(self.path);
        last.split('.').next().unwrap_or(last)
    }
}
