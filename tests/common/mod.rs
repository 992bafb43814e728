//! Common test utilities for assetsync integration tests

#![allow(dead_code)]

use std::path::PathBuf;

use assert_cmd::Command;
use serde_json::Value;
use tempfile::TempDir;

/// Transform definition written for every bundled transform
pub const DEFINITION: &str = r#"{"source": {"index": "metrics-endpoint.metadata-*"}, "dest": {"index": "metrics-endpoint.metadata_current"}}"#;

/// Engine address nothing listens on
pub const UNREACHABLE_ENGINE: &str = "http://127.0.0.1:9";

/// A temporary directory holding a package, a store and a config file
pub struct TestWorkspace {
    pub temp: TempDir,
    pub path: PathBuf,
}

impl TestWorkspace {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        let workspace = Self { temp, path };
        workspace.write_file("config.yaml", "engine:\n  timeout_secs: 5\n");
        workspace
    }

    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    pub fn store_dir(&self) -> PathBuf {
        self.path.join("store")
    }

    /// Write an unpacked package whose listed datasets each bundle one transform
    pub fn write_package(&self, name: &str, version: &str, datasets: &[&str]) -> PathBuf {
        let dir = format!("packages/{name}-{version}");
        let mut manifest = format!("name: {name}\nversion: {version}\ndatasets:\n");
        for dataset in datasets {
            manifest.push_str(&format!(
                "  - type: metrics\n    name: {name}.{dataset}\n    path: {dataset}\n"
            ));
            self.write_file(
                &format!("{dir}/dataset/{dataset}/elasticsearch/transform/default.json"),
                DEFINITION,
            );
        }
        self.write_file(&format!("{dir}/manifest.yml"), &manifest);
        self.path.join(dir)
    }

    /// Store a package record as the store persists it
    pub fn seed_record(&self, name: &str, version: &str, installed_es: &Value) {
        let record = serde_json::json!({
            "name": name,
            "version": version,
            "installed_es": installed_es,
        });
        self.write_file(
            &format!("store/epm-packages/{name}.json"),
            &serde_json::to_string_pretty(&record).expect("Failed to serialize record"),
        );
    }

    pub fn record(&self, name: &str) -> Option<Value> {
        let path = self.store_dir().join("epm-packages").join(format!("{name}.json"));
        let content = std::fs::read_to_string(path).ok()?;
        Some(serde_json::from_str(&content).expect("Failed to parse record"))
    }

    /// Ids of a record's installed assets, in order
    pub fn recorded_ids(&self, name: &str) -> Vec<String> {
        self.record(name)
            .and_then(|r| r["installed_es"].as_array().cloned())
            .unwrap_or_default()
            .iter()
            .filter_map(|a| a["id"].as_str().map(String::from))
            .collect()
    }

    /// assetsync command bound to this workspace's config, store and `engine`
    #[allow(deprecated)]
    pub fn cmd(&self, engine: &str) -> Command {
        let mut cmd = Command::cargo_bin("assetsync").expect("Failed to find assetsync binary");
        cmd.env_remove("ASSETSYNC_LOG")
            .arg("--config")
            .arg(self.path.join("config.yaml"))
            .arg("--store")
            .arg(self.store_dir())
            .arg("--engine-url")
            .arg(engine);
        cmd
    }
}
