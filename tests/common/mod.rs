//! Common test infrastructure for tdsp integration tests.
//!
//! Each test file compiles its own copy of this module, so items may appear
//! unused from the perspective of a single test file even though they're
//! used elsewhere.

#![allow(dead_code)]

pub mod fixtures;

use std::path::PathBuf;

use tempfile::TempDir;

/// A config file in its own temporary directory, removed on drop
pub struct TempConfig {
    _dir: TempDir,
    pub path: PathBuf,
}

impl TempConfig {
    pub fn new(yaml: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tdsp.yaml");
        std::fs::write(&path, yaml).unwrap();
        Self { _dir: dir, path }
    }
}
