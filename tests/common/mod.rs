//! Shared test utilities.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use compile::config::ConfigRegistry;
use tempfile::TempDir;

pub fn strings(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

/// Parse a targets file, failing the test on syntax errors.
pub fn registry(source: &str) -> ConfigRegistry {
    ConfigRegistry::parse(source)
        .expect("targets file should parse")
        .registry
}

/// Temp directory containing empty files with the given names.
pub fn workspace(files: &[&str]) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    for name in files {
        touch(dir.path(), name);
    }
    dir
}

pub fn touch(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, "").expect("Failed to create file");
    path
}

/// `dir/name` as a string, the way a user would type the target.
pub fn target(dir: &Path, name: &str) -> String {
    dir.join(name).to_string_lossy().into_owned()
}
