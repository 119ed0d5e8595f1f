//! Test fixture loader for Privatas golden datasets.
//!
//! Provides typed deserialization of the fixture JSON files and helper
//! functions for loading them in tests across crates.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    files.sort();
    files
}

/// One whole-document golden case. Modes are kept as strings so this crate
/// stays independent of the crates under test.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentCase {
    pub id: String,
    pub mode: String,
    pub input: String,
    pub expected: String,
}

/// One selection golden case. Offsets are character offsets.
#[derive(Debug, Clone, Deserialize)]
pub struct SelectionCase {
    pub id: String,
    pub mode: String,
    pub input: String,
    pub start: usize,
    pub end: usize,
    /// `None` when the range is expected to be rejected.
    pub expected: Option<String>,
}

/// A golden file: a description plus its cases.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenSet<T> {
    pub description: String,
    pub cases: Vec<T>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_root_exists() {
        assert!(fixtures_root().exists(), "test-fixtures directory not found");
    }

    #[test]
    fn all_golden_sanitization_files_exist() {
        let files = [
            "golden/sanitization/labeled_fields.json",
            "golden/sanitization/freestanding_patterns.json",
            "golden/sanitization/modes.json",
            "golden/sanitization/selection.json",
        ];
        for f in &files {
            assert!(fixture_exists(f), "Missing fixture: {}", f);
        }
    }

    #[test]
    fn golden_files_parse() {
        for path in list_fixtures("golden/sanitization") {
            let name = path.file_name().unwrap().to_string_lossy().to_string();
            let relative = format!("golden/sanitization/{name}");
            if name == "selection.json" {
                let set: GoldenSet<SelectionCase> = load_fixture(&relative);
                assert!(!set.cases.is_empty(), "{name} has no cases");
            } else {
                let set: GoldenSet<DocumentCase> = load_fixture(&relative);
                assert!(!set.cases.is_empty(), "{name} has no cases");
            }
        }
    }
}
