// tests/common/mod.rs
use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

pub fn bbcheck() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_bbcheck"));
    cmd.env_remove("RUST_LOG");
    cmd
}

/// A table file inside its own temp dir; the dir is removed on drop.
pub struct TableFile {
    _dir: TempDir,
    pub path: PathBuf,
}

impl TableFile {
    pub fn new(name: &str, contents: &str) -> Self {
        let dir = tempfile::tempdir().expect("create tempdir");
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap_or_else(|e| panic!("write {}: {e}", path.display()));
        Self { _dir: dir, path }
    }
}

pub const GRADE_JSON: &str = r#"{
  "name": "grade",
  "invalid_label": "Out of range",
  "ranges": [
    { "lower": 0, "upper": 49, "label": "Fail" },
    { "lower": 50, "upper": 69, "label": "Pass" },
    { "lower": 70, "upper": 100, "label": "Distinction" }
  ]
}"#;
