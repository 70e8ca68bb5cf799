//! Test helpers for staging hotspot and catalogue files.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::Value;
use tempfile::TempDir;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write test file");
}

/// A temporary directory addressed by a UTF-8 path.
pub(super) fn workspace() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

pub(super) const INDUSTRIAL_HOTSPOT_JSON: &[u8] = br#"{
    "id": 1,
    "location": "Industrial Area",
    "temperature_c": 42.5,
    "area_ha": 2.5,
    "pop_exposed": 1500
}"#;

pub(super) fn parse_output(buffer: &[u8]) -> Value {
    let text = std::str::from_utf8(buffer).expect("stdout utf-8");
    assert!(text.ends_with('\n'), "output should end with a newline");
    serde_json::from_str(text).expect("output should be JSON")
}
