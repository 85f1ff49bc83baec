//! Fixtures for writing JSON requests into scratch workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::{Value, json};
use tempfile::TempDir;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write fixture file");
}

/// Scratch directory holding a request file; removed on drop.
pub(super) struct Workspace {
    _tmp: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let tmp = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
        Self { _tmp: tmp, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn write_json(&self, name: &str, value: &Value) -> Utf8PathBuf {
        let path = self.path(name);
        let payload = serde_json::to_vec_pretty(value).expect("serialise fixture");
        write_utf8(&path, &payload);
        path
    }
}

/// Memory-care caregiver at $25/hr.
pub(super) fn caregiver_json() -> Value {
    json!({
        "id": "caregiver-1",
        "specialties": ["Memory Care"],
        "hourly_rate": 25.0,
    })
}

/// Memory-care listing paying $20-$30/hr with no window or position.
pub(super) fn listing_json() -> Value {
    json!({
        "id": "listing-1",
        "specialties": ["Memory Care"],
        "hourly_rate_min": 20.0,
        "hourly_rate_max": 30.0,
    })
}

pub(super) fn score_request_json() -> Value {
    json!({
        "caregiver": caregiver_json(),
        "listing": listing_json(),
    })
}
