//! Test-only helpers for constructing workers and file-backed registries.

use std::path::Path;

use crate::core::record::Worker;
use crate::io::audit::AuditLog;
use crate::io::store::RecordStore;
use crate::registry::Registry;

/// Deterministic worker record.
pub fn worker(id: &str, name: &str, position: &str, salary: f64) -> Worker {
    Worker::new(id, name, position, salary)
}

/// Registry backed by `<tag>_data.txt` / `<tag>_log.txt` under `dir`.
pub fn registry_in(dir: &Path, tag: &str) -> Registry {
    let store = RecordStore::new(dir.join(format!("{}_data.txt", tag)));
    let audit = AuditLog::new(dir.join(format!("{}_log.txt", tag)));
    Registry::open(store, audit).expect("open registry")
}

/// Primary/secondary registry pair backed by a fresh temp directory.
///
/// Returns the guard so the directory outlives the test.
pub fn registry_pair() -> (tempfile::TempDir, [Registry; 2]) {
    let temp = tempfile::tempdir().expect("tempdir");
    let registries = [
        registry_in(temp.path(), "workers"),
        registry_in(temp.path(), "branch"),
    ];
    (temp, registries)
}
