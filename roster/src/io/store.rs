//! Flat-file persistence for one registry's worker list.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::core::record::{self, LineError, Worker};

/// One registry's backing file: `;`-delimited lines, rewritten wholesale on
/// every mutation.
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all workers from disk.
    ///
    /// A missing file is an empty roster, not an error. Lines with the wrong
    /// field count are skipped silently; lines with an unparseable salary are
    /// skipped with a warning instead of failing the whole load.
    pub fn load(&self) -> Result<Vec<Worker>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "store file missing, starting empty");
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("read store {}", self.path.display()))?;

        let mut workers = Vec::new();
        for (index, line) in contents.lines().enumerate() {
            match record::parse_line(line) {
                Ok(worker) => workers.push(worker),
                Err(LineError::FieldCount(got)) => {
                    debug!(
                        path = %self.path.display(),
                        line = index + 1,
                        fields = got,
                        "skipping store line with wrong field count"
                    );
                }
                Err(LineError::Salary(raw)) => {
                    warn!(
                        path = %self.path.display(),
                        line = index + 1,
                        salary = %raw,
                        "skipping store line with unparseable salary"
                    );
                }
            }
        }
        debug!(path = %self.path.display(), count = workers.len(), "store loaded");
        Ok(workers)
    }

    /// Rewrite the backing file with the full list (temp file + rename).
    pub fn save(&self, workers: &[Worker]) -> Result<()> {
        let mut buf = String::new();
        for worker in workers {
            buf.push_str(&worker.to_line());
            buf.push('\n');
        }
        debug!(path = %self.path.display(), count = workers.len(), "writing store");
        write_atomic(&self.path, &buf)
    }
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp store {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace store {}", path.display()))?;
    Ok(())
}
