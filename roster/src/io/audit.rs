//! Append-only audit trail for one registry.
//!
//! Product output, not diagnostics: every successful mutation appends exactly
//! one human-readable line, and the file is never read or rotated. Dev
//! tracing via `RUST_LOG` is a separate concern (see [`crate::logging`]).

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;

#[derive(Debug, Clone)]
pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one `<local timestamp>: <message>` line.
    pub fn append(&self, message: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("open audit log {}", self.path.display()))?;
        let stamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        writeln!(file, "{}: {}", stamp, message)
            .with_context(|| format!("append audit log {}", self.path.display()))?;
        Ok(())
    }
}
