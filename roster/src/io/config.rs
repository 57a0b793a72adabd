//! Register configuration stored as human-editable TOML.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// File names for the two registries, resolved against `--data-dir`.
///
/// Intended to be edited by humans. A missing file or missing section falls
/// back to the conventional names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RosterConfig {
    pub primary: SiteFiles,
    pub secondary: SiteFiles,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiteFiles {
    /// Worker store, one `id;name;position;salary` line per worker.
    pub store_file: String,
    /// Append-only audit log.
    pub log_file: String,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            primary: SiteFiles {
                store_file: "workers_data.txt".to_string(),
                log_file: "workers_log.txt".to_string(),
            },
            secondary: SiteFiles {
                store_file: "branch_data.txt".to_string(),
                log_file: "branch_log.txt".to_string(),
            },
        }
    }
}

impl RosterConfig {
    pub fn validate(&self) -> Result<()> {
        for (label, files) in [("primary", &self.primary), ("secondary", &self.secondary)] {
            if files.store_file.trim().is_empty() {
                return Err(anyhow!("{}.store_file must not be empty", label));
            }
            if files.log_file.trim().is_empty() {
                return Err(anyhow!("{}.log_file must not be empty", label));
            }
        }
        if self.primary.store_file == self.secondary.store_file {
            return Err(anyhow!(
                "primary and secondary must not share a store file"
            ));
        }
        if self.primary.log_file == self.secondary.log_file {
            return Err(anyhow!("primary and secondary must not share a log file"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `RosterConfig::default()`.
pub fn load_config(path: &Path) -> Result<RosterConfig> {
    if !path.exists() {
        let cfg = RosterConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: RosterConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
