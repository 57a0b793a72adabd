//! Interactive personnel register for a small enterprise.
//!
//! Presents a numbered menu on stdout, reads operator commands from stdin,
//! and persists every mutation to a flat store file plus an append-only
//! audit log. File names come from `roster.toml` in the data directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use roster::io::audit::AuditLog;
use roster::io::config::{SiteFiles, load_config};
use roster::io::store::RecordStore;
use roster::registry::Registry;
use roster::{logging, shell};

#[derive(Parser)]
#[command(
    name = "roster",
    version,
    about = "Interactive personnel register for a small enterprise"
)]
struct Cli {
    /// Directory holding the store files, audit logs and config.
    #[arg(long, default_value = ".")]
    data_dir: PathBuf,

    /// Config file name, resolved inside the data directory.
    #[arg(long, default_value = "roster.toml")]
    config: PathBuf,
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    fs::create_dir_all(&cli.data_dir)
        .with_context(|| format!("create data dir {}", cli.data_dir.display()))?;
    let config = load_config(&cli.data_dir.join(&cli.config))?;

    let mut registries = [
        open_registry(&cli.data_dir, &config.primary)?,
        open_registry(&cli.data_dir, &config.secondary)?,
    ];

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    shell::run_session(&mut registries, stdin.lock(), &mut stdout)
}

fn open_registry(data_dir: &Path, files: &SiteFiles) -> Result<Registry> {
    let store = RecordStore::new(data_dir.join(&files.store_file));
    let audit = AuditLog::new(data_dir.join(&files.log_file));
    Registry::open(store, audit)
}
