//! CLI `export` command — write the local moment list to a backup file.

use anyhow::Result;
use chrono::Local;
use std::path::Path;

use cappic::config::CappicConfig;
use cappic::store::local::LocalStore;

/// Export all locally stored moments as a pretty-printed JSON array, named
/// `cappic-moments-<date>.json` (or `cappic-backup-<date>.json` with
/// `backup`).
pub fn export(config: &CappicConfig, backup: bool, out_dir: Option<&Path>) -> Result<()> {
    let store = LocalStore::open(config.resolved_db_path())?;
    let count = store.load_moments()?.len();

    let out_dir = out_dir.unwrap_or(Path::new("."));
    let path = cappic::backup::export_moments(&store, backup, out_dir, Local::now().date_naive())?;

    println!("Exported {count} moment(s) to {}", path.display());
    Ok(())
}
