//! Backup export/import of the local moment list.
//!
//! Exports are a pretty-printed JSON array of moments; imports replace the
//! entire local list verbatim with no validation beyond the parse. A
//! malformed file is a hard error and nothing is imported.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

use crate::moment::types::Moment;
use crate::store::local::LocalStore;

/// Backup filename for `date` (ISO `YYYY-MM-DD`).
///
/// `cappic-moments-<date>.json` for the timeline export, or
/// `cappic-backup-<date>.json` for the settings-panel flavor of the same
/// export.
pub fn backup_filename(backup: bool, date: NaiveDate) -> String {
    let date = date.format("%Y-%m-%d");
    if backup {
        format!("cappic-backup-{date}.json")
    } else {
        format!("cappic-moments-{date}.json")
    }
}

/// Export all locally stored moments into `out_dir`. Returns the path
/// written.
pub fn export_moments(
    store: &LocalStore,
    backup: bool,
    out_dir: &Path,
    date: NaiveDate,
) -> Result<PathBuf> {
    let moments = store.load_moments()?;
    let path = out_dir.join(backup_filename(backup, date));

    let json = serde_json::to_string_pretty(&moments)?;
    std::fs::write(&path, json)
        .with_context(|| format!("failed to write export file: {}", path.display()))?;
    Ok(path)
}

/// Import `file`, replacing the entire local moment list. Returns the
/// number of moments imported.
pub fn import_moments(store: &LocalStore, file: &Path) -> Result<usize> {
    let json = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read import file: {}", file.display()))?;

    let moments: Vec<Moment> = serde_json::from_str(&json)
        .context("invalid file format — expected a cappic backup (JSON array of moments)")?;

    store.save_moments(&moments)?;
    Ok(moments.len())
}
