//! CLI `import` command — restore the local moment list from a backup file.

use anyhow::Result;
use std::path::Path;

use cappic::config::CappicConfig;
use cappic::store::local::LocalStore;

/// Import a backup file, replacing the entire local moment list verbatim.
/// A malformed file is a hard error and nothing is imported.
pub fn import(config: &CappicConfig, file: &Path) -> Result<()> {
    let store = LocalStore::open(config.resolved_db_path())?;
    let count = cappic::backup::import_moments(&store, file)?;

    println!("Imported {count} moment(s).");
    Ok(())
}
