//! CLI `reset` command — delete all local moments after user confirmation.

use anyhow::{bail, Result};

use cappic::config::CappicConfig;
use cappic::store::local::LocalStore;

/// Delete all locally stored moments after typed confirmation.
pub fn reset(config: &CappicConfig) -> Result<()> {
    let db_path = config.resolved_db_path();

    println!("WARNING: This will permanently delete ALL moments stored on this device.");
    println!("Database: {}", db_path.display());
    let input = super::prompt("\nType YES to confirm: ")?;

    if input != "YES" {
        bail!("reset cancelled");
    }

    let store = LocalStore::open(&db_path)?;
    store.clear_moments()?;

    println!("All local moments deleted.");
    Ok(())
}
