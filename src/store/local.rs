//! Local record store — SQLite key-value persistence.
//!
//! Holds the whole moment list and the settings object as JSON-encoded
//! values under fixed string keys, mirroring the original browser-local
//! storage layout. Writes are whole-value (mirror-on-write), never
//! incremental.

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

use crate::moment::types::{Moment, Settings};

/// Key holding the JSON-encoded moment list.
pub const MOMENTS_KEY: &str = "cappic-moments";
/// Key holding the JSON-encoded settings object.
pub const SETTINGS_KEY: &str = "cappic-settings";

/// SQLite-backed key-value store for moments and settings.
pub struct LocalStore {
    conn: Connection,
}

impl LocalStore {
    /// Open (or create) the local store at the given path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = crate::db::open_database(path)?;
        Ok(Self { conn })
    }

    /// Open an in-memory store. Used by tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = crate::db::open_memory_database()?;
        Ok(Self { conn })
    }

    /// Read the moment list, defaulting to empty when the key is absent.
    pub fn load_moments(&self) -> Result<Vec<Moment>> {
        match self.get(MOMENTS_KEY)? {
            Some(json) => {
                serde_json::from_str(&json).context("failed to parse stored moment list")
            }
            None => Ok(Vec::new()),
        }
    }

    /// Replace the entire stored moment list.
    pub fn save_moments(&self, moments: &[Moment]) -> Result<()> {
        let json = serde_json::to_string(moments)?;
        self.put(MOMENTS_KEY, &json)
    }

    /// Delete all stored moments.
    pub fn clear_moments(&self) -> Result<()> {
        self.delete(MOMENTS_KEY)
    }

    /// Read the settings object, defaulting when the key is absent.
    pub fn load_settings(&self) -> Result<Settings> {
        match self.get(SETTINGS_KEY)? {
            Some(json) => serde_json::from_str(&json).context("failed to parse stored settings"),
            None => Ok(Settings::default()),
        }
    }

    /// Replace the stored settings object.
    pub fn save_settings(&self, settings: &Settings) -> Result<()> {
        let json = serde_json::to_string(settings)?;
        self.put(SETTINGS_KEY, &json)
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2) \
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(())
    }
}
