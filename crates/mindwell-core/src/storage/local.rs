//! SQLite-backed key-value blob store.
//!
//! The local store keeps JSON-serializable arrays under namespaced keys:
//! the saved results list and the pending-sync outbox each live under one
//! key. Reads and writes are synchronous and never touch the network, so
//! the local store is always the fast-path source of truth.

use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StoreError;

use super::data_dir;

/// Namespaced key for the saved results array.
pub const RESULTS_KEY: &str = "results";
/// Namespaced key for the pending-sync outbox.
pub const OUTBOX_KEY: &str = "sync_outbox";
/// Namespaced key for locally tracked gamification stats.
pub const LOCAL_STATS_KEY: &str = "local_stats";

/// SQLite database holding namespaced JSON blobs.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open the store at `~/.config/mindwell/mindwell.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self, StoreError> {
        let path = data_dir()
            .map_err(|e| StoreError::QueryFailed(e.to_string()))?
            .join("mindwell.db");
        let conn = Connection::open(&path).map_err(|source| StoreError::OpenFailed {
            path: path.clone(),
            source,
        })?;
        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    /// Open an in-memory store (for tests).
    pub fn open_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    fn migrate(&self) -> Result<(), StoreError> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )?;
        Ok(())
    }

    /// Read and decode the JSON blob under `key`.
    ///
    /// A missing key decodes as `T::default()`, so an empty store behaves
    /// like an empty results list or outbox.
    pub fn get_blob<T: DeserializeOwned + Default>(&self, key: &str) -> Result<T, StoreError> {
        let raw: Option<String> = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()?;

        match raw {
            Some(json) => serde_json::from_str(&json).map_err(|e| StoreError::CorruptBlob {
                key: key.to_string(),
                message: e.to_string(),
            }),
            None => Ok(T::default()),
        }
    }

    /// Encode and write the JSON blob under `key`, replacing any previous value.
    pub fn put_blob<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let json = serde_json::to_string(value).map_err(|e| StoreError::CorruptBlob {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, json],
        )?;
        Ok(())
    }

    /// Remove the blob under `key`, if any.
    pub fn delete_blob(&self, key: &str) -> Result<(), StoreError> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(())
    }
}
