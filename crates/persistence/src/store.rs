// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use rusqlite::{Connection, OptionalExtension, params};
use serde::Serialize;
use serde::de::DeserializeOwned;
use top_track::TrackerSnapshot;
use tracing::{debug, info, warn};

use crate::error::PersistenceError;

/// Storage key for the asset collection.
pub const ASSETS_KEY: &str = "assets";
/// Storage key for the check-in/out record collection.
pub const RECORDS_KEY: &str = "checkinout_records";

/// A key/value store backed by `SQLite`.
///
/// Values are JSON documents keyed by name. The two tracker collections
/// are stored under [`ASSETS_KEY`] and [`RECORDS_KEY`] and are written
/// together in one database transaction so a snapshot is never half
/// persisted.
#[derive(Debug)]
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Opens a file-backed store, creating the schema when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn open(path: &str) -> Result<Self, PersistenceError> {
        let conn = Connection::open(path)
            .map_err(|err| PersistenceError::DatabaseConnectionFailed(err.to_string()))?;
        Self::from_connection(conn)
    }

    /// Opens an in-memory store. Used for tests and ephemeral sessions.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn open_in_memory() -> Result<Self, PersistenceError> {
        let conn = Connection::open_in_memory()
            .map_err(|err| PersistenceError::DatabaseConnectionFailed(err.to_string()))?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self, PersistenceError> {
        initialize_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Loads the value stored under `key`, deserialized as `T`.
    ///
    /// A missing key or a value that no longer deserializes yields
    /// `default`; the store never refuses to start over stale data.
    ///
    /// # Errors
    ///
    /// Returns an error only if the underlying query fails.
    pub fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> Result<T, PersistenceError> {
        let Some(raw) = self.read_raw(key)? else {
            debug!(key, "Key not present, using default");
            return Ok(default);
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Ok(value),
            Err(err) => {
                warn!(key, %err, "Stored value is unreadable, using default");
                Ok(default)
            }
        }
    }

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), PersistenceError> {
        let raw = serde_json::to_string(value)?;
        self.conn.execute(
            "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, raw],
        )?;
        debug!(key, "Saved value");
        Ok(())
    }

    /// Persists a full tracker snapshot.
    ///
    /// Both collections are written inside one transaction: either the
    /// assets and the records both land, or neither does.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails; the store
    /// is left unchanged on failure.
    pub fn save_snapshot(&mut self, snapshot: &TrackerSnapshot) -> Result<(), PersistenceError> {
        let assets = serde_json::to_string(&snapshot.assets)?;
        let records = serde_json::to_string(&snapshot.records)?;

        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![ASSETS_KEY, assets],
        )?;
        tx.execute(
            "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![RECORDS_KEY, records],
        )?;
        tx.commit()?;

        info!(
            asset_count = snapshot.assets.len(),
            record_count = snapshot.records.len(),
            "Persisted tracker snapshot"
        );
        Ok(())
    }

    /// Loads a full tracker snapshot.
    ///
    /// Each collection independently falls back to empty when its key is
    /// missing or its stored value is unreadable.
    ///
    /// # Errors
    ///
    /// Returns an error only if the underlying query fails.
    pub fn load_snapshot(&self) -> Result<TrackerSnapshot, PersistenceError> {
        let assets = self.load(ASSETS_KEY, Vec::new())?;
        let records = self.load(RECORDS_KEY, Vec::new())?;
        Ok(TrackerSnapshot { assets, records })
    }

    fn read_raw(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }
}

/// Initializes the database schema.
///
/// # Errors
///
/// Returns an error if schema creation fails.
fn initialize_schema(conn: &Connection) -> Result<(), PersistenceError> {
    debug!("Initializing database schema");
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS kv_store (
            key TEXT PRIMARY KEY NOT NULL,
            value TEXT NOT NULL
        );
        ",
    )
    .map_err(|err| PersistenceError::InitializationError(err.to_string()))?;
    Ok(())
}
