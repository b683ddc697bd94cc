//! Durable key/value storage for the entity collections.
//!
//! Each logical key holds one JSON-serialized collection. Collections are
//! read in full when a repository hydrates and rewritten in full after
//! every mutation; there are no partial or delta writes.

mod schema;

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use rusqlite::Connection;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Storage key for the exercise collection.
pub const EXERCISES_KEY: &str = "exercises";

/// Storage key for the training-plan collection.
pub const TRAINING_PLANS_KEY: &str = "trainingPlans";

/// Errors raised by the persistent store.
///
/// Read failures never reach callers of [`Store::load`]; they are logged and
/// recovered as an empty collection. Write failures surface so the caller
/// can report that durability is behind the in-memory state.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not determine a data directory for this platform")]
    NoDataDir,

    #[error("failed to prepare the store directory: {0}")]
    Io(#[from] std::io::Error),

    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("failed to serialize collection: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Handle to the durable store. Cheap to clone; all clones share one
/// connection.
#[derive(Clone)]
pub struct Store {
    conn: Arc<Mutex<Connection>>,
}

impl Store {
    /// Open (or create) the store at `path`, creating parent directories as
    /// needed.
    pub fn open(path: PathBuf) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(&path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        tracing::info!("Opened store at {}", path.display());
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Open the store at the platform data directory.
    pub fn open_default() -> Result<Self, StoreError> {
        let dirs = directories::ProjectDirs::from("", "", "liftlog")
            .ok_or(StoreError::NoDataDir)?;
        Self::open(dirs.data_dir().join("liftlog.db"))
    }

    /// Open an in-memory store. Used by tests.
    pub fn open_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn migrate(&self) -> Result<(), StoreError> {
        let conn = self.conn.lock().expect("store lock poisoned");
        schema::run_migrations(&conn)
    }

    /// Load the collection stored under `key`.
    ///
    /// A missing key is a first run and yields an empty collection. An
    /// unreadable or malformed payload is logged and also yields an empty
    /// collection, so a corrupt store never takes the caller down.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let payload = match self.read_payload(key) {
            Ok(Some(payload)) => payload,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to read collection {}: {}", key, e);
                return Vec::new();
            }
        };
        match serde_json::from_str(&payload) {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!("Discarding malformed payload for {}: {}", key, e);
                Vec::new()
            }
        }
    }

    /// Replace the collection stored under `key` with `items`.
    pub fn save<T: Serialize>(&self, key: &str, items: &[T]) -> Result<(), StoreError> {
        let payload = serde_json::to_string(items)?;
        let conn = self.conn.lock().expect("store lock poisoned");
        conn.execute(
            "INSERT INTO collections (key, payload, updated_at) VALUES (?, ?, ?)
             ON CONFLICT(key) DO UPDATE SET
                 payload = excluded.payload,
                 updated_at = excluded.updated_at",
            (key, &payload, Utc::now().to_rfc3339()),
        )?;
        tracing::debug!("Saved {} bytes under {}", payload.len(), key);
        Ok(())
    }

    fn read_payload(&self, key: &str) -> Result<Option<String>, StoreError> {
        let conn = self.conn.lock().expect("store lock poisoned");
        let mut stmt = conn.prepare("SELECT payload FROM collections WHERE key = ?")?;
        let mut rows = stmt.query([key])?;
        match rows.next()? {
            Some(row) => Ok(Some(row.get(0)?)),
            None => Ok(None),
        }
    }
}
