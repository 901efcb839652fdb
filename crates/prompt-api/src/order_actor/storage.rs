//! SQLite-backed order store.
//!
//! One table, one row per order: the ID, the full order serialized as JSON, and the creation
//! timestamp. The connection is owned by the order actor, so it is only ever used from one
//! task at a time.

use crate::model::{Order, OrderId};
use actor_framework::{Storage, StorageError};
use rusqlite::{Connection, OptionalExtension};
use std::path::Path;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS orders (
    id TEXT PRIMARY KEY,
    payload TEXT NOT NULL,
    createdAt TEXT NOT NULL
);
"#;

pub struct SqliteOrderStorage {
    db: Connection,
}

impl SqliteOrderStorage {
    /// Opens (or creates) the database at `path` and ensures the schema.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let db = Connection::open(path).map_err(StorageError::backend)?;
        Self::init(db)
    }

    /// A private database that lives as long as the storage.
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let db = Connection::open_in_memory().map_err(StorageError::backend)?;
        Self::init(db)
    }

    fn init(db: Connection) -> Result<Self, StorageError> {
        db.execute_batch(SCHEMA).map_err(StorageError::backend)?;
        Ok(Self { db })
    }
}

impl Storage<Order> for SqliteOrderStorage {
    fn insert(&mut self, order: &Order) -> Result<(), StorageError> {
        let payload = serde_json::to_string(order)?;
        self.db
            .execute(
                "INSERT INTO orders (id, payload, createdAt) VALUES (?1, ?2, ?3)",
                (&order.id.0, &payload, order.created_at.to_rfc3339()),
            )
            .map_err(StorageError::backend)?;
        Ok(())
    }

    fn get(&self, id: &OrderId) -> Result<Option<Order>, StorageError> {
        let payload: Option<String> = self
            .db
            .query_row("SELECT payload FROM orders WHERE id = ?1", [&id.0], |row| row.get(0))
            .optional()
            .map_err(StorageError::backend)?;
        payload
            .map(|raw| serde_json::from_str(&raw).map_err(StorageError::from))
            .transpose()
    }

    fn list(&self) -> Result<Vec<Order>, StorageError> {
        let mut stmt = self
            .db
            .prepare("SELECT payload FROM orders ORDER BY createdAt")
            .map_err(StorageError::backend)?;
        let payloads = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(StorageError::backend)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(StorageError::backend)?;
        payloads
            .iter()
            .map(|raw| serde_json::from_str(raw).map_err(StorageError::from))
            .collect()
    }

    fn len(&self) -> Result<usize, StorageError> {
        let count: i64 = self
            .db
            .query_row("SELECT COUNT(*) FROM orders", [], |row| row.get(0))
            .map_err(StorageError::backend)?;
        Ok(count as usize)
    }
}
