//! # Storage Backends
//!
//! A `ResourceActor` does not care where its entities live. It talks to a [`Storage`]
//! backend, which is owned exclusively by the actor task, so backends never need interior
//! locking even when the underlying engine (e.g. a SQLite connection) is not `Sync`.
//!
//! Two backends ship with the framework:
//!
//! - [`MemoryStorage`] - a plain `HashMap`, gone when the process exits.
//! - [`JsonFileStorage`] - a `HashMap` mirrored to a JSON file as a whole snapshot
//!   (load-all at open, save-all after every insert and on flush, replaced atomically).
//!
//! Domain crates plug in their own backends by implementing the trait.

use crate::entity::ActorEntity;
use crate::error::StorageError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{error, info, warn};

/// Persistence seam of a [`ResourceActor`](crate::ResourceActor).
pub trait Storage<T: ActorEntity>: Send + 'static {
    /// Persists a freshly created entity.
    fn insert(&mut self, item: &T) -> Result<(), StorageError>;

    /// Looks up an entity by ID.
    fn get(&self, id: &T::Id) -> Result<Option<T>, StorageError>;

    /// Returns every stored entity.
    fn list(&self) -> Result<Vec<T>, StorageError>;

    /// Returns the first entity matching `filter`.
    fn find(&self, filter: &(dyn Fn(&T) -> bool + Send + Sync)) -> Result<Option<T>, StorageError> {
        Ok(self.list()?.into_iter().find(|item| filter(item)))
    }

    /// Number of stored entities.
    fn len(&self) -> Result<usize, StorageError> {
        Ok(self.list()?.len())
    }

    /// Called once when the actor shuts down.
    fn flush(&mut self) -> Result<(), StorageError> {
        Ok(())
    }
}

/// In-memory storage backed by a `HashMap`.
pub struct MemoryStorage<T: ActorEntity> {
    records: HashMap<T::Id, T>,
}

impl<T: ActorEntity> MemoryStorage<T> {
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
        }
    }
}

impl<T: ActorEntity> Default for MemoryStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> Storage<T> for MemoryStorage<T> {
    fn insert(&mut self, item: &T) -> Result<(), StorageError> {
        self.records.insert(item.id().clone(), item.clone());
        Ok(())
    }

    fn get(&self, id: &T::Id) -> Result<Option<T>, StorageError> {
        Ok(self.records.get(id).cloned())
    }

    fn list(&self) -> Result<Vec<T>, StorageError> {
        Ok(self.records.values().cloned().collect())
    }

    fn find(&self, filter: &(dyn Fn(&T) -> bool + Send + Sync)) -> Result<Option<T>, StorageError> {
        Ok(self.records.values().find(|item| filter(item)).cloned())
    }

    fn len(&self) -> Result<usize, StorageError> {
        Ok(self.records.len())
    }
}

/// Snapshot storage: an in-memory map that is written to a JSON file in full.
///
/// The file holds a single JSON object keyed by entity ID. The in-memory map is the
/// authority for the running process; a failed write after an insert is logged and the
/// insert still succeeds, leaving the on-disk snapshot stale until the next write.
pub struct JsonFileStorage<T: ActorEntity> {
    path: PathBuf,
    records: HashMap<T::Id, T>,
}

impl<T> JsonFileStorage<T>
where
    T: ActorEntity + Serialize + DeserializeOwned,
    T::Id: Serialize + DeserializeOwned,
{
    /// Opens the snapshot at `path`.
    ///
    /// A missing file yields an empty store. An unreadable or malformed file also yields an
    /// empty store, with a warning; opening never fails.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let records = match Self::load(&path) {
            Ok(Some(records)) => {
                info!(path = %path.display(), size = records.len(), "Loaded snapshot");
                records
            }
            Ok(None) => HashMap::new(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Could not load snapshot, starting empty");
                HashMap::new()
            }
        };
        Self { path, records }
    }

    fn load(path: &Path) -> Result<Option<HashMap<T::Id, T>>, StorageError> {
        if !path.exists() {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(path)?;
        Ok(Some(serde_json::from_str(&raw)?))
    }

    /// Replaces the snapshot file with the current contents.
    ///
    /// The snapshot is written to a temporary file in the same directory and renamed over the
    /// old one, so a crash mid-write leaves the previous snapshot intact.
    pub fn save(&self) -> Result<(), StorageError> {
        let raw = serde_json::to_string_pretty(&self.records)?;
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut staged = NamedTempFile::new_in(dir)?;
        staged.write_all(raw.as_bytes())?;
        staged.as_file().sync_all()?;
        staged.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl<T> Storage<T> for JsonFileStorage<T>
where
    T: ActorEntity + Serialize + DeserializeOwned,
    T::Id: Serialize + DeserializeOwned,
{
    fn insert(&mut self, item: &T) -> Result<(), StorageError> {
        self.records.insert(item.id().clone(), item.clone());
        if let Err(e) = self.save() {
            error!(path = %self.path.display(), error = %e, "Failed to persist snapshot");
        }
        Ok(())
    }

    fn get(&self, id: &T::Id) -> Result<Option<T>, StorageError> {
        Ok(self.records.get(id).cloned())
    }

    fn list(&self) -> Result<Vec<T>, StorageError> {
        Ok(self.records.values().cloned().collect())
    }

    fn find(&self, filter: &(dyn Fn(&T) -> bool + Send + Sync)) -> Result<Option<T>, StorageError> {
        Ok(self.records.values().find(|item| filter(item)).cloned())
    }

    fn len(&self) -> Result<usize, StorageError> {
        Ok(self.records.len())
    }

    fn flush(&mut self) -> Result<(), StorageError> {
        self.save()
    }
}
