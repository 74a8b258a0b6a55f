//! Generic file-backed record collection
//!
//! One instance per entity type. Records are kept in memory in insertion
//! order and the whole list is rewritten to the backing JSON file on every
//! mutation, via a temporary file and rename so readers never observe a
//! partially written collection.

use pousada_core::{AppResult, StoredEntity};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

/// A persisted collection of one entity type
///
/// Identifier assignment is monotonic: the counter is seeded at load time
/// as `max(existing ids) + 1` and only ever increases, so deleting the
/// highest record does not hand its identifier to the next create.
pub struct Collection<T: StoredEntity> {
    path: PathBuf,
    records: Vec<T>,
    next_id: i64,
}

impl<T: StoredEntity> Collection<T> {
    /// Load the collection from `<data_dir>/<collection>.json`
    ///
    /// A missing file is an empty collection, not an error.
    pub async fn load(data_dir: &Path) -> AppResult<Self> {
        let path = data_dir.join(format!("{}.json", T::COLLECTION));

        let records: Vec<T> = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                error!(collection = T::COLLECTION, "Failed to read collection file: {}", e);
                return Err(e.into());
            }
        };

        let next_id = records.iter().map(T::id).max().unwrap_or(0) + 1;

        debug!(
            collection = T::COLLECTION,
            records = records.len(),
            next_id,
            "Collection loaded"
        );

        Ok(Self {
            path,
            records,
            next_id,
        })
    }

    /// Rewrite the backing file with the current record list
    async fn persist(&self) -> AppResult<()> {
        let bytes = serde_json::to_vec_pretty(&self.records)?;

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &bytes).await?;
        tokio::fs::rename(&tmp, &self.path).await?;

        Ok(())
    }

    /// Validate, assign the next identifier, append, and persist
    pub async fn insert(&mut self, mut record: T) -> AppResult<T> {
        record.validate()?;
        record.set_id(self.next_id);

        self.records.push(record.clone());
        if let Err(e) = self.persist().await {
            self.records.pop();
            return Err(e);
        }

        self.next_id += 1;
        debug!(collection = T::COLLECTION, id = record.id(), "Record created");
        Ok(record)
    }

    /// Replace the record with the given identifier and persist
    ///
    /// The identifier itself is preserved regardless of what the incoming
    /// record carries.
    pub async fn update(&mut self, id: i64, mut record: T) -> AppResult<T> {
        record.validate()?;

        let idx = self
            .records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| T::not_found(id))?;

        record.set_id(id);
        let previous = std::mem::replace(&mut self.records[idx], record.clone());
        if let Err(e) = self.persist().await {
            self.records[idx] = previous;
            return Err(e);
        }

        debug!(collection = T::COLLECTION, id, "Record updated");
        Ok(record)
    }

    /// Remove the record with the given identifier, persist, and return it
    pub async fn remove(&mut self, id: i64) -> AppResult<T> {
        let idx = self
            .records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| T::not_found(id))?;

        let removed = self.records.remove(idx);
        if let Err(e) = self.persist().await {
            self.records.insert(idx, removed);
            return Err(e);
        }

        debug!(collection = T::COLLECTION, id, "Record removed");
        Ok(removed)
    }

    /// All records in insertion order
    pub fn all(&self) -> Vec<T> {
        self.records.clone()
    }

    /// Look up a record by identifier
    pub fn get(&self, id: i64) -> Option<T> {
        self.records.iter().find(|r| r.id() == id).cloned()
    }

    /// Whether a record with this identifier exists
    pub fn contains(&self, id: i64) -> bool {
        self.records.iter().any(|r| r.id() == id)
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the collection holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
