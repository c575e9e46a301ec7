//! Feedback persistence
//!
//! The whole list lives under one storage key as a JSON array. Reads never
//! fail from the caller's point of view: a missing or corrupt value loads as
//! an empty list. Writes are read-modify-write with no locking; a second tab
//! writing at the same time can overwrite (last write wins).

use crate::error::StoreError;
use crate::platform::StorageBackend;
use crate::record::{FeedbackList, FeedbackRecord};

/// Default storage key for the feedback list
pub const STORAGE_KEY: &str = "feedbacks";

/// Reads and appends feedback through a storage backend
pub struct FeedbackStore<S: StorageBackend> {
    backend: S,
    key: String,
}

impl<S: StorageBackend> FeedbackStore<S> {
    /// Store using the default key
    pub fn new(backend: S) -> Self {
        Self::with_key(backend, STORAGE_KEY)
    }

    pub fn with_key(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Load the stored list, substituting an empty list on any failure
    pub fn load(&self) -> FeedbackList {
        match self.try_load() {
            Ok(Some(list)) => {
                log::info!("Loaded {} feedback entries", list.len());
                list
            }
            Ok(None) => {
                log::info!("No feedback found, starting fresh");
                FeedbackList::new()
            }
            Err(e) => {
                log::warn!("Ignoring stored feedback: {}", e);
                FeedbackList::new()
            }
        }
    }

    fn try_load(&self) -> Result<Option<FeedbackList>, StoreError> {
        let Some(json) = self.backend.get_item(&self.key)? else {
            return Ok(None);
        };
        // `null` is what JSON.stringify leaves behind for a cleared list
        if json.trim() == "null" {
            return Ok(None);
        }
        serde_json::from_str(&json)
            .map(Some)
            .map_err(StoreError::Corrupt)
    }

    /// Append a record to the end of the stored list
    pub fn append(&self, record: FeedbackRecord) -> Result<(), StoreError> {
        let mut list = self.load();
        list.push(record);
        let json = serde_json::to_string(&list).map_err(StoreError::Encode)?;
        self.backend.set_item(&self.key, &json)?;
        log::info!("Feedback saved ({} entries)", list.len());
        Ok(())
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
