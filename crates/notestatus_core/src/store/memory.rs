//! In-memory document store.
//!
//! # Responsibility
//! - Hold documents and the active-document selection in process memory.
//! - Give tests and embedders a store with no filesystem dependency.
//!
//! # Invariants
//! - Reads return the text of the latest completed `modify`.
//! - Paths are compared exactly as given; no normalization.

use super::{DocumentStore, StoreError, StoreResult};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

/// Document store backed by process memory.
///
/// Trait methods take shared references, so mutation goes through an
/// internal lock.
#[derive(Debug)]
pub struct MemoryDocumentStore {
    inner: Mutex<MemoryStoreInner>,
}

#[derive(Debug, Default)]
struct MemoryStoreInner {
    documents: BTreeMap<PathBuf, String>,
    active: Option<PathBuf>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(MemoryStoreInner::default()),
        }
    }

    /// Inserts or replaces a document.
    pub fn insert_document(&mut self, document: impl Into<PathBuf>, content: impl Into<String>) {
        self.lock().documents.insert(document.into(), content.into());
    }

    /// Selects the active document; `None` clears the selection.
    pub fn set_active(&mut self, document: Option<PathBuf>) {
        self.lock().active = document;
    }

    /// Current text of a document, for host callers and assertions.
    pub fn document(&self, document: &Path) -> Option<String> {
        self.lock().documents.get(document).cloned()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryStoreInner> {
        self.inner.lock().expect("memory store lock poisoned")
    }
}

impl Default for MemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStore for MemoryDocumentStore {
    fn active_document(&self) -> Option<PathBuf> {
        self.lock().active.clone()
    }

    fn read(&self, document: &Path) -> StoreResult<String> {
        self.lock()
            .documents
            .get(document)
            .cloned()
            .ok_or_else(|| StoreError::DocumentNotFound(document.to_path_buf()))
    }

    fn modify(&self, document: &Path, content: &str) -> StoreResult<()> {
        let mut inner = self.lock();
        match inner.documents.get_mut(document) {
            Some(existing) => {
                *existing = content.to_string();
                Ok(())
            }
            None => Err(StoreError::DocumentNotFound(document.to_path_buf())),
        }
    }
}
