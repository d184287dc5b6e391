//! Workflow status use-case service.
//!
//! # Responsibility
//! - Provide the status transition entry points for host callers.
//! - Orchestrate store and metadata calls into whole-property edits.
//!
//! # Invariants
//! - Every entry point is a silent no-op while no document is active.
//! - Composite operations run their collaborator calls strictly in order;
//!   they are not atomic, and a failure between steps leaves the steps
//!   already applied in place.
//! - Leaving the `waiting` state clears `waiting-since` before the status
//!   value is overwritten.
//!
//! # See also
//! - docs/architecture/data-model.md

use crate::clock::Clock;
use crate::frontmatter;
use crate::meta::{MetaError, MetadataApi};
use crate::model::status::{
    tracked_property_keys, Status, COMPLETED_KEY, STARTED_KEY, STATUS_KEY, WAITING_SINCE_KEY,
};
use crate::store::{DocumentStore, StoreError};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

pub type StatusResult<T> = Result<T, StatusError>;

/// Service error for status use-cases.
#[derive(Debug)]
pub enum StatusError {
    /// Document access failure.
    Store(StoreError),
    /// Metadata layer failure.
    Meta(MetaError),
}

impl Display for StatusError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Meta(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StatusError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Meta(err) => Some(err),
        }
    }
}

impl From<StoreError> for StatusError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<MetaError> for StatusError {
    fn from(value: MetaError) -> Self {
        Self::Meta(value)
    }
}

/// Status service facade over the document store and metadata API.
///
/// The store is borrowed because the metadata implementation shares it; the
/// metadata API and clock are owned.
pub struct StatusService<'a, S: DocumentStore, M: MetadataApi, C: Clock> {
    store: &'a S,
    meta: M,
    clock: C,
}

impl<'a, S: DocumentStore, M: MetadataApi, C: Clock> StatusService<'a, S, M, C> {
    /// Creates a service over the provided collaborators.
    pub fn new(store: &'a S, meta: M, clock: C) -> Self {
        Self { store, meta, clock }
    }

    /// Whether the active document carries the given property.
    ///
    /// `false` when no document is active.
    pub fn has_property(&self, key: &str) -> StatusResult<bool> {
        let Some(document) = self.store.active_document() else {
            return Ok(false);
        };
        self.property_present(&document, key)
    }

    /// Deletes the first matching front-matter line for each present key.
    ///
    /// # Contract
    /// - Keys the document does not carry are silently ignored.
    /// - Duplicate keys in the request remove one line, not two.
    /// - The document is rewritten only when at least one key is present.
    pub fn delete_properties(&self, keys: &[&str]) -> StatusResult<()> {
        let Some(document) = self.store.active_document() else {
            return Ok(());
        };

        let present = self.meta.properties(&document)?;
        let to_delete: Vec<&str> = keys
            .iter()
            .copied()
            .filter(|key| present.iter().any(|property| property.key == *key))
            .collect();
        if to_delete.is_empty() {
            return Ok(());
        }

        let content = self.store.read(&document)?;
        let updated = frontmatter::delete_property_lines(&content, &to_delete);
        self.store.modify(&document, &updated)?;
        Ok(())
    }

    /// Writes one property value on the active document.
    ///
    /// # Contract
    /// - First write creates the property empty, then updates it (two
    ///   metadata calls); later writes update in place (one call).
    /// - The property count for the key stays at one across repeat writes.
    pub fn set_property(&self, key: &str, value: &str) -> StatusResult<()> {
        let Some(document) = self.store.active_document() else {
            return Ok(());
        };

        if !self.property_present(&document, key)? {
            self.meta.create_property(key, "", &document)?;
        }
        self.meta.update_property(key, value, &document)?;
        Ok(())
    }

    /// Sets the workflow status value.
    ///
    /// When the current raw value is `waiting` and the desired status is
    /// anything else, `waiting-since` is deleted before the overwrite.
    pub fn set_status(&self, desired: Status) -> StatusResult<()> {
        let Some(document) = self.store.active_document() else {
            return Ok(());
        };

        if self.property_present(&document, STATUS_KEY)? {
            let current = self.meta.property_value(STATUS_KEY, &document)?;
            if current.as_deref() == Some(Status::Waiting.as_str()) && desired != Status::Waiting {
                self.delete_properties(&[WAITING_SINCE_KEY])?;
            }
        }
        self.set_property(STATUS_KEY, desired.as_str())
    }

    /// Removes every tracked workflow property from the active document.
    pub fn delete_status(&self) -> StatusResult<()> {
        self.delete_properties(tracked_property_keys())
    }

    /// Marks the active document `someday`.
    pub fn set_status_someday(&self) -> StatusResult<()> {
        self.set_status(Status::Someday)
    }

    /// Marks the active document `todo`.
    pub fn set_status_todo(&self) -> StatusResult<()> {
        self.set_status(Status::Todo)
    }

    /// Marks the active document `in-progress` and stamps `started`.
    pub fn set_status_in_progress(&self) -> StatusResult<()> {
        self.set_status(Status::InProgress)?;
        self.set_property(STARTED_KEY, &self.clock.date_stamp())
    }

    /// Marks the active document `waiting` and stamps `waiting-since`.
    pub fn set_status_waiting(&self) -> StatusResult<()> {
        self.set_status(Status::Waiting)?;
        self.set_property(WAITING_SINCE_KEY, &self.clock.date_stamp())
    }

    /// Marks the active document `completed` and stamps `completed`.
    pub fn set_status_completed(&self) -> StatusResult<()> {
        self.set_status(Status::Completed)?;
        self.set_property(COMPLETED_KEY, &self.clock.date_stamp())
    }

    fn property_present(&self, document: &Path, key: &str) -> StatusResult<bool> {
        let properties = self.meta.properties(document)?;
        Ok(properties.iter().any(|property| property.key == key))
    }
}
