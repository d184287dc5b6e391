//! Line-oriented metadata API over a document store.
//!
//! # Responsibility
//! - Implement `MetadataApi` by rewriting front-matter lines through the
//!   pure `frontmatter` transforms.
//!
//! # Invariants
//! - Every write is a full-document read, transform, overwrite sequence.
//! - Document text outside the edited lines is preserved byte for byte.

use super::{MetaError, MetaResult, MetadataApi};
use crate::frontmatter;
use crate::model::property::{validate_property_key, Property};
use crate::store::DocumentStore;
use std::path::Path;

/// Front-matter implementation of `MetadataApi` over a borrowed store.
pub struct FrontMatterApi<'a, S: DocumentStore> {
    store: &'a S,
}

impl<'a, S: DocumentStore> FrontMatterApi<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }
}

impl<S: DocumentStore> MetadataApi for FrontMatterApi<'_, S> {
    fn properties(&self, document: &Path) -> MetaResult<Vec<Property>> {
        let content = self.store.read(document)?;
        Ok(frontmatter::scan_properties(&content))
    }

    fn property_value(&self, key: &str, document: &Path) -> MetaResult<Option<String>> {
        let content = self.store.read(document)?;
        Ok(frontmatter::scan_properties(&content)
            .into_iter()
            .find(|property| property.key == key)
            .map(|property| property.value))
    }

    fn create_property(&self, key: &str, initial_value: &str, document: &Path) -> MetaResult<()> {
        validate_property_key(key)?;
        let content = self.store.read(document)?;
        let updated = frontmatter::insert_property_line(&content, key, initial_value);
        self.store.modify(document, &updated)?;
        Ok(())
    }

    fn update_property(&self, key: &str, value: &str, document: &Path) -> MetaResult<()> {
        validate_property_key(key)?;
        let content = self.store.read(document)?;
        let updated = frontmatter::update_property_line(&content, key, value)
            .ok_or_else(|| MetaError::PropertyNotFound(key.to_string()))?;
        self.store.modify(document, &updated)?;
        Ok(())
    }
}
