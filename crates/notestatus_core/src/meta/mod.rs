//! Metadata API contracts over document front matter.
//!
//! # Responsibility
//! - Define the property-editing contract the status service depends on.
//! - Keep the line-level editing details inside the implementation.
//!
//! # Invariants
//! - `create_property` appends; callers guard against existing keys.
//! - `update_property` never creates: an absent key is an error.
//! - Keys pass `validate_property_key` before any write.
//!
//! # See also
//! - docs/architecture/data-model.md

use crate::model::property::{Property, PropertyKeyError};
use crate::store::StoreError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

mod front_matter;

pub use front_matter::FrontMatterApi;

pub type MetaResult<T> = Result<T, MetaError>;

#[derive(Debug)]
pub enum MetaError {
    Store(StoreError),
    InvalidKey(PropertyKeyError),
    PropertyNotFound(String),
}

impl Display for MetaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::InvalidKey(err) => write!(f, "{err}"),
            Self::PropertyNotFound(key) => write!(f, "property not found: {key}"),
        }
    }
}

impl Error for MetaError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::InvalidKey(err) => Some(err),
            Self::PropertyNotFound(_) => None,
        }
    }
}

impl From<StoreError> for MetaError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<PropertyKeyError> for MetaError {
    fn from(value: PropertyKeyError) -> Self {
        Self::InvalidKey(value)
    }
}

/// Property-editing contract for one document's front matter.
pub trait MetadataApi {
    fn properties(&self, document: &Path) -> MetaResult<Vec<Property>>;
    fn property_value(&self, key: &str, document: &Path) -> MetaResult<Option<String>>;
    fn create_property(&self, key: &str, initial_value: &str, document: &Path) -> MetaResult<()>;
    fn update_property(&self, key: &str, value: &str, document: &Path) -> MetaResult<()>;
}
