//! Document store contracts and implementations.
//!
//! # Responsibility
//! - Define host-facing document access: active-document selection, full-text
//!   read, full-text overwrite.
//! - Keep filesystem and in-memory details inside the implementations.
//!
//! # Invariants
//! - `modify` replaces the whole document text in one call.
//! - Documents are addressed by vault-relative path.
//!
//! # See also
//! - docs/architecture/data-model.md

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

mod memory;
mod vault;

pub use memory::MemoryDocumentStore;
pub use vault::{open_vault, VaultDocumentStore};

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug)]
pub enum StoreError {
    DocumentNotFound(PathBuf),
    OutsideVaultRoot(PathBuf),
    VaultRootInvalid(PathBuf),
    Io(std::io::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DocumentNotFound(document) => {
                write!(f, "document not found: {}", document.display())
            }
            Self::OutsideVaultRoot(document) => {
                write!(f, "path escapes the vault root: {}", document.display())
            }
            Self::VaultRootInvalid(root) => {
                write!(f, "vault root is not a directory: {}", root.display())
            }
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Document access contract consumed by the metadata layer and the status
/// service.
pub trait DocumentStore {
    fn active_document(&self) -> Option<PathBuf>;
    fn read(&self, document: &Path) -> StoreResult<String>;
    fn modify(&self, document: &Path, content: &str) -> StoreResult<()>;
}
