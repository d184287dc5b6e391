//! On-disk vault document store.
//!
//! # Responsibility
//! - Open a vault directory and serve documents inside it.
//! - Resolve vault-relative paths and refuse anything that escapes the root.
//!
//! # Invariants
//! - Returned stores have a canonicalized, existing root directory.
//! - Absolute paths and `..` components never resolve.
//! - Resolved paths are canonical and stay under the root, so a symlink
//!   pointing outside the vault is refused as well.
//!
//! # See also
//! - docs/architecture/logging.md

use super::{DocumentStore, StoreError, StoreResult};
use log::{error, info};
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::time::Instant;

/// Document store over a directory of notes on disk.
#[derive(Debug)]
pub struct VaultDocumentStore {
    root: PathBuf,
    active: Option<PathBuf>,
}

/// Opens a vault rooted at an existing directory.
///
/// # Side effects
/// - Canonicalizes the root path.
/// - Emits `vault_open` logging events with duration and status.
pub fn open_vault(root: impl AsRef<Path>) -> StoreResult<VaultDocumentStore> {
    let started_at = Instant::now();
    info!("event=vault_open module=store status=start");

    let root = root.as_ref();
    if !root.is_dir() {
        error!(
            "event=vault_open module=store status=error duration_ms={} error_code=vault_root_invalid root={}",
            started_at.elapsed().as_millis(),
            root.display()
        );
        return Err(StoreError::VaultRootInvalid(root.to_path_buf()));
    }

    match root.canonicalize() {
        Ok(root) => {
            info!(
                "event=vault_open module=store status=ok duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(VaultDocumentStore { root, active: None })
        }
        Err(err) => {
            error!(
                "event=vault_open module=store status=error duration_ms={} error_code=vault_root_canonicalize_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err.into())
        }
    }
}

impl VaultDocumentStore {
    /// Selects the active document; `None` clears the selection.
    pub fn set_active(&mut self, document: Option<PathBuf>) {
        self.active = document;
    }

    /// Canonicalized root directory of the vault.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, document: &Path) -> StoreResult<PathBuf> {
        if document.is_absolute() {
            return Err(StoreError::OutsideVaultRoot(document.to_path_buf()));
        }
        for component in document.components() {
            match component {
                Component::Normal(_) | Component::CurDir => {}
                _ => return Err(StoreError::OutsideVaultRoot(document.to_path_buf())),
            }
        }
        // Component checks alone cannot see where a symlink points, so
        // containment is decided on the canonicalized path.
        let resolved = match self.root.join(document).canonicalize() {
            Ok(resolved) => resolved,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::DocumentNotFound(document.to_path_buf()))
            }
            Err(err) => return Err(err.into()),
        };
        if !resolved.starts_with(&self.root) {
            return Err(StoreError::OutsideVaultRoot(document.to_path_buf()));
        }
        Ok(resolved)
    }
}

impl DocumentStore for VaultDocumentStore {
    fn active_document(&self) -> Option<PathBuf> {
        self.active.clone()
    }

    fn read(&self, document: &Path) -> StoreResult<String> {
        let path = self.resolve(document)?;
        match fs::read_to_string(path) {
            Ok(content) => Ok(content),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Err(StoreError::DocumentNotFound(document.to_path_buf()))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn modify(&self, document: &Path, content: &str) -> StoreResult<()> {
        let path = self.resolve(document)?;
        match fs::write(path, content) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Err(StoreError::DocumentNotFound(document.to_path_buf()))
            }
            Err(err) => Err(err.into()),
        }
    }
}
