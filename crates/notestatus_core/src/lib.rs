//! Workflow status tracking over markdown front matter.
//! This crate is the single source of truth for status transition semantics.

pub mod clock;
pub mod frontmatter;
pub mod logging;
pub mod meta;
pub mod model;
pub mod service;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock, DATE_FORMAT};
pub use logging::{default_log_level, init_logging, logging_status};
pub use meta::{FrontMatterApi, MetaError, MetaResult, MetadataApi};
pub use model::property::{validate_property_key, Property, PropertyKeyError};
pub use model::status::{
    parse_status, supported_status_strings, tracked_property_keys, Status, StatusParseError,
    COMPLETED_KEY, STARTED_KEY, STATUS_KEY, WAITING_SINCE_KEY,
};
pub use service::status_service::{StatusError, StatusResult, StatusService};
pub use store::{
    open_vault, DocumentStore, MemoryDocumentStore, StoreError, StoreResult, VaultDocumentStore,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
