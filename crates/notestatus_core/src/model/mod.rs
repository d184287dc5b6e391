//! Domain model for front-matter status tracking.
//!
//! # Responsibility
//! - Define the enumerated workflow status and its wire strings.
//! - Define the property read model shared by metadata enumeration.
//!
//! # Invariants
//! - At most one `status` property is authoritative per document.
//! - Timestamp properties (`started`, `waiting-since`, `completed`) hold
//!   `YYYY-MM-DD` date strings.
//!
//! # See also
//! - docs/architecture/data-model.md

pub mod property;
pub mod status;
