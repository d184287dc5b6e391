//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store and metadata calls into status use-case APIs.
//! - Keep CLI/host layers decoupled from line-editing details.
//!
//! # See also
//! - docs/architecture/data-model.md

pub mod status_service;
