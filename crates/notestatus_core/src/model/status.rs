//! Workflow status domain model.
//!
//! # Responsibility
//! - Define the enumerated workflow states stored in the `status` property.
//! - Own the stable wire strings and the tracked property key set.
//!
//! # Invariants
//! - Wire strings are stable and lowercase; the serde form equals `as_str()`.
//! - `tracked_property_keys()` is exactly the set removed by a full status
//!   reset.
//!
//! # See also
//! - docs/architecture/data-model.md

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Property key holding the workflow status value.
pub const STATUS_KEY: &str = "status";
/// Property key stamped with a date when work enters `in-progress`.
pub const STARTED_KEY: &str = "started";
/// Property key stamped with a date when work enters `waiting`.
pub const WAITING_SINCE_KEY: &str = "waiting-since";
/// Property key stamped with a date when work enters `completed`.
pub const COMPLETED_KEY: &str = "completed";

const TRACKED_KEYS: &[&str] = &[STATUS_KEY, STARTED_KEY, WAITING_SINCE_KEY, COMPLETED_KEY];

/// Returns every property key owned by status tracking.
///
/// This is the batch removed by a full status reset; unrelated front-matter
/// properties are never part of it.
pub fn tracked_property_keys() -> &'static [&'static str] {
    TRACKED_KEYS
}

/// Enumerated workflow state stored as the value of the `status` property.
///
/// Any state may move to any other state, including itself; transition side
/// effects (timestamp stamping, `waiting-since` clearing) live in the status
/// service, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    /// Captured, not scheduled for action.
    Someday,
    /// Actionable, waiting to be picked up.
    Todo,
    /// Work has started.
    InProgress,
    /// Blocked on someone or something external.
    Waiting,
    /// Work is finished.
    Completed,
}

impl Status {
    /// Stable wire string written into the `status` property.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Someday => "someday",
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Waiting => "waiting",
            Self::Completed => "completed",
        }
    }
}

const SUPPORTED_STATUS_STRINGS: &[&str] =
    &["someday", "todo", "in-progress", "waiting", "completed"];

/// Returns supported status wire strings.
pub fn supported_status_strings() -> &'static [&'static str] {
    SUPPORTED_STATUS_STRINGS
}

/// Parses one workflow status from its wire string.
pub fn parse_status(value: &str) -> Result<Status, StatusParseError> {
    let normalized = value.trim();
    if normalized.is_empty() {
        return Err(StatusParseError::EmptyStatus);
    }

    match normalized {
        "someday" => Ok(Status::Someday),
        "todo" => Ok(Status::Todo),
        "in-progress" => Ok(Status::InProgress),
        "waiting" => Ok(Status::Waiting),
        "completed" => Ok(Status::Completed),
        other => Err(StatusParseError::UnknownStatus(other.to_string())),
    }
}

/// Status wire string parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusParseError {
    EmptyStatus,
    UnknownStatus(String),
}

impl Display for StatusParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyStatus => write!(f, "status value must not be empty"),
            Self::UnknownStatus(value) => write!(
                f,
                "status value is unsupported: `{value}`; expected someday|todo|in-progress|waiting|completed"
            ),
        }
    }
}

impl Error for StatusParseError {}
