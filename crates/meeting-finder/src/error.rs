//! Error types for meeting-finder operations.

use std::convert::Infallible;

use thiserror::Error;

/// The five failure kinds a caller can distinguish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingValue,
    Format,
    InvalidRange,
    OutOfBounds,
    InvalidDuration,
}

#[derive(Error, Debug)]
pub enum ScheduleError {
    /// A required value was absent (as opposed to present but malformed).
    #[error("Missing value: {0}")]
    MissingValue(String),

    /// A present time or duration literal did not match its textual shape.
    #[error("Invalid format: {0}")]
    Format(String),

    /// The serialized calendar record could not be decoded at all.
    #[error("Invalid calendar record: {0}")]
    InvalidRecord(#[from] serde_json::Error),

    #[error("Invalid {what}: end {end} must be after start {start}")]
    InvalidRange {
        what: &'static str,
        start: String,
        end: String,
    },

    #[error(
        "Planned meeting {meeting_start}-{meeting_end} lies outside working hours {work_start}-{work_end}"
    )]
    OutOfBounds {
        meeting_start: String,
        meeting_end: String,
        work_start: String,
        work_end: String,
    },

    #[error("Invalid meeting duration: {0}")]
    InvalidDuration(String),
}

impl ScheduleError {
    /// Classify this error into one of the caller-visible kinds.
    ///
    /// An undecodable record counts as a format failure even though it keeps
    /// its own variant for the underlying `serde_json` error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScheduleError::MissingValue(_) => ErrorKind::MissingValue,
            ScheduleError::Format(_) | ScheduleError::InvalidRecord(_) => ErrorKind::Format,
            ScheduleError::InvalidRange { .. } => ErrorKind::InvalidRange,
            ScheduleError::OutOfBounds { .. } => ErrorKind::OutOfBounds,
            ScheduleError::InvalidDuration(_) => ErrorKind::InvalidDuration,
        }
    }
}

// Lets already-typed inputs flow through the generic `TryInto` entry point.
impl From<Infallible> for ScheduleError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
