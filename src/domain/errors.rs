use chrono::Weekday;
use thiserror::Error;

/// Failure taxonomy for SLA projections.
///
/// Every variant aborts the whole projection; there is no partial result to
/// salvage, so callers map these straight to a response.
#[derive(Error, Debug)]
pub enum ProjectionError {
    /// Bad caller input (non-positive hours, unparsable instant). Checked
    /// before any calendar access.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    /// A weekday was expected to have a working-hours window but has none.
    #[error("no working hours configured for {0}")]
    NotConfigured(Weekday),
    /// A working-hours row violates the schedule invariants (duplicate
    /// weekday, start not before end, unparsable time).
    #[error("invalid working hours configuration: {0}")]
    InvalidSchedule(String),
    /// The schedule has no working weekday at all. Detected up front so the
    /// forward scan cannot loop forever.
    #[error("no working days configured")]
    NoWorkingDaysConfigured,
    /// The external holiday calendar was unreachable or returned data we
    /// could not parse.
    #[error("holiday source error: {0}")]
    HolidaySource(String),
    /// The working-hours store failed.
    #[error("storage error: {0}")]
    Storage(String),
}

pub type ProjectionResult<T> = Result<T, ProjectionError>;
