use chrono::{NaiveTime, Weekday};

use crate::domain::errors::{ProjectionError, ProjectionResult};

/// One configured working window: a weekday with its opening and closing
/// time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekdayWindow {
    pub weekday: Weekday,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl WeekdayWindow {
    pub fn new(weekday: Weekday, start_time: NaiveTime, end_time: NaiveTime) -> Self {
        Self {
            weekday,
            start_time,
            end_time,
        }
    }
}

/// Full weekly working-hours configuration.
///
/// At most one window per weekday; weekdays without a window are
/// non-working days. Windows are stored Monday-first so lookups never
/// depend on how weekday names were spelled in the store.
#[derive(Debug, Clone, Default)]
pub struct WorkSchedule {
    windows: [Option<(NaiveTime, NaiveTime)>; 7],
}

impl WorkSchedule {
    /// Build a schedule from loaded rows, rejecting rows that violate the
    /// invariants (start before end, one row per weekday).
    pub fn from_windows(rows: Vec<WeekdayWindow>) -> ProjectionResult<Self> {
        let mut windows: [Option<(NaiveTime, NaiveTime)>; 7] = [None; 7];

        for row in rows {
            if row.start_time >= row.end_time {
                return Err(ProjectionError::InvalidSchedule(format!(
                    "{}: start {} is not before end {}",
                    row.weekday, row.start_time, row.end_time
                )));
            }

            let slot = &mut windows[row.weekday.num_days_from_monday() as usize];
            if slot.is_some() {
                return Err(ProjectionError::InvalidSchedule(format!(
                    "duplicate window for {}",
                    row.weekday
                )));
            }
            *slot = Some((row.start_time, row.end_time));
        }

        Ok(Self { windows })
    }

    /// True iff a window exists for that weekday.
    pub fn is_configured_workday(&self, weekday: Weekday) -> bool {
        self.windows[weekday.num_days_from_monday() as usize].is_some()
    }

    /// Opening and closing time for a weekday.
    pub fn window_for(&self, weekday: Weekday) -> ProjectionResult<(NaiveTime, NaiveTime)> {
        self.windows[weekday.num_days_from_monday() as usize]
            .ok_or(ProjectionError::NotConfigured(weekday))
    }

    /// True when no weekday is configured at all.
    pub fn is_empty(&self) -> bool {
        self.windows.iter().all(Option::is_none)
    }
}

/// Map a stored weekday name to the canonical enumeration.
///
/// Name mapping happens only at the persistence boundary; the core only
/// ever sees `chrono::Weekday`.
pub fn weekday_from_name(name: &str) -> Option<Weekday> {
    match name.to_lowercase().as_str() {
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Canonical stored name for a weekday.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}
