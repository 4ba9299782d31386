use std::sync::Arc;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

use crate::domain::errors::{ProjectionError, ProjectionResult};
use crate::domain::ports::HolidayProvider;
use crate::models::WorkSchedule;
use crate::services::business_calendar::BusinessCalendar;

/// Business-calendar projection of an SLA hour budget.
///
/// Owns the per-call calendar state (schedule snapshot plus lazy holiday
/// cache); build one instance per projection call.
pub struct SlaProjector {
    calendar: BusinessCalendar,
}

impl SlaProjector {
    pub fn new(schedule: WorkSchedule, provider: Arc<dyn HolidayProvider>) -> Self {
        Self {
            calendar: BusinessCalendar::new(schedule, provider),
        }
    }

    /// Compute the instant at which `remaining_hours` of working time,
    /// started at `start`, is exhausted.
    ///
    /// Walks one working day at a time: clamp the cursor into the day's
    /// window, finish inside it if the budget fits, otherwise consume the
    /// window fully and carry the remainder to the next working day's
    /// opening. A budget equal to the hours left in the window finishes
    /// exactly at closing time, with no rollover.
    pub async fn project(
        &mut self,
        start: NaiveDateTime,
        remaining_hours: f64,
    ) -> ProjectionResult<NaiveDateTime> {
        if !(remaining_hours > 0.0) {
            return Err(ProjectionError::InvalidRequest(format!(
                "remaining_hours must be positive, got {}",
                remaining_hours
            )));
        }

        let mut cursor = start;
        let mut remaining = remaining_hours;

        while remaining > 0.0 {
            let today = cursor.date();

            if !self.calendar.is_working_day(today).await? {
                cursor = self.opening_after(today).await?;
                continue;
            }

            let (open, close) = self.calendar.schedule().window_for(today.weekday())?;

            // Before opening: jump to opening.
            if cursor.time() < open {
                cursor = today.and_time(open);
            }

            // At or past closing on a working day (possible after an
            // end-of-day rollover): move to the next working day's opening.
            if cursor.time() >= close {
                cursor = self.opening_after(today).await?;
                continue;
            }

            let available = hours_between(cursor, today.and_time(close));
            if remaining <= available {
                cursor += hours_duration(remaining);
                remaining = 0.0;
            } else {
                remaining -= available;
                cursor = self.opening_after(today).await?;
            }
        }

        Ok(cursor)
    }

    /// Working-hour overlap between two instants, summed across working
    /// days and clamped to each day's window. Returns 0 when `end` is not
    /// after `start`.
    pub async fn business_hours_between(
        &mut self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> ProjectionResult<f64> {
        if end <= start {
            return Ok(0.0);
        }

        let mut total = 0.0;
        let mut date = start.date();

        while date <= end.date() {
            if self.calendar.is_working_day(date).await? {
                let (open, close) = self.calendar.schedule().window_for(date.weekday())?;
                let window_start = start.max(date.and_time(open));
                let window_end = end.min(date.and_time(close));
                if window_start < window_end {
                    total += hours_between(window_start, window_end);
                }
            }

            match date.succ_opt() {
                Some(next) => date = next,
                None => break,
            }
        }

        Ok(total)
    }

    /// Next working day's opening instant, strictly after `date`.
    async fn opening_after(&mut self, date: NaiveDate) -> ProjectionResult<NaiveDateTime> {
        let next = self.calendar.next_working_day(date).await?;
        let (open, _) = self.calendar.schedule().window_for(next.weekday())?;
        Ok(next.and_time(open))
    }
}

/// Fractional hours between two instants, at millisecond precision.
fn hours_between(from: NaiveDateTime, to: NaiveDateTime) -> f64 {
    (to - from).num_milliseconds() as f64 / 3_600_000.0
}

/// Duration for a fractional hour count, rounded to whole milliseconds.
fn hours_duration(hours: f64) -> Duration {
    Duration::milliseconds((hours * 3_600_000.0).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    #[test]
    fn test_hours_between_fractional() {
        assert_eq!(hours_between(dt(2024, 5, 6, 8, 0), dt(2024, 5, 6, 17, 0)), 9.0);
        assert_eq!(hours_between(dt(2024, 5, 6, 16, 30), dt(2024, 5, 6, 17, 0)), 0.5);
    }

    #[test]
    fn test_hours_duration_round_trip() {
        let start = dt(2024, 5, 6, 8, 0);
        assert_eq!(start + hours_duration(1.5), dt(2024, 5, 6, 9, 30));
        assert_eq!(start + hours_duration(0.25), dt(2024, 5, 6, 8, 15));
    }
}
