use std::sync::Arc;

use chrono::{Datelike, NaiveDate};

use crate::domain::errors::{ProjectionError, ProjectionResult};
use crate::domain::ports::HolidayProvider;
use crate::models::WorkSchedule;
use crate::services::holiday_calendar::HolidayCalendar;

/// Cap for the forward scan in `next_working_day`. Hitting it means no
/// working day exists within a full year.
const NEXT_WORKING_DAY_SCAN_CAP: u32 = 366;

/// Working-day view for one projection call: the weekly schedule composed
/// with the holiday calendar.
pub struct BusinessCalendar {
    schedule: WorkSchedule,
    holidays: HolidayCalendar,
}

impl BusinessCalendar {
    pub fn new(schedule: WorkSchedule, provider: Arc<dyn HolidayProvider>) -> Self {
        Self {
            schedule,
            holidays: HolidayCalendar::new(provider),
        }
    }

    pub fn schedule(&self) -> &WorkSchedule {
        &self.schedule
    }

    /// True iff `date` falls on a configured weekday and is not a holiday.
    ///
    /// The weekday check runs first so non-configured days never trigger a
    /// holiday fetch.
    pub async fn is_working_day(&mut self, date: NaiveDate) -> ProjectionResult<bool> {
        if !self.schedule.is_configured_workday(date.weekday()) {
            return Ok(false);
        }
        Ok(!self.holidays.is_holiday(date).await?)
    }

    /// First working day strictly after `date`.
    pub async fn next_working_day(&mut self, date: NaiveDate) -> ProjectionResult<NaiveDate> {
        if self.schedule.is_empty() {
            return Err(ProjectionError::NoWorkingDaysConfigured);
        }

        let mut current = date;
        for _ in 0..NEXT_WORKING_DAY_SCAN_CAP {
            current = current.succ_opt().ok_or_else(|| {
                ProjectionError::InvalidRequest("date out of supported range".to_string())
            })?;
            if self.is_working_day(current).await? {
                return Ok(current);
            }
        }

        Err(ProjectionError::NoWorkingDaysConfigured)
    }
}
