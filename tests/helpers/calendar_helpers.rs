#![allow(dead_code)]
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use ansdesk::domain::errors::{ProjectionError, ProjectionResult};
use ansdesk::domain::ports::{HolidayProvider, ScheduleRepository};
use ansdesk::models::{WeekdayWindow, WorkSchedule};
use ansdesk::services::SlaService;
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

/// Schedule source holding a fixed set of windows.
pub struct InMemorySchedule {
    windows: Vec<WeekdayWindow>,
}

impl InMemorySchedule {
    pub fn new(windows: Vec<WeekdayWindow>) -> Self {
        Self { windows }
    }
}

#[async_trait::async_trait]
impl ScheduleRepository for InMemorySchedule {
    async fn load_schedule(&self) -> ProjectionResult<WorkSchedule> {
        WorkSchedule::from_windows(self.windows.clone())
    }
}

/// Holiday provider serving a fixed date set, counting fetches per year.
pub struct FixedHolidays {
    dates: Vec<NaiveDate>,
    fetches: AtomicUsize,
}

impl FixedHolidays {
    pub fn none() -> Self {
        Self::with_dates(vec![])
    }

    pub fn with_dates(dates: Vec<NaiveDate>) -> Self {
        Self {
            dates,
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl HolidayProvider for FixedHolidays {
    async fn holidays_for_year(&self, year: i32) -> ProjectionResult<Vec<NaiveDate>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .dates
            .iter()
            .copied()
            .filter(|date| date.year() == year)
            .collect())
    }
}

/// Provider that always fails, standing in for an unreachable calendar.
pub struct UnreachableHolidays;

#[async_trait::async_trait]
impl HolidayProvider for UnreachableHolidays {
    async fn holidays_for_year(&self, _year: i32) -> ProjectionResult<Vec<NaiveDate>> {
        Err(ProjectionError::HolidaySource(
            "connection refused".to_string(),
        ))
    }
}

/// Mon-Fri 08:00-17:00, the nine-hour reference week.
pub fn mon_fri_8_to_17() -> Vec<WeekdayWindow> {
    [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
    ]
    .into_iter()
    .map(|weekday| WeekdayWindow::new(weekday, t("08:00"), t("17:00")))
    .collect()
}

/// Build an `SlaService` over in-memory collaborators.
pub fn sla_service(
    windows: Vec<WeekdayWindow>,
    holidays: Arc<dyn HolidayProvider>,
) -> SlaService {
    SlaService::new(Arc::new(InMemorySchedule::new(windows)), holidays)
}

pub fn t(value: &str) -> NaiveTime {
    NaiveTime::parse_from_str(value, "%H:%M").expect("bad time literal")
}

pub fn d(value: &str) -> NaiveDate {
    value.parse().expect("bad date literal")
}

pub fn dt(value: &str) -> NaiveDateTime {
    value.parse().expect("bad datetime literal")
}
