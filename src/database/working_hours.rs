use chrono::NaiveTime;
use sqlx::Row;

use crate::database::Database;
use crate::domain::errors::{ProjectionError, ProjectionResult};
use crate::domain::ports::ScheduleRepository;
use crate::models::{weekday_from_name, WeekdayWindow, WorkSchedule};

impl Database {
    /// Load all configured working-hours rows.
    ///
    /// Weekday names and times are stored as text; they become structured
    /// values here, at the boundary, and nowhere else.
    pub async fn list_working_hours(&self) -> ProjectionResult<Vec<WeekdayWindow>> {
        let rows = sqlx::query(
            "SELECT week_day, start_time, end_time FROM working_hours ORDER BY id ASC",
        )
        .fetch_all(self.pool())
        .await
        .map_err(storage_err)?;

        let mut windows = Vec::with_capacity(rows.len());
        for row in rows {
            let week_day: String = row.try_get("week_day").map_err(storage_err)?;
            let start_time: String = row.try_get("start_time").map_err(storage_err)?;
            let end_time: String = row.try_get("end_time").map_err(storage_err)?;

            let weekday = weekday_from_name(&week_day).ok_or_else(|| {
                ProjectionError::InvalidSchedule(format!("unknown weekday name: {}", week_day))
            })?;

            windows.push(WeekdayWindow::new(
                weekday,
                parse_time_of_day(&start_time)?,
                parse_time_of_day(&end_time)?,
            ));
        }

        Ok(windows)
    }
}

/// `ScheduleRepository` backed by the relational store.
#[derive(Clone)]
pub struct SqlScheduleRepository {
    db: Database,
}

impl SqlScheduleRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl ScheduleRepository for SqlScheduleRepository {
    async fn load_schedule(&self) -> ProjectionResult<WorkSchedule> {
        let windows = self.db.list_working_hours().await?;
        WorkSchedule::from_windows(windows)
    }
}

fn storage_err(e: sqlx::Error) -> ProjectionError {
    ProjectionError::Storage(e.to_string())
}

/// Parse a stored `HH:MM:SS` (or `HH:MM`) time of day.
fn parse_time_of_day(value: &str) -> ProjectionResult<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .map_err(|_| {
            ProjectionError::InvalidSchedule(format!("unparsable time of day: {}", value))
        })
}
