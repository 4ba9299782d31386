use std::sync::Arc;

use chrono::NaiveDateTime;
use tracing::info;

use crate::domain::errors::{ProjectionError, ProjectionResult};
use crate::domain::ports::{HolidayProvider, ScheduleRepository};
use crate::models::Priority;
use crate::services::projection::SlaProjector;

/// Service computing SLA completion instants against the business calendar.
///
/// Each call loads an immutable schedule snapshot and builds a fresh
/// per-call projector, so concurrent calls share no mutable state.
#[derive(Clone)]
pub struct SlaService {
    schedule_repo: Arc<dyn ScheduleRepository>,
    holiday_provider: Arc<dyn HolidayProvider>,
}

impl SlaService {
    pub fn new(
        schedule_repo: Arc<dyn ScheduleRepository>,
        holiday_provider: Arc<dyn HolidayProvider>,
    ) -> Self {
        Self {
            schedule_repo,
            holiday_provider,
        }
    }

    /// Project the completion instant for an SLA hour budget.
    pub async fn project_completion(
        &self,
        start: NaiveDateTime,
        remaining_hours: f64,
    ) -> ProjectionResult<NaiveDateTime> {
        // Input validation runs before any schedule or holiday access.
        if !(remaining_hours > 0.0) {
            return Err(ProjectionError::InvalidRequest(format!(
                "remaining_hours must be positive, got {}",
                remaining_hours
            )));
        }

        let mut projector = self.projector().await?;
        let completion = projector.project(start, remaining_hours).await?;

        info!(
            "Projected {}h from {} to completion at {}",
            remaining_hours, start, completion
        );
        Ok(completion)
    }

    /// Estimated closing instant for a ticket: the ANS hour budget scaled
    /// by priority (or the priority's default budget when the service has
    /// none) projected through the business calendar.
    pub async fn estimated_closing(
        &self,
        created_at: NaiveDateTime,
        priority: Priority,
        ans_hours: Option<f64>,
    ) -> ProjectionResult<(NaiveDateTime, f64)> {
        let budget = match ans_hours {
            Some(hours) if hours > 0.0 => hours * priority.multiplier(),
            Some(hours) => {
                return Err(ProjectionError::InvalidRequest(format!(
                    "ans_hours must be positive, got {}",
                    hours
                )))
            }
            None => priority.default_budget_hours(),
        };

        let mut projector = self.projector().await?;
        let closing = projector.project(created_at, budget).await?;

        info!(
            "Estimated closing for {} priority ticket created {}: {} ({}h budget)",
            priority, created_at, closing, budget
        );
        Ok((closing, budget))
    }

    /// Working hours elapsed between two instants.
    pub async fn business_hours_between(
        &self,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> ProjectionResult<f64> {
        let mut projector = self.projector().await?;
        projector.business_hours_between(from, to).await
    }

    async fn projector(&self) -> ProjectionResult<SlaProjector> {
        let schedule = self.schedule_repo.load_schedule().await?;
        Ok(SlaProjector::new(schedule, self.holiday_provider.clone()))
    }
}
