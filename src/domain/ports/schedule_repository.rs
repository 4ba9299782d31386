use crate::domain::errors::ProjectionResult;
use crate::models::WorkSchedule;

/// Read-only source of the configured working-hours windows.
///
/// One load per projection call; the returned schedule is an immutable
/// snapshot for the duration of that call.
#[async_trait::async_trait]
pub trait ScheduleRepository: Send + Sync {
    async fn load_schedule(&self) -> ProjectionResult<WorkSchedule>;
}
