use chrono::NaiveDate;

use crate::domain::errors::ProjectionResult;

/// External holiday calendar, keyed by four-digit year.
///
/// A fetch for year Y returns the holidays of Y only; a span crossing a
/// year boundary needs one fetch per year touched. Failures surface as
/// `ProjectionError::HolidaySource` and abort the projection.
#[async_trait::async_trait]
pub trait HolidayProvider: Send + Sync {
    async fn holidays_for_year(&self, year: i32) -> ProjectionResult<Vec<NaiveDate>>;
}
