use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::domain::errors::ProjectionResult;
use crate::domain::ports::HolidayProvider;

/// Per-call holiday cache over the external provider.
///
/// Years are fetched lazily, each at most once per calendar instance. The
/// cache lives for a single projection call, so there is no cross-call
/// invalidation to manage.
pub struct HolidayCalendar {
    provider: Arc<dyn HolidayProvider>,
    years: HashMap<i32, HashSet<NaiveDate>>,
}

impl HolidayCalendar {
    pub fn new(provider: Arc<dyn HolidayProvider>) -> Self {
        Self {
            provider,
            years: HashMap::new(),
        }
    }

    /// True iff `date` is a holiday. Transparently loads the year of the
    /// queried date on first use.
    pub async fn is_holiday(&mut self, date: NaiveDate) -> ProjectionResult<bool> {
        let year = date.year();

        if !self.years.contains_key(&year) {
            let holidays = self.provider.holidays_for_year(year).await?;
            debug!("Loaded {} holidays for {}", holidays.len(), year);
            self.years.insert(year, holidays.into_iter().collect());
        }

        Ok(self.years[&year].contains(&date))
    }
}
