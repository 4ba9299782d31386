use std::time::Duration;

use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use tracing::{info, warn};

use crate::domain::errors::{ProjectionError, ProjectionResult};
use crate::domain::ports::HolidayProvider;

/// Holiday calendar backed by an external HTTP service keyed by year:
/// `GET {base_url}/{year}/{country}` returning a JSON array of records
/// carrying an ISO `date` field.
pub struct HolidayApiProvider {
    http_client: Client,
    base_url: String,
    country: String,
}

#[derive(Debug, Deserialize)]
struct HolidayRecord {
    date: NaiveDate,
}

impl HolidayApiProvider {
    pub fn new(base_url: &str, country: &str, timeout: Duration) -> Self {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            country: country.to_string(),
        }
    }
}

#[async_trait::async_trait]
impl HolidayProvider for HolidayApiProvider {
    async fn holidays_for_year(&self, year: i32) -> ProjectionResult<Vec<NaiveDate>> {
        let url = format!("{}/{}/{}", self.base_url, year, self.country);
        info!("Fetching holidays from {}", url);

        let response = self.http_client.get(&url).send().await.map_err(|e| {
            let message = if e.is_timeout() {
                format!("holiday fetch timed out: {}", e)
            } else {
                format!("holiday fetch failed: {}", e)
            };
            warn!("{}", message);
            ProjectionError::HolidaySource(message)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Holiday source returned HTTP {} for {}", status.as_u16(), url);
            return Err(ProjectionError::HolidaySource(format!(
                "holiday source returned HTTP {}",
                status.as_u16()
            )));
        }

        let records: Vec<HolidayRecord> = response.json().await.map_err(|e| {
            ProjectionError::HolidaySource(format!("malformed holiday payload: {}", e))
        })?;

        Ok(records.into_iter().map(|record| record.date).collect())
    }
}
