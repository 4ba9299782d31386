use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub holiday_api_url: String,
    pub holiday_country: String,
    pub holiday_http_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://ansdesk.db?mode=rwc".to_string());

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        let holiday_api_url = env::var("HOLIDAY_API_URL")
            .unwrap_or_else(|_| "https://date.nager.at/api/v3/PublicHolidays".to_string());

        let holiday_country = env::var("HOLIDAY_COUNTRY").unwrap_or_else(|_| "CO".to_string());

        let holiday_http_timeout_secs = env::var("HOLIDAY_HTTP_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .unwrap_or(10);

        Ok(Config {
            database_url,
            server_host,
            server_port,
            holiday_api_url,
            holiday_country,
            holiday_http_timeout_secs,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port number")]
    InvalidPort,
}
