use crate::error::AppError;
use std::env;

pub const DEFAULT_API_URL: &str = "http://localhost:3000";
pub const DEFAULT_REQUESTS_PER_SECOND: u32 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub requests_per_second: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let api_url = env::var("RCHK_API_URL").ok();
        let requests_per_second = env::var("RCHK_REQUESTS_PER_SECOND").ok();

        Self::from_values(api_url.as_deref(), requests_per_second.as_deref())
    }

    fn from_values(api_url: Option<&str>, requests_per_second: Option<&str>) -> Result<Self, AppError> {
        let api_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();

        let requests_per_second = match requests_per_second {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| {
                    AppError::ConfigError(format!(
                        "RCHK_REQUESTS_PER_SECOND must be a positive integer, got '{}'",
                        raw
                    ))
                })?,
            None => DEFAULT_REQUESTS_PER_SECOND,
        };

        Ok(Config {
            api_url,
            requests_per_second,
        })
    }

    pub fn with_api_url(mut self, api_url: &str) -> Self {
        self.api_url = api_url.trim_end_matches('/').to_string();
        self
    }
}
