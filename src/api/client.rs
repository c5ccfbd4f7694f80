use crate::cache::StatsSource;
use crate::config::Config;
use crate::error::AppError;
use governor::{
    clock::{Clock, DefaultClock},
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter,
};
use serde::de::DeserializeOwned;
use std::num::NonZeroU32;
use std::thread;

use super::endpoints;
use super::models::*;

const USER_AGENT: &str = concat!("rchk_stats/", env!("CARGO_PKG_VERSION"));

pub struct RchkApiClient {
    config: Config,
    clock: DefaultClock,
    rate_limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
}

impl RchkApiClient {
    pub fn new(config: Config) -> Self {
        let per_second = NonZeroU32::new(config.requests_per_second).unwrap_or(NonZeroU32::MIN);
        let clock = DefaultClock::default();
        let rate_limiter = RateLimiter::direct_with_clock(Quota::per_second(per_second), clock.clone());
        RchkApiClient {
            config,
            clock,
            rate_limiter,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.config.api_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_url, path)
    }

    fn throttle(&self) {
        while let Err(not_until) = self.rate_limiter.check() {
            let wait = not_until.wait_time_from(self.clock.now());
            log::debug!("throttling request for {:?}", wait);
            thread::sleep(wait);
        }
    }

    /// Turns a ureq failure into an `AppError`, keeping the server's
    /// `{"error": ...}` message when it sent one.
    fn map_error(err: ureq::Error) -> AppError {
        match err {
            ureq::Error::Status(status, resp) => {
                let status_text = resp.status_text().to_string();
                let message = resp
                    .into_json::<ApiErrorBody>()
                    .map(|body| body.error)
                    .unwrap_or(status_text);
                AppError::ApiError { status, message }
            }
            ureq::Error::Transport(transport) => AppError::HttpError(transport.to_string()),
        }
    }

    fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.throttle();
        let url = self.url(path);
        log::debug!("GET {}", url);

        let resp = ureq::get(&url)
            .set("User-Agent", USER_AGENT)
            .set("Accept", "application/json")
            .call()
            .map_err(Self::map_error)?;

        let body: ApiResponse<T> = resp
            .into_json()
            .map_err(|e| AppError::JsonError(format!("{}: {}", path, e)))?;
        Ok(body.res)
    }

    fn post<T: DeserializeOwned>(&self, path: &str, body: Option<serde_json::Value>) -> Result<T, AppError> {
        self.throttle();
        let url = self.url(path);
        log::debug!("POST {}", url);

        let request = ureq::post(&url)
            .set("User-Agent", USER_AGENT)
            .set("Accept", "application/json");
        let result = match body {
            Some(json) => request.send_json(json),
            None => request.call(),
        };

        result
            .map_err(Self::map_error)?
            .into_json()
            .map_err(|e| AppError::JsonError(format!("{}: {}", path, e)))
    }

    pub fn get_league_version(&self) -> Result<String, AppError> {
        self.get(endpoints::LEAGUE_VERSION)
    }

    /// Links an account to a person alias. Returns whatever the server echoes.
    pub fn set_account_person_name(&self, account_id: u64, person_name: &str) -> Result<serde_json::Value, AppError> {
        validate_person_name(person_name)?;
        let body: ApiResponse<serde_json::Value> =
            self.post(&endpoints::set_account_person_name(account_id, person_name.trim()), None)?;
        Ok(body.res)
    }

    /// Submits the raw match-history page of a custom game.
    pub fn add_match_text(&self, html: &str) -> Result<SubmitMatchResponse, AppError> {
        if html.trim().is_empty() {
            return Err(AppError::InvalidInput("match HTML is empty".to_string()));
        }
        self.post(endpoints::ADD_MATCH_TEXT, Some(serde_json::json!({ "html": html })))
    }
}

impl StatsSource for RchkApiClient {
    fn get_matches(&self) -> Result<Vec<MatchRecord>, AppError> {
        self.get(endpoints::MATCHES)
    }

    fn get_player_stats(&self) -> Result<Vec<PersonStats>, AppError> {
        self.get(endpoints::PLAYER_STATS)
    }

    fn get_person_stats(&self) -> Result<Vec<PersonStats>, AppError> {
        self.get(endpoints::PERSON_STATS)
    }

    fn get_champion_stats(&self) -> Result<Vec<ChampionStats>, AppError> {
        self.get(endpoints::CHAMPION_STATS)
    }
}

/// Same rule the server enforces: ASCII letters, digits and spaces.
pub fn validate_person_name(person_name: &str) -> Result<(), AppError> {
    let trimmed = person_name.trim();
    if trimmed.is_empty() {
        return Err(AppError::InvalidInput("person name is empty".to_string()));
    }
    if !trimmed.chars().all(|c| c.is_ascii_alphanumeric() || c == ' ') {
        return Err(AppError::InvalidInput(format!(
            "person name '{}' must be alphanumeric with spaces",
            person_name
        )));
    }
    Ok(())
}
