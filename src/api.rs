//! Weather API client for weatherapi.com
//!
//! Fetches the raw `forecast.json` payload for a request. The body is returned
//! untouched so it can be saved as-is before decoding.

use crate::config::WeatherConfig;
use crate::models::ForecastRequest;
use crate::{ForecastError, Result};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, instrument, warn};

/// Pause between retries, multiplied by the attempt number
const RETRY_BACKOFF: Duration = Duration::from_millis(500);

/// Weather API client
pub struct WeatherApiClient {
    /// HTTP client
    client: Client,
    /// API configuration
    config: WeatherConfig,
}

impl WeatherApiClient {
    /// Create a new weather API client
    pub fn new(config: WeatherConfig) -> Result<Self> {
        let timeout = Duration::from_secs(config.timeout_seconds.into());

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("hourcast/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ForecastError::api(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Build the forecast URL for a request
    pub fn forecast_url(&self, request: &ForecastRequest) -> Result<String> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                ForecastError::config(
                    "No weather API key set. Set WEATHER_API_KEY or weather.api_key in the config file",
                )
            })?;

        Ok(format!(
            "{}/forecast.json?key={}&q={}&days={}&aqi=no&alerts=yes&lang={}",
            self.config.base_url.trim_end_matches('/'),
            urlencoding::encode(api_key),
            urlencoding::encode(request.location_query()),
            self.config.days,
            urlencoding::encode(request.language_code()),
        ))
    }

    /// Fetch the raw forecast payload
    #[instrument(skip(self, request), fields(location = request.location_query(), lang = request.language_code()))]
    pub fn fetch_forecast(&self, request: &ForecastRequest) -> Result<Vec<u8>> {
        let url = self.forecast_url(request)?;
        info!(
            "Fetching {}-day forecast for '{}'",
            self.config.days,
            request.location_query()
        );

        let start_time = Instant::now();
        let body = self.make_request(&url)?;

        info!(
            "Retrieved {} bytes of forecast data in {:.3}s",
            body.len(),
            start_time.elapsed().as_secs_f64()
        );
        Ok(body)
    }

    /// Make a request with retry logic
    fn make_request(&self, url: &str) -> Result<Vec<u8>> {
        let max_attempts = self.config.max_retries + 1;
        let mut last_error = None;

        for attempt in 1..=max_attempts {
            if attempt > 1 {
                let wait = RETRY_BACKOFF * (attempt - 1);
                debug!("Retrying in {:.1}s", wait.as_secs_f64());
                thread::sleep(wait);
            }

            debug!("Making HTTP request (attempt {}/{})", attempt, max_attempts);

            match self.client.get(url).send() {
                Ok(response) => {
                    let status = response.status();
                    debug!("HTTP response received: {}", status);

                    if status.is_success() {
                        let body = response.bytes().map_err(|e| {
                            ForecastError::api(format!("Failed to read response body: {e}"))
                        })?;
                        return Ok(body.to_vec());
                    }

                    let err = status_error(status);
                    if !is_retryable(status) {
                        error!("Weather API request failed: {}", status);
                        return Err(err);
                    }
                    warn!("Weather API returned {} (attempt {})", status, attempt);
                    last_error = Some(err);
                }
                Err(e) => {
                    warn!("Network error (attempt {}): {}", attempt, e);
                    last_error = Some(ForecastError::api(format!("Network error: {e}")));
                }
            }
        }

        error!("Giving up after {} attempts", max_attempts);
        Err(last_error.unwrap_or_else(|| ForecastError::api("Weather API not available")))
    }
}

/// Server errors and throttling are worth another attempt
fn is_retryable(status: StatusCode) -> bool {
    status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS
}

fn status_error(status: StatusCode) -> ForecastError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            ForecastError::api("API key was rejected. Please check your weather API key.")
        }
        StatusCode::BAD_REQUEST => {
            ForecastError::api("Location not found. Please check the city name.")
        }
        StatusCode::TOO_MANY_REQUESTS => ForecastError::api("Rate limit exceeded"),
        _ => ForecastError::api(format!("Weather API not available (HTTP {status})")),
    }
}
