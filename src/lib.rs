//! `hourcast` - Localized, timezone-correct hourly weather forecasts
//!
//! This library turns a weatherapi.com style forecast payload into an ordered,
//! filtered, localized and color-annotated terminal report, and provides the
//! fetching, configuration and output pieces the command-line tool is built from.

pub mod api;
pub mod calendar;
pub mod classifier;
pub mod config;
pub mod display;
pub mod error;
pub mod localization;
pub mod logging;
pub mod models;
pub mod render;
pub mod storage;
pub mod time_alignment;

// Re-export core types for public API
pub use api::WeatherApiClient;
pub use classifier::{DisplayColor, RainSeverity, UvSeverity, classify_rain, classify_uv};
pub use config::HourcastConfig;
pub use error::ForecastError;
pub use models::{CalendarDate, DayForecast, ForecastPayload, ForecastRequest, HourSample, Location};
pub use render::{ForecastRenderer, HourLine, Report, ReportLine, SunMark};
pub use time_alignment::SunEvent;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, ForecastError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
