//! Data models for hourcast
//!
//! This module contains the domain models organized by concern:
//! - Location: where the forecast applies and its timezone
//! - Forecast: the deserialized forecast payload (days, hours, astronomy)
//! - Request: the immutable location/language pair for one run

pub mod forecast;
pub mod location;
pub mod request;

// Re-export all public types for convenient access
pub use forecast::{
    Astro, CalendarDate, Condition, CurrentConditions, DayForecast, ForecastDays, ForecastPayload,
    HourSample,
};
pub use location::Location;
pub use request::ForecastRequest;
