//! Forecast payload model
//!
//! Mirrors the shape of a `forecast.json` response: a location, the current
//! conditions and a list of forecast days, each with its astronomy strings and
//! hourly samples. Everything here is read-only once deserialized.

use super::Location;
use crate::calendar;
use crate::error::ForecastError;
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Full multi-day forecast for one location
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ForecastPayload {
    /// Where the forecast applies
    pub location: Location,
    /// Conditions at fetch time
    pub current: CurrentConditions,
    /// Forecast days in chronological order
    pub forecast: ForecastDays,
}

impl ForecastPayload {
    /// Forecast days in payload order
    #[must_use]
    pub fn days(&self) -> &[DayForecast] {
        &self.forecast.forecastday
    }
}

/// Wrapper object around the list of days
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ForecastDays {
    #[serde(default)]
    pub forecastday: Vec<DayForecast>,
}

/// Textual weather condition
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Condition {
    pub text: String,
}

/// Current temperature and condition
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CurrentConditions {
    /// Temperature in Fahrenheit
    pub temp_f: f64,
    pub condition: Condition,
}

/// One forecast day
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DayForecast {
    /// Calendar date of this day
    pub date: CalendarDate,
    /// Sunrise and sunset strings
    pub astro: Astro,
    /// Hourly samples in chronological order
    #[serde(default)]
    pub hour: Vec<HourSample>,
}

/// Sunrise and sunset, formatted `HH:MM AM|PM`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Astro {
    pub sunrise: String,
    pub sunset: String,
}

/// One hourly forecast sample
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct HourSample {
    /// Unix timestamp of the start of the hour
    pub time_epoch: i64,
    /// Temperature in Fahrenheit
    pub temp_f: f64,
    /// Chance of rain in percent (0-100)
    pub chance_of_rain: f64,
    /// UV index, 0 when not reported
    #[serde(default)]
    pub uv: f64,
    pub condition: Condition,
}

/// Proleptic Gregorian calendar date, serialized as `YYYY-MM-DD`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    #[must_use]
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Day of the week for this date
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        calendar::weekday_of(self.year, self.month, self.day)
    }
}

impl FromStr for CalendarDate {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ForecastError::payload(format!("cannot parse date '{s}'"));

        let mut parts = s.trim().splitn(3, '-');
        let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };

        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        let day: u32 = day.parse().map_err(|_| invalid())?;

        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return Err(invalid());
        }

        Ok(Self { year, month, day })
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = ForecastError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CalendarDate> for String {
    fn from(date: CalendarDate) -> Self {
        date.to_string()
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
