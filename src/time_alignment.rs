//! Timezone alignment of hourly samples and sunrise/sunset parsing
//!
//! All hour-of-day comparisons in a report happen in the forecast location's
//! timezone, never in the timezone of the machine running the tool.

use crate::error::ForecastError;
use crate::models::{Astro, HourSample};
use crate::Result;
use chrono::{DateTime, NaiveTime, Timelike, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Strict 12-hour format applied after normalization, e.g. `06:45:00AM`
const CLOCK_FORMAT: &str = "%I:%M:%S%p";

/// Resolve an IANA timezone identifier
pub fn resolve_timezone(tz_id: &str) -> Result<Tz> {
    tz_id
        .parse::<Tz>()
        .map_err(|_| ForecastError::timezone(tz_id))
}

/// "Now" expressed in the location's timezone
#[must_use]
pub fn now_in(tz: &Tz, now: DateTime<Utc>) -> DateTime<Tz> {
    now.with_timezone(tz)
}

/// Convert an epoch timestamp to local time in `tz`
pub fn to_local(epoch_seconds: i64, tz: &Tz) -> Result<DateTime<Tz>> {
    DateTime::from_timestamp(epoch_seconds, 0)
        .map(|utc| utc.with_timezone(tz))
        .ok_or(ForecastError::Timestamp {
            epoch: epoch_seconds,
        })
}

/// Whether a sample lies strictly before `now`
#[must_use]
pub fn is_past(local: &DateTime<Tz>, now: &DateTime<Tz>) -> bool {
    local < now
}

/// Keep the samples that are not in the past, preserving their order
///
/// Each kept sample is paired with its local time in `tz`.
pub fn retain_upcoming<'a, I>(
    hours: I,
    tz: &Tz,
    now: &DateTime<Tz>,
) -> Result<Vec<(&'a HourSample, DateTime<Tz>)>>
where
    I: IntoIterator<Item = &'a HourSample>,
{
    let mut upcoming = Vec::new();
    for hour in hours {
        let local = to_local(hour.time_epoch, tz)?;
        if !is_past(&local, now) {
            upcoming.push((hour, local));
        }
    }
    Ok(upcoming)
}

/// Parse a sunrise/sunset string of the form `hh:mm AM|PM`
///
/// The hour must have two digits. The space before the meridiem is removed and a `:00` seconds component is
/// appended before parsing with a strict 12-hour format. Some payloads carry
/// a 24-hour clock value with a `PM` marker (`18:10 PM`); those are read as
/// the 24-hour time they spell out.
pub fn parse_clock_time(raw: &str) -> Result<NaiveTime> {
    let invalid = || ForecastError::clock_time(raw);

    let (clock, meridiem) = raw.trim().split_once(' ').ok_or_else(invalid)?;
    if !is_two_digit_clock(clock) || meridiem.len() != 2 {
        return Err(invalid());
    }

    let normalized = format!("{clock}:00{meridiem}");
    if let Ok(time) = NaiveTime::parse_from_str(&normalized, CLOCK_FORMAT) {
        return Ok(time);
    }

    if meridiem.eq_ignore_ascii_case("PM") {
        if let Ok(time) = NaiveTime::parse_from_str(&format!("{clock}:00"), "%H:%M:%S") {
            if time.hour() > 12 {
                debug!("Reading '{}' as a 24-hour clock time", raw);
                return Ok(time);
            }
        }
    }

    Err(invalid())
}

fn is_two_digit_clock(clock: &str) -> bool {
    let bytes = clock.as_bytes();
    bytes.len() == 5
        && bytes[2] == b':'
        && [0, 1, 3, 4].iter().all(|&i| bytes[i].is_ascii_digit())
}

/// Two times match when their hour components are equal; minutes are ignored
#[must_use]
pub fn hour_matches(sample_hour: u32, event: &NaiveTime) -> bool {
    sample_hour == event.hour()
}

/// Sun event that can annotate an hourly line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SunEvent {
    Sunrise,
    Sunset,
}

/// Parsed sunrise and sunset of one day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SunTimes {
    pub sunrise: NaiveTime,
    pub sunset: NaiveTime,
}

impl SunTimes {
    /// Parse both astronomy strings of a day
    pub fn parse(astro: &Astro) -> Result<Self> {
        Ok(Self {
            sunrise: parse_clock_time(&astro.sunrise)?,
            sunset: parse_clock_time(&astro.sunset)?,
        })
    }

    /// Event falling into `sample_hour`; sunrise wins when both do
    #[must_use]
    pub fn event_at(&self, sample_hour: u32) -> Option<(SunEvent, NaiveTime)> {
        if hour_matches(sample_hour, &self.sunrise) {
            Some((SunEvent::Sunrise, self.sunrise))
        } else if hour_matches(sample_hour, &self.sunset) {
            Some((SunEvent::Sunset, self.sunset))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Condition;
    use chrono::TimeZone;
    use rstest::rstest;

    fn sample(time_epoch: i64) -> HourSample {
        HourSample {
            time_epoch,
            temp_f: 60.0,
            chance_of_rain: 0.0,
            uv: 0.0,
            condition: Condition {
                text: "Clear".to_string(),
            },
        }
    }

    #[test]
    fn test_resolve_known_timezone() {
        assert_eq!(resolve_timezone("Asia/Tokyo").unwrap(), chrono_tz::Asia::Tokyo);
    }

    #[test]
    fn test_unknown_timezone_is_fatal() {
        let err = resolve_timezone("Mars/Olympus_Mons").unwrap_err();
        assert!(matches!(err, ForecastError::Timezone { .. }));
        assert_eq!(err.stage(), "timezone resolution");
    }

    #[test]
    fn test_to_local_uses_location_timezone() {
        // 2024-06-01T13:00:00Z
        let local = to_local(1_717_246_800, &chrono_tz::America::Los_Angeles).unwrap();
        assert_eq!(local.hour(), 6);

        let tokyo = to_local(1_717_246_800, &chrono_tz::Asia::Tokyo).unwrap();
        assert_eq!(tokyo.hour(), 22);
    }

    #[test]
    fn test_to_local_out_of_range() {
        let err = to_local(i64::MAX, &chrono_tz::UTC).unwrap_err();
        assert!(matches!(err, ForecastError::Timestamp { .. }));
    }

    #[test]
    fn test_is_past_is_strict() {
        let tz = chrono_tz::Europe::Paris;
        let now = tz.with_ymd_and_hms(2024, 6, 1, 14, 0, 0).unwrap();
        let earlier = tz.with_ymd_and_hms(2024, 6, 1, 13, 0, 0).unwrap();
        let later = tz.with_ymd_and_hms(2024, 6, 1, 15, 0, 0).unwrap();

        assert!(is_past(&earlier, &now));
        assert!(!is_past(&now, &now));
        assert!(!is_past(&later, &now));
    }

    #[test]
    fn test_retain_upcoming_is_idempotent() {
        let tz = chrono_tz::America::New_York;
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let now_local = now_in(&tz, now);
        let base = now.timestamp();
        let hours: Vec<HourSample> = (-3..4).map(|offset| sample(base + offset * 3600)).collect();

        let once = retain_upcoming(&hours, &tz, &now_local).unwrap();
        assert_eq!(once.len(), 4);
        assert_eq!(once[0].0.time_epoch, base);
        assert_eq!(once[0].1, now_local);

        let twice = retain_upcoming(once.iter().map(|(h, _)| *h), &tz, &now_local).unwrap();
        assert_eq!(once, twice);
    }

    #[rstest]
    #[case("06:45 AM", 6, 45)]
    #[case("12:05 AM", 0, 5)]
    #[case("12:30 PM", 12, 30)]
    #[case("07:52 PM", 19, 52)]
    #[case("06:10 PM", 18, 10)]
    #[case("18:10 PM", 18, 10)]
    fn test_parse_clock_time(#[case] raw: &str, #[case] hour: u32, #[case] minute: u32) {
        let time = parse_clock_time(raw).unwrap();
        assert_eq!((time.hour(), time.minute()), (hour, minute));
    }

    #[rstest]
    #[case("")]
    #[case("06:45AM")]
    #[case("06:45 XM")]
    #[case("25:00 PM")]
    #[case("18:10 AM")]
    #[case("06:45 AM extra")]
    #[case("6:45 AM")]
    #[case("06:5 PM")]
    #[case("006:45 AM")]
    #[case("sunrise")]
    fn test_parse_clock_time_rejects_malformed(#[case] raw: &str) {
        let err = parse_clock_time(raw).unwrap_err();
        assert_eq!(err.stage(), "time parsing");
    }

    #[test]
    fn test_hour_matches_ignores_minutes() {
        let sunrise = NaiveTime::from_hms_opt(6, 59, 0).unwrap();
        assert!(hour_matches(6, &sunrise));
        assert!(!hour_matches(7, &sunrise));
    }

    #[test]
    fn test_sunrise_checked_before_sunset() {
        let times = SunTimes {
            sunrise: NaiveTime::from_hms_opt(11, 10, 0).unwrap(),
            sunset: NaiveTime::from_hms_opt(11, 50, 0).unwrap(),
        };
        assert_eq!(times.event_at(11).map(|(event, _)| event), Some(SunEvent::Sunrise));
        assert_eq!(times.event_at(12), None);
    }

    #[test]
    fn test_sun_times_parse() {
        let astro = Astro {
            sunrise: "05:48 AM".to_string(),
            sunset: "09:47 PM".to_string(),
        };
        let times = SunTimes::parse(&astro).unwrap();
        assert_eq!(times.event_at(21).map(|(event, _)| event), Some(SunEvent::Sunset));
        assert_eq!(times.event_at(5).map(|(event, _)| event), Some(SunEvent::Sunrise));
    }
}
