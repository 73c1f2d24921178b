//! Forecast report rendering
//!
//! Turns a forecast payload into the ordered lines of the terminal report:
//! a header, then for every day its localized weekday followed by one line
//! per upcoming hour. Days and hours keep the payload order.

use crate::classifier::{self, DisplayColor, RainSeverity, UvSeverity};
use crate::localization;
use crate::models::{CalendarDate, DayForecast, ForecastPayload, ForecastRequest, HourSample};
use crate::time_alignment::{self, SunEvent, SunTimes};
use crate::Result;
use chrono::{DateTime, NaiveTime, Timelike, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Sunrise/sunset annotation attached to an hourly line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SunMark {
    pub event: SunEvent,
    /// Localized label and time, e.g. `Sunrise 06:45`
    pub text: String,
}

impl SunMark {
    #[must_use]
    pub fn color(&self) -> DisplayColor {
        match self.event {
            SunEvent::Sunrise => DisplayColor::Orange,
            SunEvent::Sunset => DisplayColor::Purple,
        }
    }
}

/// One upcoming hour of the report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourLine {
    /// `HH:MM - 58F, 85%, Light rain`
    pub summary: String,
    /// `UV-Index: 3.0` or `UV-Index: N/A`
    pub uv_text: String,
    pub rain: RainSeverity,
    pub uv: UvSeverity,
    pub sun: Option<SunMark>,
}

impl HourLine {
    /// Line text without the sun annotation
    #[must_use]
    pub fn text(&self) -> String {
        format!("{}, {}", self.summary, self.uv_text)
    }
}

/// A line of the rendered report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ReportLine {
    /// `3-day Forecast`
    Title(String),
    /// Location and current conditions
    Header(String),
    /// Localized weekday heading of a forecast day
    Day { date: CalendarDate, label: String },
    Hour(HourLine),
}

impl ReportLine {
    /// Plain text of the line, sun annotation included
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            ReportLine::Title(text) | ReportLine::Header(text) => text.clone(),
            ReportLine::Day { label, .. } => label.clone(),
            ReportLine::Hour(hour) => match &hour.sun {
                Some(sun) => format!("{} {}", hour.text(), sun.text),
                None => hour.text(),
            },
        }
    }

    /// Color of the line body
    #[must_use]
    pub fn color(&self) -> DisplayColor {
        match self {
            ReportLine::Title(_) => DisplayColor::Cyan,
            ReportLine::Header(_) | ReportLine::Day { .. } => DisplayColor::Plain,
            ReportLine::Hour(hour) => hour.rain.color(),
        }
    }
}

/// Rendered forecast report
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub lines: Vec<ReportLine>,
}

impl Report {
    /// Hourly lines across all days
    pub fn hour_lines(&self) -> impl Iterator<Item = &HourLine> {
        self.lines.iter().filter_map(|line| match line {
            ReportLine::Hour(hour) => Some(hour),
            _ => None,
        })
    }
}

/// Renders forecast payloads for one request
///
/// Holds nothing but the request, so a renderer can be reused for any number
/// of payloads.
#[derive(Debug, Clone)]
pub struct ForecastRenderer<'a> {
    request: &'a ForecastRequest,
}

impl<'a> ForecastRenderer<'a> {
    #[must_use]
    pub fn new(request: &'a ForecastRequest) -> Self {
        Self { request }
    }

    /// Render `payload` as seen at `now`, in the payload location's timezone
    #[instrument(skip_all, fields(location = %payload.location.name, language = self.request.language_code()))]
    pub fn render(&self, payload: &ForecastPayload, now: DateTime<Utc>) -> Result<Report> {
        let tz = time_alignment::resolve_timezone(&payload.location.tz_id)?;
        self.render_in(payload, &tz, now)
    }

    /// Render `payload` with hour-of-day comparisons made in `tz`
    pub fn render_in(
        &self,
        payload: &ForecastPayload,
        tz: &Tz,
        now: DateTime<Utc>,
    ) -> Result<Report> {
        let now = time_alignment::now_in(tz, now);
        let days = payload.days();

        info!(
            "Rendering {}-day forecast for {} in {}",
            days.len(),
            payload.location.name,
            tz.name()
        );
        if !localization::is_supported(self.request.language_code()) {
            debug!(
                "No labels for language '{}', using {}",
                self.request.language_code(),
                localization::FALLBACK_LANGUAGE
            );
        }

        let mut lines = self.header(payload, days.len());
        for day in days {
            self.render_day(day, tz, &now, &mut lines)?;
        }

        Ok(Report { lines })
    }

    fn header(&self, payload: &ForecastPayload, day_count: usize) -> Vec<ReportLine> {
        vec![
            ReportLine::Title(format!("{day_count}-day Forecast")),
            ReportLine::Header(payload.location.country.clone()),
            ReportLine::Header(format!(
                "{} - {:.0}, {}",
                payload.location.display_name(),
                payload.current.temp_f,
                payload.current.condition.text
            )),
        ]
    }

    fn render_day(
        &self,
        day: &DayForecast,
        tz: &Tz,
        now: &DateTime<Tz>,
        lines: &mut Vec<ReportLine>,
    ) -> Result<()> {
        let language = self.request.language_code();
        lines.push(ReportLine::Day {
            date: day.date,
            label: localization::weekday_label(language, day.date.weekday()).to_string(),
        });

        let sun_times = SunTimes::parse(&day.astro)?;

        let upcoming = time_alignment::retain_upcoming(&day.hour, tz, now)?;
        debug!(
            "{}: {} of {} hours upcoming",
            day.date,
            upcoming.len(),
            day.hour.len()
        );

        for (hour, local) in upcoming {
            let sun = sun_times
                .event_at(local.hour())
                .map(|(event, time)| self.sun_mark(event, time));
            lines.push(ReportLine::Hour(hour_line(hour, &local, sun)));
        }
        Ok(())
    }

    fn sun_mark(&self, event: SunEvent, time: NaiveTime) -> SunMark {
        let language = self.request.language_code();
        let label = match event {
            SunEvent::Sunrise => localization::sunrise_label(language),
            SunEvent::Sunset => localization::sunset_label(language),
        };
        SunMark {
            event,
            text: format!("{label} {}", time.format("%H:%M")),
        }
    }
}

fn hour_line(hour: &HourSample, local: &DateTime<Tz>, sun: Option<SunMark>) -> HourLine {
    HourLine {
        summary: format!(
            "{} - {:.0}F, {:.0}%, {}",
            local.format("%H:%M"),
            hour.temp_f,
            hour.chance_of_rain,
            hour.condition.text
        ),
        uv_text: classifier::uv_text(hour.uv),
        rain: classifier::classify_rain(hour.chance_of_rain),
        uv: classifier::classify_uv(hour.uv),
        sun,
    }
}
