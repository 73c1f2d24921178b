//! Terminal output of rendered reports

use crate::classifier::DisplayColor;
use crate::render::{Report, ReportLine};
use crossterm::style::{style, Color, Stylize};
use std::io::{self, Write};

fn terminal_color(color: DisplayColor) -> Option<Color> {
    match color {
        DisplayColor::Plain => None,
        DisplayColor::Green => Some(Color::Green),
        DisplayColor::Yellow => Some(Color::Yellow),
        DisplayColor::Red => Some(Color::Red),
        DisplayColor::White => Some(Color::White),
        DisplayColor::Blue => Some(Color::Blue),
        DisplayColor::Cyan => Some(Color::Cyan),
        DisplayColor::Orange => Some(Color::Rgb { r: 255, g: 165, b: 0 }),
        DisplayColor::Purple => Some(Color::Rgb { r: 160, g: 32, b: 240 }),
    }
}

fn paint(text: &str, color: DisplayColor, enabled: bool) -> String {
    match terminal_color(color) {
        Some(fg) if enabled => style(text).with(fg).to_string(),
        _ => text.to_string(),
    }
}

/// Format one report line; the sun annotation goes on a line of its own
#[must_use]
pub fn format_line(line: &ReportLine, color: bool) -> String {
    match line {
        ReportLine::Hour(hour) => {
            let mut out = paint(&format!("{}, ", hour.summary), hour.rain.color(), color);
            out.push_str(&paint(&hour.uv_text, hour.uv.color(), color));
            if let Some(sun) = &hour.sun {
                out.push('\n');
                out.push_str(&paint(&sun.text, sun.color(), color));
            }
            out
        }
        other => paint(&other.text(), other.color(), color),
    }
}

/// Write the whole report, blank lines around titles and day headings
pub fn write_report<W: Write>(out: &mut W, report: &Report, color: bool) -> io::Result<()> {
    for line in &report.lines {
        let heading = matches!(line, ReportLine::Title(_) | ReportLine::Day { .. });
        if heading {
            writeln!(out)?;
        }
        writeln!(out, "{}", format_line(line, color))?;
        if heading {
            writeln!(out)?;
        }
    }
    out.flush()
}

/// Print the report to stdout
pub fn print_report(report: &Report, color: bool) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_report(&mut handle, report, color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{RainSeverity, UvSeverity};
    use crate::models::CalendarDate;
    use crate::render::{HourLine, SunMark};
    use crate::time_alignment::SunEvent;

    fn hour_line(sun: Option<SunMark>) -> ReportLine {
        ReportLine::Hour(HourLine {
            summary: "06:00 - 58F, 85%, Light rain".to_string(),
            uv_text: "UV-Index: N/A".to_string(),
            rain: RainSeverity::High,
            uv: UvSeverity::None,
            sun,
        })
    }

    #[test]
    fn test_plain_hour_line() {
        assert_eq!(
            format_line(&hour_line(None), false),
            "06:00 - 58F, 85%, Light rain, UV-Index: N/A"
        );
    }

    #[test]
    fn test_sun_annotation_on_own_line() {
        let line = hour_line(Some(SunMark {
            event: SunEvent::Sunrise,
            text: "Sunrise 06:45".to_string(),
        }));
        let formatted = format_line(&line, false);
        assert_eq!(
            formatted.lines().collect::<Vec<_>>(),
            vec!["06:00 - 58F, 85%, Light rain, UV-Index: N/A", "Sunrise 06:45"]
        );
    }

    #[test]
    fn test_colored_output_contains_escape_codes() {
        let colored = format_line(&hour_line(None), true);
        assert!(colored.contains("Light rain"));
        // crossterm drops styling when NO_COLOR is set
        if std::env::var_os("NO_COLOR").is_none() {
            assert!(colored.contains('\u{1b}'));
        }

        let heading = ReportLine::Header("France".to_string());
        assert_eq!(format_line(&heading, true), "France");
    }

    #[test]
    fn test_write_report_layout() {
        let report = Report {
            lines: vec![
                ReportLine::Title("1-day Forecast".to_string()),
                ReportLine::Header("France".to_string()),
                ReportLine::Header("Paris, Ile-de-France - 61, Clear".to_string()),
                ReportLine::Day {
                    date: CalendarDate::new(2024, 6, 1),
                    label: "Samedi".to_string(),
                },
                hour_line(None),
            ],
        };

        let mut buffer = Vec::new();
        write_report(&mut buffer, &report, false).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(
            text,
            "\n1-day Forecast\n\nFrance\nParis, Ile-de-France - 61, Clear\n\nSamedi\n\n06:00 - 58F, 85%, Light rain, UV-Index: N/A\n"
        );
    }
}
