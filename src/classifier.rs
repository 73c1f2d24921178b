//! Severity buckets for rain chance and UV index
//!
//! Buckets only drive presentation: each one maps to a display color and
//! nothing else depends on them.

use serde::{Deserialize, Serialize};

/// Label used when an hour has no UV reading
pub const UV_NOT_AVAILABLE: &str = "UV-Index: N/A";

/// Terminal color of a report element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisplayColor {
    /// Terminal default foreground
    Plain,
    Green,
    Yellow,
    Red,
    White,
    Blue,
    Cyan,
    /// rgb(255, 165, 0)
    Orange,
    /// rgb(160, 32, 240)
    Purple,
}

/// Chance-of-rain severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RainSeverity {
    /// Below 20%
    Low,
    /// 20% up to, not including, 70%
    Medium,
    /// 70% and above
    High,
}

impl RainSeverity {
    #[must_use]
    pub fn color(self) -> DisplayColor {
        match self {
            RainSeverity::Low => DisplayColor::Green,
            RainSeverity::Medium => DisplayColor::Yellow,
            RainSeverity::High => DisplayColor::Red,
        }
    }
}

/// UV index severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum UvSeverity {
    /// Not reported
    None,
    Low,
    Moderate,
    High,
    VeryHigh,
    Extreme,
}

impl UvSeverity {
    #[must_use]
    pub fn color(self) -> DisplayColor {
        match self {
            UvSeverity::None => DisplayColor::Plain,
            UvSeverity::Low => DisplayColor::Green,
            UvSeverity::Moderate => DisplayColor::White,
            UvSeverity::High => DisplayColor::Yellow,
            UvSeverity::VeryHigh => DisplayColor::Red,
            UvSeverity::Extreme => DisplayColor::Blue,
        }
    }
}

/// Bucket a chance-of-rain percentage
#[must_use]
pub fn classify_rain(percent: f64) -> RainSeverity {
    if percent < 20.0 {
        RainSeverity::Low
    } else if percent < 70.0 {
        RainSeverity::Medium
    } else {
        RainSeverity::High
    }
}

/// Bucket a UV index; zero (or less) means "not reported"
///
/// Values between the integer bands (e.g. 2.1) belong to the next band up.
#[must_use]
pub fn classify_uv(value: f64) -> UvSeverity {
    if value.is_nan() || value <= 0.0 {
        UvSeverity::None
    } else if value <= 2.0 {
        UvSeverity::Low
    } else if value <= 5.0 {
        UvSeverity::Moderate
    } else if value <= 7.0 {
        UvSeverity::High
    } else if value <= 10.0 {
        UvSeverity::VeryHigh
    } else {
        UvSeverity::Extreme
    }
}

/// Report text for a UV reading
#[must_use]
pub fn uv_text(value: f64) -> String {
    match classify_uv(value) {
        UvSeverity::None => UV_NOT_AVAILABLE.to_string(),
        _ => format!("UV-Index: {value:.1}"),
    }
}
