//! Error types and handling for `hourcast`

use thiserror::Error;

/// Main error type for the `hourcast` application
#[derive(Error, Debug)]
pub enum ForecastError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// The location's timezone identifier is not a known IANA zone
    #[error("Unknown timezone identifier '{tz_id}'")]
    Timezone { tz_id: String },

    /// A sunrise/sunset string did not have the `HH:MM AM|PM` shape
    #[error("Cannot parse clock time '{raw}'")]
    ClockTime { raw: String },

    /// An hourly epoch timestamp outside the representable range
    #[error("Timestamp {epoch} is out of range")]
    Timestamp { epoch: i64 },

    /// Malformed forecast payload
    #[error("Invalid forecast payload: {message}")]
    Payload { message: String },

    /// API communication errors
    #[error("API error: {message}")]
    Api { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl ForecastError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new timezone resolution error
    pub fn timezone<S: Into<String>>(tz_id: S) -> Self {
        Self::Timezone {
            tz_id: tz_id.into(),
        }
    }

    /// Create a new clock time parsing error
    pub fn clock_time<S: Into<String>>(raw: S) -> Self {
        Self::ClockTime { raw: raw.into() }
    }

    /// Create a new payload error
    pub fn payload<S: Into<String>>(message: S) -> Self {
        Self::Payload {
            message: message.into(),
        }
    }

    /// Create a new API error
    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Name of the pipeline stage that produced this error
    #[must_use]
    pub fn stage(&self) -> &'static str {
        match self {
            ForecastError::Config { .. } => "configuration",
            ForecastError::Timezone { .. } => "timezone resolution",
            ForecastError::ClockTime { .. } | ForecastError::Timestamp { .. } => "time parsing",
            ForecastError::Payload { .. } => "payload decoding",
            ForecastError::Api { .. } => "forecast fetch",
            ForecastError::Validation { .. } => "request validation",
            ForecastError::Io { .. } => "file access",
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            ForecastError::Config { message } => {
                format!("Configuration error: {message}. Please check your config file and API key.")
            }
            ForecastError::Timezone { tz_id } => {
                format!("Timezone resolution failed: '{tz_id}' is not a known timezone.")
            }
            ForecastError::ClockTime { raw } => {
                format!("Time parsing failed: '{raw}' is not a valid HH:MM AM/PM time.")
            }
            ForecastError::Timestamp { epoch } => {
                format!("Time parsing failed: timestamp {epoch} is out of range.")
            }
            ForecastError::Payload { message } => {
                format!("The forecast data could not be read: {message}")
            }
            ForecastError::Api { message } => {
                format!("Unable to retrieve the forecast: {message}")
            }
            ForecastError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            ForecastError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}

impl From<serde_json::Error> for ForecastError {
    fn from(err: serde_json::Error) -> Self {
        ForecastError::payload(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = ForecastError::config("missing API key");
        assert!(matches!(config_err, ForecastError::Config { .. }));

        let tz_err = ForecastError::timezone("Mars/Olympus_Mons");
        assert!(matches!(tz_err, ForecastError::Timezone { .. }));

        let validation_err = ForecastError::validation("empty location");
        assert!(matches!(validation_err, ForecastError::Validation { .. }));
    }

    #[test]
    fn test_stages_distinguish_fatal_conditions() {
        assert_eq!(ForecastError::timezone("x").stage(), "timezone resolution");
        assert_eq!(ForecastError::clock_time("x").stage(), "time parsing");
        assert_eq!(ForecastError::Timestamp { epoch: 0 }.stage(), "time parsing");
    }

    #[test]
    fn test_user_messages() {
        let tz_err = ForecastError::timezone("Nowhere/City");
        assert!(tz_err.user_message().contains("Timezone resolution failed"));
        assert!(tz_err.user_message().contains("Nowhere/City"));

        let clock_err = ForecastError::clock_time("25:99");
        assert!(clock_err.user_message().contains("Time parsing failed"));

        let validation_err = ForecastError::validation("test input");
        assert!(validation_err.user_message().contains("test input"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ForecastError = io_err.into();
        assert!(matches!(err, ForecastError::Io { .. }));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ForecastError = json_err.into();
        assert!(matches!(err, ForecastError::Payload { .. }));
    }
}
