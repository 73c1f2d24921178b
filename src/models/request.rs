//! The resolved location/language pair for a single run

use crate::error::ForecastError;
use serde::{Deserialize, Serialize};

/// Location used when none is given on the command line
pub const DEFAULT_LOCATION: &str = "Los_Angeles";
/// Language used when none is given on the command line
pub const DEFAULT_LANGUAGE: &str = "en";

/// What to forecast and in which language
///
/// Constructed once per run and passed explicitly to the fetcher and the
/// renderer; fields are private so a request cannot change after validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastRequest {
    location_query: String,
    language_code: String,
}

impl ForecastRequest {
    /// Create a request, rejecting empty location or language values
    pub fn new<L: Into<String>, C: Into<String>>(
        location_query: L,
        language_code: C,
    ) -> Result<Self, ForecastError> {
        let location_query = location_query.into().trim().to_string();
        let language_code = language_code.into().trim().to_string();

        if location_query.is_empty() {
            return Err(ForecastError::validation("Location cannot be empty"));
        }
        if language_code.is_empty() {
            return Err(ForecastError::validation("Language code cannot be empty"));
        }

        Ok(Self {
            location_query,
            language_code,
        })
    }

    #[must_use]
    pub fn location_query(&self) -> &str {
        &self.location_query
    }

    #[must_use]
    pub fn language_code(&self) -> &str {
        &self.language_code
    }
}

impl Default for ForecastRequest {
    fn default() -> Self {
        Self {
            location_query: DEFAULT_LOCATION.to_string(),
            language_code: DEFAULT_LANGUAGE.to_string(),
        }
    }
}
