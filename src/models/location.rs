//! Location model for the place a forecast applies to

use serde::{Deserialize, Serialize};

/// Location as reported by the forecast payload
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Location {
    /// Location name (city, town)
    pub name: String,
    /// Country name
    pub country: String,
    /// Region or state
    #[serde(default)]
    pub region: String,
    /// IANA timezone identifier, e.g. `America/Los_Angeles`
    pub tz_id: String,
}

impl Location {
    /// Create a new location
    #[must_use]
    pub fn new(name: String, country: String, region: String, tz_id: String) -> Self {
        Self {
            name,
            country,
            region,
            tz_id,
        }
    }

    /// Format as `name, region`, omitting an empty region
    #[must_use]
    pub fn display_name(&self) -> String {
        if self.region.is_empty() {
            self.name.clone()
        } else {
            format!("{}, {}", self.name, self.region)
        }
    }
}
