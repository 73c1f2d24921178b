//! Raw payload persistence
//!
//! The fetched payload is kept on disk exactly as received so a report can be
//! rendered again later without another request.

use crate::models::ForecastPayload;
use crate::Result;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Write the raw payload bytes to `path`
pub fn save_raw_payload(path: impl AsRef<Path>, body: &[u8]) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, body)?;
    debug!("Saved {} bytes of forecast data to {}", body.len(), path.display());
    Ok(())
}

/// Write the raw payload, logging instead of failing
///
/// A report can still be shown when the copy on disk cannot be written.
pub fn save_raw_payload_or_warn(path: impl AsRef<Path>, body: &[u8]) -> bool {
    match save_raw_payload(&path, body) {
        Ok(()) => true,
        Err(e) => {
            warn!("Error writing to file {}: {}", path.as_ref().display(), e);
            false
        }
    }
}

/// Read a previously saved raw payload
pub fn load_raw_payload(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    Ok(fs::read(path)?)
}

/// Decode raw payload bytes
pub fn parse_payload(body: &[u8]) -> Result<ForecastPayload> {
    Ok(serde_json::from_slice(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ForecastError;

    const BODY: &[u8] = br#"{
        "location": {"name": "Tokyo", "country": "Japan", "region": "Tokyo", "tz_id": "Asia/Tokyo"},
        "current": {"temp_f": 80.6, "condition": {"text": "Sunny"}},
        "forecast": {"forecastday": []}
    }"#;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("hourcast-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("saved.json");
        save_raw_payload(&path, BODY).unwrap();
        let loaded = load_raw_payload(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(loaded, BODY);
        let payload = parse_payload(&loaded).unwrap();
        assert_eq!(payload.location.name, "Tokyo");
        assert!(payload.days().is_empty());
    }

    #[test]
    fn test_save_failure_is_not_fatal() {
        let path = temp_path("missing-dir").join("weather.json");
        assert!(!save_raw_payload_or_warn(&path, BODY));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_raw_payload(temp_path("does-not-exist.json")).unwrap_err();
        assert!(matches!(err, ForecastError::Io { .. }));
    }

    #[test]
    fn test_parse_invalid_payload() {
        let err = parse_payload(b"<html>not json</html>").unwrap_err();
        assert!(matches!(err, ForecastError::Payload { .. }));
    }
}
