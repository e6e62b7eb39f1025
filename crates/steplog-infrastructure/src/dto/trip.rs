//! Trip document DTOs (`trip.json`).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use steplog_core::timezone::{DisplayZone, instant_from_epoch};
use steplog_core::{Result, Trip};

const DEFAULT_TIMEZONE_ID: &str = "UTC";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerDeviceDTO {
    #[serde(default)]
    pub device_name: Option<String>,
}

/// The whole `trip.json` document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripDocumentDTO {
    pub name: String,
    #[serde(default)]
    pub summary: Option<String>,
    /// Epoch seconds.
    pub start_date: f64,
    /// Epoch seconds; null while the trip is ongoing.
    #[serde(default)]
    pub end_date: Option<f64>,
    #[serde(default)]
    pub total_km: f64,
    #[serde(default)]
    pub travel_tracker_device: Option<TrackerDeviceDTO>,
    #[serde(default)]
    pub timezone_id: Option<String>,
    #[serde(default)]
    pub step_count: Option<usize>,
    /// Raw step entries, decoded one by one by the normalizer.
    #[serde(default)]
    pub all_steps: Vec<Value>,
}

impl TripDocumentDTO {
    /// Display zone identifier, `UTC` when the document has none.
    pub fn timezone_id(&self) -> &str {
        self.timezone_id
            .as_deref()
            .filter(|zone| !zone.trim().is_empty())
            .unwrap_or(DEFAULT_TIMEZONE_ID)
    }

    /// Builds the trip header. The display zone falls back to UTC when the
    /// identifier is unknown.
    pub fn to_trip(&self) -> Result<Trip> {
        let start = instant_from_epoch("start_date", self.start_date)?;
        let end = self
            .end_date
            .map(|end| instant_from_epoch("end_date", end))
            .transpose()?;

        Ok(Trip {
            name: self.name.trim().to_string(),
            summary: self.summary.clone().unwrap_or_default(),
            start,
            end,
            total_km: self.total_km,
            device_name: self
                .travel_tracker_device
                .as_ref()
                .and_then(|device| device.device_name.clone()),
            zone: DisplayZone::resolve_or_utc(self.timezone_id()),
            declared_step_count: self.step_count.unwrap_or(self.all_steps.len()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> TripDocumentDTO {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_trip_header() {
        let doc = parse(
            r#"{
                "name": "  Autumn in France \n",
                "summary": "Short trip",
                "start_date": 1699999000,
                "end_date": null,
                "total_km": 812.6,
                "travel_tracker_device": {"device_name": "Pixel 7"},
                "timezone_id": "Europe/Paris",
                "step_count": 2,
                "all_steps": [{}, {}]
            }"#,
        );
        let trip = doc.to_trip().unwrap();
        assert_eq!(trip.name, "Autumn in France");
        assert_eq!(trip.end, None);
        assert_eq!(trip.end_date_label(), "?");
        assert_eq!(trip.device_label(), "Pixel 7");
        assert_eq!(trip.zone.requested(), "Europe/Paris");
        assert!(!trip.zone.fell_back());
        assert_eq!(trip.declared_step_count, 2);
    }

    #[test]
    fn test_optional_fields_default() {
        let json = r#"{"name": "T", "start_date": 0, "travel_tracker_device": null}"#;
        let doc = parse(json);
        assert_eq!(doc.timezone_id(), "UTC");
        let trip = doc.to_trip().unwrap();
        assert_eq!(trip.summary, "");
        assert_eq!(trip.device_name, None);
        assert_eq!(trip.declared_step_count, 0);
    }

    #[test]
    fn test_unknown_zone_falls_back() {
        let json = r#"{"name": "T", "start_date": 0, "timezone_id": "Nowhere/Land"}"#;
        let doc = parse(json);
        let trip = doc.to_trip().unwrap();
        assert!(trip.zone.fell_back());
        assert_eq!(trip.zone.requested(), "Nowhere/Land");
        assert_eq!(trip.start_date_label(), "1970-01-01");
    }
}
