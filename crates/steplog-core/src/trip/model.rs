//! Trip header model.

use chrono::{DateTime, Utc};

use crate::timezone::DisplayZone;

/// Placeholder shown for values the export leaves empty.
pub const UNKNOWN: &str = "?";

/// Trip-level metadata, built once from the trip document.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    /// Display name, trimmed.
    pub name: String,
    pub summary: String,
    pub start: DateTime<Utc>,
    /// Absent while the trip is still ongoing.
    pub end: Option<DateTime<Utc>>,
    /// Total distance in kilometers, as computed by the export.
    pub total_km: f64,
    /// Phone or tracker that recorded the trip.
    pub device_name: Option<String>,
    pub zone: DisplayZone,
    /// Step count claimed by the document; may disagree with `all_steps`.
    pub declared_step_count: usize,
}

impl Trip {
    /// Start date in the display zone, `YYYY-MM-DD`.
    pub fn start_date_label(&self) -> String {
        self.zone.project(self.start).format("%Y-%m-%d").to_string()
    }

    /// End date in the display zone, or [`UNKNOWN`].
    pub fn end_date_label(&self) -> String {
        match self.end {
            Some(end) => self.zone.project(end).format("%Y-%m-%d").to_string(),
            None => UNKNOWN.to_string(),
        }
    }

    pub fn device_label(&self) -> &str {
        self.device_name.as_deref().unwrap_or(UNKNOWN)
    }

    /// Distance rounded to whole kilometers.
    pub fn rounded_km(&self) -> i64 {
        self.total_km.round() as i64
    }

    /// File stem of the text itinerary, `<name>_<start date>`.
    pub fn file_stem(&self) -> String {
        format!("{}_{}", self.name, self.start_date_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn trip(end: Option<i64>) -> Trip {
        Trip {
            name: "Autumn in France".to_string(),
            summary: "A short trip".to_string(),
            start: Utc.timestamp_opt(1_699_999_000, 0).unwrap(),
            end: end.map(|e| Utc.timestamp_opt(e, 0).unwrap()),
            total_km: 812.6,
            device_name: None,
            zone: DisplayZone::resolve_or_utc("Europe/Paris"),
            declared_step_count: 2,
        }
    }

    #[test]
    fn test_missing_end_date_is_unknown() {
        let trip = trip(None);
        assert_eq!(trip.end_date_label(), UNKNOWN);
        assert_eq!(trip.device_label(), UNKNOWN);
    }

    #[test]
    fn test_labels() {
        let trip = trip(Some(1_700_200_000));
        assert_eq!(trip.start_date_label(), "2023-11-14");
        assert_eq!(trip.end_date_label(), "2023-11-17");
        assert_eq!(trip.rounded_km(), 813);
        assert_eq!(trip.file_stem(), "Autumn in France_2023-11-14");
    }
}
