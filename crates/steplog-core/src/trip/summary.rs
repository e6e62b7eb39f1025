//! The canonical model every renderer consumes.

use chrono::NaiveDate;

use super::{CountryVisits, Trip};
use crate::route::RoutePoint;
use crate::step::Step;

/// A step dropped under the skip policy, kept for reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedStep {
    pub index: usize,
    pub step_id: String,
    pub reason: String,
}

/// Normalized trip: header, ordered steps, countries and route.
///
/// `steps` is in the trip document's declared order, which is also the
/// previous/next navigation order. It is never re-sorted by time.
#[derive(Debug, Clone, PartialEq)]
pub struct TripModel {
    pub trip: Trip,
    pub steps: Vec<Step>,
    pub countries: CountryVisits,
    /// Location track sorted by capture time; empty when not exported.
    pub route: Vec<RoutePoint>,
    pub skipped: Vec<SkippedStep>,
}

impl TripModel {
    pub fn previous(&self, position: usize) -> Option<&Step> {
        position.checked_sub(1).and_then(|p| self.steps.get(p))
    }

    pub fn next(&self, position: usize) -> Option<&Step> {
        self.steps.get(position + 1)
    }

    pub fn summary(&self) -> TripSummary {
        TripSummary::from_model(self)
    }
}

/// Trip-level aggregates derived from the step list.
#[derive(Debug, Clone, PartialEq)]
pub struct TripSummary {
    pub total_km: f64,
    pub step_count: usize,
    pub declared_step_count: usize,
    /// Local date of the first and last step, in step order.
    pub date_span: Option<(NaiveDate, NaiveDate)>,
    pub photo_count: usize,
    pub video_count: usize,
    pub media_bytes: u64,
    pub country_count: usize,
}

impl TripSummary {
    fn from_model(model: &TripModel) -> Self {
        let date_span = match (model.steps.first(), model.steps.last()) {
            (Some(first), Some(last)) => Some((first.local_date(), last.local_date())),
            _ => None,
        };
        Self {
            total_km: model.trip.total_km,
            step_count: model.steps.len(),
            declared_step_count: model.trip.declared_step_count,
            date_span,
            photo_count: model.steps.iter().map(|s| s.photos.len()).sum(),
            video_count: model.steps.iter().map(|s| s.videos.len()).sum(),
            media_bytes: model.steps.iter().map(Step::media_bytes).sum(),
            country_count: model.countries.len(),
        }
    }

    /// Whether the document's declared count matches the steps kept.
    pub fn step_count_matches(&self) -> bool {
        self.step_count == self.declared_step_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_trip, step_in};

    fn model(countries: &[&str]) -> TripModel {
        let steps: Vec<Step> = countries
            .iter()
            .enumerate()
            .map(|(i, c)| step_in(i, 100 + i as u64, c, 1_700_000_000 + i as i64 * 86_400))
            .collect();
        TripModel {
            trip: sample_trip(countries.len()),
            countries: CountryVisits::from_steps(&steps),
            steps,
            route: Vec::new(),
            skipped: Vec::new(),
        }
    }

    #[test]
    fn test_countries_are_first_seen_not_alphabetical() {
        let model = model(&["Spain", "France", "Spain", "Andorra"]);
        assert_eq!(model.countries.countries(), ["Spain", "France", "Andorra"]);
        assert_eq!(model.countries.glyph_of("Spain"), Some("\u{1F1EA}\u{1F1F8}"));
    }

    #[test]
    fn test_navigation_follows_step_list() {
        let model = model(&["France", "Spain", "Italy"]);
        assert!(model.previous(0).is_none());
        assert_eq!(model.previous(1).map(|s| s.id), Some(100));
        assert_eq!(model.next(1).map(|s| s.id), Some(102));
        assert!(model.next(2).is_none());
    }

    #[test]
    fn test_summary_aggregates() {
        let model = model(&["France", "Spain"]);
        let summary = model.summary();
        assert_eq!(summary.step_count, 2);
        assert!(summary.step_count_matches());
        assert_eq!(summary.country_count, 2);
        let (first, last) = summary.date_span.unwrap();
        assert_eq!(first.to_string(), "2023-11-14");
        assert_eq!(last.to_string(), "2023-11-15");
    }

    #[test]
    fn test_empty_trip_has_no_date_span() {
        let summary = model(&[]).summary();
        assert_eq!(summary.step_count, 0);
        assert!(summary.date_span.is_none());
        assert!(summary.step_count_matches());
    }
}
