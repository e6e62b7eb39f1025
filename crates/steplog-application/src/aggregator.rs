//! Trip Aggregator: builds the whole [`TripModel`] from the export documents.

use std::path::Path;

use steplog_core::{
    CountryVisits, MalformedStepPolicy, MediaDiscoverer, Result, SkippedStep, TripModel,
};
use steplog_infrastructure::dto::{LocationsDocumentDTO, TripDocumentDTO, step_id_hint};

use crate::normalizer::{LookupDiagnostics, StepNormalizer};
use crate::route::extract_route;

/// Normalizes every step of a trip document in declared order.
#[derive(Debug)]
pub struct TripAggregator<D> {
    normalizer: StepNormalizer<D>,
}

impl<D: MediaDiscoverer> TripAggregator<D> {
    pub fn new(discoverer: D) -> Self {
        Self {
            normalizer: StepNormalizer::new(discoverer),
        }
    }

    /// Aggregates a trip.
    ///
    /// Steps keep the order of `all_steps`; they are never re-sorted by
    /// timestamp, since that order drives the narrative and prev/next
    /// navigation.
    ///
    /// With [`MalformedStepPolicy::Abort`] the first step-level failure is
    /// returned as is. With [`MalformedStepPolicy::Skip`] step-level failures
    /// are logged, the step is dropped and recorded in `TripModel::skipped`;
    /// any other error still aborts.
    pub fn aggregate(
        &self,
        document: &TripDocumentDTO,
        locations: Option<&LocationsDocumentDTO>,
        media_root: &Path,
        policy: MalformedStepPolicy,
    ) -> Result<TripModel> {
        let trip = document.to_trip()?;
        let mut diagnostics = LookupDiagnostics::new();
        let mut steps = Vec::with_capacity(document.all_steps.len());
        let mut skipped = Vec::new();

        for (index, raw) in document.all_steps.iter().enumerate() {
            match self
                .normalizer
                .normalize(index, raw, &trip.zone, media_root, &mut diagnostics)
            {
                Ok(step) => steps.push(step),
                Err(e) if policy == MalformedStepPolicy::Skip && e.is_step_scoped() => {
                    tracing::warn!("[Aggregator] Skipping step #{}: {}", index, e);
                    skipped.push(SkippedStep {
                        index,
                        step_id: step_id_hint(raw),
                        reason: e.to_string(),
                    });
                }
                Err(e) => {
                    tracing::error!("[Aggregator] Aborting on step #{}: {}", index, e);
                    return Err(e);
                }
            }
        }

        if diagnostics.miss_count() > 0 {
            tracing::info!(
                "[Aggregator] {} distinct value(s) shown without a glyph",
                diagnostics.miss_count()
            );
        }

        let countries = CountryVisits::from_steps(&steps);
        let route = extract_route(locations);
        let model = TripModel {
            trip,
            steps,
            countries,
            route,
            skipped,
        };

        let summary = model.summary();
        if !summary.step_count_matches() {
            tracing::warn!(
                "[Aggregator] Trip declares {} steps but {} were normalized",
                summary.declared_step_count,
                summary.step_count
            );
        }
        tracing::info!(
            "[Aggregator] Trip '{}': {} step(s), {} photo(s), {} video(s), {} country(ies), {} route point(s)",
            model.trip.name,
            summary.step_count,
            summary.photo_count,
            summary.video_count,
            summary.country_count,
            model.route.len()
        );

        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use steplog_core::{MediaFile, MediaKind, StepLogError};

    struct NoMedia;

    impl MediaDiscoverer for NoMedia {
        fn list_media(&self, _directory: &Path, _kind: MediaKind) -> Result<Vec<MediaFile>> {
            Ok(Vec::new())
        }
    }

    /// Fails to list any media directory of the step folder `s<id>_<id>`.
    struct UnreadableStep(u64);

    impl MediaDiscoverer for UnreadableStep {
        fn list_media(&self, directory: &Path, _kind: MediaKind) -> Result<Vec<MediaFile>> {
            let folder = format!("s{0}_{0}", self.0);
            if directory.components().any(|c| c.as_os_str() == folder.as_str()) {
                return Err(StepLogError::media_access(
                    directory.display().to_string(),
                    "permission denied",
                ));
            }
            Ok(Vec::new())
        }
    }

    fn raw_step(id: u64, country: &str, start: i64) -> serde_json::Value {
        json!({
            "id": id,
            "slug": format!("s{id}"),
            "display_name": format!("Step {id}"),
            "start_time": start,
            "location": {"name": "X", "lat": 1.0, "lon": 2.0, "detail": country, "full_detail": country},
            "weather_condition": "rain",
            "weather_temperature": 10,
            "description": "text"
        })
    }

    fn document(steps: Vec<serde_json::Value>) -> TripDocumentDTO {
        serde_json::from_value(json!({
            "name": "Trip",
            "summary": "",
            "start_date": 1700000000,
            "end_date": null,
            "total_km": 10,
            "timezone_id": "Europe/Paris",
            "step_count": steps.len(),
            "all_steps": steps
        }))
        .unwrap()
    }

    #[test]
    fn test_declared_order_is_kept() {
        // The second step happened earlier, it still comes second.
        let doc = document(vec![
            raw_step(1, "Spain", 1_700_100_000),
            raw_step(2, "France", 1_700_000_000),
            raw_step(3, "Spain", 1_700_200_000),
        ]);
        let model = TripAggregator::new(NoMedia)
            .aggregate(&doc, None, Path::new("data"), MalformedStepPolicy::Abort)
            .unwrap();

        let ids: Vec<u64> = model.steps.iter().map(|s| s.id).collect();
        assert_eq!(ids, [1, 2, 3]);
        assert_eq!(model.countries.countries(), ["Spain", "France"]);
        assert!(model.route.is_empty());
        assert!(model.skipped.is_empty());
    }

    #[test]
    fn test_abort_policy_stops_on_malformed_step() {
        let mut broken = raw_step(2, "France", 1_700_000_000);
        broken.as_object_mut().unwrap().remove("location");
        let doc = document(vec![raw_step(1, "Spain", 1_700_000_000), broken]);

        let err = TripAggregator::new(NoMedia)
            .aggregate(&doc, None, Path::new("data"), MalformedStepPolicy::Abort)
            .unwrap_err();
        assert!(err.is_malformed_step());
    }

    #[test]
    fn test_skip_policy_records_dropped_step() {
        let mut broken = raw_step(2, "France", 1_700_000_000);
        broken.as_object_mut().unwrap().remove("location");
        let doc = document(vec![
            raw_step(1, "Spain", 1_700_000_000),
            broken,
            raw_step(3, "Italy", 1_700_000_000),
        ]);

        let model = TripAggregator::new(NoMedia)
            .aggregate(&doc, None, Path::new("data"), MalformedStepPolicy::Skip)
            .unwrap();
        let ids: Vec<u64> = model.steps.iter().map(|s| s.id).collect();
        assert_eq!(ids, [1, 3]);
        assert_eq!(model.skipped.len(), 1);
        assert_eq!(model.skipped[0].index, 1);
        assert_eq!(model.skipped[0].step_id, "2");
        assert!(!model.summary().step_count_matches());
    }

    #[test]
    fn test_abort_policy_reports_media_failure_with_step_context() {
        let doc = document(vec![
            raw_step(1, "Spain", 1_700_000_000),
            raw_step(2, "France", 1_700_000_000),
        ]);

        let err = TripAggregator::new(UnreadableStep(2))
            .aggregate(&doc, None, Path::new("data"), MalformedStepPolicy::Abort)
            .unwrap_err();
        assert!(err.is_media_access());
        assert!(err.to_string().contains("step #1 (id 2)"), "{err}");
    }

    #[test]
    fn test_skip_policy_drops_step_with_unreadable_media() {
        let doc = document(vec![
            raw_step(1, "Spain", 1_700_000_000),
            raw_step(2, "France", 1_700_000_000),
            raw_step(3, "Italy", 1_700_000_000),
        ]);

        let model = TripAggregator::new(UnreadableStep(2))
            .aggregate(&doc, None, Path::new("data"), MalformedStepPolicy::Skip)
            .unwrap();
        let ids: Vec<u64> = model.steps.iter().map(|s| s.id).collect();
        assert_eq!(ids, [1, 3]);
        assert_eq!(model.countries.countries(), ["Spain", "Italy"]);
        assert_eq!(model.skipped.len(), 1);
        assert_eq!(model.skipped[0].index, 1);
        assert_eq!(model.skipped[0].step_id, "2");
        assert!(model.skipped[0].reason.contains("permission denied"));
    }
}
