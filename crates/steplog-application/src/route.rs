//! Route Extractor.

use steplog_core::RoutePoint;
use steplog_infrastructure::dto::LocationsDocumentDTO;

/// Turns the optional location track into route points ordered by capture
/// time.
///
/// The sort is stable, so pings sharing a timestamp keep their input order.
/// Duplicates are kept as exported.
pub fn extract_route(locations: Option<&LocationsDocumentDTO>) -> Vec<RoutePoint> {
    let Some(document) = locations else {
        return Vec::new();
    };

    let mut route: Vec<RoutePoint> = document
        .locations
        .iter()
        .copied()
        .map(RoutePoint::from)
        .collect();
    route.sort_by(|a, b| a.time.total_cmp(&b.time));
    route
}
