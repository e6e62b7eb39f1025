//! Location track DTOs (`locations.json`).

use serde::{Deserialize, Serialize};

use steplog_core::RoutePoint;

/// One location ping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationPingDTO {
    pub lat: f64,
    pub lon: f64,
    /// Epoch seconds.
    pub time: f64,
}

/// The whole `locations.json` document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationsDocumentDTO {
    #[serde(default)]
    pub locations: Vec<LocationPingDTO>,
}

// ============================================================================
// Domain model conversions
// ============================================================================

impl From<LocationPingDTO> for RoutePoint {
    fn from(dto: LocationPingDTO) -> Self {
        RoutePoint {
            lat: dto.lat,
            lon: dto.lon,
            time: dto.time,
        }
    }
}
