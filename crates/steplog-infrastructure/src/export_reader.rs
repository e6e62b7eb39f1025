//! Reads the JSON documents of an export directory.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use steplog_core::{Result, StepLogError};

use crate::dto::{LocationsDocumentDTO, TripDocumentDTO};
use crate::paths::ExportPaths;

/// Loads `trip.json` and `locations.json` from an export directory.
///
/// Does NOT interpret the documents beyond their JSON shape; normalization
/// is the application layer's job.
#[derive(Debug, Clone)]
pub struct JsonExportReader {
    paths: ExportPaths,
}

impl JsonExportReader {
    pub fn new(paths: ExportPaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &ExportPaths {
        &self.paths
    }

    /// Loads the trip document.
    ///
    /// # Errors
    ///
    /// - `InputNotFound` when `trip.json` does not exist
    /// - `Serialization` when it is not a trip document
    pub fn read_trip(&self) -> Result<TripDocumentDTO> {
        let path = self.paths.trip_file();
        if !path.exists() {
            return Err(StepLogError::input_not_found(
                "trip document",
                path.display().to_string(),
            ));
        }
        let trip: TripDocumentDTO = read_json(&path)?;
        tracing::info!(
            "[Export] Loaded trip '{}' with {} step entries",
            trip.name.trim(),
            trip.all_steps.len()
        );
        Ok(trip)
    }

    /// Loads the location track, or `None` when the export has none.
    pub fn read_locations(&self) -> Result<Option<LocationsDocumentDTO>> {
        let path = self.paths.locations_file();
        if !path.exists() {
            tracing::warn!(
                "[Export] Locations file {:?} not found; route mapping will be unavailable",
                path
            );
            return Ok(None);
        }
        let locations: LocationsDocumentDTO = read_json(&path)?;
        tracing::info!(
            "[Export] Loaded {} location points for route mapping",
            locations.locations.len()
        );
        Ok(Some(locations))
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| StepLogError::Serialization {
        format: "JSON".to_string(),
        message: format!("{}: {}", path.display(), e),
    })
}
