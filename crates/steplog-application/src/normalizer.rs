//! Step Normalizer: one raw `all_steps` entry in, one [`Step`] out.

use std::collections::HashSet;
use std::path::Path;

use serde_json::Value;

use steplog_core::lookup::{Lookup, LookupTable, resolve_country, resolve_weather};
use steplog_core::timezone::{DisplayZone, instant_from_epoch};
use steplog_core::{
    Location, MediaAsset, MediaDiscoverer, MediaKind, Result, Step, StepLogError, Weather,
};
use steplog_infrastructure::dto::StepEntryDTO;

/// Remembers which unmapped lookup values were already reported.
///
/// One instance lives for one aggregation, so each distinct miss is logged
/// once per run however many steps share it.
#[derive(Debug, Default)]
pub struct LookupDiagnostics {
    seen: HashSet<(LookupTable, String)>,
}

impl LookupDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a lookup result. Returns `true` when this is a miss not seen
    /// before, which is also when a warning is emitted.
    pub fn record(&mut self, table: LookupTable, lookup: &Lookup<'_>, step_id: u64) -> bool {
        let Lookup::Miss(raw) = lookup else {
            return false;
        };
        if raw.is_empty() {
            return false;
        }
        let first = self.seen.insert((table, raw.to_string()));
        if first {
            tracing::warn!(
                "[Lookup] No {} glyph for '{}' (first seen at step {}); showing it as is",
                table,
                raw,
                step_id
            );
        }
        first
    }

    /// Distinct misses, sorted by table then value.
    pub fn misses(&self) -> Vec<(LookupTable, &str)> {
        let mut misses: Vec<(LookupTable, &str)> = self
            .seen
            .iter()
            .map(|(table, raw)| (*table, raw.as_str()))
            .collect();
        misses.sort();
        misses
    }

    pub fn miss_count(&self) -> usize {
        self.seen.len()
    }
}

/// Builds immutable [`Step`] values from raw step entries.
///
/// Media ordering is delegated to the [`MediaDiscoverer`], so a different
/// ordering source can be swapped in without touching normalization.
#[derive(Debug, Clone)]
pub struct StepNormalizer<D> {
    discoverer: D,
}

impl<D: MediaDiscoverer> StepNormalizer<D> {
    pub fn new(discoverer: D) -> Self {
        Self { discoverer }
    }

    /// Normalizes the entry at `index` of `all_steps`.
    ///
    /// # Errors
    ///
    /// - `MalformedStep` when the entry has the wrong shape, no `location`,
    ///   or an unrepresentable `start_time`
    /// - `MediaAccess` when a step media directory exists but cannot be read
    pub fn normalize(
        &self,
        index: usize,
        raw: &Value,
        zone: &DisplayZone,
        media_root: &Path,
        diagnostics: &mut LookupDiagnostics,
    ) -> Result<Step> {
        let entry = StepEntryDTO::from_value(index, raw)?;
        let step_id = entry.id.to_string();

        // start_time is when the traveler was there; creation_time is only
        // when the entry was written.
        let recorded_at = instant_from_epoch("start_time", entry.start_time).map_err(|e| {
            StepLogError::malformed_step(
                index,
                step_id.as_str(),
                "start_time",
                e.to_string(),
            )
        })?;

        let location = entry.location.ok_or_else(|| {
            StepLogError::malformed_step(
                index,
                step_id.as_str(),
                "location",
                "missing; the step cannot be placed",
            )
        })?;

        let country = resolve_country(&location.detail);
        diagnostics.record(LookupTable::Country, &country, entry.id);
        let country_glyph = country.glyph().to_string();

        let weather_code = entry.weather_condition.unwrap_or_default();
        let weather = resolve_weather(&weather_code);
        diagnostics.record(LookupTable::Weather, &weather, entry.id);
        let weather_glyph = weather.glyph().to_string();

        let step_dir = media_root.join(format!("{}_{}", entry.slug, entry.id));
        let photos = self.discover(&step_dir, MediaKind::Photo, index, &step_id)?;
        let videos = self.discover(&step_dir, MediaKind::Video, index, &step_id)?;

        tracing::debug!(
            "[Normalizer] Step {} '{}': {} photo(s), {} video(s)",
            entry.id,
            entry.display_name,
            photos.len(),
            videos.len()
        );

        Ok(Step {
            index,
            id: entry.id,
            slug: entry.slug,
            name: entry.display_name,
            local_time: zone.project(recorded_at),
            recorded_at,
            location: Location {
                name: location.name,
                lat: location.lat,
                lon: location.lon,
                full_detail: location
                    .full_detail
                    .unwrap_or_else(|| location.detail.clone()),
                detail: location.detail,
            },
            country_glyph,
            weather: Weather {
                code: weather_code,
                glyph: weather_glyph,
                temperature: entry.weather_temperature,
            },
            description: entry.description.unwrap_or_default(),
            photos,
            videos,
        })
    }

    fn discover(
        &self,
        step_dir: &Path,
        kind: MediaKind,
        index: usize,
        step_id: &str,
    ) -> Result<Vec<MediaAsset>> {
        let files = self
            .discoverer
            .list_media(&step_dir.join(kind.dir_name()), kind)
            .map_err(|e| e.with_step(index, step_id))?;
        Ok(files
            .into_iter()
            .enumerate()
            .map(|(order, file)| MediaAsset::from_file(file, order, kind))
            .collect())
    }
}
