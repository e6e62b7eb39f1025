//! Step domain model.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use std::path::{Path, PathBuf};

use crate::media::{MediaAsset, MediaKind};

/// Replaces `/` and `\` so a name taken from the export stays a single
/// path component.
pub fn safe_file_stem(stem: &str) -> String {
    stem.chars()
        .map(|c| if matches!(c, '/' | '\\') { '-' } else { c })
        .collect()
}

/// Where a step was recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    /// Place name (city, landmark, ...).
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    /// Country as spelled by the export; key into the flag table.
    pub detail: String,
    /// Longer "region, country" description.
    pub full_detail: String,
}

impl Location {
    /// The region part of `full_detail`, when it says more than the country.
    ///
    /// `"Île-de-France, France"` with detail `"France"` gives
    /// `Some("Île-de-France")`.
    pub fn region(&self) -> Option<&str> {
        if self.full_detail.is_empty() || self.full_detail == self.detail {
            return None;
        }
        self.full_detail
            .split(',')
            .next()
            .map(str::trim)
            .filter(|region| !region.is_empty())
    }
}

/// Weather recorded with a step.
#[derive(Debug, Clone, PartialEq)]
pub struct Weather {
    /// Condition code as exported (`clear-day`, `rain`, ...).
    pub code: String,
    /// Resolved glyph, or the raw code when unmapped.
    pub glyph: String,
    /// Temperature in the export's unit (degrees Celsius).
    pub temperature: Option<f64>,
}

impl Weather {
    /// Whole-degree temperature label, `"?"` when none was recorded.
    pub fn temperature_label(&self) -> String {
        match self.temperature {
            Some(t) => format!("{}°C", t.trunc() as i64),
            None => "?".to_string(),
        }
    }
}

/// A normalized journal entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    /// Position in the trip document's `all_steps`.
    pub index: usize,
    pub id: u64,
    pub slug: String,
    pub name: String,
    /// The step's recorded start instant.
    pub recorded_at: DateTime<Utc>,
    /// `recorded_at` in the trip's display zone.
    pub local_time: DateTime<Tz>,
    pub location: Location,
    /// Flag glyph for `location.detail`, or the raw detail when unmapped.
    pub country_glyph: String,
    pub weather: Weather,
    /// Journal text; empty when the export has none.
    pub description: String,
    pub photos: Vec<MediaAsset>,
    pub videos: Vec<MediaAsset>,
}

impl Step {
    /// Folder name of this step inside the export, `<slug>_<id>`.
    pub fn media_dir_name(&self) -> String {
        format!("{}_{}", self.slug, self.id)
    }

    /// Directory holding this step's media of `kind` under `media_root`.
    pub fn media_dir(&self, media_root: &Path, kind: MediaKind) -> PathBuf {
        media_root.join(self.media_dir_name()).join(kind.dir_name())
    }

    /// Absolute source path of an asset under `media_root`.
    pub fn media_source_path(&self, media_root: &Path, asset: &MediaAsset) -> PathBuf {
        self.media_dir(media_root, asset.kind).join(&asset.filename)
    }

    /// Folder and page stem of this step in the output tree. Same as
    /// [`Step::media_dir_name`] with path separators replaced.
    pub fn output_dir_name(&self) -> String {
        safe_file_stem(&self.media_dir_name())
    }

    /// Path of an asset relative to an output tree that mirrors the export
    /// layout, with `/` separators for use in links.
    pub fn media_rel_path(&self, asset: &MediaAsset) -> String {
        format!(
            "{}/{}/{}",
            self.output_dir_name(),
            asset.kind.dir_name(),
            asset.filename
        )
    }

    /// Local calendar date.
    pub fn local_date(&self) -> NaiveDate {
        self.local_time.date_naive()
    }

    /// Local date as `YYYY-MM-DD`.
    pub fn date_label(&self) -> String {
        self.local_time.format("%Y-%m-%d").to_string()
    }

    /// Local date and time as `YYYY-MM-DD HH:MM`.
    pub fn datetime_label(&self) -> String {
        self.local_time.format("%Y-%m-%d %H:%M").to_string()
    }

    /// Flag followed by the region, e.g. `"🇫🇷 Île-de-France"`.
    pub fn country_label(&self) -> String {
        match self.location.region() {
            Some(region) => format!("{} {}", self.country_glyph, region),
            None => self.country_glyph.clone(),
        }
    }

    /// Photos first, then videos, each in discovery order.
    pub fn media(&self) -> impl Iterator<Item = &MediaAsset> {
        self.photos.iter().chain(self.videos.iter())
    }

    /// First asset, used as the step's cover image.
    pub fn cover(&self) -> Option<&MediaAsset> {
        self.media().next()
    }

    pub fn media_bytes(&self) -> u64 {
        self.media().map(|asset| asset.size_bytes).sum()
    }
}
