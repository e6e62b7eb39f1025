//! Serializable views of the model handed to templates.
//!
//! Templates only see these flat values, so every label is formatted once
//! here and the templates stay free of date or unit logic.

use serde::Serialize;

use steplog_core::media::megabytes;
use steplog_core::{CountryVisit, MediaAsset, MediaKind, Step, TripModel};
use steplog_infrastructure::OutputPaths;

#[derive(Debug, Clone, Serialize)]
pub struct TripView<'a> {
    pub name: &'a str,
    pub summary: &'a str,
    pub start_date: String,
    pub end_date: String,
    pub rounded_km: i64,
    pub step_count: usize,
    pub timezone: &'a str,
    pub device: &'a str,
    pub flags: String,
    pub countries: Vec<&'a CountryVisit>,
}

impl<'a> TripView<'a> {
    pub fn new(model: &'a TripModel) -> Self {
        let trip = &model.trip;
        Self {
            name: &trip.name,
            summary: &trip.summary,
            start_date: trip.start_date_label(),
            end_date: trip.end_date_label(),
            rounded_km: trip.rounded_km(),
            step_count: model.steps.len(),
            timezone: trip.zone.requested(),
            device: trip.device_label(),
            flags: model.countries.glyph_line(),
            countries: model.countries.iter().collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MediaView {
    pub filename: String,
    /// Link path relative to the output directory.
    pub path: String,
    pub anchor: String,
    pub number: usize,
    pub size_mb: f64,
    pub is_video: bool,
    /// Lightbox neighbours, photos first then videos.
    pub prev_anchor: Option<String>,
    pub next_anchor: Option<String>,
}

impl MediaView {
    fn new(step: &Step, asset: &MediaAsset) -> Self {
        Self {
            filename: asset.filename.clone(),
            path: step.media_rel_path(asset),
            anchor: asset.anchor(),
            number: asset.number(),
            size_mb: megabytes(asset.size_bytes),
            is_video: asset.kind == MediaKind::Video,
            prev_anchor: None,
            next_anchor: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NavLink {
    pub name: String,
    pub page: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct StepView {
    pub id: u64,
    pub slug: String,
    pub name: String,
    pub page: String,
    pub date: String,
    pub datetime: String,
    pub location_name: String,
    pub lat: f64,
    pub lon: f64,
    pub full_detail: String,
    pub country_glyph: String,
    pub country_label: String,
    pub weather_glyph: String,
    pub temperature: String,
    pub description: String,
    pub photos: Vec<MediaView>,
    pub videos: Vec<MediaView>,
    /// Photos then videos, the lightbox browsing order.
    pub gallery: Vec<MediaView>,
    pub cover: Option<MediaView>,
    pub media_mb: f64,
    pub prev: Option<NavLink>,
    pub next: Option<NavLink>,
}

fn nav_link(step: Option<&Step>) -> Option<NavLink> {
    step.map(|s| NavLink {
        name: s.name.clone(),
        page: OutputPaths::step_page_name(s),
    })
}

impl StepView {
    /// View of the step at `position` in the model's step list.
    pub fn new(model: &TripModel, position: usize, step: &Step) -> Self {
        let mut gallery: Vec<MediaView> = step.media().map(|a| MediaView::new(step, a)).collect();
        let anchors: Vec<String> = gallery.iter().map(|m| m.anchor.clone()).collect();
        for (i, media) in gallery.iter_mut().enumerate() {
            media.prev_anchor = i.checked_sub(1).map(|p| anchors[p].clone());
            media.next_anchor = anchors.get(i + 1).cloned();
        }
        let cover = gallery.first().cloned();
        let mut photos = gallery.clone();
        let videos = photos.split_off(step.photos.len());

        Self {
            id: step.id,
            slug: step.slug.clone(),
            name: step.name.clone(),
            page: OutputPaths::step_page_name(step),
            date: step.date_label(),
            datetime: step.datetime_label(),
            location_name: step.location.name.clone(),
            lat: step.location.lat,
            lon: step.location.lon,
            full_detail: step.location.full_detail.clone(),
            country_glyph: step.country_glyph.clone(),
            country_label: step.country_label(),
            weather_glyph: step.weather.glyph.clone(),
            temperature: step.weather.temperature_label(),
            description: step.description.clone(),
            photos,
            videos,
            gallery,
            cover,
            media_mb: megabytes(step.media_bytes()),
            prev: nav_link(model.previous(position)),
            next: nav_link(model.next(position)),
        }
    }

    pub fn all(model: &TripModel) -> Vec<Self> {
        model
            .steps
            .iter()
            .enumerate()
            .map(|(position, step)| Self::new(model, position, step))
            .collect()
    }
}
