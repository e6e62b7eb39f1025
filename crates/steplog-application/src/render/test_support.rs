//! A small two-step trip shared by renderer tests.

use chrono::{TimeZone, Utc};

use steplog_core::lookup::{resolve_country, resolve_weather};
use steplog_core::{
    CountryVisits, DisplayZone, Location, MediaAsset, MediaFile, MediaKind, RoutePoint, Step,
    Trip, TripModel, Weather,
};

const MIB: u64 = 1024 * 1024;

fn asset(name: &str, order: usize, kind: MediaKind) -> MediaAsset {
    MediaAsset::from_file(
        MediaFile {
            name: name.to_string(),
            size_bytes: MIB,
            mime_type: kind.fallback_mime().to_string(),
        },
        order,
        kind,
    )
}

fn step(
    index: usize,
    id: u64,
    slug: &str,
    epoch: i64,
    (lat, lon): (f64, f64),
    (detail, full_detail): (&str, &str),
    weather: &str,
) -> Step {
    let zone = DisplayZone::resolve_or_utc("Europe/Paris");
    let recorded_at = Utc.timestamp_opt(epoch, 0).unwrap();
    let name = format!("{}{}", slug[..1].to_uppercase(), &slug[1..]);
    Step {
        index,
        id,
        slug: slug.to_string(),
        location: Location {
            name: name.clone(),
            lat,
            lon,
            detail: detail.to_string(),
            full_detail: full_detail.to_string(),
        },
        name,
        recorded_at,
        local_time: zone.project(recorded_at),
        country_glyph: resolve_country(detail).glyph().to_string(),
        weather: Weather {
            code: weather.to_string(),
            glyph: resolve_weather(weather).glyph().to_string(),
            temperature: Some(11.4),
        },
        description: String::new(),
        photos: Vec::new(),
        videos: Vec::new(),
    }
}

/// Paris (France, no media) then Lyon (unmapped country, two photos and a
/// video), in the Europe/Paris zone.
pub(crate) fn sample_model() -> TripModel {
    let mut paris = step(
        0,
        100,
        "paris",
        1_700_000_000,
        (48.85, 2.35),
        ("France", "Île-de-France, France"),
        "clear-day",
    );
    paris.description = "Croissants.".to_string();

    let mut lyon = step(
        1,
        101,
        "lyon",
        1_700_100_000,
        (45.75, 4.85),
        ("Unknownland", "Unknownland"),
        "foggy",
    );
    lyon.photos = vec![
        asset("first.jpg", 0, MediaKind::Photo),
        asset("second.jpg", 1, MediaKind::Photo),
    ];
    lyon.videos = vec![asset("clip.mp4", 0, MediaKind::Video)];

    let steps = vec![paris, lyon];
    TripModel {
        trip: Trip {
            name: "Autumn in France".to_string(),
            summary: "A short trip".to_string(),
            start: Utc.timestamp_opt(1_699_999_000, 0).unwrap(),
            end: None,
            total_km: 812.6,
            device_name: None,
            zone: DisplayZone::resolve_or_utc("Europe/Paris"),
            declared_step_count: 2,
        },
        countries: CountryVisits::from_steps(&steps),
        steps,
        route: vec![
            RoutePoint {
                lat: 48.85,
                lon: 2.35,
                time: 1_700_000_000.0,
            },
            RoutePoint {
                lat: 45.75,
                lon: 4.85,
                time: 1_700_100_000.0,
            },
        ],
        skipped: Vec::new(),
    }
}
