//! Builders shared by unit tests.

use chrono::{TimeZone, Utc};

use crate::lookup::{resolve_country, resolve_weather};
use crate::step::{Location, Step, Weather};
use crate::timezone::DisplayZone;
use crate::trip::Trip;

pub(crate) fn sample_trip(declared_step_count: usize) -> Trip {
    Trip {
        name: "Sample".to_string(),
        summary: "Sample trip".to_string(),
        start: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
        end: None,
        total_km: 100.0,
        device_name: None,
        zone: DisplayZone::resolve_or_utc("Europe/Paris"),
        declared_step_count,
    }
}

pub(crate) fn step_in(index: usize, id: u64, country: &str, epoch: i64) -> Step {
    let recorded_at = Utc.timestamp_opt(epoch, 0).unwrap();
    Step {
        index,
        id,
        slug: format!("step-{id}"),
        name: format!("Step {id}"),
        recorded_at,
        local_time: recorded_at.with_timezone(&chrono_tz::Europe::Paris),
        location: Location {
            name: "Somewhere".to_string(),
            lat: 0.0,
            lon: 0.0,
            detail: country.to_string(),
            full_detail: country.to_string(),
        },
        country_glyph: resolve_country(country).glyph().to_string(),
        weather: Weather {
            code: "cloudy".to_string(),
            glyph: resolve_weather("cloudy").glyph().to_string(),
            temperature: None,
        },
        description: String::new(),
        photos: Vec::new(),
        videos: Vec::new(),
    }
}
