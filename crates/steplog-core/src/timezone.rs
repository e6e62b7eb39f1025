//! Projection of export timestamps into the trip's display zone.
//!
//! Export timestamps are epoch seconds (possibly fractional) describing an
//! absolute instant. They are shown to the reader in the trip's IANA zone,
//! with DST applied by `chrono-tz`.

use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{Result, StepLogError};

/// Parses an IANA zone identifier.
pub fn resolve_zone(zone_id: &str) -> Result<Tz> {
    zone_id
        .trim()
        .parse::<Tz>()
        .map_err(|_| StepLogError::timezone(zone_id))
}

/// Converts an epoch timestamp interpreted in `source_zone` into `target_zone`.
///
/// Fails with `TimezoneResolution` when `target_zone` is not a known zone, and
/// with `InvalidTimestamp` when the instant is outside the representable range.
pub fn to_local(epoch_seconds: i64, source_zone: Tz, target_zone: &str) -> Result<DateTime<Tz>> {
    let target = resolve_zone(target_zone)?;
    let source = source_zone
        .timestamp_opt(epoch_seconds, 0)
        .single()
        .ok_or_else(|| StepLogError::invalid_timestamp("epoch_seconds", epoch_seconds))?;
    Ok(source.with_timezone(&target))
}

/// Builds a UTC instant from export epoch seconds.
///
/// The fractional part is kept as nanoseconds. `field` names the source field
/// for the error message.
pub fn instant_from_epoch(field: &str, epoch_seconds: f64) -> Result<DateTime<Utc>> {
    if !epoch_seconds.is_finite() {
        return Err(StepLogError::invalid_timestamp(field, epoch_seconds));
    }
    let secs = epoch_seconds.floor();
    let nanos = ((epoch_seconds - secs) * 1e9).round().min(999_999_999.0) as u32;
    if secs < i64::MIN as f64 || secs > i64::MAX as f64 {
        return Err(StepLogError::invalid_timestamp(field, epoch_seconds));
    }
    DateTime::from_timestamp(secs as i64, nanos)
        .ok_or_else(|| StepLogError::invalid_timestamp(field, epoch_seconds))
}

/// The zone every local date and time is rendered in.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayZone {
    /// Identifier as requested by the trip document.
    requested: String,
    tz: Tz,
    fell_back: bool,
}

impl DisplayZone {
    /// Resolves `zone_id`, falling back to UTC when it is unknown.
    ///
    /// The fallback is reported once here, so per-step conversions never
    /// fail on the zone.
    pub fn resolve_or_utc(zone_id: &str) -> Self {
        match resolve_zone(zone_id) {
            Ok(tz) => Self {
                requested: zone_id.to_string(),
                tz,
                fell_back: false,
            },
            Err(e) => {
                tracing::warn!("[Timezone] {}; displaying times in UTC", e);
                Self {
                    requested: zone_id.to_string(),
                    tz: Tz::UTC,
                    fell_back: true,
                }
            }
        }
    }

    pub fn utc() -> Self {
        Self {
            requested: "UTC".to_string(),
            tz: Tz::UTC,
            fell_back: false,
        }
    }

    pub fn tz(&self) -> Tz {
        self.tz
    }

    /// The identifier the trip asked for, even when it could not be resolved.
    pub fn requested(&self) -> &str {
        &self.requested
    }

    /// Whether the requested zone was unknown and UTC is used instead.
    pub fn fell_back(&self) -> bool {
        self.fell_back
    }

    /// Projects an absolute instant into this zone.
    pub fn project(&self, instant: DateTime<Utc>) -> DateTime<Tz> {
        instant.with_timezone(&self.tz)
    }
}
