//! Domain model of a travel-journal export.
//!
//! This crate holds the canonical, immutable model (trip, steps, media,
//! route, visited countries), the glyph lookup tables, the time zone
//! projection and the run configuration. It performs no I/O; reading the
//! export lives in `steplog-infrastructure`.

pub mod config;
pub mod error;
pub mod lookup;
pub mod media;
pub mod route;
pub mod step;
pub mod timezone;
pub mod trip;

#[cfg(test)]
mod test_support;

// Re-export common error type
pub use error::{Result, StepLogError};

pub use config::{MailSettings, MalformedStepPolicy, RunConfig, Settings};
pub use media::{MediaAsset, MediaDiscoverer, MediaFile, MediaKind};
pub use route::RoutePoint;
pub use step::{Location, Step, Weather};
pub use timezone::DisplayZone;
pub use trip::{CountryVisit, CountryVisits, SkippedStep, Trip, TripModel, TripSummary};
