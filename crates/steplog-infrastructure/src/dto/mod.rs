//! Data Transfer Objects for the journal export.
//!
//! These DTOs mirror the JSON written by the journal app. Only the fields the
//! pipeline consumes are declared; everything else in the documents is
//! ignored. Steps are kept as raw JSON values in the trip document so that a
//! single bad entry is reported with its index and id instead of failing the
//! whole document parse.

mod locations;
mod step;
mod trip;

pub use locations::{LocationPingDTO, LocationsDocumentDTO};
pub use step::{StepEntryDTO, StepLocationDTO, step_id_hint};
pub use trip::{TrackerDeviceDTO, TripDocumentDTO};
