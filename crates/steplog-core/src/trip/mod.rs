//! Trip domain module.
//!
//! # Module Structure
//!
//! - `model`: the trip header (`Trip`) built from the trip document
//! - `country`: countries in first-visit order (`CountryVisits`)
//! - `summary`: the canonical model handed to renderers (`TripModel`) and
//!   its derived aggregates (`TripSummary`)

mod country;
mod model;
mod summary;

pub use country::{CountryVisit, CountryVisits};
pub use model::{Trip, UNKNOWN};
pub use summary::{SkippedStep, TripModel, TripSummary};
