//! Application layer for steplog.
//!
//! Turns the raw export documents into the canonical [`TripModel`] and
//! renders that model into the itinerary, the HTML pages and mail drafts.
//! Renderers only ever read the model; they never go back to raw JSON.
//!
//! [`TripModel`]: steplog_core::TripModel

pub mod aggregator;
pub mod normalizer;
pub mod render;
pub mod route;

pub use aggregator::TripAggregator;
pub use normalizer::{LookupDiagnostics, StepNormalizer};
pub use render::{HtmlRenderer, HtmlSite, ItineraryRenderer, MailAttachment, MailDraft};
pub use route::extract_route;
