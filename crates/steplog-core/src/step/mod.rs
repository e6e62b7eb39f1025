//! Step domain module.
//!
//! A step is one dated, located journal entry. Steps are built once by the
//! normalizer and never mutated; everything a renderer needs beyond the
//! stored fields is exposed as derived methods.

mod model;

pub use model::{Location, Step, Weather, safe_file_stem};
