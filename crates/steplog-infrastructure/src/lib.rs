//! Infrastructure layer for steplog.
//!
//! Everything that touches the filesystem: the export documents and their
//! DTOs, media discovery, the optional settings file and the output tree.

pub mod dto;
pub mod export_reader;
pub mod media_discoverer;
pub mod output_writer;
pub mod paths;
pub mod settings_file;

pub use crate::export_reader::JsonExportReader;
pub use crate::media_discoverer::FsMediaDiscoverer;
pub use crate::output_writer::OutputWriter;
pub use crate::paths::{ExportPaths, OutputPaths};
pub use crate::settings_file::{DEFAULT_SETTINGS_FILE, load_settings};
