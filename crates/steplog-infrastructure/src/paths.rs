//! Path layout of the export directory and of the generated output tree.
//!
//! # Directory Structure
//!
//! ```text
//! data/                        # Export directory (input, read-only)
//! ├── trip.json                # Trip document
//! ├── locations.json           # Location track (optional)
//! └── <slug>_<id>/             # One folder per step
//!     ├── photos/
//!     └── videos/
//!
//! Extracts/                    # Output directory
//! ├── <trip name>_<date>.txt   # Text itinerary
//! ├── index.html               # Trip page
//! ├── <slug>_<id>.html         # One page per step
//! ├── local.css
//! ├── outbox.json              # Mail drafts
//! └── <slug>_<id>/photos|videos/  # Copied media
//! ```

use std::path::{Path, PathBuf};

use steplog_core::step::safe_file_stem;
use steplog_core::{MediaAsset, Step};

pub const TRIP_FILE: &str = "trip.json";
pub const LOCATIONS_FILE: &str = "locations.json";

/// Paths inside an export directory.
#[derive(Debug, Clone)]
pub struct ExportPaths {
    root: PathBuf,
}

impl ExportPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The export directory, which is also the media root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn trip_file(&self) -> PathBuf {
        self.root.join(TRIP_FILE)
    }

    pub fn locations_file(&self) -> PathBuf {
        self.root.join(LOCATIONS_FILE)
    }

    /// Source path of a step asset.
    pub fn media_file(&self, step: &Step, asset: &MediaAsset) -> PathBuf {
        step.media_source_path(&self.root, asset)
    }
}

/// Paths inside the output directory.
#[derive(Debug, Clone)]
pub struct OutputPaths {
    root: PathBuf,
}

impl OutputPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Text itinerary for a trip file stem.
    ///
    /// Path separators in the stem are replaced so a trip name can never
    /// escape the output directory.
    pub fn itinerary_file(&self, stem: &str) -> PathBuf {
        self.root.join(format!("{}.txt", safe_file_stem(stem)))
    }

    pub fn index_file(&self) -> PathBuf {
        self.root.join("index.html")
    }

    pub fn stylesheet_file(&self) -> PathBuf {
        self.root.join("local.css")
    }

    /// Page file name of a step. Uses the sanitized step folder name, like
    /// the copied media.
    pub fn step_page_name(step: &Step) -> String {
        format!("{}.html", step.output_dir_name())
    }

    pub fn step_page(&self, step: &Step) -> PathBuf {
        self.root.join(Self::step_page_name(step))
    }

    pub fn outbox_file(&self) -> PathBuf {
        self.root.join("outbox.json")
    }

    /// Destination of a copied asset, mirroring the export layout.
    pub fn media_file(&self, step: &Step, asset: &MediaAsset) -> PathBuf {
        self.root
            .join(step.output_dir_name())
            .join(asset.kind.dir_name())
            .join(&asset.filename)
    }
}
