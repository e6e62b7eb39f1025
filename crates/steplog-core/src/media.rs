//! Media assets attached to a step and the interface that discovers them.
//!
//! The export carries no ordering field for photos and videos. The order a
//! [`MediaDiscoverer`] returns is taken as capture order; the filesystem
//! implementation approximates it with modification times. That is a known
//! limitation of the export format, and the trait exists so an exact source
//! (EXIF capture time, an export manifest) can replace it.

use std::path::Path;

use crate::error::Result;

/// File names that are never content (thumbnail caches, folder metadata).
pub const IGNORED_MEDIA_FILES: [&str; 3] = ["Thumbs.db", ".DS_Store", "desktop.ini"];

/// Kind of media in a step folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Photo,
    Video,
}

impl MediaKind {
    /// Sub-directory of a step folder holding this kind.
    pub fn dir_name(self) -> &'static str {
        match self {
            MediaKind::Photo => "photos",
            MediaKind::Video => "videos",
        }
    }

    /// Prefix used for numbered attachment names and gallery anchors.
    pub fn short_name(self) -> &'static str {
        match self {
            MediaKind::Photo => "img",
            MediaKind::Video => "vid",
        }
    }

    /// MIME type assumed when the extension gives no answer.
    pub fn fallback_mime(self) -> &'static str {
        match self {
            MediaKind::Photo => "image/jpeg",
            MediaKind::Video => "video/mp4",
        }
    }
}

/// One file found by a discoverer, before it is bound to a step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFile {
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: String,
}

/// A photo or video owned by a step.
///
/// The file itself stays in the export directory; nothing in the pipeline
/// moves or modifies it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaAsset {
    pub filename: String,
    /// 0-based position in discovery order.
    pub order: usize,
    pub kind: MediaKind,
    pub size_bytes: u64,
    pub mime_type: String,
}

impl MediaAsset {
    pub fn from_file(file: MediaFile, order: usize, kind: MediaKind) -> Self {
        Self {
            filename: file.name,
            order,
            kind,
            size_bytes: file.size_bytes,
            mime_type: file.mime_type,
        }
    }

    /// 1-based number used in attachment names and gallery anchors.
    pub fn number(&self) -> usize {
        self.order + 1
    }

    /// Gallery anchor, e.g. `img1` or `vid2`.
    pub fn anchor(&self) -> String {
        format!("{}{}", self.kind.short_name(), self.number())
    }

    /// Attachment file name for the step with `step_id`, e.g. `img_100_1`.
    pub fn attachment_name(&self, step_id: u64) -> String {
        format!("{}_{}_{}", self.kind.short_name(), step_id, self.number())
    }
}

/// Lists the media files of one kind in a step media directory.
pub trait MediaDiscoverer {
    /// Returns the files in `directory`, ordered as they were captured.
    ///
    /// A missing directory yields an empty list. Any other failure to read
    /// the directory is an error: an empty list would be indistinguishable
    /// from a step without media.
    fn list_media(&self, directory: &Path, kind: MediaKind) -> Result<Vec<MediaFile>>;
}

impl<T: MediaDiscoverer + ?Sized> MediaDiscoverer for &T {
    fn list_media(&self, directory: &Path, kind: MediaKind) -> Result<Vec<MediaFile>> {
        (**self).list_media(directory, kind)
    }
}

/// Rounds a byte count to megabytes with one decimal, as shown in listings.
pub fn megabytes(bytes: u64) -> f64 {
    (bytes as f64 / 1024.0 / 102.4).round() / 10.0
}
