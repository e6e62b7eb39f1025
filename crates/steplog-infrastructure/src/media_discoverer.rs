//! Filesystem implementation of `MediaDiscoverer`.
//!
//! The export does not record the order in which photos and videos were
//! added to a step. The journal app writes files in upload order, so the
//! last-modified time is used as a proxy for it, with the file name breaking
//! ties when timestamps are coarse. This is an approximation by nature.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::time::SystemTime;

use steplog_core::media::IGNORED_MEDIA_FILES;
use steplog_core::{MediaDiscoverer, MediaFile, MediaKind, Result, StepLogError};

/// Infers the MIME type from a filename extension using `mime_guess`.
fn infer_mime_type(filename: &str, kind: MediaKind) -> String {
    mime_guess::from_path(filename)
        .first()
        .map(|mime| mime.to_string())
        .unwrap_or_else(|| kind.fallback_mime().to_string())
}

/// Lists step media from the export directory, oldest file first.
#[derive(Debug, Clone)]
pub struct FsMediaDiscoverer {
    ignored: Vec<String>,
}

impl Default for FsMediaDiscoverer {
    fn default() -> Self {
        Self {
            ignored: IGNORED_MEDIA_FILES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl FsMediaDiscoverer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file name to skip, matched exactly.
    pub fn ignoring(mut self, filename: impl Into<String>) -> Self {
        self.ignored.push(filename.into());
        self
    }

    fn is_ignored(&self, filename: &str) -> bool {
        self.ignored.iter().any(|ignored| ignored == filename)
    }
}

impl MediaDiscoverer for FsMediaDiscoverer {
    fn list_media(&self, directory: &Path, kind: MediaKind) -> Result<Vec<MediaFile>> {
        let access_error = |e: std::io::Error| {
            StepLogError::media_access(directory.display().to_string(), e.to_string())
        };

        let entries = match fs::read_dir(directory) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(access_error(e)),
        };

        let mut found: Vec<(SystemTime, MediaFile)> = Vec::new();
        for entry in entries {
            let entry = entry.map_err(access_error)?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if self.is_ignored(&name) {
                tracing::debug!("[Media] Skipping {} in {:?}", name, directory);
                continue;
            }

            // Follows symlinks, so linked media counts as media.
            let metadata = fs::metadata(entry.path()).map_err(access_error)?;
            if !metadata.is_file() {
                continue;
            }
            let modified = metadata.modified().map_err(access_error)?;

            found.push((
                modified,
                MediaFile {
                    mime_type: infer_mime_type(&name, kind),
                    name,
                    size_bytes: metadata.len(),
                },
            ));
        }

        found.sort_by(|(a_time, a), (b_time, b)| {
            a_time.cmp(b_time).then_with(|| a.name.cmp(&b.name))
        });

        tracing::debug!(
            "[Media] {} {} file(s) in {:?}",
            found.len(),
            kind.dir_name(),
            directory
        );

        Ok(found.into_iter().map(|(_, file)| file).collect())
    }
}
