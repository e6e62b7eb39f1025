//! Writes generated artifacts into the output directory.

use std::fs;
use std::path::Path;

use serde::Serialize;

use steplog_core::{Result, Step, StepLogError};

use crate::paths::{ExportPaths, OutputPaths};

/// Owns every write into the output directory. The export directory is
/// only ever read.
#[derive(Debug, Clone)]
pub struct OutputWriter {
    paths: OutputPaths,
}

impl OutputWriter {
    pub fn new(paths: OutputPaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &OutputPaths {
        &self.paths
    }

    /// Creates the output directory if needed.
    pub fn prepare(&self) -> Result<()> {
        fs::create_dir_all(self.paths.root()).map_err(|e| {
            StepLogError::io(format!(
                "could not create output directory {}: {}",
                self.paths.root().display(),
                e
            ))
        })
    }

    /// Writes a text file, replacing any previous version.
    pub fn write_text(&self, path: &Path, contents: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, contents).map_err(|e| {
            StepLogError::io(format!("could not write {}: {}", path.display(), e))
        })?;
        tracing::debug!("[Output] Wrote {:?}", path);
        Ok(())
    }

    /// Writes `value` as pretty-printed JSON.
    pub fn write_json<T: Serialize + ?Sized>(&self, path: &Path, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        self.write_text(path, &json)
    }

    /// Copies a step's media next to its HTML page, mirroring the export
    /// layout. Returns the number of files copied.
    pub fn copy_step_media(&self, export: &ExportPaths, step: &Step) -> Result<usize> {
        let mut copied = 0;
        for asset in step.media() {
            let source = export.media_file(step, asset);
            let target = self.paths.media_file(step, asset);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(&source, &target).map_err(|e| {
                StepLogError::media_access(
                    source.display().to_string(),
                    format!("copy to {} failed: {}", target.display(), e),
                )
                .with_step(step.index, step.id.to_string())
            })?;
            copied += 1;
        }
        if copied > 0 {
            tracing::debug!(
                "[Output] Copied {} file(s) for step {}",
                copied,
                step.media_dir_name()
            );
        }
        Ok(copied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use steplog_core::{DisplayZone, Location, MediaAsset, MediaFile, MediaKind, Weather};
    use tempfile::TempDir;

    fn step_with_photo(name: &str) -> Step {
        let recorded_at = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        Step {
            index: 0,
            id: 7,
            slug: "lyon".to_string(),
            name: "Lyon".to_string(),
            recorded_at,
            local_time: DisplayZone::utc().project(recorded_at),
            location: Location {
                name: "Lyon".to_string(),
                lat: 0.0,
                lon: 0.0,
                detail: "France".to_string(),
                full_detail: "France".to_string(),
            },
            country_glyph: "FR".to_string(),
            weather: Weather {
                code: String::new(),
                glyph: String::new(),
                temperature: None,
            },
            description: String::new(),
            photos: vec![MediaAsset::from_file(
                MediaFile {
                    name: name.to_string(),
                    size_bytes: 3,
                    mime_type: "image/jpeg".to_string(),
                },
                0,
                MediaKind::Photo,
            )],
            videos: Vec::new(),
        }
    }

    #[test]
    fn test_copies_media_into_mirrored_layout() {
        let export_dir = TempDir::new().unwrap();
        let output_dir = TempDir::new().unwrap();
        let photos = export_dir.path().join("lyon_7").join("photos");
        fs::create_dir_all(&photos).unwrap();
        fs::write(photos.join("a.jpg"), b"abc").unwrap();

        let writer = OutputWriter::new(OutputPaths::new(output_dir.path()));
        let copied = writer
            .copy_step_media(
                &ExportPaths::new(export_dir.path()),
                &step_with_photo("a.jpg"),
            )
            .unwrap();

        assert_eq!(copied, 1);
        let target = output_dir.path().join("lyon_7").join("photos").join("a.jpg");
        assert_eq!(fs::read(target).unwrap(), b"abc");
    }

    #[test]
    fn test_slug_separators_stay_inside_output_dir() {
        let paths = OutputPaths::new("Extracts");
        let mut step = step_with_photo("a.jpg");
        step.slug = "../up".to_string();

        assert_eq!(OutputPaths::step_page_name(&step), "..-up_7.html");
        assert_eq!(
            paths.media_file(&step, &step.photos[0]),
            Path::new("Extracts").join("..-up_7").join("photos").join("a.jpg")
        );
        // The export side keeps the real folder name.
        assert_eq!(
            ExportPaths::new("data").media_file(&step, &step.photos[0]),
            Path::new("data").join("../up_7").join("photos").join("a.jpg")
        );
    }

    #[test]
    fn test_missing_source_is_media_access_error() {
        let export_dir = TempDir::new().unwrap();
        let output_dir = TempDir::new().unwrap();
        let writer = OutputWriter::new(OutputPaths::new(output_dir.path()));
        let err = writer
            .copy_step_media(
                &ExportPaths::new(export_dir.path()),
                &step_with_photo("gone.jpg"),
            )
            .unwrap_err();
        assert!(err.is_media_access());
    }

    #[test]
    fn test_write_json_creates_directories() {
        let output_dir = TempDir::new().unwrap();
        let writer = OutputWriter::new(OutputPaths::new(output_dir.path().join("nested")));
        writer.prepare().unwrap();
        let path = writer.paths().outbox_file();
        writer.write_json(&path, &vec!["a", "b"]).unwrap();
        let written = fs::read_to_string(path).unwrap();
        let back: Vec<String> = serde_json::from_str(&written).unwrap();
        assert_eq!(back, ["a", "b"]);
    }
}
