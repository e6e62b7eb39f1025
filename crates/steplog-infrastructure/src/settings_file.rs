//! Optional `steplog.toml` settings file.

use std::fs;
use std::path::Path;

use steplog_core::{Result, Settings};

pub const DEFAULT_SETTINGS_FILE: &str = "steplog.toml";

/// Loads settings from `path`.
///
/// A missing or empty file yields the defaults.
pub fn load_settings(path: &Path) -> Result<Settings> {
    if !path.exists() {
        tracing::debug!("[Settings] {:?} not found, using defaults", path);
        return Ok(Settings::default());
    }

    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }

    let settings: Settings = toml::from_str(&content)?;
    tracing::debug!("[Settings] Loaded {:?}", path);
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use steplog_core::MalformedStepPolicy;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DEFAULT_SETTINGS_FILE);
        let settings = load_settings(&path).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_loads_sections() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DEFAULT_SETTINGS_FILE);
        fs::write(
            &path,
            "[input]\ndir = \"export\"\n\n[steps]\non_malformed = \"skip\"\n",
        )
        .unwrap();

        let settings = load_settings(&path).unwrap();
        assert_eq!(settings.input.dir, Some(PathBuf::from("export")));
        assert_eq!(settings.steps.on_malformed, MalformedStepPolicy::Skip);
        assert!(settings.mail.to.is_none());
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DEFAULT_SETTINGS_FILE);
        fs::write(&path, "[steps]\non_malformed = \"sometimes\"\n").unwrap();
        assert!(load_settings(&path).unwrap_err().is_serialization());
    }
}
