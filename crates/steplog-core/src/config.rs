//! Run configuration.
//!
//! `Settings` mirrors the optional `steplog.toml` file. `RunConfig` is the
//! immutable configuration of one run, built once from the settings file and
//! the command line, then passed by reference to every component.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_OUTPUT_DIR: &str = "Extracts";

/// What to do with a step entry that cannot be normalized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedStepPolicy {
    /// Fail the whole run; never ship a silently incomplete trip.
    #[default]
    Abort,
    /// Drop the step with a warning and keep going.
    Skip,
}

impl std::str::FromStr for MalformedStepPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "abort" => Ok(Self::Abort),
            "skip" => Ok(Self::Skip),
            other => Err(format!("unknown malformed-step policy '{other}' (abort|skip)")),
        }
    }
}

/// Addresses used on generated mail drafts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailSettings {
    pub to: String,
    pub from: String,
}

pub const DEFAULT_MAIL_FROM: &str = "steplog@localhost";

// ============================================================================
// Settings file
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub input: InputSettings,
    pub output: OutputSettings,
    pub mail: MailFileSettings,
    pub steps: StepSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSettings {
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub dir: Option<PathBuf>,
    /// Generate the HTML pages without passing `--local`.
    pub html: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MailFileSettings {
    pub from: Option<String>,
    pub to: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepSettings {
    pub on_malformed: MalformedStepPolicy,
}

// ============================================================================
// Run configuration
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Directory holding `trip.json`, `locations.json` and step folders.
    pub data_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Add ids, locations and media listings to the text itinerary.
    pub verbose: bool,
    pub render_html: bool,
    /// Leave the first and last step off whole-trip maps.
    pub exclude_endpoints: bool,
    /// Build mail drafts when set.
    pub mail: Option<MailSettings>,
    pub malformed_steps: MalformedStepPolicy,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            verbose: false,
            render_html: false,
            exclude_endpoints: false,
            mail: None,
            malformed_steps: MalformedStepPolicy::Abort,
        }
    }
}

impl RunConfig {
    /// Starts from file settings; command-line values are applied on top by
    /// the caller.
    pub fn from_settings(settings: &Settings) -> Self {
        let defaults = Self::default();
        Self {
            data_dir: settings.input.dir.clone().unwrap_or(defaults.data_dir),
            output_dir: settings.output.dir.clone().unwrap_or(defaults.output_dir),
            render_html: settings.output.html,
            mail: settings.mail.to.as_ref().map(|to| MailSettings {
                to: to.clone(),
                from: settings
                    .mail
                    .from
                    .clone()
                    .unwrap_or_else(|| DEFAULT_MAIL_FROM.to_string()),
            }),
            malformed_steps: settings.steps.on_malformed,
            ..defaults
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RunConfig::default();
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.output_dir, PathBuf::from("Extracts"));
        assert_eq!(config.malformed_steps, MalformedStepPolicy::Abort);
        assert!(config.mail.is_none());
    }

    #[test]
    fn test_settings_from_toml() {
        let settings: Settings = toml::from_str(
            r#"
[output]
dir = "out"
html = true

[mail]
to = "blog@example.com"

[steps]
on_malformed = "skip"
"#,
        )
        .unwrap();

        let config = RunConfig::from_settings(&settings);
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert!(config.render_html);
        assert_eq!(config.malformed_steps, MalformedStepPolicy::Skip);
        let mail = config.mail.unwrap();
        assert_eq!(mail.to, "blog@example.com");
        assert_eq!(mail.from, DEFAULT_MAIL_FROM);
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!(
            "Skip".parse::<MalformedStepPolicy>(),
            Ok(MalformedStepPolicy::Skip)
        );
        assert!("maybe".parse::<MalformedStepPolicy>().is_err());
    }
}
