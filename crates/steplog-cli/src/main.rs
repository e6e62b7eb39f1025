use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use steplog_core::config::DEFAULT_MAIL_FROM;
use steplog_core::{MailSettings, MalformedStepPolicy, RunConfig, Settings};
use steplog_infrastructure::{DEFAULT_SETTINGS_FILE, load_settings};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "steplog")]
#[command(
    about = "Turn a travel-journal export into a text itinerary, local HTML pages and mail drafts",
    long_about = None
)]
struct Cli {
    /// Add ids, locations and media listings to the itinerary (and debug logs)
    #[arg(short, long)]
    verbose: bool,

    /// Generate local HTML pages to browse the steps
    #[arg(short, long)]
    local: bool,

    /// Prepare mail drafts for each step and the trip, addressed to ADDRESS
    #[arg(short, long, value_name = "ADDRESS")]
    email: Option<String>,

    /// Leave the first and last steps off the trip map
    #[arg(short = 'x', long)]
    exclude: bool,

    /// Export directory holding trip.json, locations.json and step folders
    #[arg(long, env = "STEPLOG_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Output directory
    #[arg(long, env = "STEPLOG_OUT_DIR")]
    out_dir: Option<PathBuf>,

    /// Settings file
    #[arg(short, long, default_value = DEFAULT_SETTINGS_FILE)]
    config: PathBuf,

    /// What to do with a step that cannot be normalized (abort|skip)
    #[arg(long, value_name = "POLICY")]
    on_malformed_step: Option<MalformedStepPolicy>,
}

impl Cli {
    /// Command-line values override the settings file.
    fn into_config(self, settings: &Settings) -> RunConfig {
        let mut config = RunConfig::from_settings(settings);
        config.verbose = self.verbose;
        config.render_html |= self.local;
        config.exclude_endpoints = self.exclude;
        if let Some(data_dir) = self.data_dir {
            config.data_dir = data_dir;
        }
        if let Some(out_dir) = self.out_dir {
            config.output_dir = out_dir;
        }
        if let Some(to) = self.email {
            let from = settings
                .mail
                .from
                .clone()
                .unwrap_or_else(|| DEFAULT_MAIL_FROM.to_string());
            config.mail = Some(MailSettings { to, from });
        }
        if let Some(policy) = self.on_malformed_step {
            config.malformed_steps = policy;
        }
        config
    }
}

fn init_tracing(verbose: bool) -> Result<()> {
    let default_level = if verbose {
        "steplog=debug"
    } else {
        "steplog=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .or_else(|_| tracing_subscriber::EnvFilter::try_new(default_level))?,
        )
        .with_target(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let settings = load_settings(&cli.config)
        .with_context(|| format!("Failed to load settings from {}", cli.config.display()))?;
    let config = cli.into_config(&settings);
    tracing::debug!("[Cli] {:?}", config);

    let report = commands::convert::run(&config)?;

    println!(
        "✅ {} step(s) written to {}",
        report.steps,
        report.itinerary.display()
    );
    if let Some(dates) = &report.dates {
        println!(
            "📷 {} photo(s), {} video(s), {} MB over {}",
            report.photos,
            report.videos,
            report.media_mb,
            dates
        );
    }
    if report.skipped > 0 {
        println!("⚠️  {} malformed step(s) skipped", report.skipped);
    }
    if config.render_html {
        println!(
            "🌐 {} page(s) and {} media file(s) in {}",
            report.pages + 1,
            report.media_copied,
            config.output_dir.display()
        );
    }
    if let Some(mail) = &config.mail {
        println!("✉️  {} draft(s) for {} in outbox.json", report.drafts, mail.to);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("steplog").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_flags_override_settings() {
        let settings = file_settings();
        let config = parse(&[
            "-v",
            "-l",
            "-x",
            "--out-dir",
            "site",
            "--on-malformed-step",
            "abort",
        ])
        .into_config(&settings);

        assert!(config.verbose);
        assert!(config.render_html);
        assert!(config.exclude_endpoints);
        assert_eq!(config.output_dir, PathBuf::from("site"));
        assert_eq!(config.malformed_steps, MalformedStepPolicy::Abort);
        // Address from the file is kept when -e is absent.
        assert_eq!(config.mail.unwrap().to, "file@example.com");
    }

    #[test]
    fn test_email_flag_uses_configured_sender() {
        let config = parse(&["-e", "cli@example.com"]).into_config(&file_settings());
        let mail = config.mail.unwrap();
        assert_eq!(mail.to, "cli@example.com");
        assert_eq!(mail.from, "me@example.com");
        assert_eq!(config.malformed_steps, MalformedStepPolicy::Skip);
    }

    #[test]
    fn test_unknown_policy_is_rejected() {
        let result = Cli::try_parse_from(["steplog", "--on-malformed-step", "maybe"]);
        assert!(result.is_err());
    }

    fn file_settings() -> Settings {
        let mut settings = Settings::default();
        settings.mail.to = Some("file@example.com".to_string());
        settings.mail.from = Some("me@example.com".to_string());
        settings.steps.on_malformed = MalformedStepPolicy::Skip;
        settings
    }
}
