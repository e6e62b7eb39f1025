use anyhow::{Context, Result};
use std::path::PathBuf;

use steplog_application::render::mail;
use steplog_application::{HtmlRenderer, ItineraryRenderer, TripAggregator};
use steplog_core::RunConfig;
use steplog_core::media::megabytes;
use steplog_infrastructure::{
    ExportPaths, FsMediaDiscoverer, JsonExportReader, OutputPaths, OutputWriter,
};

/// What one run produced.
#[derive(Debug, Default)]
pub struct ConvertReport {
    pub itinerary: PathBuf,
    pub steps: usize,
    pub skipped: usize,
    pub photos: usize,
    pub videos: usize,
    pub media_mb: f64,
    /// First and last step date, `YYYY-MM-DD..YYYY-MM-DD`.
    pub dates: Option<String>,
    pub pages: usize,
    pub media_copied: usize,
    pub drafts: usize,
}

/// Reads the export, builds the trip model once and writes every requested
/// output into the output directory.
pub fn run(config: &RunConfig) -> Result<ConvertReport> {
    let export = ExportPaths::new(&config.data_dir);
    let reader = JsonExportReader::new(export.clone());

    let document = reader
        .read_trip()
        .context("Failed to read the trip document")?;
    let locations = reader
        .read_locations()
        .context("Failed to read the location track")?;

    let model = TripAggregator::new(FsMediaDiscoverer::new())
        .aggregate(
            &document,
            locations.as_ref(),
            export.root(),
            config.malformed_steps,
        )
        .context("Failed to normalize the trip steps")?;
    for skipped in &model.skipped {
        tracing::warn!(
            "[Convert] Step #{} (id {}) left out: {}",
            skipped.index,
            skipped.step_id,
            skipped.reason
        );
    }

    let writer = OutputWriter::new(OutputPaths::new(&config.output_dir));
    writer.prepare()?;
    let paths = writer.paths();

    let summary = model.summary();
    let mut report = ConvertReport {
        itinerary: paths.itinerary_file(&model.trip.file_stem()),
        steps: summary.step_count,
        skipped: model.skipped.len(),
        photos: summary.photo_count,
        videos: summary.video_count,
        media_mb: megabytes(summary.media_bytes),
        dates: summary
            .date_span
            .map(|(first, last)| format!("{first}..{last}")),
        ..ConvertReport::default()
    };

    let itinerary = ItineraryRenderer::new()?.render(&model, config.verbose)?;
    writer
        .write_text(&report.itinerary, &itinerary)
        .context("Failed to write the itinerary")?;
    tracing::info!("[Convert] Itinerary written to {:?}", report.itinerary);

    if config.render_html {
        let site = HtmlRenderer::new()?.render(&model, config.exclude_endpoints)?;
        writer.write_text(&paths.index_file(), &site.index)?;
        writer.write_text(&paths.stylesheet_file(), site.stylesheet)?;
        for page in &site.pages {
            writer.write_text(&paths.root().join(&page.file_name), &page.html)?;
        }
        for step in &model.steps {
            report.media_copied += writer
                .copy_step_media(&export, step)
                .with_context(|| format!("Failed to copy media of step {}", step.id))?;
        }
        report.pages = site.pages.len();
    }

    if let Some(settings) = &config.mail {
        let drafts = mail::drafts(&model, export.root(), settings);
        writer
            .write_json(&paths.outbox_file(), &drafts)
            .context("Failed to write the mail drafts")?;
        report.drafts = drafts.len();
    }

    Ok(report)
}
