//! Mail drafts for each step and for the whole trip.
//!
//! Drafts are plain data. Nothing here talks to a mail server; the binary
//! writes them to `outbox.json` for whatever delivers them.

use std::path::{Path, PathBuf};

use serde::Serialize;

use steplog_core::{MailSettings, Step, TripModel};

/// Separator between location and weather in a step body.
const SEPARATOR: &str = "\u{1F538}";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MailAttachment {
    /// File in the export directory.
    pub source: PathBuf,
    /// Name given to the attachment, e.g. `img_100_1`.
    pub filename: String,
    pub mime_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MailDraft {
    pub subject: String,
    /// RFC 2822 date in the trip's display zone.
    pub date: String,
    pub from: String,
    pub to: String,
    pub body: String,
    pub attachments: Vec<MailAttachment>,
}

/// Draft for one step, with its photos then videos attached in discovery
/// order.
pub fn step_draft(step: &Step, media_root: &Path, mail: &MailSettings) -> MailDraft {
    let body = format!(
        "{} {} {} {} {}\n\n{}\n",
        step.country_label(),
        step.location.name,
        SEPARATOR,
        step.weather.glyph,
        step.weather.temperature_label(),
        step.description
    );

    MailDraft {
        subject: step.name.clone(),
        date: step.local_time.to_rfc2822(),
        from: mail.from.clone(),
        to: mail.to.clone(),
        body,
        attachments: step
            .media()
            .map(|asset| MailAttachment {
                source: step.media_source_path(media_root, asset),
                filename: asset.attachment_name(step.id),
                mime_type: asset.mime_type.clone(),
            })
            .collect(),
    }
}

/// Draft summarizing the whole trip.
pub fn trip_draft(model: &TripModel, mail: &MailSettings) -> MailDraft {
    let trip = &model.trip;
    let body = format!(
        "{}\n{} {}km, {} steps, {}-{}\n",
        trip.summary,
        model.countries.glyph_line(),
        trip.rounded_km(),
        model.steps.len(),
        trip.start_date_label(),
        trip.end_date_label()
    );

    MailDraft {
        subject: trip.name.clone(),
        date: trip.zone.project(trip.start).to_rfc2822(),
        from: mail.from.clone(),
        to: mail.to.clone(),
        body,
        attachments: Vec::new(),
    }
}

/// One draft per step in step order, then the trip draft.
pub fn drafts(model: &TripModel, media_root: &Path, mail: &MailSettings) -> Vec<MailDraft> {
    let mut drafts: Vec<MailDraft> = model
        .steps
        .iter()
        .map(|step| step_draft(step, media_root, mail))
        .collect();
    drafts.push(trip_draft(model, mail));
    tracing::info!("[Mail] Prepared {} draft(s) for {}", drafts.len(), mail.to);
    drafts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::test_support::sample_model;

    fn settings() -> MailSettings {
        MailSettings {
            to: "blog@example.com".to_string(),
            from: "me@example.com".to_string(),
        }
    }

    #[test]
    fn test_step_draft() {
        let model = sample_model();
        let draft = step_draft(&model.steps[0], Path::new("data"), &settings());

        assert_eq!(draft.subject, "Paris");
        assert_eq!(
            draft.body,
            "\u{1F1EB}\u{1F1F7} Île-de-France Paris \u{1F538} \u{1F506} 11°C\n\nCroissants.\n"
        );
        assert_eq!(draft.date, "Tue, 14 Nov 2023 23:13:20 +0100");
        assert!(draft.attachments.is_empty());
    }

    #[test]
    fn test_attachments_are_numbered_per_kind() {
        let model = sample_model();
        let draft = step_draft(&model.steps[1], Path::new("data"), &settings());

        let names: Vec<&str> = draft
            .attachments
            .iter()
            .map(|a| a.filename.as_str())
            .collect();
        assert_eq!(names, ["img_101_1", "img_101_2", "vid_101_1"]);
        assert_eq!(
            draft.attachments[2].source,
            Path::new("data").join("lyon_101").join("videos").join("clip.mp4")
        );
        assert_eq!(draft.attachments[2].mime_type, "video/mp4");
    }

    #[test]
    fn test_trip_draft_comes_last() {
        let model = sample_model();
        let drafts = drafts(&model, Path::new("data"), &settings());
        assert_eq!(drafts.len(), 3);

        let trip = &drafts[2];
        assert_eq!(trip.subject, "Autumn in France");
        assert_eq!(
            trip.body,
            "A short trip\n\u{1F1EB}\u{1F1F7} Unknownland 813km, 2 steps, 2023-11-14-?\n"
        );
        assert_eq!(trip.to, "blog@example.com");
    }
}
