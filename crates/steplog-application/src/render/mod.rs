//! Renderers consuming the canonical trip model.

pub mod html;
pub mod itinerary;
pub mod mail;
pub mod view;

pub use html::{HtmlPage, HtmlRenderer, HtmlSite};
pub use itinerary::ItineraryRenderer;
pub use mail::{MailAttachment, MailDraft};

use minijinja::Environment;
use serde::Serialize;

use steplog_core::{Result, StepLogError};

/// Template environment with the line handling every template relies on:
/// block tags swallow their own line and files keep their final newline.
fn template_env() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_keep_trailing_newline(true);
    env
}

fn render_error(e: minijinja::Error) -> StepLogError {
    StepLogError::render(e.to_string())
}

/// JSON for embedding inside a `<script>` element.
fn script_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

#[cfg(test)]
pub(crate) mod test_support;
