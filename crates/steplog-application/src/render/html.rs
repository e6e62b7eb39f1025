//! Local HTML site: `index.html`, one page per step and `local.css`.
//!
//! Media links point at `<slug>_<id>/photos|videos/<file>` relative to the
//! output directory; copying the files there is the caller's job.

use minijinja::{Environment, context};
use serde::Serialize;

use steplog_core::{Result, TripModel};

use super::view::{StepView, TripView};
use super::{render_error, script_json, template_env};

const INDEX_TEMPLATE: &str = "index.html";
const STEP_TEMPLATE: &str = "step.html";

/// Stylesheet shared by every page.
pub const STYLESHEET: &str = include_str!("../templates/local.css");

/// One rendered step page.
#[derive(Debug, Clone, PartialEq)]
pub struct HtmlPage {
    /// File name inside the output directory, `<slug>_<id>.html`.
    pub file_name: String,
    pub html: String,
}

/// Every file of the HTML site, ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct HtmlSite {
    pub index: String,
    pub pages: Vec<HtmlPage>,
    pub stylesheet: &'static str,
}

/// Marker of a step on the whole-trip map.
#[derive(Debug, Serialize)]
struct StepMarker<'a> {
    lat: f64,
    lon: f64,
    name: &'a str,
    date: &'a str,
    page: &'a str,
}

pub struct HtmlRenderer {
    env: Environment<'static>,
}

impl HtmlRenderer {
    pub fn new() -> Result<Self> {
        let mut env = template_env();
        env.add_template(INDEX_TEMPLATE, include_str!("../templates/index.html.j2"))
            .map_err(render_error)?;
        env.add_template(STEP_TEMPLATE, include_str!("../templates/step.html.j2"))
            .map_err(render_error)?;
        Ok(Self { env })
    }

    /// Renders the site. With `exclude_endpoints` the first and last step are
    /// left off the whole-trip map; their pages are still generated.
    pub fn render(&self, model: &TripModel, exclude_endpoints: bool) -> Result<HtmlSite> {
        let steps = StepView::all(model);

        let last = steps.len().saturating_sub(1);
        let markers: Vec<StepMarker<'_>> = steps
            .iter()
            .enumerate()
            .filter(|(position, _)| !exclude_endpoints || (*position != 0 && *position != last))
            .map(|(_, step)| StepMarker {
                lat: step.lat,
                lon: step.lon,
                name: &step.name,
                date: &step.date,
                page: &step.page,
            })
            .collect();
        if exclude_endpoints {
            tracing::debug!(
                "[Html] Trip map shows {} of {} steps",
                markers.len(),
                steps.len()
            );
        }
        let route: Vec<[f64; 2]> = model.route.iter().map(|p| p.lat_lon()).collect();

        let index = self
            .env
            .get_template(INDEX_TEMPLATE)
            .map_err(render_error)?
            .render(context! {
                trip => TripView::new(model),
                steps => &steps,
                step_coords => script_json(&markers)?,
                route_coords => script_json(&route)?,
            })
            .map_err(render_error)?;

        let step_template = self.env.get_template(STEP_TEMPLATE).map_err(render_error)?;
        let pages = steps
            .iter()
            .map(|step| {
                let html = step_template
                    .render(context! {
                        step => step,
                        trip_name => &model.trip.name,
                        position => script_json(&[step.lat, step.lon])?,
                    })
                    .map_err(render_error)?;
                Ok(HtmlPage {
                    file_name: step.page.clone(),
                    html,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::info!("[Html] Rendered index and {} step page(s)", pages.len());

        Ok(HtmlSite {
            index,
            pages,
            stylesheet: STYLESHEET,
        })
    }
}
