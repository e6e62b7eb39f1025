//! Plain-text itinerary, `<trip name>_<start date>.txt`.

use minijinja::{Environment, context};

use steplog_core::{Result, TripModel};

use super::view::{StepView, TripView};
use super::{render_error, template_env};

const TEMPLATE_NAME: &str = "itinerary.txt";
const RULE: &str = "--------------------------------------------------------------------------------";

pub struct ItineraryRenderer {
    env: Environment<'static>,
}

impl ItineraryRenderer {
    pub fn new() -> Result<Self> {
        let mut env = template_env();
        env.add_template(TEMPLATE_NAME, include_str!("../templates/itinerary.txt.j2"))
            .map_err(render_error)?;
        Ok(Self { env })
    }

    /// Renders the itinerary. `verbose` adds ids, coordinates, the time zone
    /// and a per-file media listing.
    pub fn render(&self, model: &TripModel, verbose: bool) -> Result<String> {
        let template = self.env.get_template(TEMPLATE_NAME).map_err(render_error)?;
        template
            .render(context! {
                trip => TripView::new(model),
                steps => StepView::all(model),
                verbose => verbose,
                rule => RULE,
            })
            .map_err(render_error)
    }
}
