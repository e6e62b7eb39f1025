//! Countries visited by a trip, in first-visit order.

use serde::Serialize;

use crate::step::Step;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryVisit {
    /// Country as spelled by the export.
    pub country: String,
    /// Flag glyph, or the country itself when unmapped.
    pub glyph: String,
}

/// Ordered set of visited countries.
///
/// Order is the first appearance among steps in traversal order, never
/// alphabetical. Built once from a step list and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CountryVisits {
    visits: Vec<CountryVisit>,
}

impl CountryVisits {
    pub fn from_steps<'a>(steps: impl IntoIterator<Item = &'a Step>) -> Self {
        let mut visits: Vec<CountryVisit> = Vec::new();
        for step in steps {
            if visits.iter().any(|v| v.country == step.location.detail) {
                continue;
            }
            visits.push(CountryVisit {
                country: step.location.detail.clone(),
                glyph: step.country_glyph.clone(),
            });
        }
        Self { visits }
    }

    pub fn iter(&self) -> impl Iterator<Item = &CountryVisit> {
        self.visits.iter()
    }

    pub fn len(&self) -> usize {
        self.visits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }

    pub fn glyph_of(&self, country: &str) -> Option<&str> {
        self.visits
            .iter()
            .find(|v| v.country == country)
            .map(|v| v.glyph.as_str())
    }

    pub fn countries(&self) -> Vec<&str> {
        self.visits.iter().map(|v| v.country.as_str()).collect()
    }

    /// All glyphs separated by spaces, e.g. for a trip headline.
    pub fn glyph_line(&self) -> String {
        self.visits
            .iter()
            .map(|v| v.glyph.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
