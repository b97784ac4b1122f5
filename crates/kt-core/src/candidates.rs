//! Candidate selectors
//!
//! Candidates are pure functions of the option list and the current
//! selection. For each facet they answer: which values can still lead to some
//! configuration option, given the other facets that are currently chosen?
//!
//! - metal: every metal in the catalogue, never filtered
//! - purity: filtered by metal, tone, and size
//! - tone: filtered by metal, purity, and size
//! - size: filtered by metal, purity, and tone (only when size is active)
//!
//! Unset facets act as wildcards. Values are listed in first-appearance order.

use crate::configuration::ConfigurationOption;
use crate::facet::Facet;
use crate::ids::{MetalId, PurityId, ToneId, VariantId};
use crate::selection::Selection;
use serde::Serialize;

/// The facet values of one option, flattened for matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionRow {
    /// Position of the option in the catalogue
    pub position: usize,
    pub variant_id: VariantId,
    pub metal_id: Option<MetalId>,
    pub purity_id: Option<PurityId>,
    pub tone_id: Option<ToneId>,
    /// Normalized size; `None` when the option has no size
    pub size: Option<String>,
}

impl OptionRow {
    fn from_option(position: usize, option: &ConfigurationOption, default_unit: &str) -> Self {
        let metal = option.primary_metal();
        let size = option.normalized_size(default_unit);
        Self {
            position,
            variant_id: option.variant_id.clone(),
            metal_id: metal.map(|m| m.metal_id.clone()),
            purity_id: metal.and_then(|m| m.purity_id.clone()),
            tone_id: metal.and_then(|m| m.tone_id.clone()),
            size: (!size.is_empty()).then_some(size),
        }
    }

    pub fn value(&self, facet: Facet) -> Option<&str> {
        match facet {
            Facet::Metal => self.metal_id.as_ref().map(|v| v.as_str()),
            Facet::Purity => self.purity_id.as_ref().map(|v| v.as_str()),
            Facet::Tone => self.tone_id.as_ref().map(|v| v.as_str()),
            Facet::Size => self.size.as_deref(),
        }
    }

    /// Whether this row agrees with every set facet in `facets`.
    pub fn matches_facets(&self, selection: &Selection, facets: &[Facet]) -> bool {
        facets.iter().all(|facet| match selection.value(*facet) {
            Some(chosen) => self.value(*facet) == Some(chosen),
            None => true,
        })
    }
}

/// Flattened, read-only view over a catalogue's options.
#[derive(Debug, Clone)]
pub struct OptionIndex {
    rows: Vec<OptionRow>,
    size_active: bool,
}

impl OptionIndex {
    /// Flatten `options`, normalizing sizes with `default_unit`.
    pub fn build(options: &[ConfigurationOption], default_unit: &str) -> Self {
        let size_active = options.iter().any(ConfigurationOption::carries_size);
        let rows = options
            .iter()
            .enumerate()
            .map(|(i, opt)| OptionRow::from_option(i, opt, default_unit))
            .collect();
        Self { rows, size_active }
    }

    pub fn rows(&self) -> &[OptionRow] {
        &self.rows
    }

    /// Whether any option carries size information.
    pub fn size_active(&self) -> bool {
        self.size_active
    }

    /// Active facets other than `except`, in dependency order.
    pub fn filter_facets(&self, except: Option<Facet>) -> Vec<Facet> {
        Facet::active(self.size_active)
            .into_iter()
            .filter(|f| Some(*f) != except)
            .collect()
    }

    /// Rows agreeing with every set facet of `selection` except `except`.
    ///
    /// Rows without a metal never match.
    pub fn matching(&self, selection: &Selection, except: Option<Facet>) -> Vec<&OptionRow> {
        let facets = self.filter_facets(except);
        self.rows
            .iter()
            .filter(|row| row.metal_id.is_some() && row.matches_facets(selection, &facets))
            .collect()
    }

    /// Distinct values of `facet` that remain reachable under `selection`.
    ///
    /// Metal is the top-level facet and is never filtered. Size yields no
    /// values when the size facet is inactive.
    pub fn candidate_values(&self, selection: &Selection, facet: Facet) -> Vec<String> {
        if facet == Facet::Size && !self.size_active {
            return Vec::new();
        }

        let rows: Vec<&OptionRow> = if facet == Facet::Metal {
            self.rows.iter().collect()
        } else {
            self.matching(selection, Some(facet))
        };

        let mut values: Vec<String> = Vec::new();
        for value in rows.into_iter().filter_map(|row| row.value(facet)) {
            if !values.iter().any(|v| v == value) {
                values.push(value.to_string());
            }
        }
        values
    }
}

/// Candidate values for every facet.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CandidateSet {
    pub metals: Vec<MetalId>,
    pub purities: Vec<PurityId>,
    pub tones: Vec<ToneId>,
    /// `None` when no option carries size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizes: Option<Vec<String>>,
}

impl CandidateSet {
    pub fn compute(index: &OptionIndex, selection: &Selection) -> Self {
        Self {
            metals: metals(index),
            purities: purities(index, selection),
            tones: tones(index, selection),
            sizes: sizes(index, selection),
        }
    }

    /// Candidate values of one facet as strings.
    pub fn values(&self, facet: Facet) -> Vec<&str> {
        match facet {
            Facet::Metal => self.metals.iter().map(|v| v.as_str()).collect(),
            Facet::Purity => self.purities.iter().map(|v| v.as_str()).collect(),
            Facet::Tone => self.tones.iter().map(|v| v.as_str()).collect(),
            Facet::Size => self
                .sizes
                .iter()
                .flatten()
                .map(|v| v.as_str())
                .collect(),
        }
    }
}

/// Every metal in the catalogue.
pub fn metals(index: &OptionIndex) -> Vec<MetalId> {
    index
        .candidate_values(&Selection::default(), Facet::Metal)
        .into_iter()
        .map(MetalId::new)
        .collect()
}

pub fn purities(index: &OptionIndex, selection: &Selection) -> Vec<PurityId> {
    index
        .candidate_values(selection, Facet::Purity)
        .into_iter()
        .map(PurityId::new)
        .collect()
}

pub fn tones(index: &OptionIndex, selection: &Selection) -> Vec<ToneId> {
    index
        .candidate_values(selection, Facet::Tone)
        .into_iter()
        .map(ToneId::new)
        .collect()
}

/// Normalized sizes, or `None` when the size facet is inactive.
pub fn sizes(index: &OptionIndex, selection: &Selection) -> Option<Vec<String>> {
    index
        .size_active()
        .then(|| index.candidate_values(selection, Facet::Size))
}

#[cfg(test)]
#[path = "candidates_test.rs"]
mod tests;
