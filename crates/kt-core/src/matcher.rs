//! Configuration matcher
//!
//! A reducer over one [`Selection`]. Every shopper input is an [`Action`];
//! applying it yields a [`Transition`] describing the new snapshot, the
//! variant that became addressable (if any), and the validation errors the
//! caller should clear. Candidates are recomputed from the selection on
//! demand and never stored.
//!
//! Setting a facet runs two passes:
//!
//! 1. Retention: every other facet the shopper chose is re-checked in
//!    dependency order (metal, purity, tone, size). It survives only if some
//!    option agrees with the new value, the facets kept so far, and its own
//!    value. Autofilled facets are then re-checked the same way.
//! 2. Autofill: choosing a metal, purity, or tone fills whichever of the other
//!    two the shopper has not chosen, from one option picked by the
//!    configured [`AutofillPolicy`]. A choice cleared by retention stays
//!    cleared.
//!
//! Re-applying the value a facet already holds changes nothing.

use crate::candidates::{CandidateSet, OptionIndex, OptionRow};
use crate::config::{AutofillPolicy, Config};
use crate::configuration::{ConfigurationOption, DEFAULT_SIZE_UNIT};
use crate::facet::{Facet, FacetValue};
use crate::ids::{MetalId, PurityId, ToneId, VariantId};
use crate::selection::{Selection, SelectionSnapshot};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::sync::Arc;

static EMPTY_SELECTION: Selection = Selection {
    metal_id: None,
    purity_id: None,
    tone_id: None,
    size: None,
};

static NOTHING_CHOSEN: FacetSet = BTreeSet::new();

/// Shopper input understood by the matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Seed the selection from the option of a default variant
    Init { default_variant: Option<VariantId> },
    SetMetal(Option<MetalId>),
    SetPurity(Option<PurityId>),
    SetTone(Option<ToneId>),
    /// Set the normalized size
    SetSize(Option<String>),
}

impl From<FacetValue> for Action {
    fn from(value: FacetValue) -> Self {
        match value {
            FacetValue::Metal(v) => Action::SetMetal(v),
            FacetValue::Purity(v) => Action::SetPurity(v),
            FacetValue::Tone(v) => Action::SetTone(v),
            FacetValue::Size(v) => Action::SetSize(v),
        }
    }
}

impl Action {
    fn into_facet_value(self) -> Option<FacetValue> {
        match self {
            Action::Init { .. } => None,
            Action::SetMetal(v) => Some(FacetValue::Metal(v)),
            Action::SetPurity(v) => Some(FacetValue::Purity(v)),
            Action::SetTone(v) => Some(FacetValue::Tone(v)),
            Action::SetSize(v) => Some(FacetValue::Size(v)),
        }
    }
}

/// Facets in dependency order.
pub type FacetSet = BTreeSet<Facet>;

/// Lifecycle of a matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatcherState {
    /// No default seeded and no shopper input yet
    Uninitialized,
    /// Seeded or edited; later `Init` actions are ignored
    Initialized {
        selection: Selection,
        /// Facets picked by the shopper or seeded from the default variant.
        /// Set facets outside this set were autofilled.
        chosen: FacetSet,
    },
}

/// Outcome of applying one action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transition {
    /// Selection state after the action
    pub snapshot: SelectionSnapshot,

    /// Whether the selection differs from before the action
    pub changed: bool,

    /// Variant addressed by a selection that just became complete
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_variant: Option<VariantId>,

    /// Facets whose caller-owned validation errors should be cleared
    pub fields_to_clear: Vec<Facet>,
}

/// Faceted selector over a fixed list of configuration options.
#[derive(Debug, Clone)]
pub struct ConfigurationMatcher {
    options: Arc<[ConfigurationOption]>,
    index: OptionIndex,
    policy: AutofillPolicy,
    state: MatcherState,
}

impl ConfigurationMatcher {
    /// Create a matcher using the size unit and autofill policy from `config`.
    pub fn new(options: impl Into<Arc<[ConfigurationOption]>>, config: &Config) -> Self {
        Self::with_policy(options, config.autofill, &config.default_size_unit)
    }

    pub fn with_policy(
        options: impl Into<Arc<[ConfigurationOption]>>,
        policy: AutofillPolicy,
        default_size_unit: &str,
    ) -> Self {
        let options = options.into();
        let index = OptionIndex::build(&options, default_size_unit);
        log::debug!(
            "Matcher over {} options (size {}, autofill {})",
            options.len(),
            if index.size_active() { "active" } else { "inactive" },
            policy
        );
        Self {
            options,
            index,
            policy,
            state: MatcherState::Uninitialized,
        }
    }

    /// Matcher with the default policy and size unit.
    pub fn from_options(options: impl Into<Arc<[ConfigurationOption]>>) -> Self {
        Self::with_policy(options, AutofillPolicy::default(), DEFAULT_SIZE_UNIT)
    }

    pub fn options(&self) -> &[ConfigurationOption] {
        &self.options
    }

    pub fn state(&self) -> &MatcherState {
        &self.state
    }

    pub fn is_initialized(&self) -> bool {
        matches!(self.state, MatcherState::Initialized { .. })
    }

    /// Current selection; empty until initialized.
    pub fn selection(&self) -> &Selection {
        match &self.state {
            MatcherState::Uninitialized => &EMPTY_SELECTION,
            MatcherState::Initialized { selection, .. } => selection,
        }
    }

    /// Facets the shopper picked (or the default variant seeded).
    pub fn chosen(&self) -> &FacetSet {
        match &self.state {
            MatcherState::Uninitialized => &NOTHING_CHOSEN,
            MatcherState::Initialized { chosen, .. } => chosen,
        }
    }

    /// Whether `facet` holds a value the matcher filled in on its own.
    pub fn is_autofilled(&self, facet: Facet) -> bool {
        self.selection().is_set(facet) && !self.chosen().contains(&facet)
    }

    /// Whether any option carries size information
    pub fn has_size(&self) -> bool {
        self.index.size_active()
    }

    pub fn snapshot(&self) -> SelectionSnapshot {
        self.selection().snapshot(self.index.size_active())
    }

    /// Candidate values for every facet under the current selection.
    pub fn candidates(&self) -> CandidateSet {
        CandidateSet::compute(&self.index, self.selection())
    }

    /// The option addressed by the current selection, if it is complete.
    pub fn resolved_option(&self) -> Option<&ConfigurationOption> {
        self.resolve_row(self.selection())
            .map(|row| &self.options[row.position])
    }

    /// Apply one action and report what changed.
    pub fn apply(&mut self, action: impl Into<Action>) -> Transition {
        let before = self.selection().clone();

        let next = match action.into() {
            Action::Init { default_variant } => self.reduce_init(default_variant.as_ref()),
            action => action.into_facet_value().map(|value| self.reduce_set(value)),
        };
        if let Some((selection, chosen)) = next {
            self.state = MatcherState::Initialized { selection, chosen };
        }

        let after = self.selection();
        let changed = *after != before;
        let size_active = self.index.size_active();

        let mut fields_to_clear: Vec<Facet> = Facet::active(size_active)
            .into_iter()
            .filter(|f| after.value(*f).is_some() && after.value(*f) != before.value(*f))
            .collect();

        let mut resolved_variant = None;
        if changed {
            if let Some(row) = self.resolve_row(after) {
                log::debug!("Selection resolved to variant {}", row.variant_id);
                resolved_variant = Some(row.variant_id.clone());
                fields_to_clear = Facet::active(size_active);
            }
        }

        Transition {
            snapshot: after.snapshot(size_active),
            changed,
            resolved_variant,
            fields_to_clear,
        }
    }

    /// Seed from the default variant's option. Runs once per matcher.
    fn reduce_init(&self, default_variant: Option<&VariantId>) -> Option<(Selection, FacetSet)> {
        if self.is_initialized() {
            log::debug!("Ignoring init: matcher already initialized");
            return None;
        }

        let Some(variant) = default_variant else {
            log::debug!("Init without a default variant; staying uninitialized");
            return None;
        };

        let Some(row) = self
            .index
            .rows()
            .iter()
            .find(|row| row.variant_id == *variant && row.metal_id.is_some())
        else {
            log::debug!("Default variant {} not in catalogue; staying uninitialized", variant);
            return None;
        };

        let selection = Selection {
            metal_id: row.metal_id.clone(),
            purity_id: row.purity_id.clone(),
            tone_id: row.tone_id.clone(),
            size: if self.index.size_active() {
                row.size.clone()
            } else {
                None
            },
        };
        let chosen = Facet::ALL
            .into_iter()
            .filter(|f| selection.is_set(*f))
            .collect();
        Some((selection, chosen))
    }

    fn reduce_set(&self, value: FacetValue) -> (Selection, FacetSet) {
        let before = self.selection();
        let mut next = before.clone();
        let mut chosen = self.chosen().clone();
        let facet = value.facet();

        if facet == Facet::Size && !self.index.size_active() {
            log::debug!("Ignoring size selection: catalogue has no sizes");
            return (next, chosen);
        }

        next.set(value);
        if !next.is_set(facet) {
            chosen.remove(&facet);
            return (next, chosen);
        }
        chosen.insert(facet);
        if next == *before {
            return (next, chosen);
        }

        // Shopper choices are re-validated first, so an autofilled value can
        // never knock out an explicit choice.
        let mut kept = vec![facet];
        let chosen_others: Vec<Facet> = self
            .index
            .filter_facets(Some(facet))
            .into_iter()
            .filter(|f| chosen.contains(f))
            .collect();
        let dropped = self.retain_in_order(&mut next, &mut kept, &chosen_others, facet);
        for f in &dropped {
            chosen.remove(f);
        }

        let autofilled: Vec<Facet> = self
            .index
            .filter_facets(Some(facet))
            .into_iter()
            .filter(|f| !chosen.contains(f))
            .collect();
        self.retain_in_order(&mut next, &mut kept, &autofilled, facet);

        if facet.is_metal_facet() {
            self.autofill(&mut next, &chosen, facet, &dropped);
        }
        (next, chosen)
    }

    /// Keep each set facet of `facets` only if some option agrees with it and
    /// with every facet in `kept`. Returns the facets cleared.
    fn retain_in_order(
        &self,
        selection: &mut Selection,
        kept: &mut Vec<Facet>,
        facets: &[Facet],
        changed: Facet,
    ) -> Vec<Facet> {
        let mut dropped = Vec::new();
        for &facet in facets {
            if !selection.is_set(facet) {
                continue;
            }
            kept.push(facet);
            let compatible = self
                .index
                .rows()
                .iter()
                .any(|row| row.metal_id.is_some() && row.matches_facets(selection, kept));
            if !compatible {
                log::debug!(
                    "Clearing {} '{}': incompatible with {} '{}'",
                    facet,
                    selection.value(facet).unwrap_or_default(),
                    changed,
                    selection.value(changed).unwrap_or_default()
                );
                kept.pop();
                selection.clear(facet);
                dropped.push(facet);
            }
        }
        dropped
    }

    /// Fill unset metal facets the shopper has not chosen.
    ///
    /// Facets whose choice was just invalidated stay empty.
    fn autofill(&self, selection: &mut Selection, chosen: &FacetSet, changed: Facet, dropped: &[Facet]) {
        if self.policy == AutofillPolicy::Disabled {
            return;
        }

        let targets: Vec<Facet> = [Facet::Metal, Facet::Purity, Facet::Tone]
            .into_iter()
            .filter(|f| {
                *f != changed
                    && !chosen.contains(f)
                    && !dropped.contains(f)
                    && !selection.is_set(*f)
            })
            .collect();
        if targets.is_empty() {
            return;
        }

        let Some(row) = self.pick(self.index.matching(selection, None)) else {
            return;
        };
        log::debug!(
            "Autofilling {:?} from variant {}",
            targets.iter().map(|f| f.as_str()).collect::<Vec<_>>(),
            row.variant_id
        );
        for facet in targets {
            if let Some(value) = row.value(facet) {
                selection.set(FacetValue::new(facet, value));
            }
        }
    }

    /// The option row addressed by `selection` once every active facet is set.
    fn resolve_row(&self, selection: &Selection) -> Option<&OptionRow> {
        if !selection.is_complete(self.index.size_active()) {
            return None;
        }
        self.pick(self.index.matching(selection, None))
    }

    /// Choose one row among matches according to the autofill policy.
    fn pick<'a>(&self, rows: Vec<&'a OptionRow>) -> Option<&'a OptionRow> {
        let mut rows = rows.into_iter();
        match self.policy {
            AutofillPolicy::LowestVariant => rows.min_by(|a, b| {
                variant_order(&a.variant_id, &b.variant_id).then(a.position.cmp(&b.position))
            }),
            AutofillPolicy::FirstListed | AutofillPolicy::Disabled => rows.next(),
        }
    }
}

/// Numeric ids compare as numbers (`9` before `10`); anything else compares
/// as text.
fn variant_order(a: &VariantId, b: &VariantId) -> Ordering {
    match (a.as_str().parse::<u64>(), b.as_str().parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        _ => a.cmp(b),
    }
}

#[cfg(test)]
#[path = "matcher_test.rs"]
mod tests;
