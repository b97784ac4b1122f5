//! The shopper's current facet choices.

use crate::facet::{Facet, FacetValue};
use crate::ids::{MetalId, PurityId, ToneId};
use serde::{Deserialize, Serialize};

/// Current choice per facet. Every field is independently unset or set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selection {
    pub metal_id: Option<MetalId>,
    pub purity_id: Option<PurityId>,
    pub tone_id: Option<ToneId>,
    /// Normalized size string
    pub size: Option<String>,
}

/// State published to the caller after every mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSnapshot {
    pub metal_id: Option<MetalId>,
    pub purity_id: Option<PurityId>,
    pub tone_id: Option<ToneId>,
    pub size: Option<String>,
    pub has_size: bool,
}

impl Selection {
    /// Current value of `facet` as a string slice.
    pub fn value(&self, facet: Facet) -> Option<&str> {
        match facet {
            Facet::Metal => self.metal_id.as_ref().map(|v| v.as_str()),
            Facet::Purity => self.purity_id.as_ref().map(|v| v.as_str()),
            Facet::Tone => self.tone_id.as_ref().map(|v| v.as_str()),
            Facet::Size => self.size.as_deref(),
        }
    }

    pub fn is_set(&self, facet: Facet) -> bool {
        self.value(facet).is_some()
    }

    /// Write a facet value, returning the facet it touched.
    pub fn set(&mut self, value: FacetValue) -> Facet {
        let facet = value.facet();
        match value {
            FacetValue::Metal(v) => self.metal_id = v,
            FacetValue::Purity(v) => self.purity_id = v,
            FacetValue::Tone(v) => self.tone_id = v,
            FacetValue::Size(v) => self.size = v,
        }
        facet
    }

    pub fn clear(&mut self, facet: Facet) {
        match facet {
            Facet::Metal => self.metal_id = None,
            Facet::Purity => self.purity_id = None,
            Facet::Tone => self.tone_id = None,
            Facet::Size => self.size = None,
        }
    }

    /// True when every active facet is set.
    pub fn is_complete(&self, size_active: bool) -> bool {
        Facet::active(size_active)
            .into_iter()
            .all(|facet| self.is_set(facet))
    }

    /// Snapshot for the caller. An inactive size facet is never exposed.
    pub fn snapshot(&self, size_active: bool) -> SelectionSnapshot {
        SelectionSnapshot {
            metal_id: self.metal_id.clone(),
            purity_id: self.purity_id.clone(),
            tone_id: self.tone_id.clone(),
            size: if size_active { self.size.clone() } else { None },
            has_size: size_active,
        }
    }
}
