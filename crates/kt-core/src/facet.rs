//! Facets: the independently selectable product attributes.

use crate::error::{CoreError, CoreResult};
use crate::ids::{MetalId, PurityId, ToneId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One selectable product attribute.
///
/// Variants are declared in dependency order, so `Ord` follows
/// metal → purity → tone → size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facet {
    Metal,
    Purity,
    Tone,
    Size,
}

impl Facet {
    /// All facets in dependency order.
    pub const ALL: [Facet; 4] = [Facet::Metal, Facet::Purity, Facet::Tone, Facet::Size];

    /// Facets that are active for a catalogue, in dependency order.
    pub fn active(size_active: bool) -> Vec<Facet> {
        Self::ALL
            .into_iter()
            .filter(|f| size_active || *f != Facet::Size)
            .collect()
    }

    /// Whether this facet takes part in autofill.
    pub fn is_metal_facet(self) -> bool {
        !matches!(self, Facet::Size)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Facet::Metal => "metal",
            Facet::Purity => "purity",
            Facet::Tone => "tone",
            Facet::Size => "size",
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Facet {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "metal" => Ok(Facet::Metal),
            "purity" => Ok(Facet::Purity),
            "tone" => Ok(Facet::Tone),
            "size" => Ok(Facet::Size),
            other => Err(CoreError::InvalidFacetValue {
                input: s.to_string(),
                reason: format!(
                    "unknown facet '{}', expected one of metal, purity, tone, size",
                    other
                ),
            }),
        }
    }
}

/// A typed choice for one facet. `None` clears the facet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FacetValue {
    Metal(Option<MetalId>),
    Purity(Option<PurityId>),
    Tone(Option<ToneId>),
    Size(Option<String>),
}

impl FacetValue {
    /// The facet this value targets
    pub fn facet(&self) -> Facet {
        match self {
            FacetValue::Metal(_) => Facet::Metal,
            FacetValue::Purity(_) => Facet::Purity,
            FacetValue::Tone(_) => Facet::Tone,
            FacetValue::Size(_) => Facet::Size,
        }
    }

    /// Whether the value sets the facet (as opposed to clearing it)
    pub fn is_set(&self) -> bool {
        match self {
            FacetValue::Metal(v) => v.is_some(),
            FacetValue::Purity(v) => v.is_some(),
            FacetValue::Tone(v) => v.is_some(),
            FacetValue::Size(v) => v.is_some(),
        }
    }

    /// Parse a `facet=value` expression. An empty value clears the facet.
    pub fn parse(input: &str) -> CoreResult<Self> {
        let (facet, value) = input
            .split_once('=')
            .ok_or_else(|| CoreError::InvalidFacetValue {
                input: input.to_string(),
                reason: "expected 'facet=value'".to_string(),
            })?;
        let facet: Facet = facet.parse().map_err(|_| CoreError::InvalidFacetValue {
            input: input.to_string(),
            reason: format!("unknown facet '{}'", facet.trim()),
        })?;
        Ok(Self::new(facet, value))
    }

    /// Build a value for `facet` from raw text. Blank text clears the facet.
    pub fn new(facet: Facet, value: &str) -> Self {
        match facet {
            Facet::Metal => FacetValue::Metal(MetalId::try_new(value)),
            Facet::Purity => FacetValue::Purity(PurityId::try_new(value)),
            Facet::Tone => FacetValue::Tone(ToneId::try_new(value)),
            Facet::Size => {
                let value = value.trim();
                FacetValue::Size((!value.is_empty()).then(|| value.to_string()))
            }
        }
    }
}

impl FromStr for FacetValue {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        FacetValue::parse(s)
    }
}

impl fmt::Display for FacetValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            FacetValue::Metal(v) => v.as_ref().map(|v| v.as_str()),
            FacetValue::Purity(v) => v.as_ref().map(|v| v.as_str()),
            FacetValue::Tone(v) => v.as_ref().map(|v| v.as_str()),
            FacetValue::Size(v) => v.as_deref(),
        };
        write!(f, "{}={}", self.facet(), value.unwrap_or(""))
    }
}

#[cfg(test)]
#[path = "facet_test.rs"]
mod tests;
