//! Configuration options: one purchasable combination of facet values.
//!
//! An option maps a metal/purity/tone (and optionally size) combination to a
//! sellable variant together with its price breakdown. Prices are carried
//! through for display; matching never reads them.

use crate::ids::{MetalId, PurityId, SizeId, ToneId, VariantId};
use crate::serde_helpers::{deserialize_opt_label, scalar_to_string};
use serde::{Deserialize, Serialize};

/// Unit appended to `metadata.size_value` when the option does not name one.
pub const DEFAULT_SIZE_UNIT: &str = "cm";

/// Absolute difference above which a total and its breakup disagree.
const PRICE_TOLERANCE: f64 = 0.01;

/// One purchasable combination of facet values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationOption {
    /// The sellable unit this combination maps to
    #[serde(alias = "variant_id")]
    pub variant_id: VariantId,

    /// Metal facets; normally exactly one entry
    #[serde(default)]
    pub metals: Vec<MetalFacet>,

    /// Total price of the variant
    #[serde(default, alias = "price_total")]
    pub price_total: f64,

    /// Price components
    #[serde(default, alias = "price_breakup")]
    pub price_breakup: PriceBreakup,

    /// Structured size, present only for products that vary by size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<SizeInfo>,

    /// Free-form bag; may carry `size_value` / `size_unit`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
}

/// One metal facet of a configuration option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetalFacet {
    #[serde(alias = "metal_id")]
    pub metal_id: MetalId,

    #[serde(default, alias = "purity_id", skip_serializing_if = "Option::is_none")]
    pub purity_id: Option<PurityId>,

    #[serde(default, alias = "tone_id", skip_serializing_if = "Option::is_none")]
    pub tone_id: Option<ToneId>,
}

/// Price components of a variant.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PriceBreakup {
    #[serde(default)]
    pub base: f64,
    #[serde(default)]
    pub metal: f64,
    #[serde(default)]
    pub diamond: f64,
    #[serde(default)]
    pub making: f64,
}

impl PriceBreakup {
    /// Sum of all price components
    pub fn component_sum(&self) -> f64 {
        self.base + self.metal + self.diamond + self.making
    }

    /// True when every component is zero (breakup not provided)
    pub fn is_empty(&self) -> bool {
        self.component_sum() == 0.0
    }
}

/// Structured size of an option.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SizeInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<SizeId>,

    #[serde(
        default,
        deserialize_with = "deserialize_opt_label",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,

    #[serde(
        default,
        deserialize_with = "deserialize_opt_label",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<String>,
}

impl ConfigurationOption {
    /// Create an option with a single metal facet and no size or prices.
    pub fn new(
        variant_id: VariantId,
        metal_id: MetalId,
        purity_id: Option<PurityId>,
        tone_id: Option<ToneId>,
    ) -> Self {
        Self {
            variant_id,
            metals: vec![MetalFacet {
                metal_id,
                purity_id,
                tone_id,
            }],
            price_total: 0.0,
            price_breakup: PriceBreakup::default(),
            size: None,
            metadata: None,
        }
    }

    /// Attach a structured size whose value is `value`.
    pub fn with_size(mut self, value: impl Into<String>) -> Self {
        self.size = Some(SizeInfo {
            id: None,
            name: None,
            value: Some(value.into()),
        });
        self
    }

    /// The metal facet matching is performed against.
    pub fn primary_metal(&self) -> Option<&MetalFacet> {
        self.metals.first()
    }

    /// Whether this option carries size information in either encoding.
    pub fn carries_size(&self) -> bool {
        self.size.is_some() || self.metadata_size_value().is_some()
    }

    fn metadata_size_value(&self) -> Option<String> {
        self.metadata
            .as_ref()
            .and_then(|m| m.get("size_value"))
            .and_then(scalar_to_string)
    }

    /// The size as compared by the matcher.
    ///
    /// Prefers `size.value`, then `size.name`, then `metadata.size_value`
    /// suffixed with `metadata.size_unit` (or `default_unit`). Returns an
    /// empty string when the option has no size.
    pub fn normalized_size(&self, default_unit: &str) -> String {
        if let Some(size) = &self.size {
            if let Some(value) = &size.value {
                return value.clone();
            }
            if let Some(name) = &size.name {
                return name.clone();
            }
        }

        match self.metadata_size_value() {
            Some(value) => {
                let unit = self
                    .metadata
                    .as_ref()
                    .and_then(|m| m.get("size_unit"))
                    .and_then(scalar_to_string)
                    .unwrap_or_else(|| default_unit.to_string());
                format!("{value}{unit}")
            }
            None => String::new(),
        }
    }

    /// Difference between `price_total` and the breakup sum, if they disagree.
    ///
    /// Options without a breakup never report a mismatch.
    pub fn price_mismatch(&self) -> Option<f64> {
        if self.price_breakup.is_empty() {
            return None;
        }
        let diff = self.price_total - self.price_breakup.component_sum();
        (diff.abs() > PRICE_TOLERANCE).then_some(diff)
    }
}

#[cfg(test)]
#[path = "configuration_test.rs"]
mod tests;
