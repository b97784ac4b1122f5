//! Strongly-typed catalogue identifiers.
//!
//! Keeps metal ids from being compared against purity ids, tone ids, or
//! variant ids by accident.

use crate::newtype_string::define_id;

define_id! {
    /// Identifier of a metal (gold, platinum, silver, ...).
    pub struct MetalId;
}

define_id! {
    /// Identifier of a purity grade (14K, 18K, 950, ...).
    pub struct PurityId;
}

define_id! {
    /// Identifier of a metal tone (yellow, white, rose, ...).
    pub struct ToneId;
}

define_id! {
    /// Identifier of a sellable variant.
    pub struct VariantId;
}

define_id! {
    /// Identifier of a catalogue size entry.
    pub struct SizeId;
}

#[cfg(test)]
#[path = "ids_test.rs"]
mod tests;
