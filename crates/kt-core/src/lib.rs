//! kt-core - Core library for Karat
//!
//! This crate provides the catalogue types, facet candidate selectors, and the
//! configuration matcher that keeps a shopper's metal/purity/tone/size choice
//! consistent with the purchasable variants of a product.

pub mod candidates;
pub mod catalog;
pub mod config;
pub mod configuration;
pub mod error;
pub mod facet;
pub mod ids;
pub mod matcher;
mod newtype_string;
pub mod script;
pub mod selection;
pub(crate) mod serde_helpers;
pub mod validation;

pub use candidates::CandidateSet;
pub use catalog::Catalog;
pub use config::{AutofillPolicy, Config};
pub use configuration::{ConfigurationOption, MetalFacet, PriceBreakup, SizeInfo};
pub use error::{CoreError, CoreResult};
pub use facet::{Facet, FacetValue};
pub use ids::{MetalId, PurityId, SizeId, ToneId, VariantId};
pub use matcher::{Action, ConfigurationMatcher, FacetSet, MatcherState, Transition};
pub use script::{Script, ScriptStep, StepReport};
pub use selection::{Selection, SelectionSnapshot};
pub use validation::ValidationErrors;
