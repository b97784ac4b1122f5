//! Caller-owned validation errors.
//!
//! The storefront form owns these messages ("metal is required", ...). The
//! matcher never creates them; it only reports which ones a transition makes
//! obsolete.

use crate::facet::Facet;
use crate::matcher::Transition;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    errors: BTreeMap<Facet, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, facet: Facet, message: impl Into<String>) {
        self.errors.insert(facet, message.into());
    }

    pub fn get(&self, facet: Facet) -> Option<&str> {
        self.errors.get(&facet).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Clear the errors a transition made obsolete. Returns the facets cleared.
    pub fn apply(&mut self, transition: &Transition) -> Vec<Facet> {
        transition
            .fields_to_clear
            .iter()
            .filter(|facet| self.errors.remove(*facet).is_some())
            .copied()
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Facet, &str)> {
        self.errors.iter().map(|(f, m)| (*f, m.as_str()))
    }
}
