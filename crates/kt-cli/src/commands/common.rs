//! Shared utilities for CLI commands

use anyhow::{Context, Result};
use kt_core::{CandidateSet, Facet, Script, ScriptStep, SelectionSnapshot, VariantId};
use serde::Serialize;

/// Build a script from an optional default variant and `facet=value` selections.
pub(crate) fn selection_script(
    default_variant: Option<&str>,
    selections: &[String],
) -> Result<Script> {
    let mut script =
        Script::from_selections(selections.iter().cloned()).context("Invalid --select value")?;
    if let Some(variant) = default_variant.and_then(VariantId::try_new) {
        script.steps.insert(0, ScriptStep::Init(variant));
    }
    Ok(script)
}

/// Pretty-print any serializable value as JSON on stdout.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

pub(crate) fn or_dash(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

pub(crate) fn join_or_dash(values: &[&str]) -> String {
    if values.is_empty() {
        "-".to_string()
    } else {
        values.join(", ")
    }
}

/// Snapshot value of one facet, `None` when the facet is inactive.
pub(crate) fn snapshot_value(snapshot: &SelectionSnapshot, facet: Facet) -> Option<&str> {
    match facet {
        Facet::Metal => snapshot.metal_id.as_ref().map(|v| v.as_str()),
        Facet::Purity => snapshot.purity_id.as_ref().map(|v| v.as_str()),
        Facet::Tone => snapshot.tone_id.as_ref().map(|v| v.as_str()),
        Facet::Size => snapshot.size.as_deref(),
    }
}

/// Print the selection and candidates side by side, one facet per row.
pub(crate) fn print_facet_table(snapshot: &SelectionSnapshot, candidates: &CandidateSet) {
    let facets = Facet::active(snapshot.has_size);
    let value_width = facets
        .iter()
        .map(|f| or_dash(snapshot_value(snapshot, *f)).len())
        .max()
        .unwrap_or(8)
        .max(8);

    println!(
        "{:<6}  {:<value_width$}  CANDIDATES",
        "FACET",
        "SELECTED",
        value_width = value_width
    );
    println!(
        "{:-<6}  {:-<value_width$}  {}",
        "",
        "",
        "-".repeat(40),
        value_width = value_width
    );
    for facet in facets {
        println!(
            "{:<6}  {:<value_width$}  {}",
            facet.as_str(),
            or_dash(snapshot_value(snapshot, facet)),
            join_or_dash(&candidates.values(facet)),
            value_width = value_width
        );
    }
}

#[cfg(test)]
#[path = "common_test.rs"]
mod tests;
