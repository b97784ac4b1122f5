//! Inspect command implementation

use anyhow::Result;
use kt_core::{CandidateSet, Catalog, ConfigurationOption, Facet};
use serde::Serialize;

use crate::cli::{GlobalArgs, InspectArgs, OutputFormat};
use crate::commands::common::{join_or_dash, or_dash, print_json};
use crate::context::RuntimeContext;

/// Execute the inspect command
pub fn execute(args: &InspectArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;
    let catalog = ctx.load_catalog(&args.catalog)?;
    let matcher = ctx.matcher(&catalog);

    let report = InspectReport::new(&catalog, matcher.candidates(), &ctx.config.default_size_unit);
    match args.output {
        OutputFormat::Table => print_report(&report),
        OutputFormat::Json => print_json(&report)?,
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct InspectReport {
    product: String,
    option_count: usize,
    has_size: bool,
    candidates: CandidateSet,
    variants: Vec<VariantRow>,
}

/// One option, flattened for display
#[derive(Debug, Serialize)]
struct VariantRow {
    variant_id: String,
    metal: String,
    purity: Option<String>,
    tone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    size: Option<String>,
    price: f64,
}

impl InspectReport {
    fn new(catalog: &Catalog, candidates: CandidateSet, default_unit: &str) -> Self {
        let has_size = catalog.has_size();
        Self {
            product: catalog.product.clone(),
            option_count: catalog.options.len(),
            has_size,
            candidates,
            variants: catalog
                .options
                .iter()
                .map(|o| VariantRow::new(o, has_size, default_unit))
                .collect(),
        }
    }
}

impl VariantRow {
    fn new(option: &ConfigurationOption, has_size: bool, default_unit: &str) -> Self {
        let metal = option.primary_metal();
        let size = option.normalized_size(default_unit);
        Self {
            variant_id: option.variant_id.to_string(),
            metal: metal.map(|m| m.metal_id.to_string()).unwrap_or_default(),
            purity: metal.and_then(|m| m.purity_id.as_ref()).map(|p| p.to_string()),
            tone: metal.and_then(|m| m.tone_id.as_ref()).map(|t| t.to_string()),
            size: (has_size && !size.is_empty()).then_some(size),
            price: option.price_total,
        }
    }
}

fn print_report(report: &InspectReport) {
    println!("Product: {}", report.product);
    println!("Options: {}", report.option_count);
    println!("Size:    {}", if report.has_size { "active" } else { "inactive" });
    println!();

    let c = &report.candidates;
    println!("Metals:   {}", join_or_dash(&c.values(Facet::Metal)));
    println!("Purities: {}", join_or_dash(&c.values(Facet::Purity)));
    println!("Tones:    {}", join_or_dash(&c.values(Facet::Tone)));
    if report.has_size {
        println!("Sizes:    {}", join_or_dash(&c.values(Facet::Size)));
    }
    println!();

    let id_width = report
        .variants
        .iter()
        .map(|v| v.variant_id.len())
        .max()
        .unwrap_or(7)
        .max(7);
    println!(
        "{:<id_width$}  {:<10}  {:<8}  {:<8}  {:<8}  {:>10}",
        "VARIANT",
        "METAL",
        "PURITY",
        "TONE",
        "SIZE",
        "PRICE",
        id_width = id_width
    );
    for v in &report.variants {
        println!(
            "{:<id_width$}  {:<10}  {:<8}  {:<8}  {:<8}  {:>10.2}",
            v.variant_id,
            v.metal,
            or_dash(v.purity.as_deref()),
            or_dash(v.tone.as_deref()),
            or_dash(v.size.as_deref()),
            v.price,
            id_width = id_width
        );
    }
}
