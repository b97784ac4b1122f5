//! Resolve command implementation

use anyhow::{bail, Result};
use kt_core::{ConfigurationOption, Facet, PriceBreakup, SelectionSnapshot};
use serde::Serialize;

use crate::cli::{GlobalArgs, OutputFormat, SelectArgs};
use crate::commands::common::{or_dash, print_json, selection_script, snapshot_value};
use crate::context::RuntimeContext;

/// Execute the resolve command
pub fn execute(args: &SelectArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;
    let catalog = ctx.load_catalog(&args.catalog)?;
    let script = selection_script(args.default_variant.as_deref(), &args.selections)?;

    let mut matcher = ctx.matcher(&catalog);
    script.run(&mut matcher)?;

    let snapshot = matcher.snapshot();
    let Some(option) = matcher.resolved_option() else {
        let missing: Vec<&str> = Facet::active(snapshot.has_size)
            .into_iter()
            .filter(|f| snapshot_value(&snapshot, *f).is_none())
            .map(|f| f.as_str())
            .collect();
        if missing.is_empty() {
            bail!("Selection does not match any variant of '{}'", catalog.product);
        }
        bail!(
            "Selection for '{}' is incomplete, missing: {}",
            catalog.product,
            missing.join(", ")
        );
    };

    let resolution = Resolution::new(option, snapshot);
    match args.output {
        OutputFormat::Table => print_resolution(&resolution),
        OutputFormat::Json => print_json(&resolution)?,
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct Resolution {
    variant_id: String,
    selection: SelectionSnapshot,
    price_total: f64,
    price_breakup: PriceBreakup,
}

impl Resolution {
    fn new(option: &ConfigurationOption, selection: SelectionSnapshot) -> Self {
        Self {
            variant_id: option.variant_id.to_string(),
            selection,
            price_total: option.price_total,
            price_breakup: option.price_breakup,
        }
    }
}

fn print_resolution(r: &Resolution) {
    let s = &r.selection;
    println!("Variant: {}", r.variant_id);
    println!(
        "Selection: {} / {} / {}{}",
        or_dash(s.metal_id.as_ref().map(|v| v.as_str())),
        or_dash(s.purity_id.as_ref().map(|v| v.as_str())),
        or_dash(s.tone_id.as_ref().map(|v| v.as_str())),
        s.size.as_deref().map(|v| format!(" / {v}")).unwrap_or_default()
    );
    println!();
    println!("{:<8}  {:>10}", "PART", "PRICE");
    for (label, amount) in [
        ("base", r.price_breakup.base),
        ("metal", r.price_breakup.metal),
        ("diamond", r.price_breakup.diamond),
        ("making", r.price_breakup.making),
    ] {
        println!("{:<8}  {:>10.2}", label, amount);
    }
    println!("{:-<8}  {:->10}", "", "");
    println!("{:<8}  {:>10.2}", "total", r.price_total);
}
