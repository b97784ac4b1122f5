//! List command implementation

use anyhow::{Context, Result};
use kt_core::Catalog;
use serde::Serialize;

use crate::cli::{GlobalArgs, LsArgs, OutputFormat};
use crate::commands::common::print_json;
use crate::context::RuntimeContext;

/// Execute the ls command
pub fn execute(args: &LsArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;

    let mut summaries = Vec::new();
    for dir in ctx.catalog_dirs() {
        let catalogs = Catalog::discover(&dir)
            .with_context(|| format!("Failed to scan {}", dir.display()))?;
        summaries.extend(catalogs.iter().map(CatalogSummary::from));
    }

    match args.output {
        OutputFormat::Table => print_table(&summaries),
        OutputFormat::Json => print_json(&summaries)?,
    }
    Ok(())
}

/// Catalogue information for display
#[derive(Debug, Serialize)]
struct CatalogSummary {
    product: String,
    options: usize,
    has_size: bool,
}

impl From<&Catalog> for CatalogSummary {
    fn from(catalog: &Catalog) -> Self {
        Self {
            product: catalog.product.clone(),
            options: catalog.options.len(),
            has_size: catalog.has_size(),
        }
    }
}

fn print_table(catalogs: &[CatalogSummary]) {
    let name_width = catalogs
        .iter()
        .map(|c| c.product.len())
        .max()
        .unwrap_or(7)
        .max(7);

    println!(
        "{:<name_width$}  {:>7}  SIZED",
        "PRODUCT",
        "OPTIONS",
        name_width = name_width
    );
    println!(
        "{:-<name_width$}  {:-<7}  {:-<5}",
        "",
        "",
        "",
        name_width = name_width
    );
    for catalog in catalogs {
        println!(
            "{:<name_width$}  {:>7}  {}",
            catalog.product,
            catalog.options,
            if catalog.has_size { "yes" } else { "no" },
            name_width = name_width
        );
    }

    println!();
    println!("{} catalogues found", catalogs.len());
}
