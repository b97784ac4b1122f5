//! Candidates command implementation

use anyhow::Result;
use kt_core::{CandidateSet, Facet, SelectionSnapshot};
use serde::Serialize;

use crate::cli::{GlobalArgs, OutputFormat, SelectArgs};
use crate::commands::common::{print_facet_table, print_json, selection_script};
use crate::context::RuntimeContext;

/// Execute the candidates command
pub fn execute(args: &SelectArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;
    let catalog = ctx.load_catalog(&args.catalog)?;
    let script = selection_script(args.default_variant.as_deref(), &args.selections)?;

    let mut matcher = ctx.matcher(&catalog);
    script.run(&mut matcher)?;

    let report = CandidatesReport {
        snapshot: matcher.snapshot(),
        autofilled: Facet::ALL
            .into_iter()
            .filter(|f| matcher.is_autofilled(*f))
            .collect(),
        candidates: matcher.candidates(),
    };

    match args.output {
        OutputFormat::Table => {
            print_facet_table(&report.snapshot, &report.candidates);
            if !report.autofilled.is_empty() {
                let names: Vec<&str> = report.autofilled.iter().map(|f| f.as_str()).collect();
                println!();
                println!("Autofilled: {}", names.join(", "));
            }
        }
        OutputFormat::Json => print_json(&report)?,
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct CandidatesReport {
    snapshot: SelectionSnapshot,
    autofilled: Vec<Facet>,
    candidates: CandidateSet,
}
