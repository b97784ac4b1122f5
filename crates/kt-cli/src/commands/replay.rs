//! Replay command implementation

use anyhow::{Context, Result};
use kt_core::{Script, StepReport};
use std::path::Path;

use crate::cli::{GlobalArgs, OutputFormat, ReplayArgs};
use crate::commands::common::{print_facet_table, print_json};
use crate::context::RuntimeContext;

/// Execute the replay command
pub fn execute(args: &ReplayArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;
    let catalog = ctx.load_catalog(&args.catalog)?;
    let script = Script::load(Path::new(&args.script))
        .with_context(|| format!("Failed to load script {}", args.script))?;

    let mut matcher = ctx.matcher(&catalog);
    let reports = script.run(&mut matcher)?;

    match args.output {
        OutputFormat::Table => print_steps(&reports),
        OutputFormat::Json => print_json(&reports)?,
    }
    Ok(())
}

fn print_steps(reports: &[StepReport]) {
    for (i, report) in reports.iter().enumerate() {
        let t = &report.transition;
        let status = match (&t.resolved_variant, t.changed) {
            (Some(variant), _) => format!("resolved {}", variant),
            (None, true) => "changed".to_string(),
            (None, false) => "unchanged".to_string(),
        };
        println!("[{}] {} ({})", i + 1, report.step, status);
        print_facet_table(&t.snapshot, &report.candidates);
        if !t.fields_to_clear.is_empty() {
            let names: Vec<&str> = t.fields_to_clear.iter().map(|f| f.as_str()).collect();
            println!("clear errors: {}", names.join(", "));
        }
        println!();
    }
    println!("{} steps replayed", reports.len());
}
