//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Karat - inspect jewellery catalogues and replay shopper selections
#[derive(Parser, Debug)]
#[command(name = "kt")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to project directory
    #[arg(short = 'p', long, global = true, default_value = ".")]
    pub project_dir: String,

    /// Override config file path
    #[arg(short, long, global = true, env = "KARAT_CONFIG")]
    pub config: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List catalogues under the configured catalogue paths
    Ls(LsArgs),

    /// Summarize one catalogue
    Inspect(InspectArgs),

    /// Apply selections and print the remaining candidates
    Candidates(SelectArgs),

    /// Apply selections and print the variant they resolve to
    Resolve(SelectArgs),

    /// Replay a selection script step by step
    Replay(ReplayArgs),
}

/// Output formats shared by every command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON output
    Json,
}

/// Arguments for the ls command
#[derive(Args, Debug)]
pub struct LsArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: OutputFormat,
}

/// Arguments for the inspect command
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Catalogue file path or product name
    pub catalog: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: OutputFormat,
}

/// Arguments for the candidates and resolve commands
#[derive(Args, Debug)]
pub struct SelectArgs {
    /// Catalogue file path or product name
    pub catalog: String,

    /// Seed the selection from this variant before applying selections
    #[arg(long)]
    pub default_variant: Option<String>,

    /// Facet selection as facet=value, applied in order (repeatable)
    #[arg(short, long = "select", value_name = "FACET=VALUE")]
    pub selections: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: OutputFormat,
}

/// Arguments for the replay command
#[derive(Args, Debug)]
pub struct ReplayArgs {
    /// Catalogue file path or product name
    pub catalog: String,

    /// Selection script (YAML or JSON list of steps)
    pub script: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: OutputFormat,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
