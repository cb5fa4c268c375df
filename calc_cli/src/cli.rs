//! Command-line definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Bangun - construction material calculator
#[derive(Debug, Parser)]
#[command(name = "calc_cli", version, about)]
pub struct Cli {
    /// Settings file (defaults to the platform config directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List all calculators.
    List(ListArgs),

    /// Show a calculator's fields, units and defaults.
    Show(ShowArgs),

    /// Compute an estimate from field assignments.
    Compute(ComputeArgs),

    /// Enter each field interactively, then compute.
    Prompt(PromptArgs),
}

#[derive(Debug, Parser)]
pub struct ListArgs {
    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Calculator slug, e.g. `brick-wall`
    pub slug: String,
}

#[derive(Debug, Parser)]
pub struct ComputeArgs {
    /// Calculator slug, e.g. `brick-wall`
    pub slug: String,

    /// Field assignment, repeatable.
    /// Example: -s wall_length=4 -s wall_height=3
    #[arg(short = 's', long = "set", value_name = "NAME=VALUE")]
    pub set: Vec<String>,

    /// Output the estimate as JSON.
    #[arg(long)]
    pub json: bool,

    /// Say why no result was produced.
    #[arg(long)]
    pub explain: bool,
}

#[derive(Debug, Parser)]
pub struct PromptArgs {
    /// Calculator slug, e.g. `brick-wall`
    pub slug: String,
}
