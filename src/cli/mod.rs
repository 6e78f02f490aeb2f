//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// notecheck - score markdown notes against vault conventions
#[derive(Parser, Debug)]
#[command(name = "notecheck", version, about, long_about = None)]
pub struct Cli {
    /// Vault directory (overrides config file)
    #[arg(short = 'd', long, global = true)]
    pub dir: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evaluate a note against the vault's conventions
    Check(CheckArgs),

    /// List note identifiers in the vault
    #[command(name = "ls")]
    List(ListArgs),

    /// Print a note's contents
    Show(ShowArgs),

    /// Evaluate a note and save it into the vault
    Save(SaveArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Note file to evaluate ("-" reads stdin)
    pub file: PathBuf,

    /// Required front matter key (repeatable; overrides config)
    #[arg(short = 'r', long = "require", action = ArgAction::Append)]
    pub required: Vec<String>,

    /// Fail when the score is below this threshold (0.0 to 1.0)
    #[arg(long, value_parser = parse_score)]
    pub min_score: Option<f64>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `ls` command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `show` command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Note name (file name without .md)
    pub name: String,
}

/// Arguments for the `save` command
#[derive(Parser, Debug)]
pub struct SaveArgs {
    /// Name of the note to create
    pub name: String,

    /// File with the note text ("-" or omitted reads stdin)
    pub file: Option<PathBuf>,

    /// Wrap mentions of existing notes in wiki-links before saving
    #[arg(short, long)]
    pub link: bool,

    /// Required front matter key (repeatable; overrides config)
    #[arg(short = 'r', long = "require", action = ArgAction::Append)]
    pub required: Vec<String>,

    /// Refuse to save when the score is below this threshold (0.0 to 1.0)
    #[arg(long, value_parser = parse_score)]
    pub min_score: Option<f64>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

fn parse_score(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("score must be between 0 and 1, got {}", value))
    }
}
