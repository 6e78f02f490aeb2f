//! Command handlers for the CLI.

mod check;
mod completions;
mod list;
mod save;
mod show;


use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::cli::output::{Output, OutputFormat, ReportListing};
use crate::domain::{EvaluationReport, VaultIds};
use crate::infra::{decode_note_bytes, list_note_ids, read_note_text};

// Re-export public items
pub use check::handle_check;
pub use completions::handle_completions;
pub use list::handle_list;
pub use save::handle_save;
pub use show::handle_show;

// ===========================================
// Shared Utilities
// ===========================================

/// Reads note text from a file, or from stdin when the path is `-`.
pub(crate) fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut bytes = Vec::new();
        std::io::stdin()
            .read_to_end(&mut bytes)
            .context("failed to read note from stdin")?;
        return decode_note_bytes(bytes, Path::new("<stdin>")).map_err(Into::into);
    }

    read_note_text(path).with_context(|| format!("failed to read note: {}", path.display()))
}

/// Lists the vault's note identifiers with a readable error.
pub(crate) fn load_vault_ids(vault_dir: &Path) -> Result<VaultIds> {
    list_note_ids(vault_dir)
        .with_context(|| format!("failed to list notes in vault: {}", vault_dir.display()))
}

/// Prints an evaluation report in the requested format.
///
/// Human output shows the score and failing checks; verbose human output
/// shows the full per-check trace.
pub(crate) fn print_report(
    report: &EvaluationReport,
    format: OutputFormat,
    verbose: bool,
) -> Result<()> {
    match format {
        OutputFormat::Human => {
            println!("{}", render_human(report, verbose));
        }
        OutputFormat::Json => {
            let output = Output::new(ReportListing::from(report));
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

pub(crate) fn render_human(report: &EvaluationReport, verbose: bool) -> String {
    if verbose {
        return report.to_string();
    }

    let mut lines: Vec<String> = report
        .failures()
        .map(|r| match &r.diagnostic {
            Some(diag) => format!("FAIL {}: {}", r.name, diag),
            None => format!("FAIL {}", r.name),
        })
        .collect();
    lines.push(format!(
        "Score: {:.2} ({}/{} checks passed)",
        report.score(),
        report.passed_count(),
        report.total()
    ));
    lines.join("\n")
}

/// Fails when the report scores below `min_score`.
pub(crate) fn enforce_min_score(report: &EvaluationReport, min_score: Option<f64>) -> Result<()> {
    match min_score {
        Some(min) if report.score() < min => bail!(
            "score {:.2} is below the minimum of {:.2}",
            report.score(),
            min
        ),
        _ => Ok(()),
    }
}
