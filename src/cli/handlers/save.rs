//! Save command handler.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::{enforce_min_score, load_vault_ids, read_input, render_human};
use crate::cli::SaveArgs;
use crate::cli::config::Config;
use crate::cli::output::{Output, OutputFormat, ReportListing, SavedNote};
use crate::domain::{Evaluator, NoteName, link_known_notes};
use crate::infra::create_note;

pub fn handle_save(
    args: &SaveArgs,
    vault_dir: &Path,
    config: &Config,
    verbose: bool,
) -> Result<()> {
    // 1. Validate the name before consuming any input
    let name = NoteName::new(&args.name).with_context(|| "invalid note name")?;

    // 2. Read the note text
    let input = args.file.as_deref().unwrap_or(Path::new("-"));
    let text = read_input(input)?;

    // 3. Optionally link mentions of existing notes
    let mut ids = load_vault_ids(vault_dir)?;
    let text = if args.link {
        link_known_notes(&text, &ids).context("failed to insert links to existing notes")?
    } else {
        text
    };

    // 4. Evaluate as if the note were already in the vault
    ids.insert(name.as_str());
    let evaluator = Evaluator::new(&config.evaluator_config(&args.required));
    let report = evaluator.evaluate(&text, &ids, verbose);
    enforce_min_score(&report, args.min_score).context("note was not saved")?;

    // 5. Write atomically
    let path = create_note(vault_dir, name.as_str(), &text)
        .with_context(|| format!("failed to save note '{}'", name))?;
    info!(path = %path.display(), score = report.score(), "saved note");

    match args.format {
        OutputFormat::Human => {
            println!("Saved: {}", name);
            println!("  {}", path.display());
            println!("{}", render_human(&report, verbose));
        }
        OutputFormat::Json => {
            let saved = SavedNote {
                name: name.as_str(),
                path: path.display().to_string(),
                report: ReportListing::from(&report),
            };
            println!("{}", serde_json::to_string_pretty(&Output::new(saved))?);
        }
    }

    Ok(())
}
