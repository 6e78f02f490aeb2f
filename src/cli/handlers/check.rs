//! Check command handler.

use std::path::Path;

use anyhow::Result;
use tracing::debug;

use super::{enforce_min_score, load_vault_ids, print_report, read_input};
use crate::cli::CheckArgs;
use crate::cli::config::Config;
use crate::domain::Evaluator;

pub fn handle_check(
    args: &CheckArgs,
    vault_dir: &Path,
    config: &Config,
    verbose: bool,
) -> Result<()> {
    // 1. Gather inputs: note text and vault identifiers
    let text = read_input(&args.file)?;
    let ids = load_vault_ids(vault_dir)?;
    debug!(file = %args.file.display(), notes = ids.len(), "evaluating note");

    // 2. Evaluate
    let evaluator = Evaluator::new(&config.evaluator_config(&args.required));
    let report = evaluator.evaluate(&text, &ids, verbose);

    // 3. Display results
    print_report(&report, args.format, verbose)?;

    // 4. Exit code: fail only below the threshold
    enforce_min_score(&report, args.min_score)
}
