//! List command handler.

use std::path::Path;

use anyhow::Result;

use super::load_vault_ids;
use crate::cli::ListArgs;
use crate::cli::output::{Output, OutputFormat};

pub fn handle_list(args: &ListArgs, vault_dir: &Path) -> Result<()> {
    let ids = load_vault_ids(vault_dir)?;
    let sorted = ids.sorted();

    match args.format {
        OutputFormat::Human => {
            if sorted.is_empty() {
                println!("No notes found.");
            } else {
                for id in &sorted {
                    println!("{}", id);
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&Output::new(&sorted))?);
        }
    }

    Ok(())
}
