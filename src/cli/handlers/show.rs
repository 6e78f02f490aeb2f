//! Show command handler.

use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::ShowArgs;
use crate::infra::read_note;

pub fn handle_show(args: &ShowArgs, vault_dir: &Path) -> Result<()> {
    let text = read_note(vault_dir, &args.name)
        .with_context(|| format!("failed to show note '{}'", args.name))?;
    print!("{}", text);
    Ok(())
}
