//! notecheck - score generated markdown notes against vault conventions

pub mod cli;
pub mod domain;
pub mod infra;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use cli::{
    Cli, Command,
    config::Config,
    handlers::{handle_check, handle_completions, handle_list, handle_save, handle_show},
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load()?;
    let vault_dir = config.vault_dir(cli.dir.as_ref());
    let verbose = cli.verbose > 0;

    match &cli.command {
        Command::Check(args) => handle_check(args, &vault_dir, &config, verbose),
        Command::List(args) => handle_list(args, &vault_dir),
        Command::Show(args) => handle_show(args, &vault_dir),
        Command::Save(args) => handle_save(args, &vault_dir, &config, verbose),
        Command::Completions(args) => handle_completions(args),
    }
}

/// Installs a stderr subscriber; `RUST_LOG` overrides the `-v` level.
fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A subscriber may already be set when embedded; keep the existing one
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init();
}
