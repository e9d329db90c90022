//! vaultpress CLI - publish Obsidian notes to a Zola site
//!
//! Usage: vaultpress <COMMAND>
//!
//! Commands:
//!   sync    Convert notes in the vault's publish folder into Zola pages
//!   build   Sync, build the site, and optionally serve it

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use commands::sync::SyncArgs;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let (json, color) = (cli.json, cli.color);
    if let Err(err) = run(cli) {
        let ui = commands::error_ui(json, color);
        ui::error::print_error(&err, &ui);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Sync {
            vault,
            content,
            watch,
            interval,
        } => commands::sync::cmd_sync(
            SyncArgs {
                vault: vault.as_deref(),
                content: content.as_deref(),
                watch,
                interval,
            },
            cli.json,
            cli.color,
        ),
        Commands::Build {
            vault,
            serve,
            watch_sync,
        } => commands::build::cmd_build(vault.as_deref(), serve, watch_sync, cli.json, cli.color),
    }
}
