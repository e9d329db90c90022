//! CLI Argument Parsing
//!
//! Global flags (--json, --color, --verbose) are inherited by all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// VaultPress - publish Obsidian notes to a Zola site
#[derive(Parser, Debug)]
#[command(name = "vaultpress")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events instead of human output
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert notes in the vault's publish folder into Zola pages
    Sync {
        /// Obsidian vault root (discovered when omitted)
        #[arg(long)]
        vault: Option<PathBuf>,

        /// Zola content directory
        #[arg(long)]
        content: Option<PathBuf>,

        /// Keep running and re-sync when notes change
        #[arg(short, long)]
        watch: bool,

        /// Minimum seconds between two syncs while watching
        #[arg(long, value_name = "SECONDS")]
        interval: Option<u64>,
    },

    /// Sync, build the site, and optionally serve it
    Build {
        /// Obsidian vault root, passed on to the sync step
        #[arg(long)]
        vault: Option<PathBuf>,

        /// Start the development server after a successful build
        #[arg(long)]
        serve: bool,

        /// Run `sync --watch` after the build (and server) finish
        #[arg(long)]
        watch_sync: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["vaultpress"]).is_err());
    }

    #[test]
    fn test_cli_parse_sync_defaults() {
        let cli = Cli::try_parse_from(["vaultpress", "sync"]).unwrap();
        if let Commands::Sync {
            vault,
            content,
            watch,
            interval,
        } = cli.command
        {
            assert_eq!(vault, None);
            assert_eq!(content, None);
            assert!(!watch);
            assert_eq!(interval, None);
        } else {
            panic!("Expected Sync command");
        }
    }

    #[test]
    fn test_cli_parse_sync_watch_with_interval() {
        let cli = Cli::try_parse_from([
            "vaultpress",
            "sync",
            "--vault",
            "~/Notes",
            "--watch",
            "--interval",
            "3",
        ])
        .unwrap();
        if let Commands::Sync {
            vault,
            watch,
            interval,
            ..
        } = cli.command
        {
            assert_eq!(vault, Some(PathBuf::from("~/Notes")));
            assert!(watch);
            assert_eq!(interval, Some(3));
        } else {
            panic!("Expected Sync command");
        }
    }

    #[test]
    fn test_cli_rejects_non_numeric_interval() {
        assert!(Cli::try_parse_from(["vaultpress", "sync", "--interval", "soon"]).is_err());
    }

    #[test]
    fn test_cli_parse_build_flags() {
        let cli = Cli::try_parse_from(["vaultpress", "build", "--serve", "--watch-sync"]).unwrap();
        if let Commands::Build {
            vault,
            serve,
            watch_sync,
        } = cli.command
        {
            assert_eq!(vault, None);
            assert!(serve);
            assert!(watch_sync);
        } else {
            panic!("Expected Build command");
        }
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["vaultpress", "sync", "--json", "-vv", "--color", "never"])
                .unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.color, Some(ColorWhen::Never));
    }
}
