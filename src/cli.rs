// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// One subcommand per flow:
// - download: pick a random file and save it locally
// - link:     pick a random file and print its web link
// - export:   write every file's name and link to a CSV
//
// Everything the flows used to hard-code (repository, start directory,
// output locations, API root) is an argument here.
// =============================================================================

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::github::DEFAULT_API_ROOT;

#[derive(Parser, Debug)]
#[command(
    name = "repo-sampler",
    version,
    about = "Pick, download, or export files from a GitHub repository",
    long_about = "repo-sampler walks a repository through the GitHub contents API. \
                  It can save a random file, print a random file's link, \
                  or export every file's name and link to a CSV."
)]
pub struct Cli {
    /// Root of the contents API (GitHub Enterprise: https://host/api/v3)
    #[arg(long, global = true, env = "GITHUB_API_URL", default_value = DEFAULT_API_ROOT)]
    pub api_root: String,

    /// Per-request timeout in seconds
    #[arg(long, global = true, default_value_t = 30)]
    pub timeout: u64,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Repository and start directory, shared by every subcommand.
#[derive(Args, Debug)]
pub struct Target {
    /// Repository URL (e.g., https://github.com/user/repo or .../tree/main/docs)
    pub repo_url: String,

    /// Directory to start from; defaults to the one in a tree URL, else the root
    #[arg(long)]
    pub path: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download a random file from the repository
    ///
    /// Example: repo-sampler download https://github.com/user/repo --output-dir notes
    Download {
        #[command(flatten)]
        target: Target,

        /// Levels to descend below the start directory
        #[arg(long, default_value_t = 2)]
        max_depth: usize,

        /// Directory the file is saved into (created if missing)
        #[arg(long, default_value = "downloaded_files")]
        output_dir: PathBuf,
    },

    /// Print the link to a random file in the repository
    ///
    /// Example: repo-sampler link https://github.com/user/repo --path docs --max-depth 0
    Link {
        #[command(flatten)]
        target: Target,

        /// Levels to descend below the start directory
        #[arg(long, default_value_t = 2)]
        max_depth: usize,

        /// Print the chosen file as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export every file's name and link to a CSV
    ///
    /// Example: repo-sampler export https://github.com/user/repo/tree/main/docs
    Export {
        #[command(flatten)]
        target: Target,

        /// Levels to descend below the start directory (default: no limit)
        #[arg(long)]
        max_depth: Option<usize>,

        /// CSV file to write
        #[arg(long, default_value = "github_files.csv")]
        output: PathBuf,
    },
}

impl Commands {
    pub fn target(&self) -> &Target {
        match self {
            Commands::Download { target, .. }
            | Commands::Link { target, .. }
            | Commands::Export { target, .. } => target,
        }
    }
}

impl Cli {
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_link_defaults() {
        let cli = Cli::try_parse_from(["repo-sampler", "link", "https://github.com/a/b"]).unwrap();
        assert_eq!(cli.timeout, 30);
        assert_eq!(cli.log_level(), log::LevelFilter::Warn);
        match cli.command {
            Commands::Link {
                target,
                max_depth,
                json,
            } => {
                assert_eq!(target.repo_url, "https://github.com/a/b");
                assert_eq!(target.path, None);
                assert_eq!(max_depth, 2);
                assert!(!json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_export_is_unbounded_by_default() {
        let cli = Cli::try_parse_from([
            "repo-sampler",
            "export",
            "https://github.com/a/b",
            "--path",
            "SpringFramework",
            "-vv",
        ])
        .unwrap();
        match &cli.command {
            Commands::Export {
                target,
                max_depth,
                output,
            } => {
                assert_eq!(target.path.as_deref(), Some("SpringFramework"));
                assert_eq!(*max_depth, None);
                assert_eq!(output, &PathBuf::from("github_files.csv"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(cli.log_level(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_repo_url_is_required() {
        assert!(Cli::try_parse_from(["repo-sampler", "download"]).is_err());
    }
}
