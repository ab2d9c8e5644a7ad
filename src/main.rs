// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Parse the repository URL and build the API client
// 3. Dispatch to the subcommand: walk -> select -> act
// 4. Exit with proper code (0 = file found and acted on, 1 = no files or
//    a discovery/IO failure, 2 = unexpected error)
// =============================================================================

mod action;
mod cli;
mod error;
mod github;
mod select;
mod walk;

use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use simple_logger::SimpleLogger;

use cli::{Cli, Commands};
use error::Error;
use github::{parse_repo_url, GithubClient, RepoRef};

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = a file was located and acted upon
//   Ok(1) = nothing found, or a listing/download/write failed
//   Err   = unexpected error (exit code 2)
async fn run() -> Result<i32> {
    let cli = Cli::parse();

    SimpleLogger::new().with_level(cli.log_level()).init()?;

    let target = cli.command.target();
    let repo = match parse_repo_url(&target.repo_url) {
        Ok(repo) => repo,
        Err(e) => return Ok(report_failure(e.into())),
    };

    // An explicit --path wins over the directory in a tree URL
    let start = target
        .path
        .clone()
        .unwrap_or_else(|| repo.subpath.clone())
        .trim_matches('/')
        .to_string();

    let client = GithubClient::new(&cli.api_root, repo, Duration::from_secs(cli.timeout))?;

    let outcome = match &cli.command {
        Commands::Download {
            max_depth,
            output_dir,
            ..
        } => handle_download(&client, &start, *max_depth, output_dir).await,
        Commands::Link {
            max_depth, json, ..
        } => handle_link(&client, &start, *max_depth, *json).await,
        Commands::Export {
            max_depth, output, ..
        } => handle_export(&client, &start, *max_depth, output).await,
    };

    Ok(match outcome {
        Ok(()) => 0,
        Err(e) => report_failure(e),
    })
}

fn report_failure(error: Error) -> i32 {
    eprintln!("❌ {}", error);
    1
}

fn announce(repo: &RepoRef, start: &str) {
    let start = if start.is_empty() { "/" } else { start };
    match &repo.reference {
        Some(reference) => println!(
            "🔍 Scanning {}/{}@{} from '{}'",
            repo.owner, repo.repo, reference, start
        ),
        None => println!("🔍 Scanning {}/{} from '{}'", repo.owner, repo.repo, start),
    }
}

// Handles the 'download' subcommand
async fn handle_download(
    client: &GithubClient,
    start: &str,
    max_depth: usize,
    output_dir: &Path,
) -> error::Result<()> {
    announce(client.repo(), start);

    let files = walk::walk_tree(client, start, Some(max_depth)).await?;
    println!("📄 Found {} file(s)", files.len());

    let entry = select::pick_random(files, start)?;
    let saved = action::save_entry(client, &entry, output_dir).await?;

    println!("✅ Successfully downloaded: {}", entry.name);
    println!("💾 File saved to: {}", saved.display());
    Ok(())
}

// Handles the 'link' subcommand
//
// In JSON mode only the JSON document goes to stdout.
async fn handle_link(
    client: &GithubClient,
    start: &str,
    max_depth: usize,
    json: bool,
) -> error::Result<()> {
    if !json {
        announce(client.repo(), start);
    }

    let files = walk::walk_tree(client, start, Some(max_depth)).await?;
    if !json {
        println!("📄 Found {} file(s)", files.len());
    }

    let entry = select::pick_random(files, start)?;
    action::report_link(&entry, json)?;
    Ok(())
}

// Handles the 'export' subcommand
async fn handle_export(
    client: &GithubClient,
    start: &str,
    max_depth: Option<usize>,
    output: &Path,
) -> error::Result<()> {
    announce(client.repo(), start);

    let files = walk::walk_tree(client, start, max_depth).await?;
    let files = select::take_all(files, start)?;

    let written = action::export_csv(&files, start, output).await?;
    println!("✅ Successfully wrote {} file(s) to {}", written, output.display());
    Ok(())
}
