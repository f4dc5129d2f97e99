// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (stderr, so --json output on stdout stays clean)
// 3. Build the GitHub client and the browser
// 4. Dispatch to the appropriate subcommand handler
// 5. Exit with proper code (0 = preview shown, 1 = load ended in an error, 2 = internal error)
// =============================================================================

mod browser;
mod cli;
mod config;
mod error;
mod github;
mod interactive;
mod output;
mod render;

use anyhow::Result;
use clap::Parser;
use log::debug;
use std::path::PathBuf;

use browser::{Browser, LoadState, View};
use cli::{Cli, Commands};
use github::GithubClient;
use render::Renderer;

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

fn initialize_logger(debug: bool) -> Result<()> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("repo_preview")
        .build();

    simplelog::TermLogger::init(
        filter,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

// Returns:
//   Ok(0) = the view ended Ready
//   Ok(1) = the view ended in the Error state
//   Err   = something outside the browsing flow broke
async fn run() -> Result<i32> {
    // Parse command-line arguments (clap handles --help and --version)
    let cli = Cli::parse();

    initialize_logger(cli.debug)?;

    // Build the HTTP client once; every subcommand reuses it
    let config = cli.client_config();
    debug!("using API base {}", config.api_base);
    let client = GithubClient::new(&config)?;
    let mut browser = Browser::new(client, Renderer::default());

    // Say up front when Markdown previews will not be sanitized
    if !browser.renderer().sanitizer().is_available() {
        log::warn!("built without the 'sanitize' feature: Markdown will not be sanitized");
    }

    // Dispatch to the appropriate handler
    match cli.command {
        Commands::Browse {
            repo_url,
            file,
            json,
            output,
        } => handle_browse(&mut browser, &repo_url, file.as_deref(), json, output).await,
        Commands::Interactive => {
            interactive::run(&mut browser).await?;
            Ok(0)
        }
    }
}

// Handles the 'browse' subcommand
async fn handle_browse(
    browser: &mut Browser<GithubClient>,
    repo_url: &str,
    file: Option<&str>,
    json: bool,
    output: Option<PathBuf>,
) -> Result<i32> {
    // Load the repository (metadata, tree, README)
    browser.submit(repo_url).await;

    // A file pick only makes sense once a listing is on screen
    if let Some(path) = file {
        if browser.view().main_content_visible {
            browser.open_path(path).await?;
        }
    }

    // Print whatever state the load ended in, errors included
    let view = browser.view();
    print_view(view, json)?;

    if let Some(path) = output {
        output::write_page(view, &path)?;
        eprintln!("💾 Preview written to {}", path.display());
    }

    Ok(exit_code(view))
}

fn print_view(view: &View, json: bool) -> Result<()> {
    if json {
        println!("{}", output::view_json(view)?);
    } else {
        print!("{}", output::format_view(view));
    }
    Ok(())
}

// A load that ended in the Error state exits with 1
fn exit_code(view: &View) -> i32 {
    match view.state {
        LoadState::Error => 1,
        LoadState::Idle | LoadState::Loading | LoadState::Ready => 0,
    }
}
