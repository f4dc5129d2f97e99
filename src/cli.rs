// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Two ways in:
// - `browse`: one repository URL in, one preview out (scriptable)
// - `interactive`: a prompt that behaves like the preview page's text box
//
// Global flags configure the GitHub client and logging. Nothing is read from
// the environment or from config files.
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use url::Url;

use crate::config::{ClientConfig, DEFAULT_API_BASE, DEFAULT_TIMEOUT_SECS};

#[derive(Parser, Debug)]
#[command(
    name = "repo-preview",
    version,
    about = "Browse a GitHub repository's Markdown and HTML files from the terminal",
    long_about = "repo-preview loads a public GitHub repository through the REST API, lists its \
                  Markdown and HTML files (README first) and renders a safe preview of the one you pick."
)]
pub struct Cli {
    /// Base URL of the GitHub REST API
    #[arg(long, global = true, default_value = DEFAULT_API_BASE, value_parser = parse_api_base)]
    pub api_base: Url,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Enable debug logging (to stderr)
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load a repository and preview its README (or another file)
    ///
    /// Example: repo-preview browse https://github.com/rust-lang/rust --file CONTRIBUTING.md
    Browse {
        /// GitHub repository URL (e.g., https://github.com/user/repo)
        repo_url: String,

        /// Path of a listed file to preview instead of the README
        #[arg(long)]
        file: Option<String>,

        /// Print the whole view as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Also write the rendered preview to this file as a standalone HTML page
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Prompt for repository URLs and file picks, one per line
    ///
    /// Type a URL to load a repository, a number or a listed path to open a
    /// file, or :q to quit.
    Interactive,
}

impl Cli {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.api_base.clone(), Duration::from_secs(self.timeout))
    }
}

// Only http(s) URLs can have endpoint paths appended to them
fn parse_api_base(value: &str) -> Result<Url, String> {
    let url = Url::parse(value).map_err(|e| format!("invalid URL '{}': {}", value, e))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(format!("unsupported scheme '{}', expected http or https", other)),
    }
}
