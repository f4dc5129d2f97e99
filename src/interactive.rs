// src/interactive.rs
// =============================================================================
// The `interactive` subcommand: a line-based stand-in for the page's text box.
//
// Each line typed at the prompt is one action:
// - a number (1, 2, ...) or an exact listed path opens that file
// - ":q" quits (so does end-of-input)
// - anything else, including an empty line, is submitted as a repository URL
//
// Only one request is ever in flight: the loop waits for each action to
// finish before reading the next line.
// =============================================================================

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::browser::{Browser, TreeView, View};
use crate::github::RepositoryApi;
use crate::output::format_view;

const PROMPT: &str = "repo-preview> ";
const QUIT: &str = ":q";

/// What one line of input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// 0-based listing index
    OpenIndex(usize),
    OpenPath(String),
    Submit(String),
}

// Decides what a line means given what's on screen
//
// Numbers and paths only count as file picks while a listing is visible;
// otherwise the line is a new submission.
pub fn parse_action(line: &str, view: &View) -> Action {
    let line = line.trim();
    if line == QUIT {
        return Action::Quit;
    }

    let files = match (&view.listing, view.main_content_visible) {
        (Some(TreeView::Files(files)), true) => files,
        _ => return Action::Submit(line.to_string()),
    };

    if let Ok(n) = line.parse::<usize>() {
        if (1..=files.len()).contains(&n) {
            return Action::OpenIndex(n - 1);
        }
    }

    if files.find_path(line).is_some() {
        return Action::OpenPath(line.to_string());
    }

    Action::Submit(line.to_string())
}

pub async fn run<A: RepositoryApi>(browser: &mut Browser<A>) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("Paste a GitHub repository URL and press Enter ({} to quit).", QUIT);
    print_prompt();

    while let Some(line) = lines.next_line().await? {
        let view = match parse_action(&line, browser.view()) {
            Action::Quit => break,
            Action::Submit(input) => Ok(browser.submit(&input).await),
            Action::OpenIndex(index) => browser.open_index(index).await,
            Action::OpenPath(path) => browser.open_path(&path).await,
        };

        match view {
            Ok(view) => print!("{}", format_view(view)),
            Err(e) => eprintln!("⚠️  {}", e),
        }
        print_prompt();
    }

    Ok(())
}

fn print_prompt() {
    use std::io::Write;

    print!("{}", PROMPT);
    let _ = std::io::stdout().flush();
}
