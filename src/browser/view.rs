// src/browser/view.rs
// =============================================================================
// Everything the user can see, as plain data.
//
// This mirrors the panels of the preview page: a loading indicator, an
// error line, the repository info panel, and the main content area (file
// listing on the left, rendered file on the right). The CLI prints it; the
// --json flag serializes it as-is.
// =============================================================================

use serde::Serialize;

use crate::browser::tree_view::TreeView;
use crate::render::RenderedContent;

pub const NO_DESCRIPTION: &str = "No description available";

pub const SELECT_FILE_PROMPT: &str = "Select a file from the sidebar to preview its contents.";

/// Where the loader is in its Idle -> Loading -> Ready/Error cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadState {
    Idle,
    Loading,
    Ready,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoInfoPanel {
    pub full_name: String,
    /// The repository description, or NO_DESCRIPTION
    pub description: String,
    pub html_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentPanel {
    Empty,
    Placeholder { message: String },
    Rendered(RenderedContent),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct View {
    pub state: LoadState,
    pub loading: bool,
    pub error: Option<String>,
    /// None while the panel is hidden
    pub repo_info: Option<RepoInfoPanel>,
    pub main_content_visible: bool,
    pub listing: Option<TreeView>,
    pub content: ContentPanel,
}

impl Default for View {
    fn default() -> Self {
        Self {
            state: LoadState::Idle,
            loading: false,
            error: None,
            repo_info: None,
            main_content_visible: false,
            listing: None,
            content: ContentPanel::Empty,
        }
    }
}

impl View {
    pub fn rendered(&self) -> Option<&RenderedContent> {
        match &self.content {
            ContentPanel::Rendered(rendered) => Some(rendered),
            _ => None,
        }
    }

    // Hides the repo-info panel and the main content area
    pub(crate) fn hide_panels(&mut self) {
        self.repo_info = None;
        self.main_content_visible = false;
        self.listing = None;
        self.content = ContentPanel::Empty;
    }
}
