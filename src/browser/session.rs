// src/browser/session.rs
// =============================================================================
// The loader's state machine, with no I/O in it.
//
//   Idle -> Loading -> Ready
//                   -> Error
//   Ready / Error -> Loading   (on the next submission)
//
// The driver (driver.rs) does the network calls and feeds each result back
// through an `apply_*` method. Every load carries a LoadTicket stamped with
// a generation number; every submission bumps the generation. A result whose
// ticket is from an older generation is dropped instead of overwriting the
// newer state. File loads also carry a sequence number so that clicking a
// second file makes the first file's late result stale.
//
// The repository being browsed lives here as an explicit RepositoryReference,
// created only once the default branch is known.
// =============================================================================

use std::fmt::Display;

use log::{debug, info};
use thiserror::Error;

use crate::browser::tree_view::{build_tree_view, FileId, FileList, TreeView};
use crate::browser::view::{
    ContentPanel, LoadState, RepoInfoPanel, View, NO_DESCRIPTION, SELECT_FILE_PROMPT,
};
use crate::error::{BrowseError, Result};
use crate::github::{parse_repo_url, FetchedTree, RepoMetadata, RepoSlug};
use crate::render::Renderer;

/// The repository currently loaded, with its resolved default branch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryReference {
    pub owner: String,
    pub name: String,
    pub default_branch: String,
}

/// Proof that a repository load was started, and which one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    pub slug: RepoSlug,
}

/// Proof that a file load was started, with everything needed to fetch it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTicket {
    generation: u64,
    seq: u64,
    pub id: FileId,
    pub path: String,
    pub repo: RepositoryReference,
}

/// Result of feeding one step's outcome back into the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step<T> {
    /// Applied; carry on with T
    Continue(T),
    /// Applied; the load ended in the Error state
    Failed,
    /// Ignored; a newer load has superseded this one
    Stale,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectError {
    #[error("No repository loaded")]
    NoRepository,

    #[error("No such file in the listing: {0}")]
    UnknownFile(String),
}

#[derive(Debug, Default)]
pub struct Session {
    generation: u64,
    file_seq: u64,
    repo: Option<RepositoryReference>,
    view: View,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    #[cfg(test)]
    pub fn repository(&self) -> Option<&RepositoryReference> {
        self.repo.as_ref()
    }

    // Handles the submit action
    //
    // Returns a ticket when a network load should start, None when the
    // submission was rejected (the view is already in the Error state).
    pub fn submit(&mut self, input: &str) -> Option<LoadTicket> {
        // Any submission supersedes whatever load is still in flight
        self.generation += 1;

        let input = input.trim();
        if input.is_empty() {
            debug!("empty submission");
            self.view.state = LoadState::Error;
            self.view.loading = false;
            self.view.error = Some(BrowseError::InvalidInput.to_string());
            return None;
        }

        self.view.state = LoadState::Loading;
        self.view.loading = true;
        self.view.error = None;
        self.view.hide_panels();
        self.repo = None;

        match parse_repo_url(input) {
            Some(slug) => {
                debug!("load #{} started for {}/{}", self.generation, slug.owner, slug.name);
                Some(LoadTicket {
                    generation: self.generation,
                    slug,
                })
            }
            None => {
                self.fail(&BrowseError::InvalidUrl);
                None
            }
        }
    }

    pub fn apply_metadata(
        &mut self,
        ticket: &LoadTicket,
        result: Result<RepoMetadata>,
    ) -> Step<RepositoryReference> {
        if self.is_stale(ticket.generation) {
            return Step::Stale;
        }

        let meta = match result {
            Ok(meta) => meta,
            Err(e) => {
                self.fail(&e);
                return Step::Failed;
            }
        };

        let description = meta
            .description
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| NO_DESCRIPTION.to_string());
        self.view.repo_info = Some(RepoInfoPanel {
            full_name: meta.full_name,
            description,
            html_url: meta.html_url,
        });

        let repo = RepositoryReference {
            owner: ticket.slug.owner.clone(),
            name: ticket.slug.name.clone(),
            default_branch: meta.default_branch,
        };
        self.repo = Some(repo.clone());
        Step::Continue(repo)
    }

    // Applies the tree listing
    //
    // Continue(Some(ticket)) means a root README was found and selected; the
    // caller should load it. Continue(None) means the load is finished.
    pub fn apply_tree(
        &mut self,
        ticket: &LoadTicket,
        result: Result<FetchedTree>,
    ) -> Step<Option<FileTicket>> {
        if self.is_stale(ticket.generation) {
            return Step::Stale;
        }

        let fetched = match result {
            Ok(fetched) => fetched,
            Err(e) => {
                self.fail(&e);
                return Step::Failed;
            }
        };

        if fetched.listing.truncated {
            debug!("tree listing was truncated by the API");
        }

        // The tree may have come from the fallback branch
        if let Some(repo) = self.repo.as_mut() {
            repo.default_branch = fetched.branch;
        }

        let listing = build_tree_view(&fetched.listing.tree);
        let readme = listing.files().and_then(|files| files.find_readme());
        self.view.listing = Some(listing);
        self.view.main_content_visible = true;

        if let Some(id) = readme {
            return match self.select(id) {
                Ok(file) => Step::Continue(Some(file)),
                Err(e) => {
                    self.fail(&e);
                    Step::Failed
                }
            };
        }

        self.view.content = ContentPanel::Placeholder {
            message: SELECT_FILE_PROMPT.to_string(),
        };
        self.view.state = LoadState::Ready;
        self.view.loading = false;
        if let Some(repo) = &self.repo {
            info!("loaded {}/{} without a README", repo.owner, repo.name);
        }
        Step::Continue(None)
    }

    pub fn select_path(&mut self, path: &str) -> std::result::Result<FileTicket, SelectError> {
        let id = self
            .files()
            .and_then(|files| files.find_path(path))
            .ok_or_else(|| SelectError::UnknownFile(path.to_string()))?;
        self.select(id)
    }

    // Selects a file by its 0-based listing position
    pub fn select_index(&mut self, index: usize) -> std::result::Result<FileTicket, SelectError> {
        let id = self
            .files()
            .and_then(|files| files.id_at(index))
            .ok_or_else(|| {
                SelectError::UnknownFile(format!("#{}", index.saturating_add(1)))
            })?;
        self.select(id)
    }

    // Starts the file-loading sub-flow for `id`
    pub fn select(&mut self, id: FileId) -> std::result::Result<FileTicket, SelectError> {
        let repo = self.repo.clone().ok_or(SelectError::NoRepository)?;

        let files = self
            .view
            .listing
            .as_mut()
            .and_then(TreeView::files_mut)
            .ok_or(SelectError::NoRepository)?;
        let path = files
            .get(id)
            .map(|item| item.path.clone())
            .ok_or_else(|| {
                SelectError::UnknownFile(format!("#{}", id.index().saturating_add(1)))
            })?;
        if let Some(change) = files.select(id) {
            debug!(
                "active file: {:?} -> {}",
                change.deactivated.map(FileId::index),
                change.activated.index()
            );
        }

        self.file_seq += 1;
        self.view.state = LoadState::Loading;
        self.view.loading = true;
        self.view.error = None;
        debug!("file load #{} started for {}", self.file_seq, path);

        Ok(FileTicket {
            generation: self.generation,
            seq: self.file_seq,
            id,
            path,
            repo,
        })
    }

    pub fn apply_file(
        &mut self,
        ticket: &FileTicket,
        result: Result<String>,
        renderer: &Renderer,
    ) -> Step<()> {
        if self.is_stale(ticket.generation) || ticket.seq != self.file_seq {
            debug!(
                "dropping stale result for {} (listing #{})",
                ticket.path,
                ticket.id.index() + 1
            );
            return Step::Stale;
        }

        self.view.loading = false;

        match result {
            Ok(text) => {
                let rendered = renderer.render(&ticket.path, &text);
                self.view.content = ContentPanel::Rendered(rendered);
                self.view.state = LoadState::Ready;
                info!("rendered {}", ticket.path);
                Step::Continue(())
            }
            Err(e) => {
                // Listing and repo info stay; only the error line changes
                self.view.state = LoadState::Error;
                self.view.error = Some(format!("Error loading file: {}", e));
                Step::Failed
            }
        }
    }

    fn files(&self) -> Option<&FileList> {
        self.view.listing.as_ref().and_then(TreeView::files)
    }

    fn is_stale(&self, generation: u64) -> bool {
        let stale = generation != self.generation;
        if stale {
            debug!(
                "dropping result of load #{} (current is #{})",
                generation, self.generation
            );
        }
        stale
    }

    // Ends the current load in the Error state with nothing partial showing
    fn fail(&mut self, error: &dyn Display) {
        self.view.state = LoadState::Error;
        self.view.loading = false;
        self.view.error = Some(format!("Error: {}", error));
        self.view.hide_panels();
        self.repo = None;
    }
}
