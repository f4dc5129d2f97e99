// src/browser/driver.rs
// =============================================================================
// Runs the repository-loading flow against a RepositoryApi.
//
// The flow is strictly sequential: each call waits for the previous one.
//
//   submit(url)
//     -> fetch_metadata           (repo info panel, default branch)
//     -> fetch_tree               (listing; main -> master retry inside)
//     -> fetch_file_content       (only if a root README exists)
//
// All state decisions happen in Session. This file only moves data between
// the network and the session, and stops as soon as a step fails or turns
// out to be stale.
// =============================================================================

use crate::browser::session::{FileTicket, SelectError, Session, Step};
use crate::browser::view::View;
use crate::github::RepositoryApi;
use crate::render::Renderer;

pub struct Browser<A> {
    api: A,
    renderer: Renderer,
    session: Session,
}

impl<A: RepositoryApi> Browser<A> {
    pub fn new(api: A, renderer: Renderer) -> Self {
        Self {
            api,
            renderer,
            session: Session::new(),
        }
    }

    pub fn view(&self) -> &View {
        self.session.view()
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    // Loads the repository behind `input` and shows its README if it has one
    pub async fn submit(&mut self, input: &str) -> &View {
        let Some(ticket) = self.session.submit(input) else {
            return self.session.view();
        };

        let metadata = self
            .api
            .fetch_metadata(&ticket.slug.owner, &ticket.slug.name)
            .await;
        let repo = match self.session.apply_metadata(&ticket, metadata) {
            Step::Continue(repo) => repo,
            Step::Failed | Step::Stale => return self.session.view(),
        };

        let tree = self
            .api
            .fetch_tree(&repo.owner, &repo.name, &repo.default_branch)
            .await;
        let readme = match self.session.apply_tree(&ticket, tree) {
            Step::Continue(Some(readme)) => readme,
            Step::Continue(None) | Step::Failed | Step::Stale => return self.session.view(),
        };

        self.load_file(readme).await
    }

    pub async fn open_path(&mut self, path: &str) -> Result<&View, SelectError> {
        let ticket = self.session.select_path(path)?;
        Ok(self.load_file(ticket).await)
    }

    /// Opens the file at 0-based `index` in the listing
    pub async fn open_index(&mut self, index: usize) -> Result<&View, SelectError> {
        let ticket = self.session.select_index(index)?;
        Ok(self.load_file(ticket).await)
    }

    async fn load_file(&mut self, ticket: FileTicket) -> &View {
        let content = self
            .api
            .fetch_file_content(
                &ticket.repo.owner,
                &ticket.repo.name,
                &ticket.path,
                &ticket.repo.default_branch,
            )
            .await;
        self.session.apply_file(&ticket, content, &self.renderer);
        self.session.view()
    }
}
