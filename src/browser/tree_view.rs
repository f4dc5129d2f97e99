// src/browser/tree_view.rs
// =============================================================================
// Builds the sidebar listing from a recursive tree listing.
//
// Steps:
// 1. Keep only files (blobs) ending in ".md" or ".html" (case-insensitive)
// 2. Sort: anything with "readme" in its lowercased path first, then by path
//    ignoring case (exact path breaks ties, so the order is total)
// 3. Give each kept file a stable id (its position in the sorted listing)
//
// Selection is keyed by that id. The listing stores a single Option<FileId>
// for the active file, so two files can never be active at once.
// =============================================================================

use std::cmp::Ordering;

use serde::Serialize;

use crate::github::TreeEntry;

/// Extensions the listing keeps
pub const PREVIEWABLE_EXTENSIONS: [&str; 2] = [".md", ".html"];

/// Path the loader opens automatically (compared case-insensitively)
pub const README_PATH: &str = "readme.md";

pub const NO_MATCHING_FILES: &str = "No HTML or Markdown files found.";

/// Stable identifier of a listed file within one loaded repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct FileId(usize);

impl FileId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileItem {
    pub id: FileId,
    pub path: String,
}

/// Outcome of a selection: which item lost the marker and which one got it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionChange {
    pub deactivated: Option<FileId>,
    pub activated: FileId,
}

/// Ordered, clickable listing with at most one active item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileList {
    items: Vec<FileItem>,
    active: Option<FileId>,
}

/// What the sidebar shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeView {
    /// Explicit "nothing to show" state instead of an empty list
    NoMatchingFiles,
    Files(FileList),
}

fn is_previewable(entry: &TreeEntry) -> bool {
    let lower = entry.path.to_lowercase();
    entry.is_blob() && PREVIEWABLE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

fn is_readme(path: &str) -> bool {
    path.to_lowercase().contains("readme")
}

// README-ish paths sort before everything else, then alphabetically
fn listing_order(a: &str, b: &str) -> Ordering {
    is_readme(b)
        .cmp(&is_readme(a))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

pub fn build_tree_view(entries: &[TreeEntry]) -> TreeView {
    let mut paths: Vec<&str> = entries
        .iter()
        .filter(|e| is_previewable(e))
        .map(|e| e.path.as_str())
        .collect();

    if paths.is_empty() {
        return TreeView::NoMatchingFiles;
    }

    paths.sort_by(|a, b| listing_order(a, b));

    let items = paths
        .into_iter()
        .enumerate()
        .map(|(i, path)| FileItem {
            id: FileId(i),
            path: path.to_string(),
        })
        .collect();

    TreeView::Files(FileList {
        items,
        active: None,
    })
}

impl TreeView {
    pub fn files(&self) -> Option<&FileList> {
        match self {
            TreeView::Files(list) => Some(list),
            TreeView::NoMatchingFiles => None,
        }
    }

    pub fn files_mut(&mut self) -> Option<&mut FileList> {
        match self {
            TreeView::Files(list) => Some(list),
            TreeView::NoMatchingFiles => None,
        }
    }
}

impl FileList {
    pub fn items(&self) -> &[FileItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn get(&self, id: FileId) -> Option<&FileItem> {
        self.items.get(id.0)
    }

    /// Looks up a listed file by its 0-based position
    pub fn id_at(&self, index: usize) -> Option<FileId> {
        self.items.get(index).map(|item| item.id)
    }

    pub fn find_path(&self, path: &str) -> Option<FileId> {
        self.items.iter().find(|item| item.path == path).map(|item| item.id)
    }

    /// The root README the loader opens on its own, if there is one
    pub fn find_readme(&self) -> Option<FileId> {
        self.items
            .iter()
            .find(|item| item.path.to_lowercase() == README_PATH)
            .map(|item| item.id)
    }

    pub fn is_active(&self, id: FileId) -> bool {
        self.active == Some(id)
    }

    // Moves the active marker to `id`
    //
    // Returns None (and changes nothing) if `id` is not in this listing.
    pub fn select(&mut self, id: FileId) -> Option<SelectionChange> {
        self.get(id)?;
        let deactivated = self.active.replace(id);
        Some(SelectionChange {
            deactivated,
            activated: id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(view: &TreeView) -> Vec<&str> {
        view.files()
            .unwrap()
            .items()
            .iter()
            .map(|i| i.path.as_str())
            .collect()
    }

    #[test]
    fn test_filter_and_order() {
        let entries = vec![
            TreeEntry::blob("notes.txt"),
            TreeEntry::blob("index.html"),
            TreeEntry::blob("a.md"),
            TreeEntry::blob("README.md"),
        ];
        let view = build_tree_view(&entries);
        assert_eq!(paths(&view), vec!["README.md", "a.md", "index.html"]);
    }

    #[test]
    fn test_directories_and_other_extensions_dropped() {
        let entries = vec![
            TreeEntry::dir("docs.md"),
            TreeEntry::dir("docs"),
            TreeEntry::blob("docs/Guide.MD"),
            TreeEntry::blob("site/Index.HTML"),
            TreeEntry::blob("site/index.htm"),
            TreeEntry::blob("src/main.rs"),
        ];
        let view = build_tree_view(&entries);
        assert_eq!(paths(&view), vec!["docs/Guide.MD", "site/Index.HTML"]);
    }

    #[test]
    fn test_every_readme_sorts_before_non_readmes() {
        let entries = vec![
            TreeEntry::blob("a.md"),
            TreeEntry::blob("docs/readme.md"),
            TreeEntry::blob("CHANGELOG.md"),
            TreeEntry::blob("README.md"),
            TreeEntry::blob("docs/ReadMe.html"),
        ];
        let view = build_tree_view(&entries);
        assert_eq!(
            paths(&view),
            vec!["docs/ReadMe.html", "docs/readme.md", "README.md", "a.md", "CHANGELOG.md"]
        );
    }

    #[test]
    fn test_order_ignores_case() {
        let entries = vec![
            TreeEntry::blob("a.md"),
            TreeEntry::blob("CHANGELOG.md"),
            TreeEntry::blob("Zeta.md"),
            TreeEntry::blob("beta.html"),
        ];
        let view = build_tree_view(&entries);
        assert_eq!(paths(&view), vec!["a.md", "beta.html", "CHANGELOG.md", "Zeta.md"]);
    }

    #[test]
    fn test_case_only_differences_keep_a_stable_order() {
        let entries = vec![TreeEntry::blob("guide.md"), TreeEntry::blob("Guide.md")];
        let view = build_tree_view(&entries);
        assert_eq!(paths(&view), vec!["Guide.md", "guide.md"]);
    }

    #[test]
    fn test_empty_listing_is_explicit() {
        let entries = vec![TreeEntry::blob("main.rs"), TreeEntry::dir("src")];
        assert_eq!(build_tree_view(&entries), TreeView::NoMatchingFiles);
        assert_eq!(build_tree_view(&[]), TreeView::NoMatchingFiles);
    }

    #[test]
    fn test_find_readme_is_root_and_case_insensitive() {
        let view = build_tree_view(&[
            TreeEntry::blob("docs/README.md"),
            TreeEntry::blob("Readme.MD"),
        ]);
        let list = view.files().unwrap();
        let id = list.find_readme().unwrap();
        assert_eq!(list.get(id).unwrap().path, "Readme.MD");

        let view = build_tree_view(&[TreeEntry::blob("docs/README.md")]);
        assert_eq!(view.files().unwrap().find_readme(), None);
    }

    #[test]
    fn test_selection_moves_single_marker() {
        let mut view = build_tree_view(&[
            TreeEntry::blob("README.md"),
            TreeEntry::blob("a.md"),
            TreeEntry::blob("b.html"),
        ]);
        let list = view.files_mut().unwrap();
        let first = list.id_at(0).unwrap();
        let third = list.id_at(2).unwrap();

        let change = list.select(first).unwrap();
        assert_eq!(change.deactivated, None);
        assert!(list.is_active(first));

        let change = list.select(third).unwrap();
        assert_eq!(change.deactivated, Some(first));
        assert_eq!(change.activated, third);
        assert!(!list.is_active(first));
        assert!(list.is_active(third));

        let active_count = list.items().iter().filter(|i| list.is_active(i.id)).count();
        assert_eq!(active_count, 1);
    }

    #[test]
    fn test_selecting_unknown_id_changes_nothing() {
        let mut view = build_tree_view(&[TreeEntry::blob("a.md")]);
        let list = view.files_mut().unwrap();
        let a = list.id_at(0).unwrap();
        list.select(a).unwrap();

        assert_eq!(list.select(FileId(7)), None);
        assert!(list.is_active(a));
    }
}
