// src/output.rs
// =============================================================================
// Turns a View into something a terminal (or a file) can show.
//
// - format_view: the human-readable layout, panel by panel
// - view_json: the View as pretty JSON (for --json)
// - write_page: the rendered file as a standalone HTML document (--output)
// =============================================================================

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{anyhow, Context, Result};

use crate::browser::{ContentPanel, TreeView, View, NO_MATCHING_FILES};
use crate::render::standalone_document;

pub const UNSANITIZED_NOTICE: &str =
    "⚠️  Markdown shown WITHOUT sanitization: this build has no HTML sanitizer";

pub fn format_view(view: &View) -> String {
    let mut out = String::new();

    if view.loading {
        out.push_str("⏳ Loading...\n");
    }

    if let Some(error) = &view.error {
        let _ = writeln!(out, "❌ {}", error);
    }

    if let Some(info) = &view.repo_info {
        let _ = writeln!(out, "📦 {}", info.full_name);
        let _ = writeln!(out, "   {}", info.description);
        let _ = writeln!(out, "   🔗 {}", info.html_url);
        out.push('\n');
    }

    if !view.main_content_visible {
        return out;
    }

    match &view.listing {
        Some(TreeView::Files(files)) => {
            let _ = writeln!(out, "📄 Files ({}):", files.len());
            for (i, item) in files.items().iter().enumerate() {
                let marker = if files.is_active(item.id) { '*' } else { ' ' };
                let _ = writeln!(out, " {} {:>3}. {}", marker, i + 1, item.path);
            }
        }
        Some(TreeView::NoMatchingFiles) => {
            let _ = writeln!(out, "📄 {}", NO_MATCHING_FILES);
        }
        None => {}
    }
    out.push('\n');

    match &view.content {
        ContentPanel::Rendered(rendered) => {
            if !rendered.is_safe() {
                let _ = writeln!(out, "{}", UNSANITIZED_NOTICE);
            }
            let _ = writeln!(out, "── {} ──", rendered.path);
            let _ = writeln!(out, "{}", rendered.markup);
        }
        ContentPanel::Placeholder { message } => {
            let _ = writeln!(out, "{}", message);
        }
        ContentPanel::Empty => {}
    }

    out
}

pub fn view_json(view: &View) -> Result<String> {
    Ok(serde_json::to_string_pretty(view)?)
}

// Writes the currently rendered file as an HTML page
pub fn write_page(view: &View, path: &Path) -> Result<()> {
    let rendered = view
        .rendered()
        .ok_or_else(|| anyhow!("nothing rendered to write to {}", path.display()))?;

    let title = match &view.repo_info {
        Some(info) => format!("{}/{}", info.full_name, rendered.path),
        None => rendered.path.clone(),
    };

    std::fs::write(path, standalone_document(&title, &rendered.markup))
        .with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::{LoadState, Session, Step};
    use crate::github::{FetchedTree, RepoMetadata, TreeEntry, TreeListing};
    use crate::render::Renderer;

    fn ready_view(paths: &[&str], render: Option<Renderer>) -> View {
        let mut session = Session::new();
        let ticket = session.submit("https://github.com/foo/bar").unwrap();
        session.apply_metadata(
            &ticket,
            Ok(RepoMetadata {
                default_branch: "main".to_string(),
                full_name: "foo/bar".to_string(),
                description: None,
                html_url: "https://github.com/foo/bar".to_string(),
            }),
        );
        let step = session.apply_tree(
            &ticket,
            Ok(FetchedTree {
                branch: "main".to_string(),
                listing: TreeListing {
                    tree: paths.iter().map(|p| TreeEntry::blob(*p)).collect(),
                    truncated: false,
                },
            }),
        );
        if let (Step::Continue(Some(file)), Some(renderer)) = (step, render) {
            session.apply_file(&file, Ok("# Hi\n<script>x()</script>".to_string()), &renderer);
        }
        session.view().clone()
    }

    #[test]
    fn test_format_marks_active_file() {
        let view = ready_view(&["README.md", "a.md"], Some(Renderer::default()));
        assert_eq!(view.state, LoadState::Ready);

        let text = format_view(&view);
        assert!(text.contains("📦 foo/bar"));
        assert!(text.contains("No description available"));
        assert!(text.contains(" *   1. README.md"));
        assert!(text.contains("     2. a.md"));
        assert!(text.contains("── README.md ──"));
    }

    #[test]
    fn test_format_unsanitized_notice() {
        let view = ready_view(&["README.md"], Some(Renderer::unsanitized()));
        assert!(format_view(&view).contains(UNSANITIZED_NOTICE));
    }

    #[test]
    fn test_format_empty_listing() {
        let view = ready_view(&["main.rs"], None);
        let text = format_view(&view);
        assert!(text.contains(NO_MATCHING_FILES));
        assert!(text.contains("Select a file from the sidebar"));
    }

    #[test]
    fn test_format_error_hides_panels() {
        let mut session = Session::new();
        session.submit("nope");
        let text = format_view(session.view());
        assert!(text.starts_with("❌ Error: Invalid GitHub URL"));
        assert!(!text.contains("📄"));
    }

    #[test]
    fn test_json_view() {
        let view = ready_view(&["README.md"], Some(Renderer::default()));
        let json: serde_json::Value = serde_json::from_str(&view_json(&view).unwrap()).unwrap();
        assert_eq!(json["state"], "ready");
        assert_eq!(json["repo_info"]["full_name"], "foo/bar");
        assert_eq!(json["listing"]["kind"], "files");
        assert_eq!(json["content"]["kind"], "rendered");
        assert_eq!(json["content"]["path"], "README.md");
    }

    #[test]
    fn test_write_page_requires_rendered_content() {
        let view = View::default();
        let path = std::env::temp_dir().join("repo-preview-never-written.html");
        assert!(write_page(&view, &path).is_err());
    }
}
