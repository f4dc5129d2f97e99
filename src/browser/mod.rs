// src/browser/mod.rs
// =============================================================================
// The repository browser: what happens between "user pressed Enter" and
// "a README is on screen".
//
// Submodules:
// - tree_view: filters/sorts the tree listing and tracks the active file
// - view: the visible state as plain data
// - session: the Idle/Loading/Ready/Error state machine (no I/O)
// - driver: runs the network calls and feeds them to the session
// =============================================================================

mod driver;
mod session;
mod tree_view;
mod view;

pub use driver::Browser;
#[cfg(test)]
pub use session::{Session, Step};
pub use tree_view::{TreeView, NO_MATCHING_FILES};
pub use view::{ContentPanel, LoadState, View};
