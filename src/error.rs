//! Error Banner Taxonomy
//!
//! Every failure the user can see. API errors are mapped into one of these at
//! the orchestrator boundary and never travel further.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TodoError {
    #[error("Unable to load todos")]
    LoadFailed,

    #[error("Title should not be empty")]
    EmptyTitle,

    #[error("Unable to add a todo")]
    AddFailed,

    #[error("Unable to delete a todo")]
    DeleteFailed,

    #[error("Unable to update a todo")]
    UpdateFailed,

    /// Owner identity absent; the main UI is never rendered
    #[error("User id is not configured")]
    ConfigMissing,
}
