//! Wire Models
//!
//! Data structures matching the remote API's JSON.

use serde::{Deserialize, Serialize};

/// Id reserved for the client-only placeholder shown while a create is in flight.
pub const TEMP_TODO_ID: u32 = 0;

/// A todo as stored by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u32,
    #[serde(rename = "userId")]
    pub user_id: u32,
    pub title: String,
    pub completed: bool,
}

impl Todo {
    /// Unsaved stand-in for a todo the server has not confirmed yet
    pub fn placeholder(title: impl Into<String>, user_id: u32) -> Self {
        Self {
            id: TEMP_TODO_ID,
            user_id,
            title: title.into(),
            completed: false,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.id == TEMP_TODO_ID
    }
}

/// Body of a create request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTodo {
    pub title: String,
    #[serde(rename = "userId")]
    pub user_id: u32,
    pub completed: bool,
}

impl NewTodo {
    pub fn new(title: impl Into<String>, user_id: u32) -> Self {
        Self {
            title: title.into(),
            user_id,
            completed: false,
        }
    }
}

/// Partial update. `id` and `userId` are never patchable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TodoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TodoPatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            completed: None,
        }
    }

    pub fn completed(completed: bool) -> Self {
        Self {
            title: None,
            completed: Some(completed),
        }
    }

    /// Whether this patch renames the todo (drives edit-cursor and focus handling)
    pub fn changes_title(&self) -> bool {
        self.title.is_some()
    }
}
