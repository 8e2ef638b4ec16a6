//! View-State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Each event
//! writes one field at a time; the next render reads a consistent snapshot.

use std::collections::BTreeSet;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::TodoError;
use crate::filter::TodoFilter;
use crate::models::Todo;

/// Everything the presentation tree renders from
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Committed todos, in server order
    pub todos: Vec<Todo>,
    /// Placeholder shown while a create is in flight (id 0)
    pub temp_todo: Option<Todo>,
    /// Ids with a network call in flight
    pub processing: BTreeSet<u32>,
    /// Todo open in the inline editor
    pub editing: Option<u32>,
    pub filter: TodoFilter,
    /// Current banner
    pub error: Option<TodoError>,
    /// Text in the new-todo field
    pub draft: String,
    /// Set while create or a bulk action runs; disables the entry field
    pub busy: bool,
    /// Bumped whenever focus should return to the entry field
    pub focus_request: u32,
}

impl TodoState {
    pub fn with_filter(filter: TodoFilter) -> Self {
        Self {
            filter,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

// ========================
// Store Helper Functions
// ========================

/// Append a newly created todo
pub fn store_append_todo(store: &TodoStore, todo: Todo) {
    store.todos().write().push(todo);
}

/// Replace a todo by ID with the server's representation
pub fn store_replace_todo(store: &TodoStore, updated: Todo) {
    if let Some(todo) = store.todos().write().iter_mut().find(|todo| todo.id == updated.id) {
        *todo = updated;
    }
}

/// Remove a todo from the store by ID
pub fn store_remove_todo(store: &TodoStore, id: u32) {
    store.todos().write().retain(|todo| todo.id != id);
}

pub fn store_mark_processing(store: &TodoStore, id: u32) {
    store.processing().write().insert(id);
}

/// Membership only, so one unmark clears any number of marks
pub fn store_unmark_processing(store: &TodoStore, id: u32) {
    store.processing().write().remove(&id);
}

pub fn store_is_processing(store: &TodoStore, id: u32) -> bool {
    store.processing().with_untracked(|ids| ids.contains(&id))
}

pub fn store_request_focus(store: &TodoStore) {
    store.focus_request().update(|n| *n = n.wrapping_add(1));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_todo(id: u32, title: &str) -> Todo {
        Todo {
            id,
            user_id: 1,
            title: title.to_string(),
            completed: false,
        }
    }

    fn seeded() -> TodoStore {
        Store::new(TodoState {
            todos: vec![make_todo(1, "A"), make_todo(2, "B"), make_todo(3, "C")],
            ..Default::default()
        })
    }

    #[test]
    fn test_replace_matches_by_id() {
        let store = seeded();
        let mut renamed = make_todo(2, "B2");
        renamed.completed = true;

        store_replace_todo(&store, renamed.clone());

        let todos = store.todos().get_untracked();
        assert_eq!(todos[1], renamed);
        assert_eq!(todos[0].title, "A");
        assert_eq!(todos[2].title, "C");
    }

    #[test]
    fn test_replace_unknown_id_is_noop() {
        let store = seeded();
        store_replace_todo(&store, make_todo(99, "ghost"));
        assert_eq!(store.todos().get_untracked().len(), 3);
    }

    #[test]
    fn test_remove_keeps_order_of_others() {
        let store = seeded();
        store_remove_todo(&store, 2);

        let titles: Vec<_> = store.todos().get_untracked().into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["A", "C"]);
    }

    #[test]
    fn test_processing_is_membership_only() {
        let store = seeded();
        store_mark_processing(&store, 3);
        store_mark_processing(&store, 3);
        assert!(store_is_processing(&store, 3));

        store_unmark_processing(&store, 3);
        assert!(!store_is_processing(&store, 3));
        assert!(store.processing().get_untracked().is_empty());
    }

    #[test]
    fn test_focus_request_bumps() {
        let store = seeded();
        store_request_focus(&store);
        store_request_focus(&store);
        assert_eq!(store.focus_request().get_untracked(), 2);
        store_append_todo(&store, make_todo(4, "D"));
        assert_eq!(store.todos().get_untracked().len(), 4);
    }
}
