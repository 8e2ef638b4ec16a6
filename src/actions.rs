//! Mutation Orchestrator
//!
//! One handler per user action. Each wraps its API call with processing-set
//! bookkeeping, maps failures onto the error banner, and reconciles the
//! committed list with the server's answer.
//!
//! Calls against different ids run concurrently and in no particular order.
//! Calls against the same id are not serialized here: rows ignore gestures
//! while their id is processing, but two in-flight mutations on one id can
//! still race and the later settlement wins.

use std::collections::BTreeSet;

use futures::future::join_all;
use leptos::prelude::*;
use log::{debug, info, warn};

use crate::context::AppContext;
use crate::error::TodoError;
use crate::filter::{completed_count, TodoFilter};
use crate::models::{NewTodo, Todo, TodoPatch, TEMP_TODO_ID};
use crate::store::{
    store_append_todo, store_is_processing, store_mark_processing, store_remove_todo,
    store_replace_todo, store_request_focus, store_unmark_processing, TodoStateStoreFields,
};

impl AppContext {
    // ========================
    // Plain state updates
    // ========================

    pub fn set_error(&self, error: TodoError) {
        self.store.error().set(Some(error));
    }

    pub fn dismiss_error(&self) {
        self.store.error().set(None);
    }

    /// Typing into the entry field dismisses a stale banner
    pub fn set_draft(&self, text: String) {
        self.dismiss_error();
        self.store.draft().set(text);
    }

    pub fn set_filter(&self, filter: TodoFilter) {
        self.store.filter().set(filter);
    }

    /// Follow `location.hash` after back/forward navigation
    pub fn sync_filter_with_hash(&self, hash: &str) {
        let filter = TodoFilter::from_hash(hash);
        if self.store.filter().get_untracked() != filter {
            self.set_filter(filter);
        }
    }

    pub fn begin_edit(&self, id: u32) {
        if id == TEMP_TODO_ID || store_is_processing(&self.store, id) {
            return;
        }
        self.store.editing().set(Some(id));
    }

    pub fn cancel_edit(&self) {
        self.store.editing().set(None);
    }

    // ========================
    // Network-backed handlers
    // ========================

    /// Initial fetch of the owner's todos
    pub async fn load(&self) {
        match self.api().list().await {
            Ok(todos) => {
                info!("[ACTIONS] Loaded {} todos", todos.len());
                self.store.todos().set(todos);
            }
            Err(e) => {
                warn!("[ACTIONS] Load failed: {}", e);
                self.set_error(TodoError::LoadFailed);
            }
        }
    }

    /// Create a todo from the entry field.
    ///
    /// A placeholder with id 0 is shown until the server answers.
    pub async fn create(&self, title: &str) -> Result<Todo, TodoError> {
        let title = title.trim();
        if title.is_empty() {
            self.set_error(TodoError::EmptyTitle);
            return Err(TodoError::EmptyTitle);
        }

        let user_id = self.user_id();
        self.store.busy().set(true);
        self.dismiss_error();
        self.store.temp_todo().set(Some(Todo::placeholder(title, user_id)));
        store_mark_processing(&self.store, TEMP_TODO_ID);

        let outcome = match self.api().create(&NewTodo::new(title, user_id)).await {
            Ok(todo) => {
                debug!("[ACTIONS] Created todo {}", todo.id);
                store_append_todo(&self.store, todo.clone());
                self.store.draft().set(String::new());
                Ok(todo)
            }
            Err(e) => {
                warn!("[ACTIONS] Create failed: {}", e);
                self.set_error(TodoError::AddFailed);
                Err(TodoError::AddFailed)
            }
        };

        self.store.busy().set(false);
        self.store.temp_todo().set(None);
        self.store.processing().set(BTreeSet::new());
        store_request_focus(&self.store);
        outcome
    }

    pub async fn remove(&self, id: u32) -> Result<(), TodoError> {
        self.dismiss_error();
        self.remove_settled(id).await
    }

    async fn remove_settled(&self, id: u32) -> Result<(), TodoError> {
        store_mark_processing(&self.store, id);

        let outcome = match self.api().delete(id).await {
            Ok(()) => {
                debug!("[ACTIONS] Deleted todo {}", id);
                store_remove_todo(&self.store, id);
                if self.store.editing().get_untracked() == Some(id) {
                    self.cancel_edit();
                }
                Ok(())
            }
            Err(e) => {
                warn!("[ACTIONS] Delete of {} failed: {}", id, e);
                self.set_error(TodoError::DeleteFailed);
                Err(TodoError::DeleteFailed)
            }
        };

        store_unmark_processing(&self.store, id);
        store_request_focus(&self.store);
        outcome
    }

    /// Patch a todo and commit the server's representation.
    ///
    /// Success closes the inline editor. A failed rename reopens the inline editor on `id` so the user can fix it;
    /// a failed completion toggle only shows the banner.
    pub async fn update(&self, id: u32, patch: TodoPatch) -> Result<Todo, TodoError> {
        self.dismiss_error();
        self.update_settled(id, patch).await
    }

    async fn update_settled(&self, id: u32, patch: TodoPatch) -> Result<Todo, TodoError> {
        let renames = patch.changes_title();
        store_mark_processing(&self.store, id);

        let outcome = match self.api().update(id, &patch).await {
            Ok(todo) => {
                debug!("[ACTIONS] Updated todo {}", id);
                store_replace_todo(&self.store, todo.clone());
                self.cancel_edit();
                Ok(todo)
            }
            Err(e) => {
                warn!("[ACTIONS] Update of {} failed: {}", id, e);
                self.set_error(TodoError::UpdateFailed);
                if renames {
                    self.store.editing().set(Some(id));
                }
                Err(TodoError::UpdateFailed)
            }
        };

        store_unmark_processing(&self.store, id);
        // Renames keep focus inside the inline editor
        if !renames {
            store_request_focus(&self.store);
        }
        outcome
    }

    /// Commit the inline editor for `id`.
    ///
    /// An empty title means delete; an unchanged title just closes the editor.
    /// Ignored unless `id` is the open editor and not already processing, so the
    /// blur that follows a submit does not send a second request.
    pub async fn commit_edit(&self, id: u32, draft: &str) -> Result<(), TodoError> {
        let is_open = self.store.editing().get_untracked() == Some(id);
        if !is_open || store_is_processing(&self.store, id) {
            return Ok(());
        }

        let title = draft.trim();
        if title.is_empty() {
            return self.remove(id).await;
        }

        let current = self.store.todos().with_untracked(|todos| {
            todos.iter().find(|todo| todo.id == id).map(|todo| todo.title.clone())
        });
        if current.as_deref() == Some(title) {
            self.cancel_edit();
            return Ok(());
        }

        self.update(id, TodoPatch::title(title)).await.map(drop)
    }

    /// Delete every completed todo. Each delete settles independently; the
    /// busy flag drops once all of them have.
    pub async fn clear_completed(&self) {
        self.store.busy().set(true);
        self.dismiss_error();

        let ids: Vec<u32> = self.store.todos().with_untracked(|todos| {
            todos.iter().filter(|todo| todo.completed).map(|todo| todo.id).collect()
        });
        let results = join_all(ids.iter().map(|id| self.remove_settled(*id))).await;
        log_bulk("clear completed", &results);

        self.store.busy().set(false);
    }

    /// Complete every active todo, or flip all of them when they already share
    /// one completion state.
    pub async fn toggle_all(&self) {
        self.store.busy().set(true);
        self.dismiss_error();

        let targets = toggle_all_targets(&self.store.todos().get_untracked());
        let results = join_all(
            targets
                .iter()
                .map(|todo| self.update_settled(todo.id, TodoPatch::completed(!todo.completed))),
        )
        .await;
        log_bulk("toggle all", &results);

        self.store.busy().set(false);
    }
}

/// Todos a toggle-all flips
fn toggle_all_targets(todos: &[Todo]) -> Vec<Todo> {
    if completed_count(todos) != todos.len() {
        todos.iter().filter(|todo| !todo.completed).cloned().collect()
    } else {
        todos.to_vec()
    }
}

fn log_bulk<T>(what: &str, results: &[Result<T, TodoError>]) {
    let failed = results.iter().filter(|r| r.is_err()).count();
    if failed > 0 {
        warn!("[ACTIONS] {}: {} of {} failed", what, failed, results.len());
    } else {
        debug!("[ACTIONS] {}: {} settled", what, results.len());
    }
}
