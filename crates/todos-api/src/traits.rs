//! API Client Trait
//!
//! Abstract interface over the remote todo collection.

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::model::{NewTodo, Todo, TodoPatch};

/// CRUD over one owner's todos.
///
/// Futures are `?Send`: in the browser every call runs on the single event loop.
#[async_trait(?Send)]
pub trait TodosApi {
    /// All todos of the configured owner
    async fn list(&self) -> ApiResult<Vec<Todo>>;

    /// Create a todo; the server assigns the id
    async fn create(&self, todo: &NewTodo) -> ApiResult<Todo>;

    /// Apply a partial update and return the server's representation
    async fn update(&self, id: u32, patch: &TodoPatch) -> ApiResult<Todo>;

    async fn delete(&self, id: u32) -> ApiResult<()>;
}
