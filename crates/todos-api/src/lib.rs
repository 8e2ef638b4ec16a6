//! Todos API
//!
//! Wire types and the REST client for the remote todo collection.
//! Nothing here depends on Leptos, so it builds and tests natively.

mod error;
mod http;
mod model;
mod traits;

pub use error::{ApiError, ApiResult};
pub use http::{HttpTodosApi, DEFAULT_API_URL};
pub use model::{NewTodo, Todo, TodoPatch, TEMP_TODO_ID};
pub use traits::TodosApi;
