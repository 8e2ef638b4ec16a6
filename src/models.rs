//! Frontend Models
//!
//! Todo wire types come from `todos-api`; re-exported here so the UI has one
//! place to import them from.

pub use todos_api::{NewTodo, Todo, TodoPatch, TEMP_TODO_ID};
