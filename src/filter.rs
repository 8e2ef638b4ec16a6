//! Visibility Filter
//!
//! Pure derivation of the all / active / completed views.

use crate::models::Todo;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TodoFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TodoFilter {
    pub const ALL: [TodoFilter; 3] = [TodoFilter::All, TodoFilter::Active, TodoFilter::Completed];

    pub fn label(&self) -> &'static str {
        match self {
            TodoFilter::All => "All",
            TodoFilter::Active => "Active",
            TodoFilter::Completed => "Completed",
        }
    }

    /// Fragment link for the footer tab
    pub fn href(&self) -> &'static str {
        match self {
            TodoFilter::All => "#/",
            TodoFilter::Active => "#/active",
            TodoFilter::Completed => "#/completed",
        }
    }

    /// Parse `location.hash`; anything unknown shows everything
    pub fn from_hash(hash: &str) -> Self {
        match hash.trim_start_matches('#').trim_start_matches('/') {
            "active" => TodoFilter::Active,
            "completed" => TodoFilter::Completed,
            _ => TodoFilter::All,
        }
    }

    pub fn matches(&self, todo: &Todo) -> bool {
        match self {
            TodoFilter::All => true,
            TodoFilter::Active => !todo.completed,
            TodoFilter::Completed => todo.completed,
        }
    }
}

/// Todos visible under `filter`, in list order
pub fn derive_view(todos: &[Todo], filter: TodoFilter) -> Vec<Todo> {
    todos.iter().filter(|todo| filter.matches(todo)).cloned().collect()
}

pub fn active_count(todos: &[Todo]) -> usize {
    todos.iter().filter(|todo| !todo.completed).count()
}

pub fn completed_count(todos: &[Todo]) -> usize {
    todos.iter().filter(|todo| todo.completed).count()
}

/// True for a non-empty list with every todo completed
pub fn all_completed(todos: &[Todo]) -> bool {
    !todos.is_empty() && completed_count(todos) == todos.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn make_todo(id: u32, completed: bool) -> Todo {
        Todo {
            id,
            user_id: 1,
            title: format!("Todo {}", id),
            completed,
        }
    }

    #[test]
    fn test_derive_view_keeps_order() {
        let todos = vec![
            make_todo(3, false),
            make_todo(1, true),
            make_todo(2, false),
            make_todo(5, true),
        ];

        let ids = |view: Vec<Todo>| view.into_iter().map(|t| t.id).collect::<Vec<_>>();

        assert_eq!(ids(derive_view(&todos, TodoFilter::All)), vec![3, 1, 2, 5]);
        assert_eq!(ids(derive_view(&todos, TodoFilter::Active)), vec![3, 2]);
        assert_eq!(ids(derive_view(&todos, TodoFilter::Completed)), vec![1, 5]);
    }

    #[test]
    fn test_counts() {
        let todos = vec![make_todo(1, true), make_todo(2, false), make_todo(3, true)];
        assert_eq!(active_count(&todos), 1);
        assert_eq!(completed_count(&todos), 2);
        assert!(!all_completed(&todos));
        assert!(all_completed(&[make_todo(1, true)]));
        assert!(!all_completed(&[]));
    }

    #[test]
    fn test_hash_round_trip() {
        for filter in TodoFilter::ALL {
            assert_eq!(TodoFilter::from_hash(filter.href()), filter);
        }
        assert_eq!(TodoFilter::from_hash(""), TodoFilter::All);
        assert_eq!(TodoFilter::from_hash("#/nonsense"), TodoFilter::All);
    }

    proptest! {
        #[test]
        fn prop_active_and_completed_partition_all(flags in proptest::collection::vec(any::<bool>(), 0..40)) {
            let todos: Vec<Todo> = flags
                .iter()
                .enumerate()
                .map(|(i, done)| make_todo(i as u32 + 1, *done))
                .collect();

            let ids = |filter| {
                derive_view(&todos, filter).into_iter().map(|t| t.id).collect::<BTreeSet<_>>()
            };
            let all = ids(TodoFilter::All);
            let active = ids(TodoFilter::Active);
            let completed = ids(TodoFilter::Completed);

            prop_assert!(active.is_disjoint(&completed));
            prop_assert_eq!(active.union(&completed).cloned().collect::<BTreeSet<_>>(), all);
            prop_assert_eq!(derive_view(&todos, TodoFilter::All), todos.clone());
        }
    }
}
