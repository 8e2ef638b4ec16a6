//! Footer Component
//!
//! Remaining-count, filter tabs and the clear-completed action. Hidden while
//! the list is empty.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::filter::{active_count, completed_count, TodoFilter};
use crate::store::TodoStateStoreFields;

fn items_left_label(count: usize) -> String {
    if count == 1 {
        "1 item left".to_string()
    } else {
        format!("{} items left", count)
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let has_todos = move || store.todos().with(|todos| !todos.is_empty());
    let active = move || store.todos().with(|todos| active_count(todos));
    let completed = move || store.todos().with(|todos| completed_count(todos));

    view! {
        <Show when=has_todos>
            <footer class="todoapp__footer" data-cy="Footer">
                <span class="todo-count" data-cy="TodosCounter">
                    {move || items_left_label(active())}
                </span>

                <nav class="filter" data-cy="Filter">
                    {TodoFilter::ALL.into_iter().map(|filter| {
                        let link_class = move || {
                            if store.filter().get() == filter { "filter__link selected" } else { "filter__link" }
                        };
                        view! {
                            <a
                                href=filter.href()
                                class=link_class
                                data-cy=format!("FilterLink{}", filter.label())
                                on:click=move |_| ctx.set_filter(filter)
                            >
                                {filter.label()}
                            </a>
                        }
                    }).collect_view()}
                </nav>

                <button
                    type="button"
                    class="todoapp__clear-completed"
                    data-cy="ClearCompletedButton"
                    prop:disabled=move || completed() == 0
                    on:click=move |_| spawn_local(async move { ctx.clear_completed().await })
                >
                    "Clear completed"
                </button>
            </footer>
        </Show>
    }
}
