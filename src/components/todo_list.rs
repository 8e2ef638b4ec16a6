//! Todo List Component
//!
//! Visible rows for the current filter, followed by the placeholder row
//! while a create is in flight.

use leptos::prelude::*;

use crate::components::TodoItem;
use crate::context::use_app_context;
use crate::filter::derive_view;
use crate::store::TodoStateStoreFields;

#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_context().store;

    let visible = move || {
        let filter = store.filter().get();
        store.todos().with(|todos| derive_view(todos, filter))
    };

    view! {
        <section class="todoapp__main" data-cy="TodoList">
            <For
                each=visible
                // Key on every mutable field so a replaced todo re-renders its row
                key=|todo| (todo.id, todo.title.clone(), todo.completed)
                children=move |todo| view! { <TodoItem todo=todo /> }
            />

            {move || store.temp_todo().get().map(|todo| view! { <TodoItem todo=todo /> })}
        </section>
    }
}
