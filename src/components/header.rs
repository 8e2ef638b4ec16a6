//! Header Component
//!
//! Toggle-all button plus the new-todo entry form.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::filter::all_completed;
use crate::store::TodoStateStoreFields;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let input_ref: NodeRef<html::Input> = NodeRef::new();

    // Return focus to the entry field whenever an action asks for it. A disabled
    // input cannot take focus, so re-run when `busy` flips as well.
    Effect::new(move |_| {
        let _ = store.focus_request().get();
        let _ = store.busy().get();
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let has_todos = move || store.todos().with(|todos| !todos.is_empty());
    let all_done = move || store.todos().with(|todos| all_completed(todos));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = store.draft().get_untracked();
        spawn_local(async move {
            let _ = ctx.create(&title).await;
        });
    };

    view! {
        <header class="todoapp__header">
            <Show when=has_todos>
                <button
                    type="button"
                    class=move || if all_done() { "todoapp__toggle-all active" } else { "todoapp__toggle-all" }
                    data-cy="ToggleAllButton"
                    on:click=move |_| spawn_local(async move { ctx.toggle_all().await })
                />
            </Show>

            <form on:submit=on_submit>
                <input
                    data-cy="NewTodoField"
                    type="text"
                    class="todoapp__new-todo"
                    placeholder="What needs to be done?"
                    autofocus=true
                    node_ref=input_ref
                    prop:value=move || store.draft().get()
                    prop:disabled=move || store.busy().get()
                    on:input=move |ev| ctx.set_draft(event_target_value(&ev))
                />
            </form>
        </header>
    }
}
