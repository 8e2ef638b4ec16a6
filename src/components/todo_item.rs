//! Todo Item Component
//!
//! One row: completion checkbox, title with inline editing, delete button and
//! the processing overlay. Gestures are ignored while the row is processing.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::models::{Todo, TodoPatch};
use crate::store::TodoStateStoreFields;

#[component]
pub fn TodoItem(todo: Todo) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let is_temp = todo.is_placeholder();
    let Todo { id, title, completed, .. } = todo;
    let title = StoredValue::new(title);
    let (edit_title, set_edit_title) = signal(title.get_value());
    let edit_ref: NodeRef<html::Input> = NodeRef::new();

    let is_processing = move || store.processing().with(|ids| ids.contains(&id));
    let is_editing = move || !is_temp && store.editing().get() == Some(id);
    let is_locked = move || is_temp || is_processing();

    // Keep the caret in the editor while it is open, including after a failed rename
    Effect::new(move |_| {
        if is_editing() {
            if let Some(input) = edit_ref.get() {
                let _ = input.focus();
            }
        }
    });

    let on_toggle = move |_: web_sys::Event| {
        if is_locked() {
            return;
        }
        spawn_local(async move {
            let _ = ctx.update(id, TodoPatch::completed(!completed)).await;
        });
    };

    let on_remove = move |_: web_sys::MouseEvent| {
        if is_locked() {
            return;
        }
        spawn_local(async move {
            let _ = ctx.remove(id).await;
        });
    };

    let on_dblclick = move |_: web_sys::MouseEvent| {
        if is_locked() {
            return;
        }
        set_edit_title.set(title.get_value());
        ctx.begin_edit(id);
    };

    let commit = move || {
        let draft = edit_title.get_untracked();
        spawn_local(async move {
            let _ = ctx.commit_edit(id, &draft).await;
        });
    };

    let on_keyup = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" {
            set_edit_title.set(title.get_value());
            ctx.cancel_edit();
        }
    };

    let row_class = move || {
        let mut c = String::from("todo");
        if completed {
            c.push_str(" completed");
        }
        if is_temp {
            c.push_str(" temp-item-enter temp-item-enter-active");
        }
        c
    };

    view! {
        <div data-cy="Todo" class=row_class>
            <label class="todo__status-label">
                <input
                    data-cy="TodoStatus"
                    type="checkbox"
                    class="todo__status"
                    prop:checked=completed
                    prop:disabled=is_locked
                    on:change=on_toggle
                />
            </label>

            <Show
                when=is_editing
                fallback=move || view! {
                    <span data-cy="TodoTitle" class="todo__title" on:dblclick=on_dblclick>
                        {title.get_value()}
                    </span>
                    <button type="button" class="todo__remove" data-cy="TodoDelete" on:click=on_remove>
                        "×"
                    </button>
                }
            >
                <form on:submit=move |ev: web_sys::SubmitEvent| {
                    ev.prevent_default();
                    commit();
                }>
                    <input
                        data-cy="TodoTitleField"
                        type="text"
                        class="todo__title-field"
                        placeholder="Empty todo will be deleted"
                        node_ref=edit_ref
                        prop:value=move || edit_title.get()
                        prop:disabled=is_processing
                        on:input=move |ev| set_edit_title.set(event_target_value(&ev))
                        on:blur=move |_| commit()
                        on:keyup=on_keyup
                    />
                </form>
            </Show>

            <div
                data-cy="TodoLoader"
                class=move || if is_processing() { "modal overlay is-active" } else { "modal overlay" }
            >
                <div class="modal-background has-background-white-ter"></div>
                <Show when=is_processing>
                    <div class="loader"></div>
                </Show>
            </div>
        </div>
    }
}
