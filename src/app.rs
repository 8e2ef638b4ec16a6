//! Todos Frontend App
//!
//! Checks configuration, builds the store and API client, and lays out
//! header / list / footer with the error banner underneath.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{error, info};
use reactive_stores::Store;
use todos_api::{HttpTodosApi, TodosApi};

use crate::components::{ErrorNotification, Footer, Header, TodoList, UserWarning};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::filter::TodoFilter;
use crate::store::TodoState;

#[component]
pub fn App() -> impl IntoView {
    match AppConfig::from_build_env() {
        Ok(config) => view! { <TodoApp config=config /> }.into_any(),
        Err(err) => {
            error!("[APP] {}", err);
            view! { <UserWarning /> }.into_any()
        }
    }
}

#[component]
fn TodoApp(config: AppConfig) -> impl IntoView {
    info!("[APP] Todos for user {} from {}", config.user_id, config.api_url);

    let filter = window()
        .location()
        .hash()
        .map(|hash| TodoFilter::from_hash(&hash))
        .unwrap_or_default();
    let store = Store::new(TodoState::with_filter(filter));
    let api: Rc<dyn TodosApi> = Rc::new(HttpTodosApi::new(config.api_url.clone(), config.user_id));
    let ctx = AppContext::new(store, api, config);

    // Provide context to all children
    provide_context(ctx);

    // Back/forward navigation changes the fragment without a click
    let _ = window_event_listener(leptos::ev::hashchange, move |_| {
        let hash = window().location().hash().unwrap_or_default();
        ctx.sync_filter_with_hash(&hash);
    });

    // Load todos on mount
    Effect::new(move |_| {
        spawn_local(async move { ctx.load().await });
    });

    view! {
        <div class="todoapp">
            <h1 class="todoapp__title">"todos"</h1>

            <div class="todoapp__content">
                <Header />
                <TodoList />
                <Footer />
            </div>

            <ErrorNotification />
        </div>
    }
}
