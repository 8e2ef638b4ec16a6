//! Application Context
//!
//! Store + API handle + config, provided via Leptos Context API. The bundle
//! is `Copy`, so every handler closure can capture it by value.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use todos_api::TodosApi;

use crate::config::AppConfig;
use crate::store::TodoStore;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: TodoStore,
    api: StoredValue<Rc<dyn TodosApi>, LocalStorage>,
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(store: TodoStore, api: Rc<dyn TodosApi>, config: AppConfig) -> Self {
        Self {
            store,
            api: StoredValue::new_local(api),
            config: StoredValue::new(config),
        }
    }

    pub(crate) fn api(&self) -> Rc<dyn TodosApi> {
        self.api.get_value()
    }

    pub fn user_id(&self) -> u32 {
        self.config.with_value(|config| config.user_id)
    }

    pub fn error_dismiss_ms(&self) -> u32 {
        self.config.with_value(|config| config.error_dismiss_ms)
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
