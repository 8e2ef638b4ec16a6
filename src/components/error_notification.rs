//! Error Notification Component
//!
//! Dismissible banner for the error slot. Every write to the slot re-arms a
//! single auto-dismiss timer.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::error::TodoError;
use crate::store::TodoStateStoreFields;

/// Holds at most one pending auto-dismiss handle. Dropping the handle
/// cancels it, so replacing it cancels the previous countdown.
pub struct DismissTimer<H> {
    pending: Option<H>,
}

impl<H> DismissTimer<H> {
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// React to a write of the error slot
    pub fn rearm(
        &mut self,
        error: Option<TodoError>,
        delay_ms: u32,
        schedule: impl FnOnce(u32) -> H,
    ) {
        self.pending = None;
        if error.is_some() {
            self.pending = Some(schedule(delay_ms));
        }
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }
}

impl<H> Default for DismissTimer<H> {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn ErrorNotification() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let timer = StoredValue::new_local(DismissTimer::<Timeout>::new());

    Effect::new(move |_| {
        let error = store.error().get();
        timer.update_value(|timer| {
            timer.rearm(error, ctx.error_dismiss_ms(), |delay| {
                Timeout::new(delay, move || ctx.dismiss_error())
            });
        });
    });

    let banner_class = move || {
        if store.error().with(Option::is_none) {
            "notification is-danger is-light has-text-weight-normal hidden"
        } else {
            "notification is-danger is-light has-text-weight-normal"
        }
    };

    view! {
        <div data-cy="ErrorNotification" class=banner_class>
            <button
                data-cy="HideErrorButton"
                type="button"
                class="delete"
                on:click=move |_| ctx.dismiss_error()
            />
            {move || store.error().get().map(|err| err.to_string()).unwrap_or_default()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;
    use crate::config::AppConfig;

    struct FakeTimeout {
        cancelled: Rc<Cell<bool>>,
    }

    impl Drop for FakeTimeout {
        fn drop(&mut self) {
            self.cancelled.set(true);
        }
    }

    fn arm(
        timer: &mut DismissTimer<FakeTimeout>,
        error: Option<TodoError>,
        delays: &RefCell<Vec<u32>>,
    ) -> Rc<Cell<bool>> {
        let cancelled = Rc::new(Cell::new(false));
        let flag = cancelled.clone();
        timer.rearm(error, 3_000, |delay| {
            delays.borrow_mut().push(delay);
            FakeTimeout { cancelled: flag }
        });
        cancelled
    }

    #[test]
    fn test_second_error_restarts_countdown() {
        let delays = RefCell::new(Vec::new());
        let mut timer = DismissTimer::new();

        let first = arm(&mut timer, Some(TodoError::AddFailed), &delays);
        assert!(!first.get());

        let second = arm(&mut timer, Some(TodoError::AddFailed), &delays);
        assert!(first.get());
        assert!(!second.get());
        assert!(timer.is_armed());
        assert_eq!(delays.borrow().len(), 2);
    }

    #[test]
    fn test_dismissal_cancels_countdown() {
        let delays = RefCell::new(Vec::new());
        let mut timer = DismissTimer::new();

        let pending = arm(&mut timer, Some(TodoError::DeleteFailed), &delays);
        arm(&mut timer, None, &delays);

        assert!(pending.get());
        assert!(!timer.is_armed());
        assert_eq!(delays.borrow().len(), 1);
    }

    #[test]
    fn test_countdown_uses_configured_delay() {
        let config = AppConfig::from_user_id(Some("1")).unwrap();
        let mut timer = DismissTimer::new();
        let mut scheduled = None;

        timer.rearm(Some(TodoError::LoadFailed), config.error_dismiss_ms, |delay| {
            scheduled = Some(delay);
        });

        assert_eq!(scheduled, Some(3_000));
        assert!(timer.is_armed());
    }
}
