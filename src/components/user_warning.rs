//! User Warning Component
//!
//! Terminal screen shown when no owner id was configured.

use leptos::prelude::*;

#[component]
pub fn UserWarning() -> impl IntoView {
    view! {
        <section class="section user-warning">
            <p class="box is-size-3">
                "Please get your " <b>"userId"</b> " and build the app with "
                <code>"TODOS_USER_ID"</code> " set to it."
            </p>
        </section>
    }
}
