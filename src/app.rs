//! Blog List Frontend App
//!
//! Single page: notification, filter, creation form and the list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{BlogForm, BlogList, FilterBar, NotificationBanner};
use crate::context::{client_config, AppContext};

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(client_config());
    provide_context(ctx);
    let state = ctx.state.signal();

    // Load the collection once on mount
    Effect::new(move |_| {
        spawn_local(async move {
            ctx.controller().load().await;
        });
    });

    view! {
        <div class="app">
            <h2>"Blog List"</h2>
            <NotificationBanner />
            <FilterBar />
            <h3>"Add a new"</h3>
            <BlogForm />
            <h3>"List"</h3>
            <BlogList />
            <p class="item-count">
                {move || state.with(|s| format!("{} of {} blogs shown", s.visible().len(), s.records().len()))}
            </p>
        </div>
    }
}
