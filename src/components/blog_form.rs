//! Blog Form Component
//!
//! Creation form; a url that already exists offers to replace that record.

use blog_sync::PendingOp;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;

#[component]
pub fn BlogForm() -> impl IntoView {
    let ctx = use_app_context();
    let state = ctx.state.signal();

    let submitting = move || state.with(|s| s.is_pending(&PendingOp::Submit));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            ctx.controller().submit_draft().await;
        });
    };

    view! {
        <form class="blog-form" on:submit=on_submit>
            <div>
                "Title: "
                <input
                    type="text"
                    prop:value=move || state.with(|s| s.draft().title.clone())
                    on:input=move |ev| {
                        let title = event_target_value(&ev);
                        state.update(|s| s.set_title(title));
                    }
                />
            </div>
            <div>
                "Author: "
                <input
                    type="text"
                    prop:value=move || state.with(|s| s.draft().author.clone())
                    on:input=move |ev| {
                        let author = event_target_value(&ev);
                        state.update(|s| s.set_author(author));
                    }
                />
            </div>
            <div>
                "Url: "
                <input
                    type="text"
                    prop:value=move || state.with(|s| s.draft().url.clone())
                    on:input=move |ev| {
                        let url = event_target_value(&ev);
                        state.update(|s| s.set_url(url));
                    }
                />
            </div>
            <div>
                <button type="submit" disabled=submitting>
                    {move || if submitting() { "adding..." } else { "add" }}
                </button>
            </div>
        </form>
    }
}
