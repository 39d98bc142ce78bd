//! Blog List Component
//!
//! Renders the filtered projection with like and delete actions per row.

use blog_sync::{PendingOp, RecordId};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;

#[component]
pub fn BlogList() -> impl IntoView {
    let ctx = use_app_context();
    let state = ctx.state.signal();

    view! {
        <ul class="blog-list">
            <For
                each=move || state.with(|s| s.visible().into_iter().map(|r| r.id.clone()).collect::<Vec<_>>())
                key=|id| id.clone()
                children=move |id| view! { <BlogRow id=id /> }
            />
        </ul>
    }
}

/// One record; fields are read by id so likes and edits show up in place
#[component]
fn BlogRow(id: RecordId) -> impl IntoView {
    let ctx = use_app_context();
    let state = ctx.state.signal();

    let field = {
        let id = id.clone();
        move |pick: fn(&blog_sync::Record) -> String| {
            let id = id.clone();
            move || state.with(|s| s.get(&id).map(pick).unwrap_or_default())
        }
    };
    let likes = {
        let id = id.clone();
        move || state.with(|s| s.get(&id).map(|r| r.likes).unwrap_or_default())
    };
    let deleting = {
        let op = PendingOp::Delete(id.clone());
        move || state.with(|s| s.is_pending(&op))
    };
    let locked = {
        let id = id.clone();
        move || state.with(|s| s.is_record_locked(&id))
    };

    let on_like = {
        let id = id.clone();
        move |_| {
            let id = id.clone();
            spawn_local(async move {
                ctx.controller().like(&id).await;
            });
        }
    };
    let on_delete = {
        let id = id.clone();
        move |_| {
            let id = id.clone();
            spawn_local(async move {
                ctx.controller().delete(&id).await;
            });
        }
    };

    view! {
        <li class="blog">
            <div class="blog-info">
                <div class="blog-details">
                    <span class="blog-title">{field(|r| r.title.clone())}</span>
                    <span class="blog-author">{field(|r| r.author.clone())}</span>
                    <span class="blog-url">{field(|r| r.url.clone())}</span>
                </div>
                <div class="blog-actions">
                    <button class="like-button" disabled=locked on:click=on_like>"Like it"</button>
                    <span class="likes-count">{move || format!("Likes: {}", likes())}</span>
                    <button class="delete-button" disabled=deleting on:click=on_delete>"Delete"</button>
                </div>
            </div>
        </li>
    }
}
