//! Notification Banner Component
//!
//! Shows the current notification and dismisses it after the configured TTL.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn NotificationBanner() -> impl IntoView {
    let ctx = use_app_context();
    let state = ctx.state.signal();
    let ttl_ms = ctx.notification_ttl_ms();

    // Only a new message re-arms the timer, not every state change
    let generation = Memo::new(move |_| state.with(|s| s.notification().generation()));

    Effect::new(move |previous: Option<Option<Timeout>>| {
        // Dropping a Timeout clears it
        drop(previous);
        let current = generation.get();
        let showing = state.with_untracked(|s| s.notification().is_showing());
        showing.then(|| {
            Timeout::new(ttl_ms, move || {
                state.update(|s| {
                    s.expire_notification(current);
                });
            })
        })
    });

    view! {
        {move || state.with(|s| s.notification().current().cloned()).map(|notification| {
            let class = if notification.is_error() { "error" } else { "notification" };
            view! { <div class=class>{notification.message}</div> }
        })}
    }
}
