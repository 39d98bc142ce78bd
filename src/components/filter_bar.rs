//! Filter Bar Component
//!
//! Title filter input plus a button back to the unfiltered list.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_app_context();
    let state = ctx.state.signal();

    view! {
        <form class="filter-bar" on:submit=|ev: web_sys::SubmitEvent| ev.prevent_default()>
            <div>
                "filter shown with: "
                <input
                    type="text"
                    prop:value=move || state.with(|s| s.filter().to_string())
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        state.update(|s| s.set_filter(text));
                    }
                />
                <button
                    type="button"
                    disabled=move || state.with(|s| s.is_show_all())
                    on:click=move |_| state.update(|s| s.show_all())
                >
                    "show all"
                </button>
            </div>
        </form>
    }
}
