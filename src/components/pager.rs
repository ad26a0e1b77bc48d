//! Pager Component
//!
//! Prev/Next buttons and the "Page P of T" indicator.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::CollectionStateStoreFields;

#[component]
pub fn Pager() -> impl IntoView {
    let ctx = use_app_context();
    let paging = ctx.store.paging();

    view! {
        <div class="pager">
            <button
                disabled=move || !paging.get().can_go_prev()
                on:click=move |_| ctx.prev_page()
            >
                "Prev"
            </button>
            <span class="page-indicator">{move || paging.get().indicator()}</span>
            <button
                disabled=move || !paging.get().can_go_next()
                on:click=move |_| ctx.next_page()
            >
                "Next"
            </button>
        </div>
    }
}
