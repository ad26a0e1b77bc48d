//! Tab Bar Component
//!
//! Switches between the list, form and stats views.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::controller::ActiveView;

#[component]
pub fn TabBar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <nav class="tab-bar">
            {ActiveView::ALL.into_iter().map(|tab| {
                let is_active = move || ctx.active_view.get() == tab;
                let tab_class = move || if is_active() { "tab active" } else { "tab" };
                view! {
                    <button class=tab_class on:click=move |_| ctx.show(tab)>
                        {tab.label()}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
