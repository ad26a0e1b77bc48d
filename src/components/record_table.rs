//! Record Table Component
//!
//! The current page of records, with loading and error states.

use leptos::prelude::*;

use crate::components::RecordRow;
use crate::context::use_app_context;
use crate::controller::LoadState;
use crate::store::CollectionStateStoreFields;

#[component]
pub fn RecordTable() -> impl IntoView {
    let ctx = use_app_context();
    let records = ctx.store.records();
    let load = ctx.store.list_load();

    view! {
        <div class="record-table">
            {move || match load.get() {
                LoadState::Loading => view! { <p class="status-line">"Loading..."</p> }.into_any(),
                LoadState::Error(msg) => view! { <p class="status-line error">{msg}</p> }.into_any(),
                LoadState::Idle => ().into_any(),
            }}
            <table>
                <thead>
                    <tr>
                        <th></th>
                        <th>"Title"</th>
                        <th>"Type"</th>
                        <th>"Genre"</th>
                        <th>"Year"</th>
                        <th>"Rating"</th>
                        <th>"Status"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    // Key on the whole row so edits re-render
                    <For
                        each=move || records.get()
                        key=|record| record.clone()
                        children=move |record| view! { <RecordRow record=record /> }
                    />
                </tbody>
            </table>
            <Show when=move || records.with(|r| r.is_empty()) && load.get() == LoadState::Idle>
                <p class="empty">"No records found."</p>
            </Show>
        </div>
    }
}
