//! Type Selector Component
//!
//! Record type buttons for the form.

use leptos::prelude::*;

use crate::models::RecordType;

/// One button per record type; the selected one is highlighted
#[component]
pub fn TypeSelector(
    #[prop(into)] current_type: Signal<String>,
    on_change: impl Fn(String) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="type-selector">
            {RecordType::ALL.into_iter().map(|record_type| {
                let value = record_type.as_str();
                let is_selected = move || current_type.get() == value;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "type-btn active" } else { "type-btn" }
                        on:click=move |_| on_change(value.to_string())
                    >
                        {value}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
