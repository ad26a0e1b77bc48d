//! Record Row Component
//!
//! One table row of the current page.

use leptos::prelude::*;

use crate::components::delete_confirm_button::delete_prompt;
use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::models::Record;
use crate::stats::dash_or;

#[component]
pub fn RecordRow(record: Record) -> impl IntoView {
    let ctx = use_app_context();

    let id = record.id.clone();
    let delete_id = record.id.clone();
    let prompt = delete_prompt(Some(&record.title));

    view! {
        <tr class="record-row">
            <td class="thumb">
                {record.image_url.clone().map(|src| view! {
                    <img src=src alt="" loading="lazy" />
                })}
            </td>
            <td>{record.title.clone()}</td>
            <td>{record.record_type.as_str().to_string()}</td>
            <td>{record.genre.clone()}</td>
            <td>{record.year}</td>
            <td>{dash_or(record.rating)}</td>
            <td>{record.status.as_str().to_string()}</td>
            <td class="right">
                <button on:click=move |_| ctx.edit_record(&id)>"Edit"</button>
                <DeleteConfirmButton
                    button_class="danger"
                    prompt=prompt
                    on_confirm=Callback::new(move |_| ctx.delete_record(delete_id.clone()))
                />
            </td>
        </tr>
    }
}
