//! Record Editor Component
//!
//! One form for both adding and editing; edit mode when the form carries an id.

use leptos::prelude::*;

use crate::components::delete_confirm_button::delete_prompt;
use crate::components::{DeleteConfirmButton, TypeSelector};
use crate::context::use_app_context;
use crate::controller::ActiveView;
use crate::models::Status;
use crate::validation::{RATING_RANGE, YEAR_RANGE};

#[component]
pub fn RecordEditor() -> impl IntoView {
    let ctx = use_app_context();
    let form = ctx.form;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit_form();
    };

    let record_type = Signal::derive(move || form.with(|f| f.record_type.clone()));
    let status = move || form.with(|f| f.status.clone());
    let prompt = Signal::derive(move || form.with(|f| delete_prompt(Some(&f.title))));

    view! {
        <form class="record-form" on:submit=on_submit>
            <h2>{move || form.with(|f| f.heading())}</h2>

            <label>
                "Title"
                <input
                    type="text"
                    prop:value=move || form.with(|f| f.title.clone())
                    on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                />
            </label>

            <label>"Type"</label>
            <TypeSelector
                current_type=record_type
                on_change=move |t| form.update(|f| f.record_type = t)
            />

            <label>
                "Genre"
                <input
                    type="text"
                    prop:value=move || form.with(|f| f.genre.clone())
                    on:input=move |ev| form.update(|f| f.genre = event_target_value(&ev))
                />
            </label>

            <label>
                "Year"
                <input
                    type="number"
                    min=YEAR_RANGE.start().to_string()
                    max=YEAR_RANGE.end().to_string()
                    prop:value=move || form.with(|f| f.year.clone())
                    on:input=move |ev| form.update(|f| f.year = event_target_value(&ev))
                />
            </label>

            <label>
                "Rating (optional)"
                <input
                    type="number"
                    min=RATING_RANGE.start().to_string()
                    max=RATING_RANGE.end().to_string()
                    prop:value=move || form.with(|f| f.rating.clone())
                    on:input=move |ev| form.update(|f| f.rating = event_target_value(&ev))
                />
            </label>

            <label>
                "Status"
                <select on:change=move |ev| form.update(|f| f.status = event_target_value(&ev))>
                    <option value="" selected=move || status().is_empty()>"Select..."</option>
                    {Status::ALL.into_iter().map(|s| view! {
                        <option value=s.as_str() selected=move || status() == s.as_str()>{s.as_str()}</option>
                    }).collect_view()}
                </select>
            </label>

            <label>
                {ctx.rules.image_url_label()}
                <input
                    type="url"
                    prop:value=move || form.with(|f| f.image_url.clone())
                    on:input=move |ev| form.update(|f| f.image_url = event_target_value(&ev))
                />
            </label>

            <label>
                "Notes"
                <textarea
                    prop:value=move || form.with(|f| f.notes.clone())
                    on:input=move |ev| form.update(|f| f.notes = event_target_value(&ev))
                ></textarea>
            </label>

            <Show when=move || ctx.form_error.get().is_some()>
                <p class="form-error">{move || ctx.form_error.get().unwrap_or_default()}</p>
            </Show>

            <div class="form-actions">
                <button type="submit" class="primary">"Save"</button>
                <button type="button" on:click=move |_| ctx.active_view.set(ActiveView::List)>
                    "Cancel"
                </button>
                <Show when=move || form.with(|f| f.is_edit())>
                    <DeleteConfirmButton
                        button_class="danger"
                        prompt=prompt
                        on_confirm=Callback::new(move |_| {
                            if let Some(id) = form.get_untracked().id {
                                ctx.delete_record(id);
                            }
                        })
                    />
                </Show>
            </div>
        </form>
    }
}
