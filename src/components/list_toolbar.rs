//! List Toolbar Component
//!
//! Search, status filter, sort and page-size controls above the table.

use leptos::prelude::*;

use crate::config::PAGE_SIZE_OPTIONS;
use crate::context::use_app_context;
use crate::controller::FilterChange;
use crate::models::{SortDir, SortField, SortSpec, Status, StatusFilter};
use crate::store::CollectionStateStoreFields;

/// Sort selection from the two selects; no field means server order
fn sort_from_controls(field: &str, dir: &str) -> Option<SortSpec> {
    SortField::from_param(field).map(|field| SortSpec {
        field,
        dir: SortDir::from_param(dir),
    })
}

#[component]
pub fn ListToolbar() -> impl IntoView {
    let ctx = use_app_context();
    let filters = ctx.store.filters();
    let paging = ctx.store.paging();

    let sort_field = move || filters.get().sort.map(|s| s.field.as_param()).unwrap_or("");
    let sort_dir = move || filters.get().sort.map(|s| s.dir).unwrap_or_default().as_param();

    view! {
        <div class="list-toolbar">
            <input
                type="search"
                placeholder="Search by title..."
                prop:value=move || filters.get().search
                on:input=move |ev| ctx.change_filters(FilterChange::Search(event_target_value(&ev)))
            />

            <select on:change=move |ev| {
                ctx.change_filters(FilterChange::Status(StatusFilter::from_param(&event_target_value(&ev))))
            }>
                <option value="ALL" selected=move || filters.get().status == StatusFilter::All>"All statuses"</option>
                {Status::ALL.into_iter().map(|status| view! {
                    <option
                        value=status.as_str()
                        selected=move || filters.get().status == StatusFilter::Only(status)
                    >
                        {status.as_str()}
                    </option>
                }).collect_view()}
            </select>

            <select on:change=move |ev| {
                let field = event_target_value(&ev);
                ctx.change_filters(FilterChange::Sort(sort_from_controls(&field, sort_dir())))
            }>
                <option value="" selected=move || sort_field().is_empty()>"Default order"</option>
                {SortField::ALL.into_iter().map(|field| view! {
                    <option value=field.as_param() selected=move || sort_field() == field.as_param()>
                        {field.label()}
                    </option>
                }).collect_view()}
            </select>

            <select
                disabled=move || sort_field().is_empty()
                on:change=move |ev| {
                    let dir = event_target_value(&ev);
                    ctx.change_filters(FilterChange::Sort(sort_from_controls(sort_field(), &dir)))
                }
            >
                <option value="asc" selected=move || sort_dir() == "asc">"Ascending"</option>
                <option value="desc" selected=move || sort_dir() == "desc">"Descending"</option>
            </select>

            <label class="page-size">
                "Per page "
                <select on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<u32>() {
                        ctx.change_filters(FilterChange::PageSize(size));
                    }
                }>
                    {PAGE_SIZE_OPTIONS.into_iter().map(|size| view! {
                        <option value=size.to_string() selected=move || paging.get().page_size == size>
                            {size.to_string()}
                        </option>
                    }).collect_view()}
                </select>
            </label>

            <button class="primary" on:click=move |_| ctx.new_record()>"New"</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_from_controls() {
        assert_eq!(sort_from_controls("", "desc"), None);
        assert_eq!(
            sort_from_controls("rating", "desc"),
            Some(SortSpec { field: SortField::Rating, dir: SortDir::Desc })
        );
        assert_eq!(
            sort_from_controls("title", "whatever"),
            Some(SortSpec { field: SortField::Title, dir: SortDir::Asc })
        );
    }
}
