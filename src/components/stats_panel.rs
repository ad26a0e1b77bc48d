//! Stats Panel Component
//!
//! Read-only view of the server's aggregate over the whole collection.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::controller::LoadState;
use crate::stats::{dash_or, format_avg, format_top_genre, status_breakdown};
use crate::store::CollectionStateStoreFields;

#[component]
pub fn StatsPanel() -> impl IntoView {
    let ctx = use_app_context();
    let stats = ctx.store.stats();
    let load = ctx.store.stats_load();
    let paging = ctx.store.paging();

    let snapshot = move || stats.get().unwrap_or_default();

    view! {
        <section class="stats-panel">
            {move || match load.get() {
                LoadState::Error(msg) => view! { <p class="status-line error">{msg}</p> }.into_any(),
                LoadState::Loading if stats.with(|s| s.is_none()) => {
                    view! { <p class="status-line">"Loading..."</p> }.into_any()
                }
                _ => ().into_any(),
            }}
            <div class="stat-cards">
                <div class="stat-card">
                    <span class="stat-label">"Total records"</span>
                    <span class="stat-value">{move || dash_or(snapshot().total_records)}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-label">"Completed"</span>
                    <span class="stat-value">{move || dash_or(snapshot().completed_count)}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-label">"Page size"</span>
                    <span class="stat-value">{move || paging.get().page_size}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-label">"Avg rating (completed)"</span>
                    <span class="stat-value">{move || format_avg(snapshot().avg_rating_completed)}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-label">"Top genre"</span>
                    <span class="stat-value">{move || format_top_genre(snapshot().top_genre.as_deref())}</span>
                </div>
            </div>
            <h3>"By status"</h3>
            <ul class="status-breakdown">
                {move || status_breakdown(&snapshot()).into_iter().map(|(status, count)| view! {
                    <li>{format!("{}: {}", status, count)}</li>
                }).collect_view()}
            </ul>
        </section>
    }
}
