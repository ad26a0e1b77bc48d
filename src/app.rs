//! Collection Manager App
//!
//! Root component: tab bar plus the three views, one visible at a time.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::HttpApi;
use crate::components::{ListToolbar, Pager, RecordEditor, RecordTable, StatsPanel, TabBar};
use crate::config;
use crate::context::{initial_page_size, AppContext};
use crate::controller::ActiveView;
use crate::store::CollectionState;

#[component]
pub fn App() -> impl IntoView {
    let page_size = initial_page_size();
    log::info!("[APP] Starting against {} with page size {}", config::api_base(), page_size);

    let store = Store::new(CollectionState::new(page_size));
    let ctx = AppContext::new(store, HttpApi::new(config::api_base()));

    // Provide to all children
    provide_context(ctx);

    // Initial load
    ctx.initial_load();

    let is_view = move |view: ActiveView| move || ctx.active_view.get() == view;

    view! {
        <div class="app-layout">
            <header>
                <h1>"Collection Manager"</h1>
                <TabBar />
            </header>

            <main class="main-content">
                <Show when=is_view(ActiveView::List)>
                    <section class="view-list">
                        <ListToolbar />
                        <RecordTable />
                        <Pager />
                    </section>
                </Show>
                <Show when=is_view(ActiveView::Form)>
                    <section class="view-form">
                        <RecordEditor />
                    </section>
                </Show>
                <Show when=is_view(ActiveView::Stats)>
                    <section class="view-stats">
                        <StatsPanel />
                    </section>
                </Show>
            </main>
        </div>
    }
}
