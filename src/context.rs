//! Application Context
//!
//! Shared state and user actions provided via Leptos Context API.
//! Each action mutates state, issues at most one request chain, and
//! writes the response back to the store.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiResult, HttpApi, RecordsApi};
use crate::config;
use crate::controller::{self, ActiveView, FilterChange, LoadState, SubmitError, SubmitOutcome};
use crate::models::{Record, Stats};
use crate::paging::PageState;
use crate::prefs;
use crate::store::{store_find_record, store_set_page, CollectionStateStoreFields, CollectionStore};
use crate::validation::{RecordForm, ValidationRules};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: CollectionStore,
    api: HttpApi,
    /// Which of the three views is visible
    pub active_view: RwSignal<ActiveView>,
    /// Form contents; `id` set while editing
    pub form: RwSignal<RecordForm>,
    /// Inline error line under the form
    pub form_error: RwSignal<Option<String>>,
    pub rules: ValidationRules,
}

impl AppContext {
    pub fn new(store: CollectionStore, api: HttpApi) -> Self {
        Self {
            store,
            api,
            active_view: RwSignal::new(ActiveView::List),
            form: RwSignal::new(RecordForm::default()),
            form_error: RwSignal::new(None),
            rules: config::validation_rules(),
        }
    }

    // ========================
    // Views
    // ========================

    /// Tab click. List and Stats reload; the form tab starts a new record.
    pub fn show(&self, view: ActiveView) {
        match view {
            ActiveView::List => self.refresh_list(),
            ActiveView::Stats => self.refresh_stats(),
            ActiveView::Form => self.clear_form(),
        }
        self.active_view.set(view);
    }

    pub fn new_record(&self) {
        self.clear_form();
        self.active_view.set(ActiveView::Form);
    }

    pub fn edit_record(&self, id: &str) {
        let Some(record) = store_find_record(&self.store, id) else {
            log::warn!("[FORM] Record {} is not on the current page", id);
            return;
        };
        self.form.set(RecordForm::from_record(&record));
        self.form_error.set(None);
        self.active_view.set(ActiveView::Form);
    }

    pub fn clear_form(&self) {
        self.form.set(RecordForm::default());
        self.form_error.set(None);
    }

    // ========================
    // Data
    // ========================

    pub fn refresh_list(&self) {
        let ctx = *self;
        spawn_local(async move {
            if let Err(msg) = ctx.load_list().await {
                log::error!("[LIST] {}", msg);
            }
        });
    }

    /// First load of the list and the stats; a failure here most likely
    /// means a wrong base URL, so it is reported in one alert
    pub fn initial_load(&self) {
        let ctx = *self;
        spawn_local(async move {
            let mut paging = ctx.store.paging().get_untracked();
            let filters = ctx.store.filters().get_untracked();
            ctx.store.list_load().set(LoadState::Loading);
            ctx.store.stats_load().set(LoadState::Loading);

            let (records, stats) = controller::initial_load(&ctx.api, &mut paging, &filters).await;
            let list_err = ctx.apply_list(records, paging).err();
            let stats_err = ctx.apply_stats(stats).err();

            if let Some(message) =
                controller::startup_failure_message(list_err.as_deref(), stats_err.as_deref(), ctx.api.base())
            {
                log::error!("[APP] Initial load failed: {}", message);
                alert(&message);
            }
        });
    }

    async fn load_list(&self) -> Result<(), String> {
        let mut paging = self.store.paging().get_untracked();
        let filters = self.store.filters().get_untracked();
        self.store.list_load().set(LoadState::Loading);
        let records = controller::refresh_list(&self.api, &mut paging, &filters).await;
        self.apply_list(records, paging)
    }

    fn apply_list(&self, records: ApiResult<Vec<Record>>, paging: PageState) -> Result<(), String> {
        match records {
            Ok(records) => {
                store_set_page(&self.store, records, paging);
                Ok(())
            }
            Err(e) => {
                self.store.list_load().set(LoadState::Error(e.to_string()));
                Err(e.to_string())
            }
        }
    }

    pub fn refresh_stats(&self) {
        let ctx = *self;
        spawn_local(async move {
            if let Err(msg) = ctx.load_stats().await {
                log::error!("[STATS] {}", msg);
            }
        });
    }

    async fn load_stats(&self) -> Result<(), String> {
        self.store.stats_load().set(LoadState::Loading);
        let stats = self.api.get_stats().await;
        self.apply_stats(stats)
    }

    fn apply_stats(&self, stats: ApiResult<Stats>) -> Result<(), String> {
        match stats {
            Ok(stats) => {
                self.store.stats().set(Some(stats));
                self.store.stats_load().set(LoadState::Idle);
                Ok(())
            }
            Err(e) => {
                self.store.stats_load().set(LoadState::Error(e.to_string()));
                Err(e.to_string())
            }
        }
    }

    // ========================
    // List controls
    // ========================

    /// Search, filter, sort or page size changed; always back to page 1
    pub fn change_filters(&self, change: FilterChange) {
        if let FilterChange::PageSize(size) = change {
            prefs::save_page_size(size);
        }
        let mut paging = self.store.paging().get_untracked();
        let mut filters = self.store.filters().get_untracked();
        controller::change_filters(&mut paging, &mut filters, change);
        self.store.paging().set(paging);
        self.store.filters().set(filters);
        self.refresh_list();
    }

    pub fn prev_page(&self) {
        let mut paging = self.store.paging().get_untracked();
        if paging.prev() {
            self.store.paging().set(paging);
            self.refresh_list();
        }
    }

    pub fn next_page(&self) {
        let mut paging = self.store.paging().get_untracked();
        if paging.next() {
            self.store.paging().set(paging);
            self.refresh_list();
        }
    }

    // ========================
    // Mutations
    // ========================

    /// Called after the user confirmed the delete
    pub fn delete_record(&self, id: String) {
        let ctx = *self;
        spawn_local(async move {
            let mut paging = ctx.store.paging().get_untracked();
            let filters = ctx.store.filters().get_untracked();
            match controller::delete_and_rebalance(&ctx.api, &mut paging, &filters, &id).await {
                Ok(records) => {
                    store_set_page(&ctx.store, records, paging);
                    if ctx.form.get_untracked().id.as_deref() == Some(id.as_str()) {
                        ctx.clear_form();
                        ctx.active_view.set(ActiveView::List);
                    }
                    if let Err(msg) = ctx.load_stats().await {
                        log::warn!("[STATS] Refresh after delete failed: {}", msg);
                    }
                }
                Err(e) => {
                    log::error!("[LIST] Delete {} failed: {}", id, e);
                    alert(&e.to_string());
                }
            }
        });
    }

    pub fn submit_form(&self) {
        let ctx = *self;
        let form = self.form.get_untracked();
        spawn_local(async move {
            let mut paging = ctx.store.paging().get_untracked();
            let filters = ctx.store.filters().get_untracked();
            match controller::submit_record(&ctx.api, &mut paging, &filters, &form, ctx.rules).await {
                Ok(SubmitOutcome { records, stats }) => {
                    store_set_page(&ctx.store, records, paging);
                    // Saved either way; a stats error keeps the form open with the message
                    match ctx.apply_stats(stats) {
                        Ok(()) => {
                            ctx.form_error.set(None);
                            ctx.active_view.set(ActiveView::List);
                        }
                        Err(msg) => ctx.form_error.set(Some(msg)),
                    }
                }
                Err(SubmitError::Invalid(errs)) => {
                    log::debug!("[FORM] Rejected: {}", errs);
                    ctx.form_error.set(Some(errs.to_string()));
                }
                Err(SubmitError::Api(e)) => {
                    log::error!("[FORM] Save failed: {}", e);
                    ctx.form_error.set(Some(e.to_string()));
                }
            }
        });
    }
}

/// Page size to start with: the saved cookie, else the default
pub fn initial_page_size() -> u32 {
    prefs::load_page_size().unwrap_or(config::DEFAULT_PAGE_SIZE)
}

/// Blocking browser alert
fn alert(message: &str) {
    if window().alert_with_message(message).is_err() {
        log::error!("[APP] alert failed: {}", message);
    }
}

/// Get the app context; provided by `App`
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

