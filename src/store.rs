//! Collection State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! Holds only the current page of records; everything else lives on the server.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::controller::LoadState;
use crate::models::{ListFilters, Record, Stats};
use crate::paging::PageState;

/// Transient UI state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct CollectionState {
    /// Records of the page on screen
    pub records: Vec<Record>,
    pub paging: PageState,
    pub filters: ListFilters,
    /// Last stats snapshot, None until first loaded
    pub stats: Option<Stats>,
    pub list_load: LoadState,
    pub stats_load: LoadState,
}

impl CollectionState {
    pub fn new(page_size: u32) -> Self {
        Self {
            paging: PageState::with_page_size(page_size),
            ..Default::default()
        }
    }
}

pub type CollectionStore = Store<CollectionState>;

// ========================
// Store Helper Functions
// ========================

/// Install a freshly fetched page
pub fn store_set_page(store: &CollectionStore, records: Vec<Record>, paging: PageState) {
    store.records().set(records);
    store.paging().set(paging);
    store.list_load().set(LoadState::Idle);
}

/// Find a record of the current page by id
pub fn store_find_record(store: &CollectionStore, id: &str) -> Option<Record> {
    store.records().read_untracked().iter().find(|r| r.id == id).cloned()
}
