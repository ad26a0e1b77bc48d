//! List Controller
//!
//! User actions as state transitions plus the requests they trigger.
//! Responses are applied in arrival order; a slower earlier request can
//! overwrite a newer one (last response wins).

use thiserror::Error;

use crate::api::{ApiError, ApiResult, ListQuery, RecordsApi};
use crate::models::{ListFilters, Record, SortSpec, Stats, StatusFilter};
use crate::paging::PageState;
use crate::validation::{RecordForm, ValidationErrors, ValidationRules};

/// The three mutually exclusive views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    List,
    Form,
    Stats,
}

impl ActiveView {
    pub const ALL: [ActiveView; 3] = [ActiveView::List, ActiveView::Form, ActiveView::Stats];

    pub fn label(&self) -> &'static str {
        match self {
            ActiveView::List => "Collection",
            ActiveView::Form => "Add / Edit",
            ActiveView::Stats => "Stats",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Error(String),
}

/// A change to one list control
#[derive(Debug, Clone, PartialEq)]
pub enum FilterChange {
    Search(String),
    Status(StatusFilter),
    Sort(Option<SortSpec>),
    PageSize(u32),
}

/// Apply a control change. Every change sends the next request for page 1.
pub fn change_filters(paging: &mut PageState, filters: &mut ListFilters, change: FilterChange) {
    match change {
        FilterChange::Search(search) => filters.search = search,
        FilterChange::Status(status) => filters.status = status,
        FilterChange::Sort(sort) => filters.sort = sort,
        FilterChange::PageSize(size) => return paging.set_page_size(size),
    }
    paging.reset();
}

/// Fetch the page `paging` points at and adopt the server's paging
pub async fn refresh_list<A: RecordsApi>(
    api: &A,
    paging: &mut PageState,
    filters: &ListFilters,
) -> ApiResult<Vec<Record>> {
    let query = ListQuery::new(paging, filters);
    let page = api.list_records(&query).await?;
    paging.apply(&page);
    log::debug!(
        "[LIST] {} items, {}",
        page.items.len(),
        paging.indicator()
    );
    Ok(page.items)
}

/// Startup: the first page and the stats, requested one after the other.
/// Both results are returned so a failure of either can be reported together.
pub async fn initial_load<A: RecordsApi>(
    api: &A,
    paging: &mut PageState,
    filters: &ListFilters,
) -> (ApiResult<Vec<Record>>, ApiResult<Stats>) {
    let records = refresh_list(api, paging, filters).await;
    let stats = api.get_stats().await;
    (records, stats)
}

/// One alert text for everything that failed at startup, `None` if all loaded
pub fn startup_failure_message(list_err: Option<&str>, stats_err: Option<&str>, base: &str) -> Option<String> {
    let mut lines = Vec::new();
    if let Some(msg) = list_err {
        lines.push(format!("Could not load records: {}", msg));
    }
    if let Some(msg) = stats_err {
        lines.push(format!("Could not load stats: {}", msg));
    }
    if lines.is_empty() {
        return None;
    }
    Some(format!(
        "{}\n\nCheck that the API at {} is running and reachable.",
        lines.join("\n"),
        base
    ))
}

/// Delete, then reload; an emptied page that is not the first steps back once.
pub async fn delete_and_rebalance<A: RecordsApi>(
    api: &A,
    paging: &mut PageState,
    filters: &ListFilters,
    id: &str,
) -> ApiResult<Vec<Record>> {
    api.delete_record(id).await?;
    log::info!("[LIST] Deleted record {}", id);

    let mut items = refresh_list(api, paging, filters).await?;
    if paging.step_back_if_empty(items.len()) {
        items = refresh_list(api, paging, filters).await?;
    }
    Ok(items)
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// A saved form: the refreshed page and the stats fetched after it
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitOutcome {
    pub records: Vec<Record>,
    /// The save itself succeeded even when this is an error
    pub stats: ApiResult<Stats>,
}

/// Validate and save the form. Edits keep the current page, new records
/// jump to page 1 so they show up. Invalid input never reaches the API.
pub async fn submit_record<A: RecordsApi>(
    api: &A,
    paging: &mut PageState,
    filters: &ListFilters,
    form: &RecordForm,
    rules: ValidationRules,
) -> Result<SubmitOutcome, SubmitError> {
    let input = form.to_input(rules)?;

    match form.id.as_deref().filter(|id| !id.is_empty()) {
        Some(id) => {
            api.update_record(id, &input).await?;
            log::info!("[FORM] Updated record {}", id);
        }
        None => {
            let created = api.create_record(&input).await?;
            log::info!("[FORM] Created record {:?}", created.map(|r| r.id));
            paging.reset();
        }
    }

    let records = refresh_list(api, paging, filters).await?;
    let stats = api.get_stats().await;
    if let Err(e) = &stats {
        log::warn!("[STATS] Refresh after save failed: {}", e);
    }
    Ok(SubmitOutcome { records, stats })
}
