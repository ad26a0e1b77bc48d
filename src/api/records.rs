//! Record Endpoints
//!
//! `/api/records` list, create, update and delete.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::models::{ListFilters, Record, RecordInput, RecordPage, SortSpec, StatusFilter};
use crate::paging::PageState;
use super::{api_fetch, ApiError, ApiResult, Method};

const RECORDS_PATH: &str = "/api/records";

/// Characters left alone by `encodeURIComponent`
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

// ========================
// Query
// ========================

/// Parameters of one list request
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    pub page: u32,
    pub page_size: u32,
    pub search: String,
    pub status: StatusFilter,
    pub sort: Option<SortSpec>,
}

impl ListQuery {
    pub fn new(paging: &PageState, filters: &ListFilters) -> Self {
        Self {
            page: paging.current_page,
            page_size: paging.page_size,
            search: filters.search.trim().to_string(),
            status: filters.status,
            sort: filters.sort,
        }
    }

    pub fn to_query_string(&self) -> String {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("pageSize", self.page_size.to_string()),
            ("search", self.search.clone()),
            ("status", self.status.as_param().to_string()),
        ];
        if let Some(sort) = self.sort {
            pairs.push(("sort", sort.field.as_param().to_string()));
            pairs.push(("dir", sort.dir.as_param().to_string()));
        }
        pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, encode_component(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

pub fn record_path(id: &str) -> String {
    format!("{}/{}", RECORDS_PATH, encode_component(id))
}

fn to_body(input: &RecordInput) -> ApiResult<String> {
    serde_json::to_string(input).map_err(|e| ApiError::Decode(e.to_string()))
}

// ========================
// Requests
// ========================

pub async fn list_records(base: &str, query: &ListQuery) -> ApiResult<RecordPage> {
    let path = format!("{}?{}", RECORDS_PATH, query.to_query_string());
    api_fetch(base, Method::Get, &path, None).await?.into_json()
}

/// Returns the created record when the server echoes it back
pub async fn create_record(base: &str, input: &RecordInput) -> ApiResult<Option<Record>> {
    let payload = api_fetch(base, Method::Post, RECORDS_PATH, Some(to_body(input)?)).await?;
    Ok(payload.into_json().ok())
}

pub async fn update_record(base: &str, id: &str, input: &RecordInput) -> ApiResult<()> {
    api_fetch(base, Method::Put, &record_path(id), Some(to_body(input)?)).await?;
    Ok(())
}

pub async fn delete_record(base: &str, id: &str) -> ApiResult<()> {
    api_fetch(base, Method::Delete, &record_path(id), None).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SortDir, SortField, Status};

    fn query(page: u32) -> ListQuery {
        ListQuery {
            page,
            page_size: 10,
            search: String::new(),
            status: StatusFilter::All,
            sort: None,
        }
    }

    #[test]
    fn test_query_string_without_sort() {
        assert_eq!(query(2).to_query_string(), "page=2&pageSize=10&search=&status=ALL");
    }

    #[test]
    fn test_query_string_with_sort_and_filter() {
        let q = ListQuery {
            search: "star wars".into(),
            status: StatusFilter::Only(Status::Watching),
            sort: Some(SortSpec { field: SortField::Year, dir: SortDir::Desc }),
            ..query(1)
        };
        assert_eq!(
            q.to_query_string(),
            "page=1&pageSize=10&search=star%20wars&status=Watching&sort=year&dir=desc"
        );
    }

    #[test]
    fn test_new_trims_search() {
        let paging = PageState { current_page: 3, total_pages: 5, page_size: 25 };
        let filters = ListFilters { search: "  dune ".into(), ..Default::default() };
        let q = ListQuery::new(&paging, &filters);
        assert_eq!(q.page, 3);
        assert_eq!(q.page_size, 25);
        assert_eq!(q.search, "dune");
    }

    #[test]
    fn test_record_path_encodes_id() {
        assert_eq!(record_path("abc-123"), "/api/records/abc-123");
        assert_eq!(record_path("a/b c"), "/api/records/a%2Fb%20c");
    }
}
