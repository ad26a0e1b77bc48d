//! Frontend Models
//!
//! Data structures matching the collection API's JSON shapes.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of collection item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordType {
    Movie,
    Show,
    Book,
}

impl RecordType {
    pub const ALL: [RecordType; 3] = [RecordType::Movie, RecordType::Show, RecordType::Book];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::Movie => "Movie",
            RecordType::Show => "Show",
            RecordType::Book => "Book",
        }
    }
}

impl FromStr for RecordType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecordType::ALL.into_iter().find(|t| t.as_str() == s).ok_or(())
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for RecordType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Lifecycle tag of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Planned,
    Watching,
    Completed,
    Dropped,
}

impl Status {
    /// Display order used by the filter select and the stats breakdown
    pub const ALL: [Status; 4] = [Status::Planned, Status::Watching, Status::Completed, Status::Dropped];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Planned => "Planned",
            Status::Watching => "Watching",
            Status::Completed => "Completed",
            Status::Dropped => "Dropped",
        }
    }
}

impl FromStr for Status {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL.into_iter().find(|st| st.as_str() == s).ok_or(())
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Status {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// A known enum value, or whatever string the server sent instead
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Lenient<T> {
    Known(T),
    Other(String),
}

impl<T: AsRef<str>> Lenient<T> {
    pub fn as_str(&self) -> &str {
        match self {
            Lenient::Known(value) => value.as_ref(),
            Lenient::Other(raw) => raw,
        }
    }
}

impl<T> From<T> for Lenient<T> {
    fn from(value: T) -> Self {
        Lenient::Known(value)
    }
}

/// Whole-number ratings, also when sent as strings; anything else is no rating
fn lenient_rating<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let rating = match value {
        serde_json::Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
            .and_then(|v| i32::try_from(v).ok()),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    Ok(rating)
}

/// One collection item (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub record_type: Lenient<RecordType>,
    pub genre: String,
    pub year: i32,
    #[serde(default, deserialize_with = "lenient_rating")]
    pub rating: Option<i32>,
    pub status: Lenient<Status>,
    #[serde(default)]
    pub notes: String,
    #[serde(rename = "imageUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Body of a create or update request (record fields minus id)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordInput {
    pub title: String,
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub genre: String,
    pub year: i32,
    pub rating: Option<i32>,
    pub status: Status,
    pub notes: String,
    #[serde(rename = "imageUrl", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// One page of records as returned by `GET /api/records`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecordPage {
    #[serde(default)]
    pub items: Vec<Record>,
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(rename = "totalPages", default = "first_page")]
    pub total_pages: u32,
}

fn first_page() -> u32 {
    1
}

/// Server-computed aggregate over the whole collection
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Stats {
    #[serde(rename = "totalRecords", default)]
    pub total_records: Option<u32>,
    #[serde(rename = "completedCount", default)]
    pub completed_count: Option<u32>,
    #[serde(rename = "avgRatingCompleted", default)]
    pub avg_rating_completed: Option<f64>,
    #[serde(rename = "topGenre", default)]
    pub top_genre: Option<String>,
    #[serde(rename = "byStatus", default)]
    pub by_status: HashMap<String, u32>,
}

/// Status filter of the list view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(Status),
}

impl StatusFilter {
    /// Value sent in the `status` query parameter and used by the select control
    pub fn as_param(&self) -> &'static str {
        match self {
            StatusFilter::All => "ALL",
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    /// Unknown values fall back to `All`
    pub fn from_param(value: &str) -> Self {
        value.parse::<Status>().map(StatusFilter::Only).unwrap_or(StatusFilter::All)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
    Year,
    Rating,
    Genre,
    Status,
}

impl SortField {
    pub const ALL: [SortField; 5] = [
        SortField::Title,
        SortField::Year,
        SortField::Rating,
        SortField::Genre,
        SortField::Status,
    ];

    pub fn as_param(&self) -> &'static str {
        match self {
            SortField::Title => "title",
            SortField::Year => "year",
            SortField::Rating => "rating",
            SortField::Genre => "genre",
            SortField::Status => "status",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortField::Title => "Title",
            SortField::Year => "Year",
            SortField::Rating => "Rating",
            SortField::Genre => "Genre",
            SortField::Status => "Status",
        }
    }

    pub fn from_param(value: &str) -> Option<Self> {
        SortField::ALL.into_iter().find(|f| f.as_param() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDir {
    #[default]
    Asc,
    Desc,
}

impl SortDir {
    pub fn as_param(&self) -> &'static str {
        match self {
            SortDir::Asc => "asc",
            SortDir::Desc => "desc",
        }
    }

    pub fn from_param(value: &str) -> Self {
        if value == "desc" { SortDir::Desc } else { SortDir::Asc }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub dir: SortDir,
}

/// Search, filter and sort inputs of the list view
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListFilters {
    pub search: String,
    pub status: StatusFilter,
    pub sort: Option<SortSpec>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_deserializes_backend_shape() {
        let json = r#"{
            "id": "a1", "title": "Dune", "type": "Book", "genre": "Sci-Fi",
            "year": 1965, "rating": null, "status": "Planned", "notes": ""
        }"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.record_type, Lenient::Known(RecordType::Book));
        assert_eq!(record.rating, None);
        assert_eq!(record.image_url, None);
    }

    #[test]
    fn test_odd_record_does_not_sink_the_page() {
        let json = r#"{
            "items": [
                {"id": "a", "title": "Akira", "type": "Anime", "genre": "Sci-Fi",
                 "year": 1988, "rating": "7", "status": "Rewatching"},
                {"id": "b", "title": "Heat", "type": "Movie", "genre": "Crime",
                 "year": 1995, "rating": 8.0, "status": "Completed"},
                {"id": "c", "title": "Emma", "type": "Book", "genre": "Classic",
                 "year": 1815, "rating": "n/a", "status": "Planned"}
            ],
            "page": 1, "totalPages": 1
        }"#;
        let page: RecordPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.items.len(), 3);

        let akira = &page.items[0];
        assert_eq!(akira.record_type, Lenient::Other("Anime".into()));
        assert_eq!(akira.record_type.as_str(), "Anime");
        assert_eq!(akira.status, Lenient::Other("Rewatching".into()));
        assert_eq!(akira.rating, Some(7));

        assert_eq!(page.items[1].rating, Some(8));
        assert_eq!(page.items[1].status, Lenient::Known(Status::Completed));
        assert_eq!(page.items[2].rating, None);
    }

    #[test]
    fn test_record_input_omits_missing_image_url() {
        let input = RecordInput {
            title: "Alien".into(),
            record_type: RecordType::Movie,
            genre: "Horror".into(),
            year: 1979,
            rating: Some(9),
            status: Status::Completed,
            notes: String::new(),
            image_url: None,
        };
        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value["type"], "Movie");
        assert_eq!(value["rating"], 9);
        assert!(value.get("imageUrl").is_none());
        assert!(value.get("id").is_none());
    }

    #[test]
    fn test_record_page_defaults_when_fields_missing() {
        let page: RecordPage = serde_json::from_str("{}").unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_status_filter_param() {
        assert_eq!(StatusFilter::All.as_param(), "ALL");
        assert_eq!(StatusFilter::from_param("Dropped"), StatusFilter::Only(Status::Dropped));
        assert_eq!(StatusFilter::from_param("bogus"), StatusFilter::All);
    }
}
