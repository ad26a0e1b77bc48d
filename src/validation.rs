//! Record Form Validation
//!
//! Turns raw form input into a `RecordInput`, collecting every problem
//! instead of stopping at the first.

use std::ops::RangeInclusive;

use thiserror::Error;

use crate::models::{Record, RecordInput, RecordType, Status};

pub const YEAR_RANGE: RangeInclusive<i32> = 1900..=2100;
pub const RATING_RANGE: RangeInclusive<i32> = 1..=10;

/// All validation messages of one submit, shown inline as one line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .0.join(" "))]
pub struct ValidationErrors(pub Vec<String>);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRules {
    pub require_image_url: bool,
}

impl ValidationRules {
    /// Every record must carry an image
    pub const STRICT: ValidationRules = ValidationRules { require_image_url: true };

    pub fn image_url_label(&self) -> &'static str {
        if self.require_image_url { "Image URL" } else { "Image URL (optional)" }
    }
}

/// Image URL optional; the default API base never stores `imageUrl`
impl Default for ValidationRules {
    fn default() -> Self {
        Self { require_image_url: false }
    }
}

/// Raw form contents. `id` is set when editing an existing record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordForm {
    pub id: Option<String>,
    pub title: String,
    pub record_type: String,
    pub genre: String,
    pub year: String,
    pub rating: String,
    pub status: String,
    pub notes: String,
    pub image_url: String,
}

impl RecordForm {
    pub fn from_record(record: &Record) -> Self {
        Self {
            id: Some(record.id.clone()),
            title: record.title.clone(),
            record_type: record.record_type.as_str().to_string(),
            genre: record.genre.clone(),
            year: record.year.to_string(),
            rating: record.rating.map(|r| r.to_string()).unwrap_or_default(),
            status: record.status.as_str().to_string(),
            notes: record.notes.clone(),
            image_url: record.image_url.clone().unwrap_or_default(),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.as_deref().is_some_and(|id| !id.is_empty())
    }

    pub fn heading(&self) -> &'static str {
        if self.is_edit() { "Edit Record" } else { "Add Record" }
    }

    pub fn to_input(&self, rules: ValidationRules) -> Result<RecordInput, ValidationErrors> {
        let mut errs = Vec::new();

        let title = self.title.trim();
        if title.is_empty() {
            errs.push("Title is required.");
        }
        let record_type = self.record_type.parse::<RecordType>().ok();
        if record_type.is_none() {
            errs.push("Type is required.");
        }
        let genre = self.genre.trim();
        if genre.is_empty() {
            errs.push("Genre is required.");
        }

        let year = self.year.trim().parse::<i32>().ok();
        match year {
            None => errs.push("Year must be a whole number."),
            Some(y) if !YEAR_RANGE.contains(&y) => errs.push("Year must be between 1900 and 2100."),
            Some(_) => {}
        }

        let status = self.status.parse::<Status>().ok();
        if status.is_none() {
            errs.push("Status is required.");
        }

        let rating_raw = self.rating.trim();
        let rating = if rating_raw.is_empty() {
            None
        } else {
            match rating_raw.parse::<i32>() {
                Ok(r) if RATING_RANGE.contains(&r) => Some(r),
                Ok(_) => {
                    errs.push("Rating must be between 1 and 10.");
                    None
                }
                Err(_) => {
                    errs.push("Rating must be a whole number.");
                    None
                }
            }
        };

        let image_url = self.image_url.trim();
        if rules.require_image_url && image_url.is_empty() {
            errs.push("Image URL is required.");
        }

        match (record_type, year, status) {
            (Some(record_type), Some(year), Some(status)) if errs.is_empty() => Ok(RecordInput {
                title: title.to_string(),
                record_type,
                genre: genre.to_string(),
                year,
                rating,
                status,
                notes: self.notes.trim().to_string(),
                image_url: (!image_url.is_empty()).then(|| image_url.to_string()),
            }),
            _ => Err(ValidationErrors(errs.into_iter().map(String::from).collect())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Lenient;

    fn valid_form() -> RecordForm {
        RecordForm {
            id: None,
            title: " Arrival ".into(),
            record_type: "Movie".into(),
            genre: "Sci-Fi".into(),
            year: "2016".into(),
            rating: "".into(),
            status: "Completed".into(),
            notes: "  rewatch  ".into(),
            image_url: "https://img.example/arrival.jpg".into(),
        }
    }

    fn year_ok(year: &str) -> bool {
        let form = RecordForm { year: year.into(), ..valid_form() };
        form.to_input(ValidationRules::default()).is_ok()
    }

    fn rating_ok(rating: &str) -> bool {
        let form = RecordForm { rating: rating.into(), ..valid_form() };
        form.to_input(ValidationRules::default()).is_ok()
    }

    #[test]
    fn test_valid_form_trims_and_converts() {
        let input = valid_form().to_input(ValidationRules::default()).unwrap();
        assert_eq!(input.title, "Arrival");
        assert_eq!(input.notes, "rewatch");
        assert_eq!(input.record_type, RecordType::Movie);
        assert_eq!(input.status, Status::Completed);
        assert_eq!(input.rating, None);
    }

    #[test]
    fn test_rating_string_becomes_integer() {
        let form = RecordForm { rating: "7".into(), ..valid_form() };
        assert_eq!(form.to_input(ValidationRules::default()).unwrap().rating, Some(7));
    }

    #[test]
    fn test_year_bounds() {
        assert!(!year_ok("1899"));
        assert!(year_ok("1900"));
        assert!(year_ok("2100"));
        assert!(!year_ok("2101"));
    }

    #[test]
    fn test_rating_bounds() {
        assert!(!rating_ok("0"));
        assert!(rating_ok("1"));
        assert!(rating_ok("10"));
        assert!(!rating_ok("11"));
    }

    #[test]
    fn test_non_numeric_year_and_rating() {
        let form = RecordForm { year: "soon".into(), rating: "great".into(), ..valid_form() };
        let errs = form.to_input(ValidationRules::default()).unwrap_err();
        assert_eq!(
            errs.0,
            vec!["Year must be a whole number.", "Rating must be a whole number."]
        );
    }

    #[test]
    fn test_errors_are_aggregated_in_order() {
        let errs = RecordForm::default().to_input(ValidationRules::STRICT).unwrap_err();
        assert_eq!(
            errs.to_string(),
            "Title is required. Type is required. Genre is required. \
             Year must be a whole number. Status is required. Image URL is required."
        );
    }

    #[test]
    fn test_image_url_required_only_by_strict_rules() {
        let form = RecordForm { image_url: "   ".into(), ..valid_form() };
        let errs = form.to_input(ValidationRules::STRICT).unwrap_err();
        assert_eq!(errs.to_string(), "Image URL is required.");
        let input = form.to_input(ValidationRules::default()).unwrap();
        assert_eq!(input.image_url, None);
    }

    #[test]
    fn test_default_rules_save_a_record_without_image() {
        let form = RecordForm { image_url: String::new(), ..valid_form() };
        let errs = RecordForm::default().to_input(ValidationRules::default()).unwrap_err();
        assert!(!errs.0.iter().any(|m| m.starts_with("Image URL")));
        assert!(form.to_input(ValidationRules::default()).is_ok());
        assert_eq!(ValidationRules::default().image_url_label(), "Image URL (optional)");
    }

    #[test]
    fn test_from_record_round_trips_for_edit() {
        let record = Record {
            id: "r9".into(),
            title: "Dune".into(),
            record_type: RecordType::Book.into(),
            genre: "Sci-Fi".into(),
            year: 1965,
            rating: Some(10),
            status: Status::Watching.into(),
            notes: String::new(),
            image_url: Some("https://img.example/dune.jpg".into()),
        };
        let form = RecordForm::from_record(&record);
        assert!(form.is_edit());
        assert_eq!(form.heading(), "Edit Record");
        assert_eq!(form.rating, "10");
        let input = form.to_input(ValidationRules::default()).unwrap();
        assert_eq!(input.year, 1965);
        assert_eq!(input.rating, Some(10));
    }

    #[test]
    fn test_unknown_server_type_must_be_fixed_before_saving() {
        let record = Record {
            id: "r3".into(),
            title: "Akira".into(),
            record_type: Lenient::Other("Anime".into()),
            genre: "Sci-Fi".into(),
            year: 1988,
            rating: None,
            status: Status::Completed.into(),
            notes: String::new(),
            image_url: None,
        };
        let form = RecordForm::from_record(&record);
        assert_eq!(form.record_type, "Anime");
        let errs = form.to_input(ValidationRules::default()).unwrap_err();
        assert_eq!(errs.0, vec!["Type is required."]);
    }
}
