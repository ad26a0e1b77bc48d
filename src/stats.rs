//! Stats Formatting
//!
//! Display helpers for the read-only stats snapshot.

use crate::config::STATUS_ORDER;
use crate::models::{Stats, Status};

pub const PLACEHOLDER: &str = "—";

/// Counts for every known status in fixed order, 0 when the server left one out
pub fn status_breakdown(stats: &Stats) -> Vec<(Status, u32)> {
    STATUS_ORDER
        .iter()
        .map(|status| (*status, stats.by_status.get(status.as_str()).copied().unwrap_or(0)))
        .collect()
}

pub fn dash_or<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| PLACEHOLDER.to_string())
}

pub fn format_avg(avg: Option<f64>) -> String {
    dash_or(avg)
}

pub fn format_top_genre(genre: Option<&str>) -> String {
    dash_or(genre.filter(|g| !g.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_breakdown_fixed_order_with_zero_defaults() {
        let stats = Stats {
            by_status: HashMap::from([("Dropped".to_string(), 2), ("Planned".to_string(), 5)]),
            ..Default::default()
        };
        assert_eq!(
            status_breakdown(&stats),
            vec![
                (Status::Planned, 5),
                (Status::Watching, 0),
                (Status::Completed, 0),
                (Status::Dropped, 2),
            ]
        );
    }

    #[test]
    fn test_breakdown_ignores_unknown_statuses() {
        let stats = Stats {
            by_status: HashMap::from([("Paused".to_string(), 9)]),
            ..Default::default()
        };
        assert!(status_breakdown(&stats).iter().all(|(_, n)| *n == 0));
        assert_eq!(status_breakdown(&stats).len(), 4);
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(format_avg(None), "—");
        assert_eq!(format_avg(Some(8.5)), "8.5");
        assert_eq!(format_top_genre(Some("")), "—");
        assert_eq!(format_top_genre(Some("Drama")), "Drama");
        assert_eq!(dash_or(Some(12u32)), "12");
    }
}
