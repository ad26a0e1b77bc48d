//! Client Configuration
//!
//! Compile-time settings for the remote service and list defaults.

use crate::models::Status;
use crate::validation::ValidationRules;

/// Production API, overridable at build time with `COLLECTION_API_BASE`.
/// It drops `imageUrl` on save, so the image URL stays optional unless
/// the build sets `COLLECTION_REQUIRE_IMAGE_URL` for a backend that stores it.
const DEFAULT_API_BASE: &str = "https://solo-2-back.onrender.com";

pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Sizes offered by the page-size selector; anything else is ignored
pub const PAGE_SIZE_OPTIONS: [u32; 4] = [5, 10, 25, 50];

pub const PAGE_SIZE_COOKIE: &str = "pageSize";

/// One year
pub const COOKIE_MAX_AGE_SECS: u32 = 31_536_000;

pub const STATUS_ORDER: [Status; 4] = Status::ALL;

/// Base URL of the collection API, without a trailing slash
pub fn api_base() -> &'static str {
    option_env!("COLLECTION_API_BASE")
        .unwrap_or(DEFAULT_API_BASE)
        .trim_end_matches('/')
}

/// Form rules matching the configured backend
pub fn validation_rules() -> ValidationRules {
    rules_for(option_env!("COLLECTION_REQUIRE_IMAGE_URL"))
}

fn rules_for(require_image_url: Option<&str>) -> ValidationRules {
    match require_image_url {
        Some("1") | Some("true") => ValidationRules::STRICT,
        _ => ValidationRules::default(),
    }
}

pub fn is_page_size_option(size: u32) -> bool {
    PAGE_SIZE_OPTIONS.contains(&size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_base_has_no_trailing_slash() {
        assert!(!api_base().ends_with('/'));
        assert!(api_base().starts_with("http"));
    }

    #[test]
    fn test_image_url_required_only_when_build_opts_in() {
        assert!(!rules_for(None).require_image_url);
        assert!(!rules_for(Some("0")).require_image_url);
        assert!(rules_for(Some("true")).require_image_url);
        assert_eq!(rules_for(Some("1")), ValidationRules::STRICT);
    }

    #[test]
    fn test_default_page_size_is_an_option() {
        assert!(is_page_size_option(DEFAULT_PAGE_SIZE));
        assert!(!is_page_size_option(7));
    }
}
