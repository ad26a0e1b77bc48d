//! Persisted Preferences
//!
//! Page size survives reloads in a cookie.

use wasm_bindgen::JsCast;

use crate::config::{is_page_size_option, COOKIE_MAX_AGE_SECS, PAGE_SIZE_COOKIE};

/// Find a page size in a `document.cookie` string. Values outside the
/// selector's options are ignored.
pub fn page_size_from_cookies(cookies: &str) -> Option<u32> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == PAGE_SIZE_COOKIE)
        .and_then(|(_, value)| value.trim().parse::<u32>().ok())
        .filter(|size| is_page_size_option(*size))
}

pub fn page_size_cookie(page_size: u32) -> String {
    format!(
        "{}={}; max-age={}; path=/; samesite=lax",
        PAGE_SIZE_COOKIE, page_size, COOKIE_MAX_AGE_SECS
    )
}

fn html_document() -> Option<web_sys::HtmlDocument> {
    web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
}

pub fn load_page_size() -> Option<u32> {
    let cookies = html_document()?.cookie().ok()?;
    page_size_from_cookies(&cookies)
}

pub fn save_page_size(page_size: u32) {
    let Some(doc) = html_document() else {
        log::warn!("[PREFS] No document, page size not saved");
        return;
    };
    if let Err(e) = doc.set_cookie(&page_size_cookie(page_size)) {
        log::warn!("[PREFS] Failed to write cookie: {:?}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_string_attributes() {
        assert_eq!(page_size_cookie(25), "pageSize=25; max-age=31536000; path=/; samesite=lax");
    }

    #[test]
    fn test_written_cookie_is_read_back() {
        // The browser exposes only name=value pairs on read
        let header = page_size_cookie(25);
        let visible = header.split(';').next().unwrap();
        assert_eq!(page_size_from_cookies(&format!("theme=dark; {}", visible)), Some(25));
    }

    #[test]
    fn test_invalid_or_missing_values() {
        assert_eq!(page_size_from_cookies(""), None);
        assert_eq!(page_size_from_cookies("pageSize=abc"), None);
        assert_eq!(page_size_from_cookies("pageSize=7"), None);
        assert_eq!(page_size_from_cookies("xpageSize=25"), None);
    }
}
