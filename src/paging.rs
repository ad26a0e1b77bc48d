//! Pagination State
//!
//! Page counters for the list view. The server owns the paging math;
//! this only mirrors what it reports and gates the pager buttons.

use crate::config::DEFAULT_PAGE_SIZE;
use crate::models::RecordPage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    /// 1-based
    pub current_page: u32,
    /// Always >= 1
    pub total_pages: u32,
    pub page_size: u32,
}

impl Default for PageState {
    fn default() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }
}

impl PageState {
    pub fn with_page_size(page_size: u32) -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            page_size,
        }
    }

    pub fn can_go_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn indicator(&self) -> String {
        format!("Page {} of {}", self.current_page, self.total_pages)
    }

    /// Back to the first page (search, filter or sort changed)
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    pub fn prev(&mut self) -> bool {
        if !self.can_go_prev() {
            return false;
        }
        self.current_page -= 1;
        true
    }

    pub fn next(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.current_page += 1;
        true
    }

    pub fn set_page_size(&mut self, page_size: u32) {
        self.page_size = page_size;
        self.reset();
    }

    /// Adopt the server's view of the current page
    pub fn apply(&mut self, page: &RecordPage) {
        self.current_page = page.page.max(1);
        self.total_pages = page.total_pages.max(1);
    }

    /// After a delete left the current page empty, move back one page.
    /// Returns whether a follow-up fetch is needed.
    pub fn step_back_if_empty(&mut self, items_on_page: usize) -> bool {
        if items_on_page == 0 && self.current_page > 1 {
            self.current_page -= 1;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(page: u32, total_pages: u32) -> RecordPage {
        RecordPage {
            items: Vec::new(),
            page,
            total_pages,
        }
    }

    #[test]
    fn test_pager_buttons_follow_response() {
        let cases = [(1, 1, false, false), (1, 3, false, true), (2, 3, true, true), (3, 3, true, false)];
        for (page, total, prev, next) in cases {
            let mut state = PageState::default();
            state.apply(&response(page, total));
            assert_eq!(state.can_go_prev(), prev, "prev for {} of {}", page, total);
            assert_eq!(state.can_go_next(), next, "next for {} of {}", page, total);
        }
    }

    #[test]
    fn test_apply_clamps_zero_values() {
        let mut state = PageState::default();
        state.apply(&response(0, 0));
        assert_eq!(state.current_page, 1);
        assert_eq!(state.total_pages, 1);
        assert_eq!(state.indicator(), "Page 1 of 1");
    }

    #[test]
    fn test_prev_next_stay_in_bounds() {
        let mut state = PageState::default();
        state.apply(&response(1, 2));
        assert!(!state.prev());
        assert!(state.next());
        assert_eq!(state.current_page, 2);
        assert!(!state.next());
        assert_eq!(state.current_page, 2);
    }

    #[test]
    fn test_set_page_size_resets_page() {
        let mut state = PageState::default();
        state.apply(&response(4, 6));
        state.set_page_size(25);
        assert_eq!(state.page_size, 25);
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn test_step_back_only_when_empty_and_not_first() {
        let mut state = PageState::default();
        state.apply(&response(3, 3));
        assert!(!state.step_back_if_empty(1));
        assert!(state.step_back_if_empty(0));
        assert_eq!(state.current_page, 2);

        let mut first = PageState::default();
        assert!(!first.step_back_if_empty(0));
        assert_eq!(first.current_page, 1);
    }
}
