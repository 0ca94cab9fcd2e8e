use serde::{Deserialize, Serialize};

/// Fixed page size sent with every list request.
pub const PAGE_SIZE: u32 = 10;

/// The part of the list view state that drives requests: current page and
/// raw search text. Pages are 1-based; the bounds clamping and the
/// search-resets-page rule live here so the view cannot get them wrong.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListQuery {
    pub page: u32,
    pub search: String,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            search: String::new(),
        }
    }
}

impl ListQuery {
    /// Replace the search text. Always moves back to page 1.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self, total_pages: u32) -> bool {
        self.page < total_pages
    }

    /// Move back one page, never below 1.
    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    /// Move forward one page, never past `total_pages`.
    pub fn next_page(&mut self, total_pages: u32) {
        self.page = (self.page + 1).min(total_pages.max(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_page_one_with_empty_search() {
        let query = ListQuery::default();
        assert_eq!(query.page, 1);
        assert!(query.search.is_empty());
    }

    #[test]
    fn setting_search_resets_page() {
        let mut query = ListQuery {
            page: 7,
            search: String::new(),
        };
        query.set_search("INC-");
        assert_eq!(query.page, 1);
        assert_eq!(query.search, "INC-");
    }

    #[test]
    fn prev_never_goes_below_one() {
        let mut query = ListQuery::default();
        assert!(!query.has_prev());
        query.prev_page();
        assert_eq!(query.page, 1);

        query.page = 3;
        assert!(query.has_prev());
        query.prev_page();
        assert_eq!(query.page, 2);
    }

    #[test]
    fn next_never_exceeds_total_pages() {
        let mut query = ListQuery {
            page: 4,
            search: String::new(),
        };
        assert!(!query.has_next(4));
        query.next_page(4);
        assert_eq!(query.page, 4);

        query.page = 2;
        assert!(query.has_next(4));
        query.next_page(4);
        assert_eq!(query.page, 3);
    }

    #[test]
    fn next_handles_zero_total_pages() {
        let mut query = ListQuery::default();
        query.next_page(0);
        assert_eq!(query.page, 1);
    }
}
