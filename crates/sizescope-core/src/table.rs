//! Client-side pagination over an in-memory row set.
//!
//! [`PageState`] is plain data so it can sit behind a reactive signal on the
//! frontend and be tested natively. It never stores the rows themselves, only
//! the page index and page size, and takes the row count as an argument
//! wherever it matters.

use std::ops::Range;

/// Current position within a paginated row set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    page_index: usize,
    page_size: usize,
}

impl PageState {
    /// Creates a state on the first page. A zero page size is bumped to one
    /// so a page can never be empty while rows exist.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_index: 0,
            page_size: page_size.max(1),
        }
    }

    /// Zero-based index of the current page.
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Rows per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages needed for `row_count` rows. Zero when there are no
    /// rows.
    pub fn page_count(&self, row_count: usize) -> usize {
        row_count.div_ceil(self.page_size)
    }

    /// Whether a page exists before the current one.
    pub fn can_previous(&self) -> bool {
        self.page_index > 0
    }

    /// Whether a page exists after the current one.
    pub fn can_next(&self, row_count: usize) -> bool {
        self.page_index + 1 < self.page_count(row_count)
    }

    /// Index range of the rows on the current page, clamped to the row set.
    pub fn window(&self, row_count: usize) -> Range<usize> {
        let start = (self.page_index * self.page_size).min(row_count);
        let end = (start + self.page_size).min(row_count);
        start..end
    }

    /// Jumps to `page`, clamped to the last existing page.
    pub fn goto(&mut self, page: usize, row_count: usize) {
        let last = self.page_count(row_count).saturating_sub(1);
        self.page_index = page.min(last);
    }

    /// Advances one page, staying put on the last page.
    pub fn next(&mut self, row_count: usize) {
        if self.can_next(row_count) {
            self.page_index += 1;
        }
    }

    /// Goes back one page, staying put on the first page.
    pub fn previous(&mut self) {
        self.page_index = self.page_index.saturating_sub(1);
    }

    /// Changes the page size, keeping the previous top row visible by moving
    /// to the page that now contains it. A zero size is ignored.
    pub fn set_page_size(&mut self, page_size: usize, row_count: usize) {
        if page_size == 0 {
            return;
        }
        let top_row = self.page_index * self.page_size;
        self.page_size = page_size;
        self.goto(top_row / page_size, row_count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count_rounds_up() {
        let state = PageState::new(15);
        assert_eq!(state.page_count(0), 0);
        assert_eq!(state.page_count(1), 1);
        assert_eq!(state.page_count(15), 1);
        assert_eq!(state.page_count(16), 2);
        assert_eq!(state.page_count(45), 3);
    }

    #[test]
    fn test_window_covers_partial_last_page() {
        let mut state = PageState::new(15);
        assert_eq!(state.window(38), 0..15);
        state.next(38);
        assert_eq!(state.window(38), 15..30);
        state.next(38);
        assert_eq!(state.window(38), 30..38);
    }

    #[test]
    fn test_window_is_empty_without_rows() {
        let state = PageState::new(15);
        assert_eq!(state.window(0), 0..0);
    }

    #[test]
    fn test_next_stops_at_last_page() {
        let mut state = PageState::new(10);
        state.next(25);
        state.next(25);
        assert_eq!(state.page_index(), 2);
        assert!(!state.can_next(25));
        state.next(25);
        assert_eq!(state.page_index(), 2);
    }

    #[test]
    fn test_previous_stops_at_first_page() {
        let mut state = PageState::new(10);
        assert!(!state.can_previous());
        state.previous();
        assert_eq!(state.page_index(), 0);
        state.next(25);
        assert!(state.can_previous());
        state.previous();
        assert_eq!(state.page_index(), 0);
    }

    #[test]
    fn test_goto_clamps_to_last_page() {
        let mut state = PageState::new(10);
        state.goto(99, 25);
        assert_eq!(state.page_index(), 2);
        state.goto(0, 25);
        assert_eq!(state.page_index(), 0);
        state.goto(5, 0);
        assert_eq!(state.page_index(), 0);
    }

    #[test]
    fn test_set_page_size_keeps_top_row_visible() {
        let mut state = PageState::new(10);
        state.goto(3, 100);
        // top row is 30; with 50 rows per page that row sits on page 0
        state.set_page_size(50, 100);
        assert_eq!(state.page_index(), 0);
        assert!(state.window(100).contains(&30));

        // back to small pages, row 0 is the top row again
        state.set_page_size(10, 100);
        assert_eq!(state.page_index(), 0);
    }

    #[test]
    fn test_set_page_size_from_middle_page() {
        let mut state = PageState::new(20);
        state.goto(2, 100);
        // top row 40 lands on page 4 with 10 rows per page
        state.set_page_size(10, 100);
        assert_eq!(state.page_index(), 4);
        assert_eq!(state.window(100), 40..50);
    }

    #[test]
    fn test_set_page_size_ignores_zero() {
        let mut state = PageState::new(15);
        state.set_page_size(0, 45);
        assert_eq!(state.page_size(), 15);
    }

    #[test]
    fn test_zero_page_size_is_bumped() {
        let state = PageState::new(0);
        assert_eq!(state.page_size(), 1);
    }
}
