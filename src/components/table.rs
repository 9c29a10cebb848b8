//! Reactive pagination state for container tables.

use leptos::prelude::*;
use sizescope_core::PageState;
use std::ops::Range;

/// Pagination state of one container table, backed by a signal.
///
/// `Copy` so event handlers can capture it freely. The row count is fixed at
/// mount time; the table re-mounts when its rows change.
#[derive(Clone, Copy)]
pub struct TableState {
    state: RwSignal<PageState>,
    row_count: usize,
}

impl TableState {
    pub fn new(page_size: usize, row_count: usize) -> Self {
        Self {
            state: RwSignal::new(PageState::new(page_size)),
            row_count,
        }
    }

    pub fn page_index(&self) -> usize {
        self.state.with(|state| state.page_index())
    }

    pub fn page_size(&self) -> usize {
        self.state.with(|state| state.page_size())
    }

    pub fn page_count(&self) -> usize {
        self.state.with(|state| state.page_count(self.row_count))
    }

    pub fn can_previous(&self) -> bool {
        self.state.with(|state| state.can_previous())
    }

    pub fn can_next(&self) -> bool {
        self.state.with(|state| state.can_next(self.row_count))
    }

    /// Index range of the rows on the current page.
    pub fn window(&self) -> Range<usize> {
        self.state.with(|state| state.window(self.row_count))
    }

    pub fn goto_first(&self) {
        let row_count = self.row_count;
        self.state.update(|state| state.goto(0, row_count));
    }

    pub fn goto_last(&self) {
        let row_count = self.row_count;
        self.state.update(|state| {
            let last = state.page_count(row_count).saturating_sub(1);
            state.goto(last, row_count);
        });
    }

    pub fn previous_page(&self) {
        self.state.update(|state| state.previous());
    }

    pub fn next_page(&self) {
        let row_count = self.row_count;
        self.state.update(|state| state.next(row_count));
    }

    pub fn set_page_size(&self, page_size: usize) {
        let row_count = self.row_count;
        self.state
            .update(|state| state.set_page_size(page_size, row_count));
    }
}
