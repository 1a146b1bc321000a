//! List controller
//!
//! Owns one screen's record store together with its filter and pagination
//! state. Every event goes through here, and [`ListController::render`]
//! turns the result into a [`TableModel`].

use crate::error::ConsoleResult;
use crate::filter::{self, CategoryMatch, FilterState};
use crate::pagination::{PageWindow, Pagination};
use crate::render::{self, TableModel};
use crate::store::RecordStore;
use crate::types::Record;

/// Search / filter / paginate / CRUD over one record store
#[derive(Debug, Clone)]
pub struct ListController<R: Record> {
    store: RecordStore<R>,
    category_match: CategoryMatch,
    filter: FilterState,
    pagination: Pagination,
    filtered: Vec<usize>,
}

impl<R: Record> ListController<R> {
    pub fn new(store: RecordStore<R>, category_match: CategoryMatch) -> Self {
        let mut controller = Self {
            store,
            category_match,
            filter: FilterState::default(),
            pagination: Pagination::new(),
            filtered: Vec::new(),
        };
        controller.apply_filter();
        controller
    }

    pub fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = pagination;
        self.apply_filter();
        self
    }

    pub fn store(&self) -> &RecordStore<R> {
        &self.store
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn current_page(&self) -> usize {
        self.pagination.current_page()
    }

    pub fn page_count(&self) -> usize {
        self.pagination.page_count(self.filtered.len())
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Filtered records in store order
    pub fn filtered(&self) -> impl Iterator<Item = &R> {
        self.filtered
            .iter()
            .filter_map(|&index| self.store.records().get(index))
    }

    /// Records on the current page
    pub fn page_records(&self) -> impl Iterator<Item = &R> {
        let window = self.window();
        self.filtered().skip(window.start).take(window.end - window.start)
    }

    pub fn window(&self) -> PageWindow {
        self.pagination.window(self.filtered.len())
    }

    pub fn set_query(&mut self, query: &str) {
        self.filter.set_query(query);
        self.apply_filter();
    }

    pub fn set_category(&mut self, category: Option<&str>) {
        self.filter.set_category(category);
        self.apply_filter();
    }

    pub fn set_filter(&mut self, filter: FilterState) {
        self.filter = filter;
        self.apply_filter();
    }

    /// Recompute the filtered set and return to page one
    pub fn apply_filter(&mut self) {
        self.refilter();
        self.pagination.reset();
    }

    fn refilter(&mut self) {
        self.filtered = filter::apply(self.store.records(), &self.filter, self.category_match);
    }

    pub fn next_page(&mut self) -> bool {
        self.pagination.next(self.filtered.len())
    }

    pub fn prev_page(&mut self) -> bool {
        self.pagination.prev()
    }

    /// Move to the page holding `id` and return its row on that page.
    /// `None` (page unchanged) when the record is filtered out.
    pub fn reveal(&mut self, id: &str) -> Option<usize> {
        let position = self.filtered().position(|record| record.id() == id)?;
        let page_size = self.pagination.page_size();
        self.pagination
            .go_to(position / page_size + 1, self.filtered.len());
        Some(position % page_size)
    }

    pub fn render(&self) -> TableModel {
        render::render_table(self.store.records(), &self.filtered, &self.window())
    }

    pub fn find(&self, id: &str) -> Option<&R> {
        self.store.find(id)
    }

    /// Prepend a new record, then re-filter from page one
    pub fn prepend(&mut self, record: R) -> ConsoleResult<()> {
        self.store.prepend(record)?;
        self.apply_filter();
        Ok(())
    }

    /// Update a record in place, then re-filter from page one
    pub fn update<F>(&mut self, id: &str, apply: F) -> ConsoleResult<()>
    where
        F: FnOnce(&mut R),
    {
        self.store.update(id, apply)?;
        self.apply_filter();
        Ok(())
    }

    /// Remove a record; the current page is kept and only clamped
    pub fn remove(&mut self, id: &str) -> ConsoleResult<R> {
        let removed = self.store.remove(id)?;
        self.refilter();
        self.pagination.clamp(self.filtered.len());
        Ok(removed)
    }
}
