//! Grid model of the similarity table.
//!
//! The view state owns the loaded rows; the grid model only decides which of
//! them are displayed, in which order, and which page of them is visible.
//! Everything here works on positions into the row slice, so the rows
//! themselves (and their serial numbers) never change.
//!
//! - `columns`: fixed column declarations
//! - `filter`: per-column text and number filters
//! - `sort`: single-column sort
//! - `pagination`: fixed-size client-side pages

pub mod columns;
pub mod filter;
pub mod pagination;
pub mod sort;

use columns::ColumnKey;
use filter::{ColumnFilter, FilterModel};
use pagination::{PageSummary, Pagination};
use sort::{SortDirection, SortModel};

use crate::matches::MatchRow;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridModel {
    sort: SortModel,
    filters: FilterModel,
    pagination: Pagination,
}

impl GridModel {
    pub fn sort(&self) -> &SortModel {
        &self.sort
    }

    pub fn filters(&self) -> &FilterModel {
        &self.filters
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn toggle_sort(&mut self, key: ColumnKey) -> bool {
        self.sort.toggle(key)
    }

    pub fn set_sort(&mut self, key: ColumnKey, direction: SortDirection) -> bool {
        self.sort.set(key, direction)
    }

    /// Changing a filter goes back to the first page.
    pub fn set_filter(&mut self, key: ColumnKey, filter: ColumnFilter) -> bool {
        let changed = self.filters.set(key, filter);
        if changed {
            self.pagination.first();
        }
        changed
    }

    pub fn clear_filter(&mut self, key: ColumnKey) -> bool {
        let changed = self.filters.clear(key);
        if changed {
            self.pagination.first();
        }
        changed
    }

    /// Positions into `rows` that pass every filter, in sort order.
    pub fn displayed_indices(&self, rows: &[MatchRow]) -> Vec<usize> {
        let mut indices: Vec<usize> = rows
            .iter()
            .enumerate()
            .filter(|(_, row)| self.filters.matches(row))
            .map(|(index, _)| index)
            .collect();
        self.sort.apply(rows, &mut indices);
        indices
    }

    /// The slice of `displayed` on the current page.
    pub fn page_slice<'a>(&self, displayed: &'a [usize]) -> &'a [usize] {
        &displayed[self.pagination.range(displayed.len())]
    }

    /// Positions into `rows` shown on the current page.
    pub fn page_indices(&self, rows: &[MatchRow]) -> Vec<usize> {
        let displayed = self.displayed_indices(rows);
        self.page_slice(&displayed).to_vec()
    }

    pub fn page_summary(&self, displayed_total: usize) -> PageSummary {
        self.pagination.summary(displayed_total)
    }

    pub fn page_count(&self, displayed_total: usize) -> usize {
        self.pagination.page_count(displayed_total)
    }

    pub fn clamp_page(&mut self, displayed_total: usize) {
        self.pagination.clamp(displayed_total);
    }

    pub fn first_page(&mut self) {
        self.pagination.first();
    }

    pub fn previous_page(&mut self) {
        self.pagination.previous();
    }

    pub fn next_page(&mut self, displayed_total: usize) {
        self.pagination.next(displayed_total);
    }

    pub fn last_page(&mut self, displayed_total: usize) {
        self.pagination.last(displayed_total);
    }
}
