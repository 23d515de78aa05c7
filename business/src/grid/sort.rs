//! Single-column sorting.

use std::cmp::Ordering;

use super::columns::{CellValue, ColumnKey, column_def};
use crate::matches::MatchRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// At most one sorted column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortModel {
    active: Option<(ColumnKey, SortDirection)>,
}

impl SortModel {
    /// Header click: none, ascending, descending, none again.
    ///
    /// Clicking another column starts it at ascending. Unsortable columns
    /// are ignored. Returns whether the model changed.
    pub fn toggle(&mut self, key: ColumnKey) -> bool {
        if !column_def(key).sortable {
            return false;
        }
        self.active = match self.active {
            Some((current, SortDirection::Ascending)) if current == key => {
                Some((key, SortDirection::Descending))
            }
            Some((current, SortDirection::Descending)) if current == key => None,
            _ => Some((key, SortDirection::Ascending)),
        };
        true
    }

    pub fn set(&mut self, key: ColumnKey, direction: SortDirection) -> bool {
        if !column_def(key).sortable {
            return false;
        }
        let next = Some((key, direction));
        let changed = self.active != next;
        self.active = next;
        changed
    }

    pub fn active(&self) -> Option<(ColumnKey, SortDirection)> {
        self.active
    }

    pub fn direction_of(&self, key: ColumnKey) -> Option<SortDirection> {
        match self.active {
            Some((current, direction)) if current == key => Some(direction),
            _ => None,
        }
    }

    /// Reorders `indices` (positions into `rows`). Stable: ties keep their order.
    pub fn apply(&self, rows: &[MatchRow], indices: &mut [usize]) {
        let Some((key, direction)) = self.active else {
            return;
        };

        indices.sort_by(|&a, &b| {
            let ordering = compare_cells(key.value(&rows[a]), key.value(&rows[b]));
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }
}

/// Ordinal text order; missing numbers sort before every number.
fn compare_cells(a: CellValue<'_>, b: CellValue<'_>) -> Ordering {
    match (a, b) {
        (CellValue::Serial(a), CellValue::Serial(b)) => a.cmp(&b),
        (CellValue::Text(a), CellValue::Text(b)) => a.cmp(b),
        (CellValue::Number(a), CellValue::Number(b)) => match (a, b) {
            (Some(a), Some(b)) => a.total_cmp(&b),
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
        (a, b) => a.to_string().cmp(&b.to_string()),
    }
}
