//! Single-column sort state and ticket ordering.
//!
//! At most one column is sorted at a time. Clicking a column header advances
//! that column through `none -> ascending -> descending -> none`; choosing a
//! different column starts it fresh at ascending.

use std::cmp::Ordering;

use crate::columns::{Column, ColumnKey};
use crate::error::BoardError;
use crate::types::Ticket;

/// Sort direction of one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Ascending,
    Descending,
    #[default]
    None,
}

enum_display_fromstr!(
    SortDirection,
    BoardError::InvalidSortDirection,
    {
        Ascending => "asc" | "ascending",
        Descending => "desc" | "descending",
        None => "none",
    }
);

impl SortDirection {
    /// The direction after one more toggle on the same column
    pub fn next(self) -> Self {
        match self {
            SortDirection::None => SortDirection::Ascending,
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::None,
        }
    }
}

/// The active sort column and direction, if any.
#[derive(Debug, Clone, Default)]
pub struct SortState {
    active: Option<(Column, SortDirection)>,
}

impl SortState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance `column` one step through the sort cycle.
    ///
    /// Any other column that was sorted goes back to unsorted first.
    pub fn toggle_sort(&mut self, column: &Column) {
        let current = self.direction_for(column.key);
        self.set(column, current.next());
    }

    /// Put `column` in `direction` directly, replacing any previous sort.
    pub fn set(&mut self, column: &Column, direction: SortDirection) {
        self.active = match direction {
            SortDirection::None => None,
            _ => Some((*column, direction)),
        };
    }

    /// The sorted column and its direction
    pub fn active(&self) -> Option<(ColumnKey, SortDirection)> {
        self.active.map(|(column, direction)| (column.key, direction))
    }

    /// Header indicator for a column
    pub fn direction_for(&self, key: ColumnKey) -> SortDirection {
        match self.active {
            Some((column, direction)) if column.key == key => direction,
            _ => SortDirection::None,
        }
    }

    /// Compare two tickets under the active sort.
    ///
    /// Returns `Equal` for every pair when nothing is sorted, which leaves a
    /// stable sort in fetch order.
    pub fn compare(&self, a: &Ticket, b: &Ticket) -> Ordering {
        match self.active {
            Some((column, SortDirection::Ascending)) => column.compare(a, b),
            Some((column, SortDirection::Descending)) => column.compare(b, a),
            _ => Ordering::Equal,
        }
    }

    /// Stable in-place sort of already filtered rows.
    pub fn sort_rows(&self, rows: &mut [&Ticket]) {
        if self.active.is_some() {
            rows.sort_by(|a, b| self.compare(a, b));
        }
    }
}
