//! Filtering and ordering of the ticket table.
//!
//! The visible rows are always derived from scratch: every active column
//! filter is applied in fetch order, then the single active sort is applied
//! with a stable sort. Nothing is patched incrementally.

use std::collections::BTreeMap;

use crate::columns::{Column, ColumnKey, ColumnSet};
use crate::error::{BoardError, Result};
use crate::types::Ticket;

pub mod sort;

pub use sort::{SortDirection, SortState};

/// Per-column filter values. A column without an entry is unconstrained.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    filters: BTreeMap<ColumnKey, (Column, String)>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or, with an empty value, clear one column's filter.
    ///
    /// Other columns' filters are left as they are.
    pub fn set_filter(&mut self, column: &Column, value: impl Into<String>) -> Result<()> {
        if column.disable_filters {
            return Err(BoardError::FilterDisabled(column.key));
        }
        let value = value.into();
        if value.is_empty() {
            self.filters.remove(&column.key);
        } else {
            self.filters.insert(column.key, (*column, value));
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.filters.clear();
    }

    /// Current filter value of a column, if any
    pub fn value(&self, key: ColumnKey) -> Option<&str> {
        self.filters.get(&key).map(|(_, value)| value.as_str())
    }

    /// Active filters as `(column, value)` pairs in column order
    pub fn active(&self) -> impl Iterator<Item = (ColumnKey, &str)> {
        self.filters
            .iter()
            .map(|(key, (_, value))| (*key, value.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// True when the ticket satisfies every active filter.
    pub fn matches(&self, ticket: &Ticket) -> bool {
        self.filters
            .values()
            .all(|(column, value)| column.matches(ticket, value))
    }
}

/// Filter in fetch order, then stable-sort by the active sort.
pub fn visible_rows<'a>(
    tickets: &'a [Ticket],
    filters: &FilterState,
    sort: &SortState,
) -> Vec<&'a Ticket> {
    let mut rows: Vec<&Ticket> = tickets.iter().filter(|t| filters.matches(t)).collect();
    sort.sort_rows(&mut rows);
    rows
}

/// A filter and sort configuration that can be applied to ticket data.
#[derive(Debug, Clone, Default)]
pub struct TicketQuery {
    pub filters: FilterState,
    pub sort: SortState,
}

impl TicketQuery {
    pub fn apply<'a>(&self, tickets: &'a [Ticket]) -> Vec<&'a Ticket> {
        visible_rows(tickets, &self.filters, &self.sort)
    }
}

/// Query builder resolving column names against a column set
pub struct TicketQueryBuilder<'c> {
    columns: &'c ColumnSet,
    query: TicketQuery,
}

impl<'c> TicketQueryBuilder<'c> {
    pub fn new(columns: &'c ColumnSet) -> Self {
        Self {
            columns,
            query: TicketQuery::default(),
        }
    }

    /// Add a filter on a named column (AND composition)
    pub fn with_filter(mut self, column: &str, value: &str) -> Result<Self> {
        let column = self.columns.resolve(column)?;
        self.query.filters.set_filter(column, value)?;
        Ok(self)
    }

    /// Parse and add a `column=value` filter
    pub fn with_filter_expr(self, expr: &str) -> Result<Self> {
        let (column, value) = expr.split_once('=').ok_or_else(|| {
            BoardError::Other(format!("invalid filter '{expr}', expected COLUMN=VALUE"))
        })?;
        self.with_filter(column.trim(), value)
    }

    /// Set the sort column and direction
    pub fn with_sort(mut self, column: &str, direction: SortDirection) -> Result<Self> {
        let column = self.columns.resolve(column)?;
        self.query.sort.set(column, direction);
        Ok(self)
    }

    pub fn build(self) -> TicketQuery {
        self.query
    }
}
