//! The fixed column catalogue of the ticket table.
//!
//! Each column pairs a display label with an accessor that extracts the
//! cell text from a [`Ticket`], an optional custom filter predicate, and the
//! kind of ordering used when the column is sorted.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::{BoardError, Result};
use crate::types::Ticket;

/// Identifies one column. Parses from the accessor name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKey {
    Name,
    Project,
    Submitter,
    AssignedDeveloper,
    Priority,
    Status,
    Type,
    CreatedDate,
    Action,
}

enum_display_fromstr!(
    ColumnKey,
    BoardError::InvalidColumn,
    {
        Name => "name",
        Project => "project",
        Submitter => "submitter",
        AssignedDeveloper => "assigned_developer" | "assigned_dev" | "assignee",
        Priority => "priority",
        Status => "status",
        Type => "type",
        CreatedDate => "created_date" | "created",
        Action => "action",
    }
);

/// How values of a column are ordered when it is the sort column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Lexicographic on the raw text
    Text,
    /// By [`crate::types::PriorityLevel`], unknown levels last
    Priority,
    /// Chronological, unparseable dates last
    Date,
}

/// Filter predicate: `(cell, needle) -> matches`
pub type Predicate = fn(&str, &str) -> bool;

/// Static description of one displayed ticket attribute.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub key: ColumnKey,
    pub label: &'static str,
    pub accessor: fn(&Ticket) -> &str,
    /// Replaces the default substring predicate when set
    pub predicate: Option<Predicate>,
    pub ordering: ValueKind,
    pub disable_filters: bool,
}

impl Column {
    pub fn value<'a>(&self, ticket: &'a Ticket) -> &'a str {
        (self.accessor)(ticket)
    }

    /// Test one ticket against a filter value for this column.
    pub fn matches(&self, ticket: &Ticket, needle: &str) -> bool {
        let predicate = self.predicate.unwrap_or(contains_predicate);
        predicate(self.value(ticket), needle)
    }

    /// Ascending order of two tickets by this column's value.
    pub fn compare(&self, a: &Ticket, b: &Ticket) -> Ordering {
        match self.ordering {
            ValueKind::Text => self.value(a).cmp(self.value(b)),
            ValueKind::Priority => {
                let (pa, pb) = (a.priority_level(), b.priority_level());
                pa.is_none()
                    .cmp(&pb.is_none())
                    .then(pa.cmp(&pb))
                    .then_with(|| self.value(a).cmp(self.value(b)))
            }
            ValueKind::Date => {
                let (da, db) = (a.created_at(), b.created_at());
                da.is_none()
                    .cmp(&db.is_none())
                    .then(da.cmp(&db))
                    .then_with(|| self.value(a).cmp(self.value(b)))
            }
        }
    }
}

/// Default predicate: case-sensitive substring containment
pub fn contains_predicate(cell: &str, needle: &str) -> bool {
    cell.contains(needle)
}

/// Predicate for enumerated columns: the whole cell must equal the value
pub fn exact_predicate(cell: &str, needle: &str) -> bool {
    cell == needle
}

fn name(t: &Ticket) -> &str {
    &t.name
}

fn project(t: &Ticket) -> &str {
    &t.project
}

fn submitter(t: &Ticket) -> &str {
    &t.submitter
}

fn assigned_developer(t: &Ticket) -> &str {
    &t.assigned_developer
}

fn priority(t: &Ticket) -> &str {
    &t.priority
}

fn status(t: &Ticket) -> &str {
    &t.status
}

fn ticket_type(t: &Ticket) -> &str {
    &t.ticket_type
}

fn created_date(t: &Ticket) -> &str {
    &t.created_date
}

fn no_value(_: &Ticket) -> &str {
    ""
}

const fn data_column(
    key: ColumnKey,
    label: &'static str,
    accessor: fn(&Ticket) -> &str,
    ordering: ValueKind,
) -> Column {
    Column {
        key,
        label,
        accessor,
        predicate: None,
        ordering,
        disable_filters: false,
    }
}

/// The standard columns, in display order.
pub const STANDARD_COLUMNS: [Column; 9] = [
    data_column(ColumnKey::Name, "Name", name, ValueKind::Text),
    data_column(ColumnKey::Project, "Project", project, ValueKind::Text),
    data_column(ColumnKey::Submitter, "Submitter", submitter, ValueKind::Text),
    data_column(
        ColumnKey::AssignedDeveloper,
        "Assigned Dev",
        assigned_developer,
        ValueKind::Text,
    ),
    data_column(ColumnKey::Priority, "Priority", priority, ValueKind::Priority),
    data_column(ColumnKey::Status, "Status", status, ValueKind::Text),
    data_column(ColumnKey::Type, "Type", ticket_type, ValueKind::Text),
    data_column(ColumnKey::CreatedDate, "Create Date", created_date, ValueKind::Date),
    // Non-data column hosting the detail trigger
    Column {
        key: ColumnKey::Action,
        label: "Action",
        accessor: no_value,
        predicate: None,
        ordering: ValueKind::Text,
        disable_filters: true,
    },
];

/// The ordered column list a view is built on.
#[derive(Debug, Clone)]
pub struct ColumnSet {
    columns: Vec<Column>,
}

impl ColumnSet {
    pub fn standard() -> Self {
        Self {
            columns: STANDARD_COLUMNS.to_vec(),
        }
    }

    /// Switch the given columns to whole-value matching.
    pub fn with_exact_match(mut self, keys: &[ColumnKey]) -> Self {
        for column in &mut self.columns {
            if keys.contains(&column.key) && !column.disable_filters {
                column.predicate = Some(exact_predicate);
            }
        }
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter()
    }

    /// Look up a column; every [`ColumnKey`] is present in a standard set.
    pub fn get(&self, key: ColumnKey) -> Result<&Column> {
        self.columns
            .iter()
            .find(|c| c.key == key)
            .ok_or_else(|| BoardError::InvalidColumn(key.to_string()))
    }

    /// Resolve a column name typed by a user or caller.
    pub fn resolve(&self, name: &str) -> Result<&Column> {
        let key: ColumnKey = name.parse()?;
        self.get(key)
    }
}

impl Default for ColumnSet {
    fn default() -> Self {
        Self::standard()
    }
}
