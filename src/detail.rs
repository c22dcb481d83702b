//! Drill-down projection of a single ticket.

use serde::Serialize;

use crate::types::Ticket;

/// Labels of the projected fields, in display order
pub const DETAIL_LABELS: [&str; 8] = [
    "Name",
    "Id",
    "Description",
    "Submitter",
    "Assigned Dev",
    "priority",
    "status",
    "type",
];

/// One labeled value of a detail projection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailField {
    pub label: &'static str,
    pub value: String,
}

/// The eight-field summary of one ticket shown in the detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DetailProjection {
    fields: [DetailField; 8],
}

impl DetailProjection {
    pub fn fields(&self) -> &[DetailField] {
        &self.fields
    }

    /// Value of the field with `label`
    pub fn get(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.label == label)
            .map(|f| f.value.as_str())
    }

    /// The first four fields form the left half of a two-column layout
    pub fn halves(&self) -> (&[DetailField], &[DetailField]) {
        self.fields.split_at(4)
    }
}

/// Project a ticket onto the detail fields. Values pass through unchanged.
pub fn project(ticket: &Ticket) -> DetailProjection {
    let values = [
        &ticket.name,
        &ticket.id,
        &ticket.description,
        &ticket.submitter,
        &ticket.assigned_developer,
        &ticket.priority,
        &ticket.status,
        &ticket.ticket_type,
    ];
    let fields = std::array::from_fn(|i| DetailField {
        label: DETAIL_LABELS[i],
        value: values[i].clone(),
    });
    DetailProjection { fields }
}
