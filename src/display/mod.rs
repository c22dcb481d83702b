//! Text rendering of the table view model.
//!
//! Everything here is a pure function from view model to `String`; callers
//! decide where it is printed.

use owo_colors::{OwoColorize, Stream};
use tabled::builder::Builder;
use tabled::settings::Style;

use crate::detail::DetailProjection;
use crate::query::SortDirection;
use crate::view::{EmptyState, HeaderViewModel, ViewModel};

/// Header text with its sort indicator
pub fn format_header(header: &HeaderViewModel) -> String {
    match header.sort {
        SortDirection::Ascending => format!("{} ▲", header.label),
        SortDirection::Descending => format!("{} ▼", header.label),
        SortDirection::None => header.label.to_string(),
    }
}

/// Human explanation of an empty table
pub fn empty_state_message(state: &EmptyState) -> String {
    match state {
        EmptyState::Loading => "Loading tickets...".to_string(),
        EmptyState::LoadFailed(message) => format!("Could not load tickets: {message}"),
        EmptyState::NoTickets => "No tickets found.".to_string(),
        EmptyState::NoMatches => "No tickets match the current filters.".to_string(),
    }
}

/// Render the visible rows as a table, or the empty-state message.
pub fn render_table(vm: &ViewModel) -> String {
    if let Some(empty) = &vm.empty_state {
        return empty_state_message(empty);
    }

    let mut builder = Builder::default();
    let mut header = vec!["#".to_string()];
    header.extend(vm.headers.iter().map(format_header));
    builder.push_record(header);

    for (index, row) in vm.rows.iter().enumerate() {
        let mut record = vec![(index + 1).to_string()];
        record.extend(row.cells.iter().cloned());
        builder.push_record(record);
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

/// `filter: Name~"Crash", Priority~"High"` line, or `None` without filters
pub fn format_active_filters(vm: &ViewModel) -> Option<String> {
    let parts: Vec<String> = vm
        .headers
        .iter()
        .filter_map(|h| h.filter.as_ref().map(|f| format!("{}~\"{}\"", h.label, f)))
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(format!("filter: {}", parts.join(", ")))
    }
}

/// `2 of 3 ticket(s)` footer
pub fn format_summary(vm: &ViewModel) -> String {
    format!("{} of {} ticket(s)", vm.rows.len(), vm.total_tickets)
}

/// Table, filter line and summary as printed to a terminal
pub fn render_view(vm: &ViewModel) -> String {
    let mut out = String::new();
    if let Some(filters) = format_active_filters(vm) {
        out.push_str(&format!(
            "{}\n",
            filters.if_supports_color(Stream::Stdout, |t| t.cyan())
        ));
    }
    out.push_str(&render_table(vm));
    out.push('\n');
    out.push_str(&format!(
        "{}",
        format_summary(vm).if_supports_color(Stream::Stdout, |t| t.dimmed())
    ));
    if let Some(detail) = &vm.detail {
        out.push_str("\n\n");
        out.push_str(&render_detail(detail));
    }
    out
}

/// Two-column detail layout: the first four fields on the left, the rest on
/// the right.
pub fn render_detail(detail: &DetailProjection) -> String {
    let (left, right) = detail.halves();
    let mut builder = Builder::default();
    for (l, r) in left.iter().zip(right.iter()) {
        builder.push_record([
            l.label.to_string(),
            l.value.clone(),
            r.label.to_string(),
            r.value.clone(),
        ]);
    }
    let mut table = builder.build();
    table.with(Style::rounded());
    format!(
        "{}\n{table}",
        "Details".if_supports_color(Stream::Stdout, |t| t.bold())
    )
}
