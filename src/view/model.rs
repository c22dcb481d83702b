//! Table view model types for testable state management
//!
//! This module separates state (ViewState) from what is rendered (ViewModel).
//! All engine state changes go through `reduce_view_state`, and everything the
//! renderer needs is derived by `compute_view_model` from scratch on every
//! call, so a rendered table can never lag behind its filters or sort.

use crate::columns::{ColumnKey, ColumnSet};
use crate::detail::{DetailProjection, project};
use crate::error::{BoardError, Result};
use crate::query::{FilterState, SortDirection, SortState, visible_rows};
use crate::store::{LoadState, TicketStore};
use crate::types::Ticket;

/// Label of the trigger cell in the action column
pub const DETAIL_TRIGGER: &str = "Details";

/// Open/close toggle of the detail overlay.
///
/// Owned by the rendering side; it only remembers which ticket is shown and
/// never feeds back into filtering or sorting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailDisclosure {
    open: Option<String>,
}

impl DetailDisclosure {
    pub fn open(&mut self, ticket_id: impl Into<String>) {
        self.open = Some(ticket_id.into());
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn ticket_id(&self) -> Option<&str> {
        self.open.as_deref()
    }
}

/// Raw state that changes during user interaction
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub store: TicketStore,
    pub columns: ColumnSet,
    pub filters: FilterState,
    pub sort: SortState,
    pub detail: DetailDisclosure,
}

impl ViewState {
    pub fn new(columns: ColumnSet) -> Self {
        Self {
            columns,
            ..Default::default()
        }
    }

    /// The visible row sequence for the current store, filters and sort
    pub fn visible_rows(&self) -> Vec<&Ticket> {
        visible_rows(self.store.all(), &self.filters, &self.sort)
    }
}

/// All possible actions on the view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction {
    // Load
    /// The single fetch resolved with these tickets
    Loaded(Vec<Ticket>),
    /// The single fetch failed
    LoadFailed(String),

    // Filter
    /// Set one column's filter; an empty value clears it
    SetFilter { column: ColumnKey, value: String },
    /// Drop every column filter
    ClearFilters,

    // Sort
    /// Header click: advance the column through the sort cycle
    ToggleSort(ColumnKey),

    // Detail
    /// Show the detail overlay for a ticket id
    OpenDetail(String),
    /// Hide the detail overlay
    CloseDetail,
}

/// Empty-table explanations, in priority order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmptyState {
    Loading,
    LoadFailed(String),
    NoTickets,
    NoMatches,
}

/// Computed view model for rendering the table
#[derive(Debug, Clone)]
pub struct ViewModel {
    pub headers: Vec<HeaderViewModel>,
    pub rows: Vec<RowViewModel>,
    /// Projection of the ticket whose detail overlay is open
    pub detail: Option<DetailProjection>,
    pub empty_state: Option<EmptyState>,
    pub total_tickets: usize,
}

/// View model for one column header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderViewModel {
    pub key: ColumnKey,
    pub label: &'static str,
    pub sort: SortDirection,
    pub filter: Option<String>,
    pub filterable: bool,
}

/// View model for one visible row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowViewModel {
    pub id: String,
    /// One cell per header, in header order
    pub cells: Vec<String>,
}

// ============================================================================
// Pure Functions
// ============================================================================

/// Pure function: compute view model from state
pub fn compute_view_model(state: &ViewState) -> ViewModel {
    let headers: Vec<HeaderViewModel> = state
        .columns
        .iter()
        .map(|column| HeaderViewModel {
            key: column.key,
            label: column.label,
            sort: state.sort.direction_for(column.key),
            filter: state.filters.value(column.key).map(str::to_string),
            filterable: !column.disable_filters,
        })
        .collect();

    let visible = state.visible_rows();
    let rows: Vec<RowViewModel> = visible
        .iter()
        .map(|ticket| RowViewModel {
            id: ticket.id.clone(),
            cells: state
                .columns
                .iter()
                .map(|column| {
                    if column.key == ColumnKey::Action {
                        DETAIL_TRIGGER.to_string()
                    } else {
                        column.value(ticket).to_string()
                    }
                })
                .collect(),
        })
        .collect();

    let detail = state
        .detail
        .ticket_id()
        .and_then(|id| state.store.get(id))
        .map(project);

    let empty_state = compute_empty_state(state.store.load_state(), state.store.len(), rows.len());

    ViewModel {
        headers,
        rows,
        detail,
        empty_state,
        total_tickets: state.store.len(),
    }
}

/// Why the table is empty, if it is
pub fn compute_empty_state(
    load_state: &LoadState,
    total: usize,
    visible: usize,
) -> Option<EmptyState> {
    match load_state {
        LoadState::Pending => Some(EmptyState::Loading),
        LoadState::Failed(message) => Some(EmptyState::LoadFailed(message.clone())),
        LoadState::Loaded if total == 0 => Some(EmptyState::NoTickets),
        LoadState::Loaded if visible == 0 => Some(EmptyState::NoMatches),
        LoadState::Loaded => None,
    }
}

/// Apply an action to the state (reducer pattern)
///
/// Rejected actions leave the state untouched.
pub fn reduce_view_state(state: &mut ViewState, action: ViewAction) -> Result<()> {
    tracing::debug!(?action, "reduce");
    match action {
        ViewAction::Loaded(tickets) => state.store.populate(tickets)?,
        ViewAction::LoadFailed(message) => state.store.fail(message)?,
        ViewAction::SetFilter { column, value } => {
            let column = state.columns.get(column)?;
            state.filters.set_filter(column, value)?;
        }
        ViewAction::ClearFilters => state.filters.clear(),
        ViewAction::ToggleSort(column) => {
            let column = state.columns.get(column)?;
            state.sort.toggle_sort(column);
        }
        ViewAction::OpenDetail(id) => {
            if state.store.get(&id).is_none() {
                return Err(BoardError::TicketNotFound(id));
            }
            state.detail.open(id);
        }
        ViewAction::CloseDetail => state.detail.close(),
    }
    Ok(())
}
