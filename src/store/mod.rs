//! The record store: the ticket collection of one view.
//!
//! The store starts empty, is filled by exactly one load, and is read-only
//! afterwards. A failed load leaves it empty and remembers why.

use std::collections::HashSet;

use crate::error::{BoardError, Result};
use crate::source::TicketSource;
use crate::types::Ticket;

/// Where the single load of a store stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Pending,
    Loaded,
    Failed(String),
}

#[derive(Debug, Clone, Default)]
pub struct TicketStore {
    tickets: Vec<Ticket>,
    state: LoadState,
}

impl TicketStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store already holding `tickets`, as if loaded.
    pub fn from_tickets(tickets: Vec<Ticket>) -> Self {
        let mut store = Self::new();
        store.install(tickets);
        store
    }

    /// Fetch the collection from `source`. Only the first call fetches.
    ///
    /// On failure the store stays empty, records the failure, and the error
    /// is returned for the caller to surface.
    pub async fn load<S: TicketSource>(&mut self, source: &S) -> Result<usize> {
        self.ensure_pending()?;
        match source.find_all_tickets().await {
            Ok(tickets) => {
                self.install(tickets);
                Ok(self.tickets.len())
            }
            Err(e) => {
                tracing::warn!("failed to load tickets: {e}");
                self.state = LoadState::Failed(e.to_string());
                Err(e)
            }
        }
    }

    /// Install the result of a fetch made outside of [`TicketStore::load`].
    pub(crate) fn populate(&mut self, tickets: Vec<Ticket>) -> Result<()> {
        self.ensure_pending()?;
        self.install(tickets);
        Ok(())
    }

    /// Record a fetch made outside of [`TicketStore::load`] as failed.
    pub(crate) fn fail(&mut self, message: impl Into<String>) -> Result<()> {
        self.ensure_pending()?;
        self.state = LoadState::Failed(message.into());
        Ok(())
    }

    fn ensure_pending(&self) -> Result<()> {
        match self.state {
            LoadState::Pending => Ok(()),
            _ => Err(BoardError::AlreadyLoaded),
        }
    }

    /// Later duplicates of an id are dropped.
    fn install(&mut self, tickets: Vec<Ticket>) {
        let mut seen = HashSet::with_capacity(tickets.len());
        let mut kept = Vec::with_capacity(tickets.len());
        for ticket in tickets {
            if seen.insert(ticket.id.clone()) {
                kept.push(ticket);
            } else {
                tracing::warn!(id = %ticket.id, "dropping ticket with duplicate id");
            }
        }
        self.tickets = kept;
        self.state = LoadState::Loaded;
    }

    /// Current snapshot, empty until loaded
    pub fn all(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn load_state(&self) -> &LoadState {
        &self.state
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    /// Find a ticket by its identifier
    pub fn get(&self, id: &str) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id == id)
    }
}
