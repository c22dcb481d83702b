use std::path::PathBuf;

use crate::error::{BoardError, Result};
use crate::types::Ticket;

use super::{TicketSource, decode_tickets};

/// Reads the ticket collection from a JSON file, e.g. an API response saved
/// to disk.
#[derive(Debug, Clone)]
pub struct FileTicketSource {
    path: PathBuf,
}

impl FileTicketSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TicketSource for FileTicketSource {
    async fn find_all_tickets(&self) -> Result<Vec<Ticket>> {
        tracing::debug!(path = %self.path.display(), "reading tickets");
        let body = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            BoardError::Io(std::io::Error::new(
                e.kind(),
                format!("failed to read {}: {e}", self.path.display()),
            ))
        })?;
        let tickets = decode_tickets(&body)?;
        tracing::info!(count = tickets.len(), "read tickets from file");
        Ok(tickets)
    }
}
