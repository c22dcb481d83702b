//! Ticket sources.
//!
//! A source is the collaborator that fetches the full ticket collection once
//! per view. The table engine never talks to the network or the filesystem
//! directly; it only sees what a [`TicketSource`] returns.

pub mod file;
pub mod http;

use std::future::Future;

use crate::config::Config;
use crate::error::{BoardError, Result};
use crate::types::Ticket;

pub use file::FileTicketSource;
pub use http::HttpTicketSource;

/// Fetches every ticket in one call.
pub trait TicketSource: Send + Sync {
    /// Fetch the full ticket collection
    fn find_all_tickets(&self) -> impl Future<Output = Result<Vec<Ticket>>> + Send;
}

/// Source selected from configuration.
#[derive(Debug)]
pub enum ConfiguredSource {
    Http(HttpTicketSource),
    File(FileTicketSource),
}

impl ConfiguredSource {
    /// Build the source the configuration names. A file takes precedence
    /// over a URL when both are set.
    pub fn from_config(config: &Config) -> Result<Self> {
        if let Some(path) = &config.source.file {
            return Ok(ConfiguredSource::File(FileTicketSource::new(path.clone())));
        }
        if let Some(url) = &config.source.url {
            let source = HttpTicketSource::new(
                url,
                &config.source.path,
                config.source.token.clone(),
                config.source.timeout(),
            )?;
            return Ok(ConfiguredSource::Http(source));
        }
        Err(BoardError::Config(
            "no ticket source configured; set source.url, source.file, TICKETBOARD_URL, --url or --file"
                .to_string(),
        ))
    }
}

impl TicketSource for ConfiguredSource {
    async fn find_all_tickets(&self) -> Result<Vec<Ticket>> {
        match self {
            ConfiguredSource::Http(source) => source.find_all_tickets().await,
            ConfiguredSource::File(source) => source.find_all_tickets().await,
        }
    }
}

/// Decode a JSON array of tickets.
///
/// Accepts either a bare array or an object wrapping it under `tickets` or
/// `data`, which covers the common REST envelope shapes.
pub fn decode_tickets(body: &str) -> Result<Vec<Ticket>> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    let array = match value {
        serde_json::Value::Array(items) => serde_json::Value::Array(items),
        serde_json::Value::Object(mut map) => map
            .remove("tickets")
            .or_else(|| map.remove("data"))
            .ok_or_else(|| {
                BoardError::Api("response is not a ticket array".to_string())
            })?,
        _ => return Err(BoardError::Api("response is not a ticket array".to_string())),
    };
    Ok(serde_json::from_value(array)?)
}
