//! HTTP ticket source.
//!
//! Fetches `GET <base_url>/<path>` and decodes the body as a JSON ticket
//! array. The bearer token is held as a secret and never appears in `Debug`
//! output or logs.

use std::fmt;
use std::time::Duration;

use reqwest::header;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::error::{BoardError, Result};
use crate::types::Ticket;

use super::{TicketSource, decode_tickets};

/// Longest slice of an error body echoed back in an error message
const MAX_ERROR_BODY: usize = 200;

pub struct HttpTicketSource {
    client: Client,
    endpoint: Url,
    token: Option<SecretString>,
}

impl HttpTicketSource {
    pub fn new(
        base_url: &str,
        path: &str,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("ticketboard/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Self::with_client(client, base_url, path, token)
    }

    pub(crate) fn with_client(
        client: Client,
        base_url: &str,
        path: &str,
        token: Option<String>,
    ) -> Result<Self> {
        Ok(Self {
            client,
            endpoint: endpoint_url(base_url, path)?,
            token: token.map(SecretString::from),
        })
    }
}

impl fmt::Debug for HttpTicketSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTicketSource")
            .field("endpoint", &self.endpoint.as_str())
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl TicketSource for HttpTicketSource {
    async fn find_all_tickets(&self) -> Result<Vec<Ticket>> {
        tracing::debug!(endpoint = %self.endpoint, "fetching tickets");

        let mut request = self
            .client
            .get(self.endpoint.clone())
            .header(header::ACCEPT, "application/json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token.expose_secret());
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(api_error(status, &body));
        }

        let tickets = decode_tickets(&body)?;
        tracing::info!(count = tickets.len(), "fetched tickets");
        Ok(tickets)
    }
}

/// Join the base URL and endpoint path without dropping a base path prefix
/// (`https://host/api` + `/tickets` is `https://host/api/tickets`).
pub fn endpoint_url(base_url: &str, path: &str) -> Result<Url> {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim().trim_start_matches('/');
    let joined = if path.is_empty() {
        base.to_string()
    } else {
        format!("{base}/{path}")
    };
    let url = Url::parse(&joined)
        .map_err(|e| BoardError::Config(format!("invalid ticket source URL '{joined}': {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(BoardError::Config(format!(
            "unsupported URL scheme '{other}' for ticket source"
        ))),
    }
}

/// Error for a non-success response, with a bounded excerpt of the body
pub fn api_error(status: StatusCode, body: &str) -> BoardError {
    let body = body.trim();
    let excerpt: String = body.chars().take(MAX_ERROR_BODY).collect();
    if excerpt.is_empty() {
        BoardError::Api(format!("ticket source returned {status}"))
    } else {
        BoardError::Api(format!("ticket source returned {status}: {excerpt}"))
    }
}
