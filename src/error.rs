use thiserror::Error;

use crate::columns::ColumnKey;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("unknown column '{0}'")]
    InvalidColumn(String),

    #[error("column '{0}' does not support filtering")]
    FilterDisabled(ColumnKey),

    #[error("invalid sort direction '{0}'")]
    InvalidSortDirection(String),

    #[error("invalid priority '{0}'")]
    InvalidPriority(String),

    #[error("ticket '{0}' not found")]
    TicketNotFound(String),

    #[error("tickets have already been loaded for this view")]
    AlreadyLoaded,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, BoardError>;
