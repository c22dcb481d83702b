#[macro_use]
mod macros;

pub mod columns;
pub mod commands;
pub mod config;
pub mod detail;
pub mod display;
pub mod error;
pub mod query;
pub mod source;
pub mod store;
pub mod types;
pub mod view;

pub use columns::{Column, ColumnKey, ColumnSet, ValueKind};
pub use config::Config;
pub use detail::{DetailField, DetailProjection, project};
pub use error::{BoardError, Result};
pub use query::{FilterState, SortDirection, SortState, TicketQuery, TicketQueryBuilder, visible_rows};
pub use source::{FileTicketSource, HttpTicketSource, TicketSource};
pub use store::{LoadState, TicketStore};
pub use types::{PriorityLevel, Ticket};
pub use view::{ViewAction, ViewModel, ViewState, compute_view_model, reduce_view_state};
