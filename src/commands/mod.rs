mod browse;
mod columns;
mod ls;
mod show;

pub use browse::{cmd_browse, run_session};
pub use columns::cmd_columns;
pub use ls::{LsOptions, cmd_ls};
pub use show::cmd_show;

use crate::columns::ColumnSet;
use crate::config::Config;
use crate::error::Result;
use crate::source::ConfiguredSource;
use crate::store::TicketStore;

/// Column set with the configured exact-match columns applied
pub fn configured_columns(config: &Config) -> ColumnSet {
    ColumnSet::standard().with_exact_match(&config.exact_match_columns)
}

/// Fetch the ticket collection once, propagating a failed load.
pub async fn load_store(config: &Config) -> Result<TicketStore> {
    let source = ConfiguredSource::from_config(config)?;
    let mut store = TicketStore::new();
    store.load(&source).await?;
    Ok(store)
}

/// Print a JSON value to stdout
pub fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
