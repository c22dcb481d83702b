use serde_json::json;

use super::{configured_columns, load_store, print_json};
use crate::config::Config;
use crate::display::render_view;
use crate::error::Result;
use crate::query::{SortDirection, TicketQueryBuilder};
use crate::view::{ViewState, compute_view_model};

/// Options for the `ls` command
#[derive(Debug, Clone, Default)]
pub struct LsOptions {
    /// `COLUMN=VALUE` filter expressions
    pub filters: Vec<String>,
    pub sort: Option<String>,
    pub descending: bool,
    pub json: bool,
}

/// List the visible tickets for the given filters and sort
pub async fn cmd_ls(config: &Config, options: LsOptions) -> Result<()> {
    let columns = configured_columns(config);

    // Validate the query before fetching anything
    let mut builder = TicketQueryBuilder::new(&columns);
    for expr in &options.filters {
        builder = builder.with_filter_expr(expr)?;
    }
    if let Some(sort) = &options.sort {
        let direction = if options.descending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        builder = builder.with_sort(sort, direction)?;
    }
    let query = builder.build();

    let store = load_store(config).await?;
    let mut state = ViewState::new(columns.clone());
    state.store = store;
    state.filters = query.filters;
    state.sort = query.sort;

    if options.json {
        let rows = state.visible_rows();
        print_json(&json!(rows))?;
        return Ok(());
    }

    let vm = compute_view_model(&state);
    println!("{}", render_view(&vm));
    Ok(())
}
