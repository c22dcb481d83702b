use serde_json::json;

use super::{load_store, print_json};
use crate::config::Config;
use crate::detail::project;
use crate::display::render_detail;
use crate::error::{BoardError, Result};

/// Display the detail projection of one ticket
pub async fn cmd_show(config: &Config, id: &str, output_json: bool) -> Result<()> {
    let store = load_store(config).await?;
    let ticket = store
        .get(id)
        .ok_or_else(|| BoardError::TicketNotFound(id.to_string()))?;
    let detail = project(ticket);

    if output_json {
        print_json(&json!(detail))?;
    } else {
        println!("{}", render_detail(&detail));
    }
    Ok(())
}
