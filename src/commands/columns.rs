use serde_json::json;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::{configured_columns, print_json};
use crate::columns::{Column, ValueKind};
use crate::config::Config;
use crate::error::Result;

/// A row in the column list table
#[derive(Tabled)]
struct ColumnRow {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Label")]
    label: &'static str,
    #[tabled(rename = "Filter")]
    filter: &'static str,
    #[tabled(rename = "Order")]
    order: &'static str,
}

fn filter_mode(column: &Column) -> &'static str {
    if column.disable_filters {
        "-"
    } else if column.predicate.is_some() {
        "exact"
    } else {
        "contains"
    }
}

fn order_name(kind: ValueKind) -> &'static str {
    match kind {
        ValueKind::Text => "text",
        ValueKind::Priority => "priority",
        ValueKind::Date => "date",
    }
}

/// List the table's columns and how each one filters and sorts
pub fn cmd_columns(config: &Config, output_json: bool) -> Result<()> {
    let columns = configured_columns(config);

    if output_json {
        let json_columns: Vec<serde_json::Value> = columns
            .iter()
            .map(|c| {
                json!({
                    "key": c.key,
                    "label": c.label,
                    "filter": filter_mode(c),
                    "order": order_name(c.ordering),
                })
            })
            .collect();
        return print_json(&json!(json_columns));
    }

    let rows: Vec<ColumnRow> = columns
        .iter()
        .map(|c| ColumnRow {
            key: c.key.to_string(),
            label: c.label,
            filter: filter_mode(c),
            order: order_name(c.ordering),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");
    Ok(())
}
