//! Text commands of the interactive session.
//!
//! Maps one input line to a [`SessionCommand`] without touching any state,
//! so the mapping can be tested on its own.

use crate::columns::ColumnSet;
use crate::error::{BoardError, Result};

use super::model::ViewAction;

/// What one line of input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Apply an action to the view
    Apply(ViewAction),
    /// Open the detail overlay of the n-th visible row (1-based)
    OpenRow(usize),
    /// A bare number: a ticket with exactly this id wins over the row number
    OpenRowOrId(String),
    Help,
    Quit,
    /// Blank line: just redraw
    Redraw,
}

pub const HELP_TEXT: &str = "\
commands:
  filter COLUMN VALUE...   filter a column (substring match)
  clear COLUMN             clear one column filter
  clear                    clear every filter
  sort COLUMN              cycle a column: asc, desc, none
  open ROW|ID              show ticket details (an exact id wins)
  open #ROW                show the details of a row
  close                    hide ticket details
  columns                  same as `help`, lists filterable columns
  quit                     leave the session";

/// Parse one line of input.
///
/// Column names are validated here; an unknown column is an error and no
/// action is produced.
pub fn parse_command(line: &str, columns: &ColumnSet) -> Result<SessionCommand> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_lowercase().as_str() {
        "" => Ok(SessionCommand::Redraw),
        "q" | "quit" | "exit" => Ok(SessionCommand::Quit),
        "h" | "help" | "?" | "columns" => Ok(SessionCommand::Help),
        "f" | "filter" => {
            let (column, value) = match rest.split_once(char::is_whitespace) {
                Some((column, value)) => (column, value.trim()),
                None => (rest, ""),
            };
            if column.is_empty() {
                return Err(usage("filter COLUMN VALUE..."));
            }
            let column = columns.resolve(column)?;
            Ok(SessionCommand::Apply(ViewAction::SetFilter {
                column: column.key,
                value: value.to_string(),
            }))
        }
        "c" | "clear" => {
            if rest.is_empty() {
                return Ok(SessionCommand::Apply(ViewAction::ClearFilters));
            }
            let column = columns.resolve(rest)?;
            Ok(SessionCommand::Apply(ViewAction::SetFilter {
                column: column.key,
                value: String::new(),
            }))
        }
        "s" | "sort" => {
            if rest.is_empty() {
                return Err(usage("sort COLUMN"));
            }
            let column = columns.resolve(rest)?;
            Ok(SessionCommand::Apply(ViewAction::ToggleSort(column.key)))
        }
        "o" | "open" => {
            if rest.is_empty() {
                return Err(usage("open ROW|ID"));
            }
            if let Some(row) = rest.strip_prefix('#') {
                return match row.trim().parse::<usize>() {
                    Ok(row) if row > 0 => Ok(SessionCommand::OpenRow(row)),
                    _ => Err(usage("open #ROW (rows start at 1)")),
                };
            }
            match rest.parse::<usize>() {
                Ok(row) if row > 0 => Ok(SessionCommand::OpenRowOrId(rest.to_string())),
                _ => Ok(SessionCommand::Apply(ViewAction::OpenDetail(rest.to_string()))),
            }
        }
        "close" => Ok(SessionCommand::Apply(ViewAction::CloseDetail)),
        other => Err(BoardError::Other(format!(
            "unknown command '{other}', type `help` for a list"
        ))),
    }
}

fn usage(text: &str) -> BoardError {
    BoardError::Other(format!("usage: {text}"))
}
