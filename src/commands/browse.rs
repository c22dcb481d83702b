use std::io::Write;

use owo_colors::{OwoColorize, Stream};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use super::configured_columns;
use crate::config::Config;
use crate::display::render_view;
use crate::error::{BoardError, Result};
use crate::source::{ConfiguredSource, TicketSource};
use crate::view::{
    HELP_TEXT, SessionCommand, ViewAction, ViewState, compute_view_model, parse_command,
    reduce_view_state,
};

/// Interactive table session over stdin/stdout
pub async fn cmd_browse(config: &Config) -> Result<()> {
    let source = ConfiguredSource::from_config(config)?;
    let mut state = ViewState::new(configured_columns(config));

    println!("{}", render_view(&compute_view_model(&state)));

    // The one fetch of this view; a failure is shown, not fatal
    let loaded = match source.find_all_tickets().await {
        Ok(tickets) => ViewAction::Loaded(tickets),
        Err(e) => {
            tracing::warn!("ticket load failed: {e}");
            ViewAction::LoadFailed(e.to_string())
        }
    };
    reduce_view_state(&mut state, loaded)?;

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    run_session(&mut state, stdin, &mut stdout).await
}

/// Read commands line by line, apply them and redraw after each one.
///
/// A command that fails is reported and the session continues. Returns when
/// the input ends or a `quit` command is read.
pub async fn run_session<R, W>(state: &mut ViewState, input: R, out: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(out, "{}", render_view(&compute_view_model(state)))?;
    prompt(out)?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        match parse_command(&line, &state.columns).and_then(|cmd| apply(state, cmd)) {
            Ok(Step::Continue) => {
                writeln!(out, "{}", render_view(&compute_view_model(state)))?;
            }
            Ok(Step::Help) => {
                writeln!(out, "{HELP_TEXT}")?;
                let keys: Vec<String> = state
                    .columns
                    .iter()
                    .filter(|c| !c.disable_filters)
                    .map(|c| c.key.to_string())
                    .collect();
                writeln!(out, "columns: {}", keys.join(", "))?;
            }
            Ok(Step::Quit) => return Ok(()),
            Err(e) => {
                writeln!(
                    out,
                    "{}",
                    format!("error: {e}").if_supports_color(Stream::Stdout, |t| t.red())
                )?;
            }
        }
        prompt(out)?;
    }
    Ok(())
}

enum Step {
    Continue,
    Help,
    Quit,
}

fn apply(state: &mut ViewState, command: SessionCommand) -> Result<Step> {
    match command {
        SessionCommand::Apply(action) => {
            reduce_view_state(state, action)?;
            Ok(Step::Continue)
        }
        SessionCommand::OpenRow(row) => {
            let id = row_id(state, row)?;
            reduce_view_state(state, ViewAction::OpenDetail(id))?;
            Ok(Step::Continue)
        }
        SessionCommand::OpenRowOrId(target) => {
            let id = if state.store.get(&target).is_some() {
                target
            } else {
                let row = target
                    .parse::<usize>()
                    .map_err(|_| BoardError::TicketNotFound(target.clone()))?;
                row_id(state, row)?
            };
            reduce_view_state(state, ViewAction::OpenDetail(id))?;
            Ok(Step::Continue)
        }
        SessionCommand::Help => Ok(Step::Help),
        SessionCommand::Quit => Ok(Step::Quit),
        SessionCommand::Redraw => Ok(Step::Continue),
    }
}

/// Id of the n-th visible row (1-based)
fn row_id(state: &ViewState, row: usize) -> Result<String> {
    row.checked_sub(1)
        .and_then(|index| state.visible_rows().get(index).map(|t| t.id.clone()))
        .ok_or_else(|| BoardError::Other(format!("no row {row} in the table")))
}

fn prompt<W: Write>(out: &mut W) -> Result<()> {
    write!(out, "> ")?;
    out.flush()?;
    Ok(())
}
