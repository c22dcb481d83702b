//! The ticket table view: state, reducer, derived view model and the text
//! commands of the interactive session.

pub mod input;
pub mod model;

pub use input::{HELP_TEXT, SessionCommand, parse_command};
pub use model::{
    DetailDisclosure, EmptyState, HeaderViewModel, RowViewModel, ViewAction, ViewModel,
    ViewState, compute_view_model, reduce_view_state,
};
