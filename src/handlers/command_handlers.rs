use reseller_core::FilterMode;

use super::filter_handlers::{clear_filters, switch_mode, toggle_filter};
use crate::state::AppState;
use crate::ui::{set_status, StatusLevel};

pub const HELP: &str = "Commands:
  mode <narrowing|expansion>   switch filter mode (clears filters)
  toggle <field> <value>       flip a filter checkbox; use \"\" for the empty value
  reset                        clear all filters
  show                         redraw the directory
  json                         print the directory view as JSON
  help                         show this help
  quit                         exit";

/// One interactive command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Mode(FilterMode),
    Toggle { field: String, value: String },
    Reset,
    Show,
    Json,
    Help,
    Quit,
}

/// What the front end should do after a command
#[derive(Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    Render,
    Print(String),
    Quit,
}

/// Execute a command against the application state
pub fn handle_command(state: &mut AppState, command: Command) -> anyhow::Result<CommandOutcome> {
    let outcome = match command {
        Command::Mode(mode) => {
            set_status(switch_mode(state, mode), StatusLevel::Info);
            CommandOutcome::Render
        }
        Command::Toggle { field, value } => match toggle_filter(state, &field, &value) {
            Ok(message) => {
                set_status(message, StatusLevel::Info);
                CommandOutcome::Render
            }
            Err(warning) => {
                set_status(warning, StatusLevel::Warning);
                CommandOutcome::Print(String::new())
            }
        },
        Command::Reset => {
            set_status(clear_filters(state), StatusLevel::Info);
            CommandOutcome::Render
        }
        Command::Show => CommandOutcome::Render,
        Command::Json => {
            CommandOutcome::Print(serde_json::to_string_pretty(&state.directory.view())?)
        }
        Command::Help => CommandOutcome::Print(HELP.to_string()),
        Command::Quit => CommandOutcome::Quit,
    };

    Ok(outcome)
}
