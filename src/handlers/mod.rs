pub mod command_handlers;
pub mod filter_handlers;

pub use command_handlers::{handle_command, Command, CommandOutcome, HELP};
pub use filter_handlers::{apply_filter_args, switch_mode};
