pub mod dialogs;
pub mod formatting;
pub mod types;
pub mod updates;

pub use dialogs::{set_status, show_error};
pub use types::StatusLevel;
pub use updates::render_directory;
