use colored::Colorize;

use super::types::StatusLevel;

/// Helper function to print a status message with semantic level
pub fn set_status(text: impl AsRef<str>, level: StatusLevel) {
    let text = text.as_ref();
    let line = match level {
        StatusLevel::Info => text.normal(),
        StatusLevel::Success => text.green(),
        StatusLevel::Warning => format!("Warning: {}", text).yellow(),
        StatusLevel::Error => format!("Error: {}", text).red(),
    };
    eprintln!("{}", line);
}

/// Helper function to show an error block
pub fn show_error(title: impl AsRef<str>, message: impl AsRef<str>, details: impl AsRef<str>) {
    eprintln!("{}", title.as_ref().red().bold());
    eprintln!("{}", message.as_ref());
    let details = details.as_ref();
    if !details.is_empty() {
        eprintln!();
        for line in details.lines() {
            eprintln!("  {}", line);
        }
    }
}
