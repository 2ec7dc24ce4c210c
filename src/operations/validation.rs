use reseller_core::FilterMode;

use crate::handlers::Command;

/// Validation error with field and message
#[derive(Debug, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

fn invalid(field: &str, message: impl Into<String>) -> ValidationError {
    ValidationError {
        field: field.to_string(),
        message: message.into(),
    }
}

/// Parse one line of interactive input
/// Blank lines parse to None
pub fn parse_command(line: &str) -> Result<Option<Command>, ValidationError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    };

    let command = match name.to_ascii_lowercase().as_str() {
        "mode" => {
            if rest.is_empty() {
                return Err(invalid("mode", "expected 'narrowing' or 'expansion'"));
            }
            let mode = rest
                .parse::<FilterMode>()
                .map_err(|message| invalid("mode", message))?;
            Command::Mode(mode)
        }
        "toggle" | "t" => {
            let (field, value) = parse_toggle_args(rest)?;
            Command::Toggle { field, value }
        }
        "reset" => Command::Reset,
        "show" | "ls" => Command::Show,
        "json" => Command::Json,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(invalid("command", format!("unknown command '{}'", other))),
    };

    Ok(Some(command))
}

/// Split "FIELD VALUE" where VALUE is the rest of the line
/// A quoted value keeps surrounding whitespace; `""` selects the empty value
pub fn parse_toggle_args(args: &str) -> Result<(String, String), ValidationError> {
    let (field, value) = args
        .split_once(char::is_whitespace)
        .ok_or_else(|| invalid("toggle", "expected 'toggle <field> <value>'"))?;

    let value = value.trim();
    let value = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value);

    Ok((field.to_string(), value.to_string()))
}
