mod errors;
mod handlers;
mod operations;
mod state;
mod telemetry;
mod ui;

use anyhow::Context;
use clap::Parser;
use reseller_core::FilterMode;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;
use std::time::Duration;
use tracing::{debug, info};

use handlers::{apply_filter_args, handle_command, switch_mode, CommandOutcome, HELP};
use operations::{load_dataset, parse_command};
use state::AppState;
use ui::{render_directory, set_status, StatusLevel};

/// Reseller Directory - Browse resellers with narrowing or expansion filters
///
/// Examples:
///   # Browse the built-in sample interactively
///   reseller-directory
///
///   # Narrow a dataset to Gold resellers in Canada
///   reseller-directory resellers.json --filter countries=Canada --filter resellerLevel=Gold --once
///
///   # Expand: anyone in Japan or anyone at Platinum level
///   reseller-directory --mode expansion --filter countries=Japan --filter resellerLevel=Platinum --once
///
///   # Print the directory view as JSON
///   reseller-directory resellers.json --json
///
///   # Sort by company and group by level
///   reseller-directory --sort company --group-by resellerLevel
#[derive(Parser, Debug)]
#[command(name = "reseller-directory")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Filter Modes:\n  \
    - narrowing: every selected value must be held (AND); options that\n    \
      would leave no result are shown struck through and cannot be toggled\n  \
    - expansion: a reseller holding any selected value is shown (OR)\n\n\
Switching modes clears all selections.\n\n\
Interactive Commands:\n  \
    mode <narrowing|expansion>, toggle <field> <value>, reset, show,\n  \
    json, help, quit")]
struct Cli {
    /// Path to a reseller JSON file (defaults to the built-in sample)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Simulated loading latency in milliseconds
    #[arg(long = "latency-ms", value_name = "MS", default_value_t = 100)]
    latency_ms: u64,

    /// Filter mode to start in
    #[arg(short, long, value_name = "MODE")]
    mode: Option<FilterMode>,

    /// Select a filter option (format: field=value, can be specified multiple times)
    #[arg(short, long = "filter", value_name = "FIELD=VALUE")]
    filters: Vec<String>,

    /// Sort displayed resellers by "company" or another field
    #[arg(short, long = "sort", value_name = "FIELD")]
    sort_by: Option<String>,

    /// Group displayed resellers by a filter field
    #[arg(short = 'G', long = "group-by", value_name = "FIELD")]
    group_by: Option<String>,

    /// Print the directory view as JSON and exit
    #[arg(long)]
    json: bool,

    /// Render the directory once and exit
    #[arg(long)]
    once: bool,

    /// Log level or filter directive (RUST_LOG takes precedence)
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = telemetry::init(&cli.log_level) {
        eprintln!("Error: {}", err);
        process::exit(2);
    }

    match run(cli) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(err) => {
            set_status(format!("{:#}", err), StatusLevel::Error);
            process::exit(1);
        }
    }
}

/// Returns false when the dataset could not be loaded
fn run(cli: Cli) -> anyhow::Result<bool> {
    let mut state = AppState::new(cli.file.clone());
    state.sort_by = cli.sort_by.clone();
    state.group_by = cli.group_by.clone();

    if !cli.json {
        println!("{}", render_directory(&state));
    }

    if !load_dataset(&mut state, Duration::from_millis(cli.latency_ms))? {
        return Ok(false);
    }

    check_display_options(&state);

    if let Some(mode) = cli.mode {
        switch_mode(&mut state, mode);
    }
    for warning in apply_filter_args(&mut state, &cli.filters) {
        set_status(warning, StatusLevel::Warning);
    }

    if cli.json {
        let json = serde_json::to_string_pretty(&state.directory.view())
            .context("failed to serialize directory view")?;
        println!("{}", json);
        return Ok(true);
    }

    println!("{}", render_directory(&state));

    if !cli.once {
        run_interactive(&mut state)?;
    }

    Ok(true)
}

/// Warn about sort or group fields that do not exist
fn check_display_options(state: &AppState) {
    if let Some(ref sort_field) = state.sort_by {
        let known = state
            .directory
            .resellers()
            .iter()
            .any(|r| r.field_as_string(sort_field).is_some());
        if !known {
            set_status(
                format!("Unknown sort field '{}', using dataset order", sort_field),
                StatusLevel::Warning,
            );
        }
    }

    if let Some(ref group_field) = state.group_by {
        if state.group_field().is_none() {
            set_status(
                format!("Unknown group field '{}', grouping disabled", group_field),
                StatusLevel::Warning,
            );
        }
    }
}

fn run_interactive(state: &mut AppState) -> anyhow::Result<()> {
    info!("entering interactive mode");
    println!("\nType 'help' for commands.");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush().context("failed to write prompt")?;

        let mut line = String::new();
        if stdin
            .lock()
            .read_line(&mut line)
            .context("failed to read command")?
            == 0
        {
            break;
        }

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                debug!(input = line.trim(), "rejected command");
                set_status(format!("{}\n{}", err, HELP), StatusLevel::Warning);
                continue;
            }
        };

        match handle_command(state, command)? {
            CommandOutcome::Render => println!("{}", render_directory(state)),
            CommandOutcome::Print(text) => {
                if !text.is_empty() {
                    println!("{}", text);
                }
            }
            CommandOutcome::Quit => break,
        }
    }

    Ok(())
}
