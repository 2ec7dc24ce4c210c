use anyhow::Context;
use reseller_core::{load_resellers, sample_resellers, LoadError, RawReseller};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;
use tracing::debug;

use crate::errors::map_file_load_error;
use crate::state::AppState;
use crate::ui::{set_status, show_error, StatusLevel};

pub type LoadResult = Result<Vec<RawReseller>, LoadError>;

/// Start loading the dataset on a background thread
/// The result is delivered exactly once, after `latency` has elapsed
pub fn spawn_loader(data_file: Option<PathBuf>, latency: Duration) -> Receiver<LoadResult> {
    let (sender, receiver) = mpsc::channel();

    thread::spawn(move || {
        thread::sleep(latency);
        let result = match data_file {
            Some(path) => load_resellers(path),
            None => sample_resellers(),
        };
        // The receiver only disappears if the app already exited
        let _ = sender.send(result);
    });

    receiver
}

/// Load the dataset into the directory, reporting failures to the user
/// Returns whether the directory is ready
pub fn load_dataset(state: &mut AppState, latency: Duration) -> anyhow::Result<bool> {
    debug!(source = %state.source_label(), latency_ms = latency.as_millis() as u64, "loading resellers");

    let result = spawn_loader(state.data_file.clone(), latency)
        .recv()
        .context("reseller loader stopped before delivering data")?;

    match result {
        Ok(resellers) => {
            state.directory.finish_loading(&resellers);
            set_status(
                format!("Loaded {} resellers from {}", resellers.len(), state.source_label()),
                StatusLevel::Success,
            );
            Ok(true)
        }
        Err(e) => {
            let (title, message, details) = map_file_load_error(&e, state.data_file.as_deref());
            show_error(title, message, details);
            Ok(false)
        }
    }
}
