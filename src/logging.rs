//! Append-only JSONL training logs under `logs/`.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

use crate::monitor::EpochView;

fn log_dir() -> io::Result<()> {
    fs::create_dir_all("logs")
}

fn append_json_line<P: AsRef<Path>, T: Serialize>(path: P, value: &T) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    serde_json::to_writer(&mut file, value)
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
    file.write_all(b"\n")
}

#[derive(Debug, Serialize)]
pub struct EpochLogEntry {
    pub epoch: usize,
    pub num_errors: usize,
    pub weights: [f64; 3],
    pub feasible_distance: Option<f64>,
    pub timestamp_ms: u128,
}

/// Records one epoch of training as a JSON line in `logs/training.jsonl`.
pub fn log_epoch(view: &EpochView<'_, f64>) -> io::Result<()> {
    log_dir()?;
    let entry = EpochLogEntry {
        epoch: view.epoch,
        num_errors: view.num_errors(),
        weights: view.weights.components,
        feasible_distance: view.distance_history.last().copied(),
        timestamp_ms: SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis(),
    };
    append_json_line("logs/training.jsonl", &entry)
}
