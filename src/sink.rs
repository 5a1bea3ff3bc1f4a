#![cfg(feature = "std")]

//! Persistence of finished games.
//!
//! The game core only knows the [`ResultSink`] trait. [`JsonLinesSink`]
//! stores one JSON record per line: `{"id":1,"player_name":"..","outcome":"win","moves":42}`.

use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::game::Outcome;

/// Default location of the results file, relative to the working directory.
pub const DEFAULT_RESULTS_PATH: &str = "seabattle-results.jsonl";

/// Where results are stored. Passed to the sink at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkConfig {
    pub path: PathBuf,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_RESULTS_PATH),
        }
    }
}

/// One stored game result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: u64,
    pub player_name: String,
    pub outcome: Outcome,
    pub moves: usize,
}

#[derive(Debug)]
pub enum SinkError {
    Io(io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkError::Io(e) => write!(f, "results store I/O error: {}", e),
            SinkError::Json(e) => write!(f, "results store encoding error: {}", e),
        }
    }
}

impl std::error::Error for SinkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SinkError::Io(e) => Some(e),
            SinkError::Json(e) => Some(e),
        }
    }
}

impl From<io::Error> for SinkError {
    fn from(err: io::Error) -> Self {
        SinkError::Io(err)
    }
}

impl From<serde_json::Error> for SinkError {
    fn from(err: serde_json::Error) -> Self {
        SinkError::Json(err)
    }
}

/// Receives the outcome of every completed game, once.
pub trait ResultSink {
    fn record_result(
        &mut self,
        player_name: &str,
        outcome: Outcome,
        moves: usize,
    ) -> Result<(), SinkError>;
}

/// Appends results to a JSON-lines file.
pub struct JsonLinesSink {
    config: SinkConfig,
}

impl JsonLinesSink {
    /// Sink over `config.path`, creating the file (and its directory) if it
    /// does not exist yet.
    pub fn open(config: SinkConfig) -> Result<Self, SinkError> {
        if let Some(dir) = config.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&config.path)?;
        log::debug!("results store ready at {}", config.path.display());
        Ok(Self { config })
    }

    /// Sink that touches the filesystem only when a result is recorded.
    pub fn lazy(config: SinkConfig) -> Self {
        Self { config }
    }

    pub fn path(&self) -> &Path {
        &self.config.path
    }

    /// All stored records, oldest first. A missing file reads as empty and
    /// lines that do not parse are skipped with a warning.
    pub fn records(&self) -> Result<Vec<GameRecord>, SinkError> {
        Ok(parse_records(&read_store(&self.config.path)?))
    }
}

fn read_store(path: &Path) -> Result<Vec<u8>, SinkError> {
    match fs::read(path) {
        Ok(bytes) => Ok(bytes),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(e.into()),
    }
}

fn parse_records(bytes: &[u8]) -> Vec<GameRecord> {
    let text = String::from_utf8_lossy(bytes);
    let mut records = Vec::new();
    for (n, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str(line) {
            Ok(record) => records.push(record),
            Err(e) => log::warn!("skipping malformed result on line {}: {}", n + 1, e),
        }
    }
    records
}

impl ResultSink for JsonLinesSink {
    fn record_result(
        &mut self,
        player_name: &str,
        outcome: Outcome,
        moves: usize,
    ) -> Result<(), SinkError> {
        let existing = read_store(&self.config.path)?;
        let id = parse_records(&existing)
            .iter()
            .map(|r| r.id)
            .max()
            .map_or(1, |last| last + 1);
        let record = GameRecord {
            id,
            player_name: player_name.to_string(),
            outcome,
            moves,
        };
        let mut line = String::new();
        // a partial last line must not swallow the new record
        if existing.last().is_some_and(|&b| b != b'\n') {
            line.push('\n');
        }
        line.push_str(&serde_json::to_string(&record)?);
        line.push('\n');
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.config.path)?;
        file.write_all(line.as_bytes())?;
        log::info!(
            "recorded result #{} for {}: {} in {} moves",
            id,
            player_name,
            outcome,
            moves
        );
        Ok(())
    }
}

/// Sink that only logs; used when no results file is wanted.
#[derive(Debug, Default)]
pub struct LogSink;

impl ResultSink for LogSink {
    fn record_result(
        &mut self,
        player_name: &str,
        outcome: Outcome,
        moves: usize,
    ) -> Result<(), SinkError> {
        log::info!("{}: {} in {} moves", player_name, outcome, moves);
        Ok(())
    }
}
