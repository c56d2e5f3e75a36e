// src/error.rs
use std::io;

use thiserror::Error;

/// Why a table row could not be turned into a session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidRowReason {
    #[error("missing attribute `{0}`")]
    MissingAttribute(&'static str),

    #[error("weekday `{0}` is not a number")]
    UnparsableWeekday(String),

    #[error("weekday {0} is outside 1..=7")]
    WeekdayOutOfRange(u8),

    #[error("pair descriptor `{0}` is not \"<number> (<time>)\"")]
    UnparsablePair(String),

    #[error("pair number {0} is outside 1..={max}", max = crate::config::consts::MAX_PAIRS_PER_DAY)]
    PairOutOfRange(u8),

    #[error("missing field `{0}`")]
    MissingField(&'static str),
}

/// A row failed the structural assumptions of the timetable table.
/// `index` is the 0-based position of the row in source order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid row #{index}: {reason}")]
pub struct InvalidRowError {
    pub index: usize,
    pub reason: InvalidRowReason,
}

impl InvalidRowError {
    pub fn new(index: usize, reason: InvalidRowReason) -> Self {
        Self { index, reason }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    InvalidRow(#[from] InvalidRowError),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP error: {status} {url}")]
    Status { status: u16, url: String },

    #[error("Unexpected markup: {0}")]
    Markup(String),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
