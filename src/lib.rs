//! Menagerie - an arriving-animals manifest processor.
//!
//! This library provides the core functionality for the `zoo` CLI tool:
//! parsing manifest lines into typed records, enriching them with derived
//! attributes (unique IDs, birth dates), and rendering the grouped habitat
//! report.

pub mod cli;
pub mod commands;
pub mod enrich;
pub mod models;
pub mod parser;
pub mod report;

use std::path::PathBuf;

/// Library-level error type for menagerie operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed manifest line: {0:?}")]
    MalformedLine(String),

    #[error("invalid calendar date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("cannot read {}: {source}", path.display())]
    Source {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for menagerie operations.
pub type Result<T> = std::result::Result<T, Error>;
