//! Error types for dimeload.

use thiserror::Error;

/// Main error type for loading a year of contribution records.
#[derive(Error, Debug)]
pub enum Error {
    /// Resolving or downloading the source file failed
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// The header could not be projected onto the target tables
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    /// Error from the embedded store
    #[error("SQLite error: {0}")]
    Sql(#[from] rusqlite::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the load summary failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The decompressed source had no header line
    #[error("source is empty: no header line")]
    EmptySource,
}

/// Errors related to locating and downloading a year's data.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Year is not in the published set (even years 1980 through 2014)
    #[error("Invalid year {year}: must be an election (even) year between 1980 and 2014")]
    UnsupportedYear { year: u16 },

    /// Server answered with a non-success status
    #[error("Cannot download data for year {year}: HTTP {status}")]
    Status { year: u16, status: u16 },

    /// Transport-level failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Building the resource URL failed
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Errors raised while building table definitions from the header line.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// Header does not reach a position mapped to a table
    #[error("{table}: header has {header_len} columns, no column at position {position}")]
    MissingColumn {
        table: &'static str,
        position: usize,
        header_len: usize,
    },

    /// Header token is empty after normalization
    #[error("header column at position {position} is empty")]
    EmptyColumn { position: usize },
}

/// Result type for dimeload operations.
pub type Result<T> = std::result::Result<T, Error>;
