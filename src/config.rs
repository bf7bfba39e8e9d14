// src/config.rs

use std::path::PathBuf;

use crate::process::chunk::{ChunkSize, LOW_MEMORY_CHUNK_BYTES};
use crate::process::malformed::MalformedLogMode;

/// Settings for one load session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadConfig {
    /// SQLite file the four tables end up in.
    pub database: PathBuf,
    /// Directory holding `data_<year>.gz`.
    pub data_dir: PathBuf,
    /// Download even if the gzip file is already present.
    pub force_download: bool,
    /// Work in the database file and read small chunks.
    pub low_memory: bool,
    /// Overrides the chunking implied by `low_memory`.
    pub chunk_size: Option<ChunkSize>,
    pub malformed_log: PathBuf,
    pub malformed_mode: MalformedLogMode,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            database: PathBuf::from("base_populated.db"),
            data_dir: PathBuf::from("."),
            force_download: false,
            low_memory: false,
            chunk_size: None,
            malformed_log: PathBuf::from("malformed.log"),
            malformed_mode: MalformedLogMode::default(),
        }
    }
}

impl LoadConfig {
    pub fn chunk_size(&self) -> ChunkSize {
        match self.chunk_size {
            Some(size) => size,
            None if self.low_memory => ChunkSize::Bytes(LOW_MEMORY_CHUNK_BYTES),
            None => ChunkSize::Unbounded,
        }
    }

    /// Local path of a year's gzip file.
    pub fn data_file(&self, year: u16) -> PathBuf {
        self.data_dir.join(format!("data_{}.gz", year))
    }
}
