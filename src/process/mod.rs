// src/process/mod.rs
pub mod chunk;
pub mod clean;
pub mod malformed;
pub mod split;
pub mod stats;

#[cfg(test)]
pub(crate) mod fixtures;

use flate2::read::MultiGzDecoder;
use reqwest::blocking::Client;
use rusqlite::{params_from_iter, Connection};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    time::Instant,
};
use tracing::{debug, info, instrument};

use crate::config::LoadConfig;
use crate::error::{Error, FetchError, Result};
use crate::fetch;
use crate::schema::Schema;
use crate::store::Store;
use chunk::ChunkReader;
use clean::Record;
use malformed::MalformedLog;
use split::split_record;
use stats::{ChunkStats, LoadStats};

/// Where a load session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    SchemaBuilt,
    Ingesting,
    Finalized,
}

/// Owns the store for one load session and drives source files into it.
pub struct Populator {
    config: LoadConfig,
    store: Store,
    phase: Phase,
}

impl Populator {
    /// Open the store described by `config`.
    pub fn open(config: LoadConfig) -> Result<Self> {
        let store = Store::open(&config.database, config.low_memory)?;
        Ok(Self {
            config,
            store,
            phase: Phase::Uninitialized,
        })
    }

    pub fn config(&self) -> &LoadConfig {
        &self.config
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Load `year`, downloading `data_<year>.gz` unless it is already present.
    ///
    /// The year is checked against the published set before anything touches disk.
    #[instrument(level = "info", skip(self))]
    pub fn populate(&mut self, year: u16) -> Result<LoadStats> {
        fetch::resource_id(year)?;

        let path = self.config.data_file(year);
        if self.config.force_download || !path.exists() {
            let client = Client::builder().build().map_err(FetchError::from)?;
            fetch::download_year(&client, year, &path)?;
        } else {
            debug!(path = %path.display(), "using existing download");
        }

        let mut stats = self.ingest_file(&path)?;
        stats.year = Some(year);
        Ok(stats)
    }

    /// Load a local gzip-compressed source file.
    pub fn ingest_file(&mut self, path: impl AsRef<Path>) -> Result<LoadStats> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let reader = BufReader::new(MultiGzDecoder::new(BufReader::new(file)));
        let mut stats = self.ingest(reader)?;
        stats.source = Some(path.to_path_buf());
        Ok(stats)
    }

    /// Load an already decompressed source: header line first, then data lines.
    #[instrument(level = "info", skip(self, reader))]
    pub fn ingest<R: BufRead>(&mut self, mut reader: R) -> Result<LoadStats> {
        let start = Instant::now();
        let mut stats = LoadStats::start();
        self.phase = Phase::Uninitialized;

        // 1) header → table definitions
        let mut header = Vec::new();
        if reader.read_until(b'\n', &mut header)? == 0 {
            return Err(Error::EmptySource);
        }
        let schema = Schema::from_header(&String::from_utf8_lossy(&header))?;
        schema.create_all(self.store.connection())?;
        self.phase = Phase::SchemaBuilt;
        debug!("created target tables");

        // 2) chunks → clean → split → insert
        let log = MalformedLog::new(&self.config.malformed_log, self.config.malformed_mode)?;
        let size = self.config.chunk_size();
        self.phase = Phase::Ingesting;
        for chunk in ChunkReader::new(reader, size) {
            let lines = chunk?;
            let chunk_stats = load_chunk(self.store.connection_mut(), &schema, &log, &lines)?;
            debug!(
                chunk = stats.chunks,
                lines = chunk_stats.lines,
                records = chunk_stats.records,
                malformed = chunk_stats.malformed,
                "loaded chunk"
            );
            stats.add_chunk(&chunk_stats);
        }

        self.phase = Phase::Finalized;
        stats.finish();
        info!(
            chunks = stats.chunks,
            records = stats.records,
            malformed = stats.malformed,
            elapsed = ?start.elapsed(),
            "ingest complete"
        );
        Ok(stats)
    }

    /// Commit, persist and release the store.
    pub fn close(self) -> Result<()> {
        self.store.close()
    }
}

/// Parse one chunk, log its malformed rows and insert the rest in one transaction.
fn load_chunk(
    conn: &mut Connection,
    schema: &Schema,
    log: &MalformedLog,
    lines: &[Vec<u8>],
) -> Result<ChunkStats> {
    let mut stats = ChunkStats::default();
    let mut records = Vec::with_capacity(lines.len());
    let mut malformed = Vec::new();

    for line in lines {
        stats.lines += 1;
        let text = String::from_utf8_lossy(line);
        match Record::parse(&text) {
            Ok(record) => records.push(record),
            Err(bad) => malformed.push(bad),
        }
    }
    stats.records = records.len() as u64;
    stats.malformed = malformed.len() as u64;

    log.flush_chunk(&malformed)?;
    stats.inserted = insert_records(conn, schema, &records)?;
    Ok(stats)
}

/// Insert every projection of `records`, skipping rows whose key already exists.
/// Returns rows written per table, indexed by `Table as usize`.
fn insert_records(
    conn: &mut Connection,
    schema: &Schema,
    records: &[Record],
) -> rusqlite::Result<[u64; 4]> {
    let mut inserted = [0u64; 4];
    if records.is_empty() {
        return Ok(inserted);
    }

    let tx = conn.transaction()?;
    {
        let mut stmts = schema
            .tables()
            .iter()
            .map(|def| tx.prepare(&def.insert_sql()))
            .collect::<rusqlite::Result<Vec<_>>>()?;

        for record in records {
            for projection in split_record(record) {
                let idx = projection.table as usize;
                let n = stmts[idx].execute(params_from_iter(projection.values.iter()))?;
                inserted[idx] += n as u64;
            }
        }
    }
    tx.commit()?;
    Ok(inserted)
}
