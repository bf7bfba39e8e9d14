// src/process/stats.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::{
    collections::BTreeMap,
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use crate::error::Result;
use crate::schema::Table;

/// Counters for one chunk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChunkStats {
    pub lines: u64,
    pub records: u64,
    pub malformed: u64,
    pub inserted: [u64; 4],
}

/// Summary of one load session.
#[derive(Debug, Clone, Serialize)]
pub struct LoadStats {
    pub year: Option<u16>,
    pub source: Option<PathBuf>,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub chunks: u64,
    pub lines: u64,
    pub records: u64,
    pub malformed: u64,
    /// Rows actually written per table; ignored duplicates are not counted.
    pub inserted: BTreeMap<String, u64>,
}

impl LoadStats {
    pub fn start() -> Self {
        Self {
            year: None,
            source: None,
            started_at: Utc::now(),
            finished_at: None,
            chunks: 0,
            lines: 0,
            records: 0,
            malformed: 0,
            inserted: Table::ALL
                .iter()
                .map(|t| (t.name().to_string(), 0))
                .collect(),
        }
    }

    /// Fold one chunk's counters in, saturating on overflow.
    pub fn add_chunk(&mut self, chunk: &ChunkStats) {
        self.chunks = self.chunks.saturating_add(1);
        self.lines = self.lines.saturating_add(chunk.lines);
        self.records = self.records.saturating_add(chunk.records);
        self.malformed = self.malformed.saturating_add(chunk.malformed);
        for table in Table::ALL {
            let n = chunk.inserted[table as usize];
            if let Some(total) = self.inserted.get_mut(table.name()) {
                *total = total.saturating_add(n);
            }
        }
    }

    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    pub fn inserted_into(&self, table: Table) -> u64 {
        self.inserted.get(table.name()).copied().unwrap_or(0)
    }

    /// Write the summary as pretty JSON with a trailing newline.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut f = fs::File::create(path)?;
        serde_json::to_writer_pretty(&mut f, self)?;
        f.write_all(b"\n")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use tempfile::tempdir;

    #[test]
    fn chunks_accumulate() {
        let mut stats = LoadStats::start();
        let mut chunk = ChunkStats {
            lines: 3,
            records: 2,
            malformed: 1,
            ..Default::default()
        };
        chunk.inserted[Table::Transactions as usize] = 2;
        chunk.inserted[Table::ContributorIndv as usize] = 1;
        stats.add_chunk(&chunk);
        stats.add_chunk(&chunk);

        assert_eq!(stats.chunks, 2);
        assert_eq!(stats.lines, 6);
        assert_eq!(stats.records, 4);
        assert_eq!(stats.malformed, 2);
        assert_eq!(stats.inserted_into(Table::Transactions), 4);
        assert_eq!(stats.inserted_into(Table::ContributorIndv), 2);
        assert_eq!(stats.inserted_into(Table::ContributorOrg), 0);
    }

    #[test]
    fn summary_is_json() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("summary.json");
        let mut stats = LoadStats::start();
        stats.year = Some(1980);
        stats.finish();
        stats.write_json(&path)?;

        let text = fs::read_to_string(&path)?;
        assert!(text.ends_with('\n'));
        let value: serde_json::Value = serde_json::from_str(&text)?;
        assert_eq!(value["year"], 1980);
        assert_eq!(value["inserted"]["Contributor_Org"], 0);
        assert!(value["finished_at"].is_string());
        Ok(())
    }

    #[test]
    fn summary_into_missing_dir_is_io_error() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("missing").join("summary.json");
        let err = LoadStats::start().write_json(&path).unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)), "{:?}", err);
        assert!(!path.exists());
        Ok(())
    }
}
