// src/process/malformed.rs

use std::{
    fs::{File, OpenOptions},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};
use tracing::warn;

use super::clean::Malformed;

/// How the log file treats earlier chunks' entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedLogMode {
    /// Every chunk flush rewrites the file, so only the latest chunk's rows remain.
    #[default]
    TruncatePerChunk,
    /// The file is truncated once per session and every chunk appends to it.
    Append,
}

/// Plain-text log of rows that failed the field-count check.
pub struct MalformedLog {
    path: PathBuf,
    mode: MalformedLogMode,
}

impl MalformedLog {
    /// Open the log at `path`. In append mode the file is emptied now.
    pub fn new(path: impl Into<PathBuf>, mode: MalformedLogMode) -> io::Result<Self> {
        let path = path.into();
        if mode == MalformedLogMode::Append {
            File::create(&path)?;
        }
        Ok(Self { path, mode })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write one chunk's malformed rows, one marked line each.
    pub fn flush_chunk(&self, rows: &[Malformed]) -> io::Result<()> {
        let file = match self.mode {
            MalformedLogMode::TruncatePerChunk => File::create(&self.path)?,
            MalformedLogMode::Append => OpenOptions::new()
                .append(true)
                .create(true)
                .open(&self.path)?,
        };
        let mut out = BufWriter::new(file);
        for row in rows {
            writeln!(out, "Malformed Data: ::: {} :::", row.raw)?;
        }
        out.flush()?;

        if !rows.is_empty() {
            warn!(
                count = rows.len(),
                log = %self.path.display(),
                "skipped malformed rows"
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::fs;
    use tempfile::tempdir;

    fn bad(raw: &str) -> Malformed {
        Malformed {
            raw: raw.to_string(),
            field_count: raw.split(',').count(),
        }
    }

    #[test]
    fn truncate_mode_keeps_only_last_chunk() -> Result<()> {
        let dir = tempdir()?;
        let log = MalformedLog::new(
            dir.path().join("malformed.log"),
            MalformedLogMode::TruncatePerChunk,
        )?;
        log.flush_chunk(&[bad("a,b"), bad("c,d")])?;
        log.flush_chunk(&[bad("e,f")])?;

        let text = fs::read_to_string(log.path())?;
        assert_eq!(text, "Malformed Data: ::: e,f :::\n");

        log.flush_chunk(&[])?;
        assert_eq!(fs::read_to_string(log.path())?, "");
        Ok(())
    }

    #[test]
    fn append_mode_keeps_every_chunk() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("malformed.log");
        fs::write(&path, "stale\n")?;

        let log = MalformedLog::new(&path, MalformedLogMode::Append)?;
        log.flush_chunk(&[bad("a,b")])?;
        log.flush_chunk(&[])?;
        log.flush_chunk(&[bad("c,d")])?;

        let text = fs::read_to_string(&path)?;
        assert_eq!(
            text,
            "Malformed Data: ::: a,b :::\nMalformed Data: ::: c,d :::\n"
        );
        Ok(())
    }
}
