// src/store/mod.rs

use rusqlite::{Connection, DatabaseName};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

use crate::error::Result;

/// Where the working database lives while a load runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreMode {
    /// Work in memory, back up to the target file on close.
    InMemory,
    /// Work directly in the target file.
    OnDisk,
}

/// Scoped handle to the SQLite store a load writes into.
///
/// Closing commits any open transaction and, for an in-memory store, copies the
/// whole database over the target file. `Drop` does the same for every exit
/// path that skipped [`Store::close`].
pub struct Store {
    conn: Connection,
    target: PathBuf,
    mode: StoreMode,
    persisted: bool,
}

impl Store {
    /// Open an in-memory store, or the target file itself when `low_memory` is set.
    pub fn open(target: impl Into<PathBuf>, low_memory: bool) -> Result<Self> {
        let target = target.into();
        let (conn, mode) = if low_memory {
            (open_disk_db(&target)?, StoreMode::OnDisk)
        } else {
            (open_mem_db()?, StoreMode::InMemory)
        };
        debug!(target = %target.display(), ?mode, "opened store");
        Ok(Self {
            conn,
            target,
            mode,
            persisted: false,
        })
    }

    pub fn mode(&self) -> StoreMode {
        self.mode
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn connection_mut(&mut self) -> &mut Connection {
        &mut self.conn
    }

    /// Commit, persist and release the store, surfacing any error.
    ///
    /// Persistence is attempted once; a failure here is not retried on drop.
    pub fn close(mut self) -> Result<()> {
        let persisted = self.persist();
        self.persisted = true;
        persisted
    }

    fn persist(&self) -> Result<()> {
        if !self.conn.is_autocommit() {
            self.conn.execute_batch("COMMIT")?;
        }
        if self.mode == StoreMode::InMemory {
            self.conn.backup(DatabaseName::Main, &self.target, None)?;
            info!(target = %self.target.display(), "persisted in-memory store");
        }
        Ok(())
    }
}

impl Drop for Store {
    fn drop(&mut self) {
        if self.persisted {
            return;
        }
        self.persisted = true;
        if let Err(e) = self.persist() {
            error!(target = %self.target.display(), "closing store failed: {}", e);
        }
    }
}

/// Open a SQLite database on disk at `path`, creating the file if it doesn't exist.
pub fn open_disk_db(path: &Path) -> Result<Connection> {
    let conn = Connection::open(path)?;
    Ok(conn)
}

/// Open a SQLite in-memory database
pub fn open_mem_db() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    Ok(conn)
}
