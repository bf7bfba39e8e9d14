use anyhow::{Context, Result};
use clap::Parser;
use dimeload::{fetch, ChunkSize, LoadConfig, MalformedLogMode, Populator};
use std::{fs, io, path::Path, path::PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

/// Load a year of DIME contribution records into SQLite.
#[derive(Parser, Debug)]
#[command(name = "dimeload")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Election year to load (even years 1980 through 2014)
    #[arg(short = 'y', long = "year", value_parser = parse_year)]
    year: u16,

    /// Filename to store the database as
    #[arg(short = 'o', long = "output-db", default_value = "base_populated.db")]
    output_db: PathBuf,

    /// Download even if data_<year>.gz already exists
    #[arg(short = 'i', long = "ignore-existing")]
    ignore_existing: bool,

    /// Remove the database and downloaded file after the run (the log is kept)
    #[arg(short = 'c', long = "clean")]
    clean: bool,

    /// Work in the database file and read small chunks; slower, bounded memory
    #[arg(short = 'l', long = "lower-memory")]
    lower_memory: bool,

    /// Directory for downloaded files
    #[arg(long = "data-dir", default_value = ".")]
    data_dir: PathBuf,

    /// Lines per chunk, overriding the memory mode's default
    #[arg(long = "chunk-lines", value_name = "N")]
    chunk_lines: Option<usize>,

    /// Where malformed rows are recorded
    #[arg(long = "malformed-log", default_value = "malformed.log")]
    malformed_log: PathBuf,

    /// Keep malformed rows from every chunk instead of only the last one
    #[arg(long = "append-malformed")]
    append_malformed: bool,

    /// Write a JSON summary of the load
    #[arg(long = "summary", value_name = "PATH")]
    summary: Option<PathBuf>,
}

impl Args {
    fn to_config(&self) -> LoadConfig {
        LoadConfig {
            database: self.output_db.clone(),
            data_dir: self.data_dir.clone(),
            force_download: self.ignore_existing,
            low_memory: self.lower_memory,
            chunk_size: self.chunk_lines.map(ChunkSize::Lines),
            malformed_log: self.malformed_log.clone(),
            malformed_mode: if self.append_malformed {
                MalformedLogMode::Append
            } else {
                MalformedLogMode::TruncatePerChunk
            },
        }
    }
}

fn parse_year(s: &str) -> Result<u16, String> {
    let year: u16 = s.parse().map_err(|e| format!("{}", e))?;
    fetch::resource_id(year).map_err(|e| e.to_string())?;
    Ok(year)
}

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .init();

    let args = Args::parse();
    let config = args.to_config();
    info!(year = args.year, db = %config.database.display(), "startup");

    // ─── 2) load; the store is persisted even if the load fails ──────
    let mut populator = Populator::open(config.clone()).context("opening store")?;
    let loaded = populator.populate(args.year);
    populator.close().context("closing store")?;
    let stats = loaded.with_context(|| format!("loading year {}", args.year))?;

    info!(
        lines = stats.lines,
        records = stats.records,
        malformed = stats.malformed,
        inserted = ?stats.inserted,
        "load finished"
    );
    if let Some(path) = &args.summary {
        stats
            .write_json(path)
            .with_context(|| format!("writing summary {}", path.display()))?;
        info!(path = %path.display(), "wrote summary");
    }

    // ─── 3) optional cleanup ─────────────────────────────────────────
    if args.clean {
        remove_artifact(&config.database)?;
        remove_artifact(&config.data_file(args.year))?;
    }

    info!("all done");
    Ok(())
}

fn remove_artifact(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => {
            info!(path = %path.display(), "removed");
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "nothing to remove");
            Ok(())
        }
        Err(e) => Err(e).with_context(|| format!("removing {}", path.display())),
    }
}
