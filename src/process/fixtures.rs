//! Builders for 46-column sources used across the test modules.

use flate2::{write::GzEncoder, Compression};
use std::{fs::File, io::Write, path::Path};

use crate::schema::SourceField;

fn quoted(values: &[String]) -> String {
    values
        .iter()
        .map(|v| format!("\"{}\"", v))
        .collect::<Vec<_>>()
        .join(",")
}

/// Header as published: quoted, dotted names, newline terminated.
pub fn header_line() -> String {
    let names: Vec<String> = SourceField::ALL
        .iter()
        .map(|f| f.source_name().to_string())
        .collect();
    format!("{}\n", quoted(&names))
}

/// A well-formed row. Unset fields are `v<pos>_<tx>`, so keys differ per transaction.
pub fn data_line(tx: &str, entity: &str, amount: &str) -> String {
    data_line_with(
        tx,
        entity,
        amount,
        &format!("v{}_{}", SourceField::BonicaCid.position(), tx),
        &format!("v{}_{}", SourceField::BonicaRid.position(), tx),
    )
}

pub fn data_line_with(tx: &str, entity: &str, amount: &str, cid: &str, rid: &str) -> String {
    let mut values: Vec<String> = SourceField::ALL
        .iter()
        .map(|f| format!("v{}_{}", f.position(), tx))
        .collect();
    values[SourceField::TransactionId.position()] = tx.to_string();
    values[SourceField::Amount.position()] = amount.to_string();
    values[SourceField::ContributorType.position()] = entity.to_string();
    values[SourceField::BonicaCid.position()] = cid.to_string();
    values[SourceField::BonicaRid.position()] = rid.to_string();
    format!("{}\n", quoted(&values))
}

/// Gzip `header` followed by `lines` into `path`.
pub fn write_gz(path: &Path, header: &str, lines: &[String]) -> std::io::Result<()> {
    let mut enc = GzEncoder::new(File::create(path)?, Compression::default());
    enc.write_all(header.as_bytes())?;
    for line in lines {
        enc.write_all(line.as_bytes())?;
    }
    enc.finish()?;
    Ok(())
}
