// src/process/clean.rs

use crate::schema::FIELD_COUNT;

/// Flatten one raw line into comma-separated fields.
///
/// Drops `" ` pairs and every remaining quote, trims, then rewrites `, ` as `. `
/// so list-valued sub-fields ("Smith, John") don't add columns.
pub fn clean_line(raw: &str) -> String {
    raw.replace("\" ", "")
        .replace('"', "")
        .trim()
        .replace(", ", ". ")
}

/// A data line that split into exactly `FIELD_COUNT` fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    fields: Vec<String>,
}

/// A data line with the wrong number of fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Malformed {
    /// The line as decoded, without its line terminator.
    pub raw: String,
    pub field_count: usize,
}

impl Record {
    /// Clean and split `raw`, keeping it only if the field count is exact.
    pub fn parse(raw: &str) -> Result<Self, Malformed> {
        let fields: Vec<String> = clean_line(raw).split(',').map(str::to_string).collect();
        if fields.len() == FIELD_COUNT {
            Ok(Self { fields })
        } else {
            Err(Malformed {
                raw: raw.trim_end_matches(&['\r', '\n'][..]).to_string(),
                field_count: fields.len(),
            })
        }
    }

    /// Field at `position`; always in range for positions below `FIELD_COUNT`.
    pub fn get(&self, position: usize) -> &str {
        &self.fields[position]
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}
