// src/process/split.rs

use crate::process::clean::Record;
use crate::schema::{SourceField, Table};

/// Entity-type value marking an organizational contributor.
pub const ORGANIZATION_MARKER: &str = "C";

/// One record's values for one target table, in the table's column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection<'a> {
    pub table: Table,
    pub values: Vec<&'a str>,
}

/// True when the record's entity type routes it to `Contributor_Org`.
pub fn is_organization(record: &Record) -> bool {
    record.get(SourceField::ContributorType.position()) == ORGANIZATION_MARKER
}

/// Split a record into its per-table projections.
///
/// Transactions and Recipient always receive a row; exactly one of the
/// contributor tables does, chosen by the entity-type field.
pub fn split_record(record: &Record) -> Vec<Projection<'_>> {
    let org = is_organization(record);
    Table::ALL
        .into_iter()
        .filter(|table| match table {
            Table::ContributorOrg => org,
            Table::ContributorIndv => !org,
            Table::Transactions | Table::Recipient => true,
        })
        .map(|table| Projection {
            table,
            values: table
                .fields()
                .iter()
                .map(|f| record.get(f.position()))
                .collect(),
        })
        .collect()
}
