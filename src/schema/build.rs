// src/schema/build.rs

use rusqlite::Connection;
use tracing::{debug, warn};

use super::fields::SourceField;
use super::tables::Table;
use super::types::{quote_ident, Column, SqlType};
use crate::error::SchemaError;

/// Strip quotes, trim, and turn periods into underscores so the token is a usable identifier.
pub fn normalize_header_token(raw: &str) -> String {
    raw.replace('"', "").trim().replace('.', "_")
}

/// Column layout of one target table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableDef {
    pub table: Table,
    pub columns: Vec<Column>,
}

impl TableDef {
    pub fn create_sql(&self) -> String {
        let cols: Vec<String> = self.columns.iter().map(Column::definition).collect();
        format!(
            "CREATE TABLE IF NOT EXISTS {} ({})",
            quote_ident(self.table.name()),
            cols.join(", ")
        )
    }

    /// Insert statement that silently skips rows whose key already exists.
    pub fn insert_sql(&self) -> String {
        let names: Vec<String> = self.columns.iter().map(|c| quote_ident(&c.name)).collect();
        let params: Vec<String> = (1..=self.columns.len()).map(|i| format!("?{}", i)).collect();
        format!(
            "INSERT OR IGNORE INTO {} ({}) VALUES ({})",
            quote_ident(self.table.name()),
            names.join(", "),
            params.join(", ")
        )
    }
}

/// Table definitions for all four targets, in `Table::ALL` order.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    tables: Vec<TableDef>,
}

impl Schema {
    /// Project the header line onto every table's configured columns.
    pub fn from_header(line: &str) -> Result<Self, SchemaError> {
        let header: Vec<String> = line.split(',').map(normalize_header_token).collect();

        let mut tables = Vec::with_capacity(Table::ALL.len());
        for table in Table::ALL {
            let mut columns = Vec::with_capacity(table.fields().len());
            for (i, field) in table.fields().iter().enumerate() {
                let name = project(&header, table, *field)?;
                columns.push(Column {
                    ty: SqlType::for_column(&name),
                    name,
                    primary_key: i == 0,
                });
            }
            debug!(table = %table, columns = columns.len(), "projected header");
            tables.push(TableDef { table, columns });
        }

        Ok(Self { tables })
    }

    pub fn tables(&self) -> &[TableDef] {
        &self.tables
    }

    pub fn table(&self, table: Table) -> &TableDef {
        &self.tables[table as usize]
    }

    /// Issue `CREATE TABLE IF NOT EXISTS` for every table.
    pub fn create_all(&self, conn: &Connection) -> rusqlite::Result<()> {
        for def in &self.tables {
            conn.execute(&def.create_sql(), [])?;
        }
        Ok(())
    }
}

fn project(header: &[String], table: Table, field: SourceField) -> Result<String, SchemaError> {
    let position = field.position();
    let name = header.get(position).ok_or(SchemaError::MissingColumn {
        table: table.name(),
        position,
        header_len: header.len(),
    })?;
    if name.is_empty() {
        return Err(SchemaError::EmptyColumn { position });
    }

    let expected = normalize_header_token(field.source_name());
    if *name != expected {
        warn!(
            table = %table,
            position,
            header = %name,
            expected = %expected,
            "header name differs from the known layout"
        );
    }
    Ok(name.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::fixtures::header_line;
    use anyhow::Result;

    #[test]
    fn normalizes_quoted_dotted_tokens() {
        assert_eq!(normalize_header_token("\"transaction.id\""), "transaction_id");
        assert_eq!(normalize_header_token(" \"amount\" \r\n"), "amount");
        assert_eq!(
            normalize_header_token("contributor.district.90s"),
            "contributor_district_90s"
        );
    }

    #[test]
    fn projects_header_with_keys_and_types() -> Result<()> {
        let schema = Schema::from_header(&header_line())?;

        let tx = schema.table(Table::Transactions);
        assert_eq!(tx.columns[0].name, "transaction_id");
        assert!(tx.columns[0].primary_key);
        assert_eq!(tx.columns[0].ty, SqlType::Text);
        assert!(tx.columns[1..].iter().all(|c| !c.primary_key));
        assert_eq!(tx.columns[1].name, "amount");
        assert_eq!(tx.columns[1].ty, SqlType::Integer);

        let org = schema.table(Table::ContributorOrg);
        assert_eq!(org.columns[0].name, "bonica_cid");
        assert_eq!(org.columns[0].ty, SqlType::Integer);

        let rcpt = schema.table(Table::Recipient);
        assert_eq!(rcpt.columns[0].name, "bonica_rid");
        let cf = rcpt
            .columns
            .iter()
            .find(|c| c.name == "candidate_cfscore")
            .expect("candidate_cfscore column");
        assert_eq!(cf.ty, SqlType::Real);
        Ok(())
    }

    #[test]
    fn short_header_is_rejected() {
        let err = Schema::from_header("cycle,transaction.id,amount").unwrap_err();
        assert!(matches!(err, SchemaError::MissingColumn { header_len: 3, .. }));
    }

    #[test]
    fn blank_header_column_is_rejected() {
        let mut cols: Vec<&str> = SourceField::ALL.iter().map(|f| f.source_name()).collect();
        cols[1] = "\"\"";
        let err = Schema::from_header(&cols.join(",")).unwrap_err();
        assert!(matches!(err, SchemaError::EmptyColumn { position: 1 }));
    }

    #[test]
    fn create_all_twice_is_idempotent() -> Result<()> {
        let conn = Connection::open_in_memory()?;
        let schema = Schema::from_header(&header_line())?;
        schema.create_all(&conn)?;
        schema.create_all(&conn)?;

        for def in schema.tables() {
            let mut stmt = conn.prepare(&format!(
                "PRAGMA table_info({})",
                quote_ident(def.table.name())
            ))?;
            let cols: Vec<(String, i64)> = stmt
                .query_map([], |r| Ok((r.get::<_, String>(1)?, r.get::<_, i64>(5)?)))?
                .collect::<rusqlite::Result<_>>()?;

            let names: Vec<&str> = cols.iter().map(|(n, _)| n.as_str()).collect();
            let expected: Vec<&str> = def.columns.iter().map(|c| c.name.as_str()).collect();
            assert_eq!(names, expected, "{}", def.table);

            let keys: Vec<&str> = cols
                .iter()
                .filter(|(_, pk)| *pk > 0)
                .map(|(n, _)| n.as_str())
                .collect();
            assert_eq!(keys, vec![def.columns[0].name.as_str()]);
        }

        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table'",
            [],
            |r| r.get(0),
        )?;
        assert_eq!(count, 4);
        Ok(())
    }
}
