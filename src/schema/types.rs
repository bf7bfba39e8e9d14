// src/schema/types.rs

/// Storage class a column is declared with.
#[derive(Debug, PartialEq, Clone, Copy, Eq, Hash)]
pub enum SqlType {
    Text,
    Integer,
    Real,
}

impl SqlType {
    /// Declared type for a normalized column name.
    ///
    /// Covers:
    /// - amount, bonica_cid                       → INTEGER
    /// - contributor_cfscore, candidate_cfscore   → REAL
    /// - fallback                                 → TEXT
    pub fn for_column(name: &str) -> Self {
        match name {
            "amount" | "bonica_cid" => SqlType::Integer,
            "contributor_cfscore" | "candidate_cfscore" => SqlType::Real,
            _ => SqlType::Text,
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            SqlType::Text => "TEXT",
            SqlType::Integer => "INTEGER",
            SqlType::Real => "REAL",
        }
    }
}

/// A single column definition as projected from the header.
#[derive(Debug, PartialEq, Clone, Eq, Hash)]
pub struct Column {
    pub name: String,
    pub ty: SqlType,
    pub primary_key: bool,
}

impl Column {
    /// Column clause for CREATE TABLE.
    pub fn definition(&self) -> String {
        let name = quote_ident(&self.name);
        match (self.primary_key, self.ty) {
            // INTEGER PRIMARY KEY would alias the rowid and reject non-numeric ids
            (true, SqlType::Integer) => format!("{} BIGINT PRIMARY KEY", name),
            (true, ty) => format!("{} {} PRIMARY KEY", name, ty.as_sql()),
            (false, ty) => format!("{} {}", name, ty.as_sql()),
        }
    }
}

/// Double-quote an identifier for SQLite.
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_columns_get_numeric_types() {
        assert_eq!(SqlType::for_column("amount"), SqlType::Integer);
        assert_eq!(SqlType::for_column("bonica_cid"), SqlType::Integer);
        assert_eq!(SqlType::for_column("contributor_cfscore"), SqlType::Real);
        assert_eq!(SqlType::for_column("candidate_cfscore"), SqlType::Real);
        assert_eq!(SqlType::for_column("bonica_rid"), SqlType::Text);
        assert_eq!(SqlType::for_column("date"), SqlType::Text);
    }

    #[test]
    fn integer_key_is_not_a_rowid_alias() {
        let col = Column {
            name: "bonica_cid".into(),
            ty: SqlType::Integer,
            primary_key: true,
        };
        assert_eq!(col.definition(), "\"bonica_cid\" BIGINT PRIMARY KEY");

        let col = Column {
            name: "transaction_id".into(),
            ty: SqlType::Text,
            primary_key: true,
        };
        assert_eq!(col.definition(), "\"transaction_id\" TEXT PRIMARY KEY");
    }
}
