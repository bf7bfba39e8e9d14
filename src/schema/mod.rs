pub mod build;
pub mod fields;
pub mod tables;
pub mod types;

pub use build::{normalize_header_token, Schema, TableDef};
pub use fields::{SourceField, FIELD_COUNT};
pub use tables::Table;
pub use types::{Column, SqlType};
