pub mod config;
pub mod error;
pub mod fetch;
pub mod process;
pub mod schema;
pub mod store;

pub use config::LoadConfig;
pub use error::{Error, FetchError, Result, SchemaError};
pub use process::{chunk::ChunkSize, malformed::MalformedLogMode, stats::LoadStats, Populator};
pub use schema::{SourceField, Table};
pub use store::Store;
