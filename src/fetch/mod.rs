//! Locating and downloading the yearly source files.

pub mod download;
pub mod urls;

pub use download::download_year;
pub use urls::{resource_id, resource_url, supported_years};
