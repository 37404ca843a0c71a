//! Export module for Moodspend
//!
//! - CSV: one quoted row per expense (spreadsheet-compatible)
//! - JSON: the expense array, accepted back by `moodspend import`
//! - YAML: human-readable backup with export metadata

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::{export_expenses_csv, CSV_HEADER};
pub use json::{export_expenses_json, ExpenseExport, ExportMetadata, EXPORT_SCHEMA_VERSION};
pub use yaml::export_expenses_yaml;
