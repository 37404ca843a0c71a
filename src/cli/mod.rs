//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod expense;
pub mod export;
pub mod import;
pub mod report;

pub use expense::{handle_add, handle_delete, handle_list, handle_reset, AddArgs, FilterArgs};
pub use export::{handle_export, ExportFormat};
pub use import::handle_import;
pub use report::{handle_report, ReportView};
