//! Service layer for Moodspend
//!
//! The service layer sits on top of the storage layer and owns validation,
//! id lookup and the corrupt-data recovery policy.

pub mod expense;
pub mod import;

pub use expense::ExpenseService;
pub use import::{parse_payload, ImportService, ImportSummary, ParsedImport};
