//! Core data models for moodspend
//!
//! A single entity, the mood-tagged expense, plus the value types it is
//! built from.

pub mod expense;
pub mod ids;
pub mod money;
pub mod mood;

pub use expense::{parse_iso_date, ExpenseForm, ExpenseRecord, ISO_DATE_FORMAT, UNCATEGORIZED};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
pub use mood::Mood;
