//! JSON Export functionality
//!
//! `export_expenses_json` writes the bare expense array that `moodspend
//! import` accepts back. `ExpenseExport` wraps the same list with metadata
//! for the YAML backup.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{MoodspendError, MoodspendResult};
use crate::models::{ExpenseRecord, Money, ISO_DATE_FORMAT};
use crate::query::compute_totals;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Expense list plus export metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub metadata: ExportMetadata,

    pub expenses: Vec<ExpenseRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub expense_count: usize,

    /// Sum of every exported amount
    pub total: Money,

    /// Earliest expense date (YYYY-MM-DD)
    pub earliest_expense: Option<String>,

    /// Latest expense date (YYYY-MM-DD)
    pub latest_expense: Option<String>,
}

impl ExpenseExport {
    pub fn from_records(records: &[ExpenseRecord]) -> Self {
        let totals = compute_totals(records);
        let format_date = |d: chrono::NaiveDate| d.format(ISO_DATE_FORMAT).to_string();

        let metadata = ExportMetadata {
            expense_count: totals.count,
            total: totals.total,
            earliest_expense: records.iter().map(|r| r.date).min().map(format_date),
            latest_expense: records.iter().map(|r| r.date).max().map(format_date),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            metadata,
            expenses: records.to_vec(),
        }
    }
}

/// Export expenses as a JSON array
pub fn export_expenses_json<W: Write>(
    records: &[ExpenseRecord],
    writer: &mut W,
    pretty: bool,
) -> MoodspendResult<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, records)
    } else {
        serde_json::to_writer(&mut *writer, records)
    }
    .map_err(|e| MoodspendError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| MoodspendError::Export(e.to_string()))?;
    Ok(())
}
