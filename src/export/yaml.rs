//! YAML Export functionality
//!
//! Human-readable backup of every expense with export metadata.

use std::io::Write;

use crate::error::{MoodspendError, MoodspendResult};
use crate::export::json::ExpenseExport;
use crate::models::ExpenseRecord;

/// Export expenses to YAML
pub fn export_expenses_yaml<W: Write>(
    records: &[ExpenseRecord],
    writer: &mut W,
) -> MoodspendResult<()> {
    let export = ExpenseExport::from_records(records);

    writeln!(writer, "# Moodspend Expense Export")
        .map_err(|e| MoodspendError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| MoodspendError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| MoodspendError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| MoodspendError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| MoodspendError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Mood};
    use chrono::NaiveDate;

    fn sample() -> Vec<ExpenseRecord> {
        vec![ExpenseRecord::new(
            Money::from_cents(4_599),
            NaiveDate::from_ymd_opt(2024, 2, 14).unwrap(),
            Mood::Happy,
        )
        .with_category("Gifts")
        .with_payment("UPI")]
    }

    #[test]
    fn test_yaml_export() {
        let mut output = Vec::new();
        export_expenses_yaml(&sample(), &mut output).unwrap();

        let yaml = String::from_utf8(output).unwrap();
        assert!(yaml.starts_with("# Moodspend Expense Export"));
        assert!(yaml.contains("Gifts"));
        assert!(yaml.contains("mood: Happy"));
    }

    #[test]
    fn test_yaml_export_is_valid_yaml() {
        let records = sample();
        let mut output = Vec::new();
        export_expenses_yaml(&records, &mut output).unwrap();

        let yaml = String::from_utf8(output).unwrap();
        let parsed: ExpenseExport = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(parsed.metadata.expense_count, 1);
        assert_eq!(parsed.expenses, records);
    }
}
