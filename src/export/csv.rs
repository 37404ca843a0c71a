//! CSV Export functionality
//!
//! One row per expense. The header is written bare and every data field is
//! quoted, so descriptions with commas, quotes or newlines survive a
//! spreadsheet round trip.

use std::io::Write;

use crate::error::{MoodspendError, MoodspendResult};
use crate::models::{ExpenseRecord, ISO_DATE_FORMAT};

/// Column order of the CSV export
pub const CSV_HEADER: [&str; 7] = [
    "id",
    "date",
    "amount",
    "category",
    "description",
    "payment",
    "mood",
];

/// Export expenses to CSV, in the order given
pub fn export_expenses_csv<W: Write>(
    records: &[ExpenseRecord],
    writer: &mut W,
) -> MoodspendResult<()> {
    writeln!(writer, "{}", CSV_HEADER.join(","))
        .map_err(|e| MoodspendError::Export(e.to_string()))?;

    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    for record in records {
        let date = record.date.format(ISO_DATE_FORMAT).to_string();
        let amount = record.amount.to_string();
        csv_writer
            .write_record([
                record.id.as_str(),
                date.as_str(),
                amount.as_str(),
                record.category.as_deref().unwrap_or_default(),
                record.description.as_deref().unwrap_or_default(),
                record.payment.as_deref().unwrap_or_default(),
                record.mood.label(),
            ])
            .map_err(|e| MoodspendError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| MoodspendError::Export(e.to_string()))?;

    Ok(())
}
