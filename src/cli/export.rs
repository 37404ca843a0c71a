//! CLI commands for data export

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use clap::ValueEnum;
use tracing::info;

use crate::config::settings::Settings;
use crate::error::{MoodspendError, MoodspendResult};
use crate::export::{export_expenses_csv, export_expenses_json, export_expenses_yaml};
use crate::services::ExpenseService;
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV, one quoted row per expense
    Csv,
    /// JSON array, re-importable with `moodspend import`
    Json,
    /// YAML backup with metadata
    Yaml,
}

/// Handle `export`
pub fn handle_export(
    storage: &Storage,
    settings: &Settings,
    format: ExportFormat,
    output: &Path,
) -> MoodspendResult<()> {
    let records = ExpenseService::new(storage, settings).records()?;

    let file = File::create(output).map_err(|e| {
        MoodspendError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Csv => export_expenses_csv(&records, &mut writer)?,
        ExportFormat::Json => export_expenses_json(&records, &mut writer, true)?,
        ExportFormat::Yaml => export_expenses_yaml(&records, &mut writer)?,
    }
    writer
        .flush()
        .map_err(|e| MoodspendError::Export(e.to_string()))?;

    info!(count = records.len(), ?format, path = %output.display(), "exported expenses");
    println!(
        "Exported {} expenses to: {}",
        records.len(),
        output.display()
    );

    Ok(())
}
