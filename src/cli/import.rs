//! CLI command handler for JSON import

use std::path::Path;

use crate::config::settings::Settings;
use crate::error::MoodspendResult;
use crate::services::ImportService;
use crate::storage::Storage;

/// Handle `import`
///
/// Replaces every stored expense with the file's contents.
pub fn handle_import(storage: &Storage, settings: &Settings, file: &Path) -> MoodspendResult<()> {
    let summary = ImportService::new(storage, settings).import_file(file)?;

    println!("Import complete");
    println!("{}", "=".repeat(40));
    println!("  Imported:          {}", summary.imported);
    println!("  Replaced:          {}", summary.replaced);
    if summary.generated_ids > 0 {
        println!("  New ids assigned:  {}", summary.generated_ids);
    }
    if summary.zeroed_amounts > 0 {
        println!("  Amounts zeroed:    {}", summary.zeroed_amounts);
    }

    Ok(())
}
