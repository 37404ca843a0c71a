//! JSON import service
//!
//! Imports a JSON array of expenses and replaces the whole collection with
//! it. Fields are read leniently (numbers or numeric strings for amounts,
//! ISO dates or timestamps for dates), but the import is all-or-nothing: if
//! any item can't be turned into a valid expense, nothing is written.

use std::collections::HashSet;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::config::settings::{AmountPolicy, CorruptDataPolicy, Settings};
use crate::error::{MoodspendError, MoodspendResult};
use crate::models::{parse_iso_date, ExpenseId, ExpenseRecord, Money, Mood};
use crate::storage::Storage;

/// Outcome of a successful import
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Expenses now in the store
    pub imported: usize,
    /// Expenses that were replaced
    pub replaced: usize,
    /// Items whose amount could not be read and was stored as zero
    pub zeroed_amounts: usize,
    /// Items that had no id, or repeated an earlier one, and got a fresh id
    pub generated_ids: usize,
}

/// Parsed payload plus bookkeeping for the summary
#[derive(Debug, Clone, Default)]
pub struct ParsedImport {
    pub records: Vec<ExpenseRecord>,
    pub zeroed_amounts: usize,
    pub generated_ids: usize,
}

/// Service for importing expenses
pub struct ImportService<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
}

impl<'a> ImportService<'a> {
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    /// Import a JSON file, replacing every stored expense
    pub fn import_file(&self, path: &Path) -> MoodspendResult<ImportSummary> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            MoodspendError::InvalidImport(format!("Failed to read {}: {}", path.display(), e))
        })?;
        self.import_json(&text)
    }

    /// Import a JSON payload, replacing every stored expense
    ///
    /// On any error the stored expenses are left untouched.
    pub fn import_json(&self, text: &str) -> MoodspendResult<ImportSummary> {
        let parsed = parse_payload(text, self.settings.amount_policy)?;

        let replaced = match self.storage.expenses.load_all() {
            Ok(existing) => existing.len(),
            Err(e)
                if e.is_corrupt_data()
                    && self.settings.corrupt_data_policy == CorruptDataPolicy::TreatAsEmpty =>
            {
                warn!(error = %e, "expense data unreadable, replacing it with the import");
                self.storage.expenses.quarantine()?;
                0
            }
            Err(e) => return Err(e),
        };

        self.storage.expenses.replace_all(&parsed.records)?;

        let summary = ImportSummary {
            imported: parsed.records.len(),
            replaced,
            zeroed_amounts: parsed.zeroed_amounts,
            generated_ids: parsed.generated_ids,
        };
        info!(
            imported = summary.imported,
            replaced = summary.replaced,
            "imported expenses"
        );
        Ok(summary)
    }
}

/// Parse an import payload without touching storage
pub fn parse_payload(text: &str, policy: AmountPolicy) -> MoodspendResult<ParsedImport> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| MoodspendError::InvalidImport(format!("not valid JSON: {}", e)))?;

    let items = value.as_array().ok_or_else(|| {
        MoodspendError::InvalidImport("expected a JSON array of expenses".into())
    })?;

    let mut parsed = ParsedImport::default();
    let mut seen_ids = HashSet::new();
    let mut problems = Vec::new();

    for (index, item) in items.iter().enumerate() {
        let item_number = index + 1;
        let Some(fields) = item.as_object() else {
            problems.push(format!("item {}: not an object", item_number));
            continue;
        };

        match parse_item(fields, policy) {
            Ok(ParsedItem {
                mut record,
                amount_zeroed,
                id_generated,
            }) => {
                if amount_zeroed {
                    warn!(item = item_number, "unreadable amount imported as zero");
                    parsed.zeroed_amounts += 1;
                }
                if id_generated {
                    parsed.generated_ids += 1;
                    seen_ids.insert(record.id.clone());
                } else if !seen_ids.insert(record.id.clone()) {
                    record.id = ExpenseId::new();
                    seen_ids.insert(record.id.clone());
                    parsed.generated_ids += 1;
                }
                parsed.records.push(record);
            }
            Err(reason) => problems.push(format!("item {}: {}", item_number, reason)),
        }
    }

    if !problems.is_empty() {
        return Err(MoodspendError::InvalidImport(problems.join("; ")));
    }

    Ok(parsed)
}

struct ParsedItem {
    record: ExpenseRecord,
    amount_zeroed: bool,
    id_generated: bool,
}

fn parse_item(fields: &Map<String, Value>, policy: AmountPolicy) -> Result<ParsedItem, String> {
    let date = match text_field(fields, "date") {
        Some(raw) => parse_iso_date(&raw).ok_or_else(|| format!("invalid date '{}'", raw))?,
        None => return Err("missing date".into()),
    };

    let mood: Mood = text_field(fields, "mood")
        .ok_or_else(|| "missing mood".to_string())?
        .parse()
        .map_err(|_| "missing mood".to_string())?;

    let (amount, amount_zeroed) = match (read_amount(fields.get("amount")), policy) {
        (Some(amount), _) => (amount, false),
        (None, AmountPolicy::Zero) => (Money::zero(), true),
        (None, AmountPolicy::Reject) => {
            return Err(format!(
                "invalid amount {}",
                fields.get("amount").map_or("(missing)".to_string(), Value::to_string)
            ))
        }
    };

    let parsed_id = text_field(fields, "id").and_then(|raw| ExpenseId::parse(&raw));
    let id_generated = parsed_id.is_none();

    Ok(ParsedItem {
        record: ExpenseRecord {
            id: parsed_id.unwrap_or_default(),
            amount,
            date,
            category: text_field(fields, "category"),
            description: text_field(fields, "description"),
            payment: text_field(fields, "payment"),
            mood,
        },
        amount_zeroed,
        id_generated,
    })
}

/// Non-negative amount from a JSON number or numeric string
fn read_amount(value: Option<&Value>) -> Option<Money> {
    let amount = match value? {
        Value::Number(n) => Money::from_major(n.as_f64()?)?,
        Value::String(s) => Money::parse(s).ok()?,
        _ => return None,
    };
    (!amount.is_negative()).then_some(amount)
}

/// Trimmed, non-blank text from a string or number field
fn text_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    let text = match fields.get(key)? {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}
