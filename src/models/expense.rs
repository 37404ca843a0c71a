//! Expense model
//!
//! An expense is an amount spent on a calendar date, tagged with the mood
//! the user was in. Everything else is optional free text.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use super::ids::ExpenseId;
use super::money::Money;
use super::mood::Mood;
use crate::error::{MoodspendError, MoodspendResult};

/// Group label used when a grouping key is missing or blank
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Date format used at every boundary (storage, import, export, CLI)
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// A single tagged expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Unique identifier, fixed at creation
    pub id: ExpenseId,

    /// Amount spent (never negative for records created here)
    pub amount: Money,

    /// Calendar date of the purchase
    pub date: NaiveDate,

    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub category: Option<String>,

    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,

    /// Payment method label (cash, card, UPI, ...)
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub payment: Option<String>,

    pub mood: Mood,
}

impl ExpenseRecord {
    /// Create a new expense with a freshly generated id
    pub fn new(amount: Money, date: NaiveDate, mood: Mood) -> Self {
        Self {
            id: ExpenseId::new(),
            amount,
            date,
            category: None,
            description: None,
            payment: None,
            mood,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = non_blank(category.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = non_blank(description.into());
        self
    }

    pub fn with_payment(mut self, payment: impl Into<String>) -> Self {
        self.payment = non_blank(payment.into());
        self
    }

    /// Category for grouping purposes
    pub fn category_label(&self) -> &str {
        self.category.as_deref().unwrap_or(UNCATEGORIZED)
    }

    /// The record's date truncated to "YYYY-MM"
    pub fn year_month(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }

    /// Validate the record
    pub fn validate(&self) -> MoodspendResult<()> {
        if self.amount.is_negative() {
            return Err(MoodspendError::Validation(format!(
                "amount must not be negative (got {})",
                self.amount
            )));
        }
        Ok(())
    }
}

/// Raw values from an "add expense" form, exactly as the user typed them
#[derive(Debug, Clone, Default)]
pub struct ExpenseForm {
    pub amount: Option<String>,
    pub date: Option<String>,
    pub mood: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub payment: Option<String>,
}

impl ExpenseForm {
    /// Turn the submission into a record
    ///
    /// Fails with `IncompleteSubmission` when amount, mood or date is blank,
    /// and with `Validation` when a present value can't be parsed.
    pub fn into_record(self) -> MoodspendResult<ExpenseRecord> {
        let amount = self.amount.and_then(non_blank);
        let mood = self.mood.and_then(non_blank);
        let date = self.date.and_then(non_blank);

        let mut missing = Vec::new();
        if amount.is_none() {
            missing.push("amount");
        }
        if mood.is_none() {
            missing.push("mood");
        }
        if date.is_none() {
            missing.push("date");
        }
        let (Some(amount), Some(mood), Some(date)) = (amount, mood, date) else {
            return Err(MoodspendError::IncompleteSubmission(missing));
        };

        let amount =
            Money::parse(&amount).map_err(|e| MoodspendError::Validation(e.to_string()))?;
        let date = parse_iso_date(&date).ok_or_else(|| {
            MoodspendError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", date))
        })?;
        let mood: Mood = mood
            .parse()
            .map_err(|e: super::mood::EmptyMoodError| MoodspendError::Validation(e.to_string()))?;

        let mut record = ExpenseRecord::new(amount, date, mood);
        record.category = self.category.and_then(non_blank);
        record.description = self.description.and_then(non_blank);
        record.payment = self.payment.and_then(non_blank);
        record.validate()?;

        Ok(record)
    }
}

/// Parse an ISO calendar date, also accepting a full ISO timestamp
/// ("2024-01-05T10:00:00Z") by keeping only its date part
pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    let (date_part, rest) = match (s.get(..10), s.get(10..)) {
        (Some(date_part), Some(rest)) => (date_part, rest),
        _ => (s, ""),
    };
    if !rest.is_empty() && !rest.starts_with(['T', ' ']) {
        return None;
    }
    NaiveDate::parse_from_str(date_part, ISO_DATE_FORMAT).ok()
}

fn non_blank(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(non_blank))
}
