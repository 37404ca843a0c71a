//! Expense filtering
//!
//! All criteria are optional and combined with AND. A blank criterion
//! always matches.

use std::fmt;

use crate::models::{ExpenseRecord, Mood};

/// Filter criteria for the expense list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseFilter {
    /// Case-insensitive substring of description or category
    pub text: Option<String>,
    /// Exact mood
    pub mood: Option<Mood>,
    /// Calendar month as "YYYY-MM"
    pub year_month: Option<String>,
}

impl ExpenseFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by free text
    pub fn text(mut self, query: impl Into<String>) -> Self {
        self.text = non_blank(query.into());
        self
    }

    /// Filter by mood
    pub fn mood(mut self, mood: Mood) -> Self {
        self.mood = Some(mood);
        self
    }

    /// Filter by month ("YYYY-MM")
    pub fn month(mut self, year_month: impl Into<String>) -> Self {
        self.year_month = non_blank(year_month.into());
        self
    }

    /// Drop every criterion
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when no criterion is set
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.mood.is_none() && self.year_month.is_none()
    }

    /// Check a single record against every criterion
    pub fn matches(&self, record: &ExpenseRecord) -> bool {
        self.matches_text(record) && self.matches_mood(record) && self.matches_month(record)
    }

    fn matches_text(&self, record: &ExpenseRecord) -> bool {
        let Some(query) = self.text.as_deref() else {
            return true;
        };
        let query = query.to_lowercase();
        [record.description.as_deref(), record.category.as_deref()]
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(&query))
    }

    fn matches_mood(&self, record: &ExpenseRecord) -> bool {
        self.mood
            .as_ref()
            .map_or(true, |mood| mood.label() == record.mood.label())
    }

    fn matches_month(&self, record: &ExpenseRecord) -> bool {
        self.year_month
            .as_deref()
            .map_or(true, |month| record.year_month() == month)
    }
}

impl fmt::Display for ExpenseFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(text) = &self.text {
            parts.push(format!("text \"{}\"", text));
        }
        if let Some(mood) = &self.mood {
            parts.push(format!("mood {}", mood));
        }
        if let Some(month) = &self.year_month {
            parts.push(format!("month {}", month));
        }

        if parts.is_empty() {
            f.write_str("none")
        } else {
            f.write_str(&parts.join(", "))
        }
    }
}

/// Keep the records that satisfy every criterion, in input order
pub fn filter(records: &[ExpenseRecord], criteria: &ExpenseFilter) -> Vec<ExpenseRecord> {
    records
        .iter()
        .filter(|record| criteria.matches(record))
        .cloned()
        .collect()
}

fn non_blank(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
