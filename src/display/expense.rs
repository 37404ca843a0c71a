//! Expense display formatting
//!
//! Table view for the expense list, detail view for a single expense and
//! the summary block shown above reports.

use std::fmt::Write;

use chrono::NaiveDate;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::chart::truncate;
use crate::config::settings::Settings;
use crate::models::{ExpenseRecord, Money, ISO_DATE_FORMAT};
use crate::query::Totals;

/// Placeholder shown when there is no top mood
pub const NO_TOP_MOOD: &str = "–";

/// Format a date with the configured pattern, falling back to ISO when the
/// pattern is not valid strftime or asks for fields a date does not have
/// (`%H`, `%M`, `%Z`)
pub fn format_date(date: NaiveDate, settings: &Settings) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(&settings.date_format)).is_err() {
        return date.format(ISO_DATE_FORMAT).to_string();
    }
    out
}

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Mood")]
    mood: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Payment")]
    payment: String,
}

impl ExpenseRow {
    fn new(record: &ExpenseRecord, settings: &Settings) -> Self {
        Self {
            id: record.id.short().to_string(),
            date: format_date(record.date, settings),
            amount: record.amount.format_with_symbol(&settings.currency_symbol),
            mood: record.mood.to_string(),
            category: record.category_label().to_string(),
            description: truncate(record.description.as_deref().unwrap_or("—"), 32),
            payment: record.payment.clone().unwrap_or_else(|| "—".to_string()),
        }
    }
}

/// Format expenses as a table, in the order given
pub fn format_expense_table(records: &[ExpenseRecord], settings: &Settings) -> String {
    if records.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let rows: Vec<ExpenseRow> = records
        .iter()
        .map(|record| ExpenseRow::new(record, settings))
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// Format expense details for display
pub fn format_expense_details(record: &ExpenseRecord, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:     {}\n", record.id));
    output.push_str(&format!("Date:        {}\n", format_date(record.date, settings)));
    output.push_str(&format!(
        "Amount:      {}\n",
        record.amount.format_with_symbol(&settings.currency_symbol)
    ));
    output.push_str(&format!("Mood:        {}\n", record.mood));
    output.push_str(&format!("Category:    {}\n", record.category_label()));

    if let Some(description) = &record.description {
        output.push_str(&format!("Description: {}\n", description));
    }
    if let Some(payment) = &record.payment {
        output.push_str(&format!("Payment:     {}\n", payment));
    }

    output
}

/// "Stressed · ₹100", or a dash when there is nothing to rank
pub fn format_top_mood(top_mood: Option<&(String, Money)>, currency_symbol: &str) -> String {
    match top_mood {
        Some((mood, amount)) => format!("{} · {}", mood, amount.format_whole(currency_symbol)),
        None => NO_TOP_MOOD.to_string(),
    }
}

/// Summary block: total, count and top mood
pub fn format_summary(
    totals: &Totals,
    top_mood: Option<&(String, Money)>,
    settings: &Settings,
) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "Total spent:  {}\n",
        totals.total.format_with_symbol(&settings.currency_symbol)
    ));
    output.push_str(&format!("Expenses:     {}\n", totals.count));
    output.push_str(&format!(
        "Top mood:     {}\n",
        format_top_mood(top_mood, &settings.currency_symbol)
    ));
    output
}
