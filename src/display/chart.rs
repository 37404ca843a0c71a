//! Text chart rendering
//!
//! Horizontal bar charts for grouped totals. Input order is kept, so the
//! mood and category charts follow first-seen order and the daily chart
//! runs oldest to newest.

use chrono::NaiveDate;

use crate::models::{Money, ISO_DATE_FORMAT};
use crate::query::GroupedTotals;

/// Default width of a bar in characters
pub const BAR_WIDTH: usize = 24;

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate to `max_len` characters with an ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

/// Render labelled amounts as a bar chart with a title
pub fn render_bar_chart(title: &str, entries: &[(String, Money)], currency_symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(title);
    output.push('\n');
    output.push_str(&separator(title.chars().count().max(BAR_WIDTH)));
    output.push('\n');

    if entries.is_empty() {
        output.push_str("  (no data)\n");
        return output;
    }

    let total: Money = entries.iter().map(|(_, amount)| *amount).sum();
    let max = entries
        .iter()
        .map(|(_, amount)| amount.as_major())
        .fold(0.0_f64, f64::max);
    let label_width = entries
        .iter()
        .map(|(label, _)| label.chars().count().min(16))
        .max()
        .unwrap_or(0);

    for (label, amount) in entries {
        let share = if total.is_zero() {
            0.0
        } else {
            amount.cents() as f64 / total.cents() as f64 * 100.0
        };
        output.push_str(&format!(
            "  {:<width$}  {}  {:>12}  {:>5}\n",
            truncate(label, 16),
            format_bar(amount.as_major(), max, BAR_WIDTH),
            amount.format_with_symbol(currency_symbol),
            format_percentage(share),
            width = label_width
        ));
    }

    output
}

/// Bar chart of grouped totals (by mood, by category, ...)
pub fn render_grouped_chart(title: &str, totals: &GroupedTotals, currency_symbol: &str) -> String {
    let entries: Vec<(String, Money)> = totals
        .iter()
        .map(|(label, amount)| (label.to_string(), amount))
        .collect();
    render_bar_chart(title, &entries, currency_symbol)
}

/// Bar chart of daily totals, oldest first
pub fn render_daily_chart(
    title: &str,
    series: &[(NaiveDate, Money)],
    currency_symbol: &str,
) -> String {
    let entries: Vec<(String, Money)> = series
        .iter()
        .map(|(date, amount)| (date.format(ISO_DATE_FORMAT).to_string(), *amount))
        .collect();
    render_bar_chart(title, &entries, currency_symbol)
}
