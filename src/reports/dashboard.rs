//! Dashboard report
//!
//! The full view model for one render: the filtered rows, summary figures,
//! insights and the three chart series. Everything is derived from the
//! record list and criteria passed in.

use chrono::NaiveDate;

use crate::config::settings::Settings;
use crate::display::chart::separator;
use crate::display::{
    format_expense_table, format_summary, render_daily_chart, render_grouped_chart,
};
use crate::models::{ExpenseRecord, Money};
use crate::query::{
    compute_totals, derive_insights, filter, group_sum_by_key, sort_by_date_descending,
    spend_by_date, top_mood_by_spend, ExpenseFilter, GroupKey, GroupedTotals, Insight, Totals,
};

/// Series behind the three charts
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    /// Spend per mood, first-seen order
    pub by_mood: GroupedTotals,
    /// Spend per category, first-seen order
    pub by_category: GroupedTotals,
    /// Spend per calendar date, ascending
    pub by_date: Vec<(NaiveDate, Money)>,
}

impl ChartData {
    pub fn from_records(records: &[ExpenseRecord]) -> Self {
        Self {
            by_mood: group_sum_by_key(records, GroupKey::Mood),
            by_category: group_sum_by_key(records, GroupKey::Category),
            by_date: spend_by_date(records),
        }
    }

    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();
        output.push_str(&render_grouped_chart(
            "Spend by mood",
            &self.by_mood,
            currency_symbol,
        ));
        output.push('\n');
        output.push_str(&render_grouped_chart(
            "Spend by category",
            &self.by_category,
            currency_symbol,
        ));
        output.push('\n');
        output.push_str(&render_daily_chart(
            "Spend per day",
            &self.by_date,
            currency_symbol,
        ));
        output
    }
}

/// Dashboard view model
#[derive(Debug, Clone)]
pub struct Dashboard {
    /// Criteria the dashboard was built with
    pub criteria: ExpenseFilter,
    /// Matching expenses, newest first
    pub rows: Vec<ExpenseRecord>,
    pub totals: Totals,
    pub top_mood: Option<(String, Money)>,
    pub insights: Vec<Insight>,
    pub charts: ChartData,
}

impl Dashboard {
    /// Build the dashboard for `records` narrowed by `criteria`
    pub fn generate(records: &[ExpenseRecord], criteria: &ExpenseFilter) -> Self {
        let filtered = filter(records, criteria);

        Self {
            criteria: criteria.clone(),
            totals: compute_totals(&filtered),
            top_mood: top_mood_by_spend(&filtered),
            insights: derive_insights(&filtered),
            charts: ChartData::from_records(&filtered),
            rows: sort_by_date_descending(filtered),
        }
    }

    /// Insight sentences in display order
    pub fn insight_messages(&self, currency_symbol: &str) -> Vec<String> {
        self.insights
            .iter()
            .map(|insight| insight.message(currency_symbol))
            .collect()
    }

    /// Format the whole dashboard for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let symbol = &settings.currency_symbol;
        let mut output = String::new();

        output.push_str("Mood Spending Dashboard\n");
        output.push_str(&"═".repeat(60));
        output.push('\n');
        if !self.criteria.is_empty() {
            output.push_str(&format!("Filters: {}\n", self.criteria));
        }
        output.push_str(&format_summary(&self.totals, self.top_mood.as_ref(), settings));

        output.push_str("\nInsights\n");
        output.push_str(&separator(60));
        output.push('\n');
        for message in self.insight_messages(symbol) {
            output.push_str(&format!("  • {}\n", message));
        }

        output.push('\n');
        output.push_str(&self.charts.format_terminal(symbol));

        output.push_str("\nExpenses\n");
        output.push_str(&format_expense_table(&self.rows, settings));

        output
    }
}
