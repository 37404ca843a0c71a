//! Display formatting for terminal output

pub mod chart;
pub mod expense;

pub use chart::{render_bar_chart, render_daily_chart, render_grouped_chart};
pub use expense::{format_date, format_expense_details, format_expense_table, format_summary, format_top_mood};
