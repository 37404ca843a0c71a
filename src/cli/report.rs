//! Report CLI commands
//!
//! Summary, insights, charts and the full dashboard, all over the filtered
//! expense list.

use crate::config::settings::Settings;
use crate::display::format_summary;
use crate::error::MoodspendResult;
use crate::reports::Dashboard;
use crate::services::ExpenseService;
use crate::storage::Storage;

use super::expense::FilterArgs;

/// Which part of the dashboard to print
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportView {
    Summary,
    Insights,
    Charts,
    Full,
}

/// Handle `summary`, `insights`, `charts` and `dashboard`
pub fn handle_report(
    storage: &Storage,
    settings: &Settings,
    filters: &FilterArgs,
    view: ReportView,
) -> MoodspendResult<()> {
    let criteria = filters.to_filter()?;
    let records = ExpenseService::new(storage, settings).records()?;
    let dashboard = Dashboard::generate(&records, &criteria);

    print!("{}", render(&dashboard, settings, view));
    Ok(())
}

fn render(dashboard: &Dashboard, settings: &Settings, view: ReportView) -> String {
    match view {
        ReportView::Summary => {
            format_summary(&dashboard.totals, dashboard.top_mood.as_ref(), settings)
        }
        ReportView::Insights => dashboard
            .insight_messages(&settings.currency_symbol)
            .iter()
            .map(|message| format!("• {}\n", message))
            .collect(),
        ReportView::Charts => dashboard.charts.format_terminal(&settings.currency_symbol),
        ReportView::Full => dashboard.format_terminal(settings),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseRecord, Money, Mood};
    use crate::query::ExpenseFilter;
    use chrono::NaiveDate;

    fn dashboard() -> Dashboard {
        let records: Vec<ExpenseRecord> = [
            (10_000, 1, Mood::Stressed),
            (1_000, 2, Mood::Calm),
            (1_000, 3, Mood::Happy),
        ]
        .into_iter()
        .map(|(cents, day, mood)| {
            ExpenseRecord::new(
                Money::from_cents(cents),
                NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
                mood,
            )
        })
        .collect();
        Dashboard::generate(&records, &ExpenseFilter::new())
    }

    #[test]
    fn test_insights_view() {
        let text = render(&dashboard(), &Settings::default(), ReportView::Insights);
        assert_eq!(
            text,
            "• You spend the most when you feel Stressed.\n\
             • Average purchase size is higher when Stressed (₹100).\n\
             • Peak spend day: Mon.\n"
        );
    }

    #[test]
    fn test_summary_view() {
        let text = render(&dashboard(), &Settings::default(), ReportView::Summary);
        assert!(text.contains("₹120.00"));
        assert!(text.contains("Stressed · ₹100"));
        assert!(!text.contains("Spend by mood"));
    }

    #[test]
    fn test_charts_view() {
        let text = render(&dashboard(), &Settings::default(), ReportView::Charts);
        assert!(text.contains("Spend by mood"));
        assert!(!text.contains("Total spent"));
    }
}
