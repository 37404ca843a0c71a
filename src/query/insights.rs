//! Spending insights
//!
//! Simple threshold rules over the (already filtered) expense list. Nothing
//! is reported until there are at least three expenses.

use chrono::{Datelike, Weekday};

use super::aggregate::top_mood_by_spend;
use crate::models::{ExpenseRecord, Money, Mood};

/// Fewer expenses than this only produce `Insight::NotEnoughData`
pub const MIN_RECORDS_FOR_INSIGHTS: usize = 3;

const WEEKDAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// One observation about the user's spending
#[derive(Debug, Clone, PartialEq)]
pub enum Insight {
    NotEnoughData,
    /// Mood with the highest total spend
    TopMood(String),
    /// Average Stressed purchase beats both the Calm and the Happy average
    StressedSpendsMore { average: Money },
    /// Weekday with the highest total spend
    PeakDay(Weekday),
}

impl Insight {
    /// Human-readable sentence for this observation
    pub fn message(&self, currency_symbol: &str) -> String {
        match self {
            Insight::NotEnoughData => "Add a few expenses to unlock insights.".to_string(),
            Insight::TopMood(mood) => format!("You spend the most when you feel {}.", mood),
            Insight::StressedSpendsMore { average } => format!(
                "Average purchase size is higher when Stressed ({}).",
                average.format_whole(currency_symbol)
            ),
            Insight::PeakDay(day) => format!("Peak spend day: {}.", weekday_name(*day)),
        }
    }
}

/// Three-letter weekday name, Sunday first
pub fn weekday_name(day: Weekday) -> &'static str {
    WEEKDAY_NAMES[day.num_days_from_sunday() as usize]
}

/// Mean amount of the expenses tagged with `mood`, in major units
///
/// Zero when no expense has that mood.
pub fn average_ticket(records: &[ExpenseRecord], mood: &Mood) -> f64 {
    let (sum, count) = records
        .iter()
        .filter(|r| r.mood.label() == mood.label())
        .fold((Money::zero(), 0usize), |(sum, count), r| (sum + r.amount, count + 1));

    if count == 0 {
        0.0
    } else {
        sum.as_major() / count as f64
    }
}

/// Weekday with the highest total spend
///
/// Only weekdays with at least one expense are candidates; a tie goes to the
/// day closest to Sunday.
pub fn peak_day_of_week(records: &[ExpenseRecord]) -> Option<Weekday> {
    let mut by_day: [Option<Money>; 7] = [None; 7];
    for record in records {
        let slot = &mut by_day[record.date.weekday().num_days_from_sunday() as usize];
        *slot = Some(slot.unwrap_or_default() + record.amount);
    }

    let mut best: Option<(usize, Money)> = None;
    for (index, total) in by_day.iter().enumerate() {
        if let Some(total) = *total {
            if best.map_or(true, |(_, best_total)| total > best_total) {
                best = Some((index, total));
            }
        }
    }

    best.map(|(index, _)| weekday_from_sunday_index(index))
}

fn weekday_from_sunday_index(index: usize) -> Weekday {
    match index {
        0 => Weekday::Sun,
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        _ => Weekday::Sat,
    }
}

/// Derive the ordered list of observations
pub fn derive_insights(records: &[ExpenseRecord]) -> Vec<Insight> {
    if records.len() < MIN_RECORDS_FOR_INSIGHTS {
        return vec![Insight::NotEnoughData];
    }

    let mut insights = Vec::new();

    if let Some((mood, _)) = top_mood_by_spend(records) {
        insights.push(Insight::TopMood(mood));
    }

    let stressed = average_ticket(records, &Mood::Stressed);
    let calm = average_ticket(records, &Mood::Calm);
    let happy = average_ticket(records, &Mood::Happy);
    if stressed > calm && stressed > happy {
        if let Some(average) = Money::from_major(stressed) {
            insights.push(Insight::StressedSpendsMore { average });
        }
    }

    if let Some(day) = peak_day_of_week(records) {
        insights.push(Insight::PeakDay(day));
    }

    insights
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn messages(insights: &[Insight]) -> Vec<String> {
        insights.iter().map(|insight| insight.message("₹")).collect()
    }

    fn expense(cents: i64, date: &str, mood: Mood) -> ExpenseRecord {
        ExpenseRecord::new(
            Money::from_cents(cents),
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            mood,
        )
    }

    #[test]
    fn test_not_enough_data() {
        assert_eq!(derive_insights(&[]), vec![Insight::NotEnoughData]);

        let two = vec![
            expense(100_000, "2024-01-01", Mood::Stressed),
            expense(1, "2024-01-02", Mood::Calm),
        ];
        assert_eq!(derive_insights(&two), vec![Insight::NotEnoughData]);
        assert_eq!(
            messages(&derive_insights(&two)),
            vec!["Add a few expenses to unlock insights."]
        );
    }

    #[test]
    fn test_stressed_reference_case() {
        let records = vec![
            expense(10_000, "2024-01-01", Mood::Stressed),
            expense(1_000, "2024-01-02", Mood::Calm),
            expense(1_000, "2024-01-03", Mood::Happy),
        ];

        let insights = derive_insights(&records);
        assert_eq!(
            insights,
            vec![
                Insight::TopMood("Stressed".into()),
                Insight::StressedSpendsMore {
                    average: Money::from_cents(10_000)
                },
                // 2024-01-01 is a Monday
                Insight::PeakDay(Weekday::Mon),
            ]
        );
        assert_eq!(
            messages(&insights),
            vec![
                "You spend the most when you feel Stressed.",
                "Average purchase size is higher when Stressed (₹100).",
                "Peak spend day: Mon.",
            ]
        );
    }

    #[test]
    fn test_stressed_rule_needs_strictly_higher_average() {
        let records = vec![
            expense(1_000, "2024-01-01", Mood::Stressed),
            expense(1_000, "2024-01-02", Mood::Calm),
            expense(500, "2024-01-03", Mood::Happy),
        ];
        let insights = derive_insights(&records);
        assert!(!insights
            .iter()
            .any(|i| matches!(i, Insight::StressedSpendsMore { .. })));
    }

    #[test]
    fn test_stressed_rule_fires_without_calm_or_happy() {
        let records = vec![
            expense(1_000, "2024-01-01", Mood::Stressed),
            expense(9_000, "2024-01-02", Mood::Sad),
            expense(3_000, "2024-01-03", Mood::Stressed),
        ];
        let insights = derive_insights(&records);
        assert_eq!(insights[0], Insight::TopMood("Sad".into()));
        assert_eq!(
            insights[1],
            Insight::StressedSpendsMore {
                average: Money::from_cents(2_000)
            }
        );
    }

    #[test]
    fn test_no_stressed_expenses_never_fires() {
        let records = vec![
            expense(1_000, "2024-01-01", Mood::Bored),
            expense(1_000, "2024-01-02", Mood::Bored),
            expense(1_000, "2024-01-03", Mood::Bored),
        ];
        assert_eq!(derive_insights(&records).len(), 2);
    }

    #[test]
    fn test_average_ticket() {
        let records = vec![
            expense(1_000, "2024-01-01", Mood::Calm),
            expense(2_000, "2024-01-02", Mood::Calm),
            expense(5_000, "2024-01-03", Mood::Happy),
        ];
        assert_eq!(average_ticket(&records, &Mood::Calm), 15.0);
        assert_eq!(average_ticket(&records, &Mood::Stressed), 0.0);
    }

    #[test]
    fn test_peak_day_sums_per_weekday() {
        // Two Tuesdays beat a single bigger Friday
        let records = vec![
            expense(3_000, "2024-01-02", Mood::Calm),
            expense(3_000, "2024-01-09", Mood::Calm),
            expense(5_000, "2024-01-05", Mood::Calm),
        ];
        assert_eq!(peak_day_of_week(&records), Some(Weekday::Tue));
    }

    #[test]
    fn test_peak_day_tie_goes_to_lowest_index() {
        // Saturday and Sunday tie; Sunday is index 0
        let records = vec![
            expense(1_000, "2024-01-06", Mood::Calm),
            expense(1_000, "2024-01-07", Mood::Calm),
        ];
        assert_eq!(peak_day_of_week(&records), Some(Weekday::Sun));
        assert_eq!(peak_day_of_week(&[]), None);
    }

    #[test]
    fn test_peak_day_ignores_days_without_expenses() {
        let records = vec![
            expense(0, "2024-01-03", Mood::Calm),
            expense(0, "2024-01-05", Mood::Calm),
        ];
        assert_eq!(peak_day_of_week(&records), Some(Weekday::Wed));
    }

    #[test]
    fn test_weekday_name() {
        assert_eq!(weekday_name(Weekday::Sun), "Sun");
        assert_eq!(weekday_name(Weekday::Sat), "Sat");
    }
}
